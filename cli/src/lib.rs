pub mod commands;
pub mod scenario;
pub mod surface;

pub use scenario::{Scenario, ScenarioError, ScenarioEvent};
pub use surface::TraceSurface;
