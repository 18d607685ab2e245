//! Enemy ward tracking
//!
//! Consumes host game events, keeps track of observed and inferred enemy
//! wards, and draws them through a host-supplied [`render::DrawSurface`].

pub mod events;
pub mod geometry;
pub mod render;
pub mod tracking;
pub mod wards;

// Re-exports for convenience
pub use events::{GameObject, GameSignal, ObjectType, SignalHandler};
pub use geometry::{Vec2, Vec3};
pub use render::DrawSurface;
pub use tracking::{DefinitionError, Lifetime, WardAbility, WardDefinitions, WardVariant};
pub use wards::{CalculatedWard, ObservedWard, WardTracker};
pub use wardwatch_types::{OverlayToggle, WardOverlayConfig};
