//! Shared configuration types for wardwatch
//!
//! Pure data shared between the tracker core and the tools that host it.
//! Nothing here depends on the tracker's runtime state.

pub mod colors;
pub mod config;
pub mod formatting;

pub use colors::Rgba;
pub use config::{OverlayToggle, WardOverlayConfig};
