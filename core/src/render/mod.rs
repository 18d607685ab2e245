//! Ward overlay rendering
//!
//! The host owns the actual draw calls and coordinate transforms; it exposes
//! them through [`DrawSurface`]. The tracker walks its wards and issues
//! primitives in two passes:
//!
//! - **World**: circles on every ward plus remaining-time labels
//! - **Minimap**: an underlay strip and an `x` glyph per ward

mod passes;
mod recording;

use wardwatch_types::Rgba;

use crate::geometry::{Vec2, Vec3};

pub use passes::{
    LABEL_CUTOFF_SECS, LABEL_LIFT_PX, MINIMAP_GLYPH, WARD_CIRCLE_RADIUS, WARD_CIRCLE_SEGMENTS,
};
pub use recording::{DrawCall, RecordingSurface};

/// Drawing primitives and projections supplied by the host.
pub trait DrawSurface {
    /// Circle on the ground plane around a world position
    fn circle(&mut self, center: Vec3, radius: f32, segments: u32, color: Rgba);

    /// Screen-space line
    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba);

    /// Screen-space text
    fn text(&mut self, at: Vec2, color: Rgba, text: &str);

    /// Project to screen pixels, `None` if the point cannot be projected
    fn world_to_screen(&self, position: Vec3) -> Option<Vec2>;

    /// Project to minimap pixels, `None` if the point cannot be projected
    fn world_to_minimap(&self, position: Vec3) -> Option<Vec2>;

    /// Screen `(width, height)` in pixels
    fn screen_size(&self) -> (f32, f32);
}
