//! Draw surface that logs every primitive
//!
//! Wraps a [`RecordingSurface`] for projection and bookkeeping and emits one
//! tracing record per draw call, so a replay can be inspected without a game
//! client.

use wardwatch_core::render::RecordingSurface;
use wardwatch_core::{DrawSurface, Vec2, Vec3};
use wardwatch_types::{Rgba, colors};

pub struct TraceSurface {
    inner: RecordingSurface,
    /// Which pass is drawing, for log context
    pass: &'static str,
}

impl TraceSurface {
    pub fn new(inner: RecordingSurface) -> Self {
        Self {
            inner,
            pass: "world",
        }
    }

    pub fn set_pass(&mut self, pass: &'static str) {
        self.pass = pass;
    }

    pub fn recorded(&self) -> &RecordingSurface {
        &self.inner
    }

    pub fn draw_count(&self) -> usize {
        self.inner.calls.len()
    }
}

impl DrawSurface for TraceSurface {
    fn circle(&mut self, center: Vec3, radius: f32, segments: u32, color: Rgba) {
        tracing::info!(
            target: "wardwatch::draw",
            pass = self.pass,
            x = center.x,
            z = center.z,
            radius,
            segments,
            color = %colors::to_hex(color),
            "circle"
        );
        self.inner.circle(center, radius, segments, color);
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba) {
        tracing::info!(
            target: "wardwatch::draw",
            pass = self.pass,
            from = ?(from.x, from.y),
            to = ?(to.x, to.y),
            thickness,
            color = %colors::to_hex(color),
            "line"
        );
        self.inner.line(from, to, thickness, color);
    }

    fn text(&mut self, at: Vec2, color: Rgba, text: &str) {
        tracing::info!(
            target: "wardwatch::draw",
            pass = self.pass,
            x = at.x,
            y = at.y,
            color = %colors::to_hex(color),
            text,
            "text"
        );
        self.inner.text(at, color, text);
    }

    fn world_to_screen(&self, position: Vec3) -> Option<Vec2> {
        self.inner.world_to_screen(position)
    }

    fn world_to_minimap(&self, position: Vec3) -> Option<Vec2> {
        self.inner.world_to_minimap(position)
    }

    fn screen_size(&self) -> (f32, f32) {
        self.inner.screen_size()
    }
}
