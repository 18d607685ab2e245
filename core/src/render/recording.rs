use wardwatch_types::Rgba;

use super::DrawSurface;
use crate::geometry::{Vec2, Vec3};

/// A primitive issued to a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Circle {
        center: Vec3,
        radius: f32,
        segments: u32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f32,
        color: Rgba,
    },
    Text {
        at: Vec2,
        color: Rgba,
        text: String,
    },
}

/// Surface that records primitives instead of drawing them.
///
/// Projection is a plain scale + offset on the x/z ground plane. Points that
/// land outside the configured bounds fail to project, like an off-screen
/// point would on a real client.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    pub width: f32,
    pub height: f32,
    /// World units per screen pixel
    pub screen_scale: f32,
    /// World position shown at screen (0, 0)
    pub screen_origin: Vec3,
    /// Minimap side length in pixels
    pub minimap_size: f32,
    /// World units per minimap pixel
    pub minimap_scale: f32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            width: 1920.0,
            height: 1080.0,
            screen_scale: 1.0,
            screen_origin: Vec3::default(),
            minimap_size: 256.0,
            minimap_scale: 15_000.0 / 256.0,
        }
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn circle(&mut self, center: Vec3, radius: f32, segments: u32, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            segments,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn text(&mut self, at: Vec2, color: Rgba, text: &str) {
        self.calls.push(DrawCall::Text {
            at,
            color,
            text: text.to_string(),
        });
    }

    fn world_to_screen(&self, position: Vec3) -> Option<Vec2> {
        let x = (position.x - self.screen_origin.x) / self.screen_scale;
        let y = (position.z - self.screen_origin.z) / self.screen_scale;
        let visible = (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y);
        visible.then_some(Vec2::new(x, y))
    }

    fn world_to_minimap(&self, position: Vec3) -> Option<Vec2> {
        let x = position.x / self.minimap_scale;
        let y = self.minimap_size - position.z / self.minimap_scale;
        let range = 0.0..=self.minimap_size;
        (range.contains(&x) && range.contains(&y)).then_some(Vec2::new(x, y))
    }

    fn screen_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
