//! World and minimap render passes for the ward tracker.

use wardwatch_types::formatting::format_seconds_label;
use wardwatch_types::{Rgba, colors};

use super::DrawSurface;
use crate::geometry::{Vec2, Vec3};
use crate::wards::WardTracker;

/// Ground circle radius around each ward (world units)
pub const WARD_CIRCLE_RADIUS: f32 = 75.0;
pub const WARD_CIRCLE_SEGMENTS: u32 = 32;

/// Calculated wards with more time left than this get no label
pub const LABEL_CUTOFF_SECS: f32 = 300.0;

/// Labels sit this many pixels above the projected ward position
pub const LABEL_LIFT_PX: f32 = 5.0;

pub const MINIMAP_GLYPH: &str = "x";

const MINIMAP_UNDERLAY_HALF_WIDTH: f32 = 5.0;
const MINIMAP_UNDERLAY_THICKNESS: f32 = 10.0;
const MINIMAP_GLYPH_OFFSET: f32 = 2.0;

impl WardTracker {
    /// World-space pass: ward circles and remaining-time labels.
    pub fn render_world<S: DrawSurface + ?Sized>(&self, surface: &mut S, clock: f32) {
        let config = self.config();

        if config.draw_wards {
            for ward in self.observed() {
                surface.circle(
                    ward.position,
                    WARD_CIRCLE_RADIUS,
                    WARD_CIRCLE_SEGMENTS,
                    ward.color(),
                );
            }
            for ward in self.calculated() {
                surface.circle(
                    ward.position,
                    WARD_CIRCLE_RADIUS,
                    WARD_CIRCLE_SEGMENTS,
                    ward.color(),
                );
            }
        }

        if config.draw_times {
            let (width, height) = surface.screen_size();

            for ward in self.calculated() {
                let remaining = ward.remaining_secs(clock);
                if remaining > LABEL_CUTOFF_SECS {
                    continue;
                }

                let Some(screen) = surface.world_to_screen(ward.position) else {
                    continue;
                };
                let at = screen.offset(0.0, -LABEL_LIFT_PX);
                if at.x > 0.0 && at.y > 0.0 && at.x < width && at.y < height {
                    surface.text(at, ward.color(), &format_seconds_label(remaining));
                }
            }
        }
    }

    /// Minimap pass: underlay strip plus a colored glyph per ward.
    pub fn render_minimap<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if !self.config().draw_wards_minimap {
            return;
        }

        let observed = self.observed().iter().map(|w| (w.position, w.color()));
        let calculated = self.calculated().iter().map(|w| (w.position, w.color()));

        for (position, color) in observed.chain(calculated) {
            draw_minimap_marker(surface, position, color);
        }
    }
}

fn draw_minimap_marker<S: DrawSurface + ?Sized>(surface: &mut S, position: Vec3, color: Rgba) {
    let Some(at) = surface.world_to_minimap(position) else {
        return;
    };

    let underlay_y = at.y + MINIMAP_UNDERLAY_HALF_WIDTH;
    surface.line(
        Vec2::new(at.x - MINIMAP_UNDERLAY_HALF_WIDTH, underlay_y),
        Vec2::new(at.x + MINIMAP_UNDERLAY_HALF_WIDTH, underlay_y),
        MINIMAP_UNDERLAY_THICKNESS,
        colors::MINIMAP_UNDERLAY,
    );
    surface.text(
        at.offset(-MINIMAP_GLYPH_OFFSET, -MINIMAP_GLYPH_OFFSET),
        color,
        MINIMAP_GLYPH,
    );
}
