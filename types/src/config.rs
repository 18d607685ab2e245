//! Overlay configuration
//!
//! The three user-facing toggles controlling what the ward overlay draws.
//! Every toggle defaults to enabled and takes effect on the next render call.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Which parts of the ward overlay are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardOverlayConfig {
    /// Draw ward circles in world space
    #[serde(default = "default_true")]
    pub draw_wards: bool,

    /// Draw ward glyphs on the minimap
    #[serde(default = "default_true")]
    pub draw_wards_minimap: bool,

    /// Draw remaining-time labels for wards with a known expiry
    #[serde(default = "default_true")]
    pub draw_times: bool,
}

impl Default for WardOverlayConfig {
    fn default() -> Self {
        Self {
            draw_wards: true,
            draw_wards_minimap: true,
            draw_times: true,
        }
    }
}

impl WardOverlayConfig {
    /// Current value of a toggle
    pub fn get(&self, toggle: OverlayToggle) -> bool {
        match toggle {
            OverlayToggle::DrawWards => self.draw_wards,
            OverlayToggle::DrawWardsMinimap => self.draw_wards_minimap,
            OverlayToggle::DrawTimes => self.draw_times,
        }
    }

    /// Set a toggle, returning the previous value
    pub fn set(&mut self, toggle: OverlayToggle, value: bool) -> bool {
        let slot = match toggle {
            OverlayToggle::DrawWards => &mut self.draw_wards,
            OverlayToggle::DrawWardsMinimap => &mut self.draw_wards_minimap,
            OverlayToggle::DrawTimes => &mut self.draw_times,
        };
        std::mem::replace(slot, value)
    }
}

/// Identifies one of the overlay toggles (menu entries)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayToggle {
    DrawWards,
    DrawWardsMinimap,
    DrawTimes,
}

impl OverlayToggle {
    pub const ALL: [OverlayToggle; 3] = [
        OverlayToggle::DrawWards,
        OverlayToggle::DrawWardsMinimap,
        OverlayToggle::DrawTimes,
    ];

    /// Menu label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Self::DrawWards => "Draw wards",
            Self::DrawWardsMinimap => "Draw wards on Minimap",
            Self::DrawTimes => "Draw Times (where known)",
        }
    }
}
