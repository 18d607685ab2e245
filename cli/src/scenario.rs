//! Replay scenarios
//!
//! A scenario is a TOML file describing the host side of a game: screen and
//! minimap geometry, then an ordered list of events as the client would
//! deliver them.
//!
//! ```toml
//! [screen]
//! width = 1920.0
//! height = 1080.0
//!
//! [[event]]
//! kind = "cast"
//! clock = 100.0
//! ability = "TrinketTotemLvl1"
//! caster = { network_id = 1, name = "Thresh", object_type = "hero", level = 9, position = { x = 0.0, y = 0.0, z = 0.0 } }
//! end_position = { x = 2100.0, y = 50.0, z = 8400.0 }
//!
//! [[event]]
//! kind = "render"
//! clock = 102.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use wardwatch_core::render::RecordingSurface;
use wardwatch_core::{GameObject, GameSignal, OverlayToggle, Vec3};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Definitions(#[from] wardwatch_core::DefinitionError),
    #[error("Failed to serialize definitions: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Screen projection used by the replay surface
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenSettings {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    /// World units per screen pixel
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// World position at the top-left corner of the screen
    #[serde(default)]
    pub origin: Vec3,
}

fn default_width() -> f32 {
    1920.0
}

fn default_height() -> f32 {
    1080.0
}

fn default_scale() -> f32 {
    1.0
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            scale: default_scale(),
            origin: Vec3::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MinimapSettings {
    /// Side length in pixels
    pub size: f32,
    /// World units per minimap pixel
    pub scale: f32,
}

impl Default for MinimapSettings {
    fn default() -> Self {
        let surface = RecordingSurface::default();
        Self {
            size: surface.minimap_size,
            scale: surface.minimap_scale,
        }
    }
}

/// One host event in a scenario
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioEvent {
    Created {
        object: GameObject,
    },
    Destroyed {
        object: GameObject,
    },
    Cast {
        clock: f32,
        ability: String,
        caster: GameObject,
        end_position: Vec3,
    },
    Update {
        clock: f32,
    },
    /// Run both render passes
    Render {
        clock: f32,
    },
    /// Flip an overlay toggle, as the user would from the menu
    Toggle {
        toggle: OverlayToggle,
        value: bool,
    },
}

impl ScenarioEvent {
    /// The tracker signal for this event, `None` for render and toggle events
    pub fn to_signal(&self) -> Option<GameSignal> {
        match self {
            Self::Created { object } => Some(GameSignal::ObjectCreated {
                object: object.clone(),
            }),
            Self::Destroyed { object } => Some(GameSignal::ObjectDestroyed {
                object: object.clone(),
            }),
            Self::Cast {
                clock,
                ability,
                caster,
                end_position,
            } => Some(GameSignal::SpellCast {
                caster: caster.clone(),
                ability_name: ability.clone(),
                end_position: *end_position,
                clock: *clock,
            }),
            Self::Update { clock } => Some(GameSignal::Update { clock: *clock }),
            Self::Render { .. } | Self::Toggle { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub screen: ScreenSettings,
    #[serde(default)]
    pub minimap: MinimapSettings,
    #[serde(default, rename = "event")]
    pub events: Vec<ScenarioEvent>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = fs::read_to_string(path).map_err(|e| ScenarioError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ScenarioError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// A recording surface configured with this scenario's projections
    pub fn surface(&self) -> RecordingSurface {
        RecordingSurface {
            calls: Vec::new(),
            width: self.screen.width,
            height: self.screen.height,
            screen_scale: self.screen.scale,
            screen_origin: self.screen.origin,
            minimap_size: self.minimap.size,
            minimap_scale: self.minimap.scale,
        }
    }
}
