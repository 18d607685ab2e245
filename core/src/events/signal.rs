use serde::{Deserialize, Serialize};

use crate::geometry::Vec3;

/// Host object classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Hero,
    Minion,
    Ward,
    #[default]
    Other,
}

/// Snapshot of a host game object at the time an event fired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    pub network_id: u32,
    pub name: String,
    pub position: Vec3,
    #[serde(default)]
    pub is_ally: bool,
    #[serde(default)]
    pub object_type: ObjectType,
    /// Champion level for heroes, zero otherwise
    #[serde(default)]
    pub level: u32,
}

impl GameObject {
    pub fn is_hero(&self) -> bool {
        self.object_type == ObjectType::Hero
    }
}

/// Events delivered by the host game client.
///
/// Render phases are not signals; they are driven through
/// [`crate::render::DrawSurface`] directly.
#[derive(Debug, Clone)]
pub enum GameSignal {
    ObjectCreated {
        object: GameObject,
    },
    ObjectDestroyed {
        object: GameObject,
    },
    SpellCast {
        caster: GameObject,
        ability_name: String,
        /// Cast destination
        end_position: Vec3,
        /// Game clock when the cast was processed
        clock: f32,
    },
    /// Per-frame update with the current game clock in seconds
    Update {
        clock: f32,
    },
}

impl GameSignal {
    /// Game clock carried by the signal, if any
    pub fn clock(&self) -> Option<f32> {
        match self {
            Self::SpellCast { clock, .. } | Self::Update { clock } => Some(*clock),
            Self::ObjectCreated { .. } | Self::ObjectDestroyed { .. } => None,
        }
    }
}
