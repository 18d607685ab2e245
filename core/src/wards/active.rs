//! Runtime ward entries held by the tracker.

use wardwatch_types::Rgba;

use crate::events::GameObject;
use crate::geometry::Vec3;
use crate::tracking::WardVariant;

/// An enemy ward object the host reported as created and not yet destroyed
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedWard {
    pub network_id: u32,
    /// Object name, e.g. "SightWard" or "JammerDevice"
    pub name: String,
    pub position: Vec3,
    pub variant: WardVariant,
}

impl ObservedWard {
    pub fn from_object(object: &GameObject, variant: WardVariant) -> Self {
        Self {
            network_id: object.network_id,
            name: object.name.clone(),
            position: object.position,
            variant,
        }
    }

    pub fn color(&self) -> Rgba {
        self.variant.color()
    }
}

/// A ward inferred from an enemy cast
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedWard {
    /// Cast destination
    pub position: Vec3,
    /// Game clock (seconds) at which the ward is assumed gone
    pub end_time: f32,
    pub variant: WardVariant,
    /// Ability that placed it
    pub ability_name: String,
}

impl CalculatedWard {
    pub fn color(&self) -> Rgba {
        self.variant.color()
    }

    /// Seconds left at `clock`; negative once expired
    pub fn remaining_secs(&self, clock: f32) -> f32 {
        self.end_time - clock
    }

    pub fn is_expired(&self, clock: f32) -> bool {
        self.end_time <= clock
    }
}
