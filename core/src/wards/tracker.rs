//! Ward tracking handler
//!
//! Keeps the observed and calculated ward collections in sync with host
//! signals. Every handler runs synchronously on the host's update thread.

use wardwatch_types::WardOverlayConfig;

use crate::events::{GameObject, GameSignal, SignalHandler};
use crate::geometry::Vec3;
use crate::tracking::WardDefinitions;

use super::{CalculatedWard, ObservedWard};

/// Distance under which an observed and a calculated ward are the same ward
pub const DEDUP_RADIUS: f32 = 25.0;

/// Minimum game-clock gap between expiry sweeps
pub const UPDATE_INTERVAL_SECS: f32 = 1.0;

/// Tracks enemy wards for overlay display.
///
/// Construct with the definition table and overlay toggles, then feed host
/// events through the `on_*` methods or [`SignalHandler::handle_signal`].
#[derive(Debug, Clone)]
pub struct WardTracker {
    definitions: WardDefinitions,
    config: WardOverlayConfig,

    observed: Vec<ObservedWard>,
    calculated: Vec<CalculatedWard>,

    /// Game clock of the last expiry sweep
    last_tick: f32,
}

impl Default for WardTracker {
    fn default() -> Self {
        Self::new(WardDefinitions::builtin(), WardOverlayConfig::default())
    }
}

impl WardTracker {
    pub fn new(definitions: WardDefinitions, config: WardOverlayConfig) -> Self {
        Self {
            definitions,
            config,
            observed: Vec::new(),
            calculated: Vec::new(),
            last_tick: 0.0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────────

    pub fn config(&self) -> &WardOverlayConfig {
        &self.config
    }

    /// Toggles are read on every render call, so edits apply immediately
    pub fn config_mut(&mut self) -> &mut WardOverlayConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: WardOverlayConfig) {
        self.config = config;
    }

    pub fn definitions(&self) -> &WardDefinitions {
        &self.definitions
    }

    /// Swap the definition table. Already tracked wards are kept.
    pub fn set_definitions(&mut self, definitions: WardDefinitions) {
        self.definitions = definitions;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State access
    // ─────────────────────────────────────────────────────────────────────────

    pub fn observed(&self) -> &[ObservedWard] {
        &self.observed
    }

    pub fn calculated(&self) -> &[CalculatedWard] {
        &self.calculated
    }

    /// Drop all tracked wards (e.g. on game exit)
    pub fn clear(&mut self) {
        self.observed.clear();
        self.calculated.clear();
        self.last_tick = 0.0;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event handlers
    // ─────────────────────────────────────────────────────────────────────────

    /// Track a newly created enemy ward object. Returns true if it was added.
    pub fn on_object_created(&mut self, object: &GameObject) -> bool {
        if object.is_ally {
            return false;
        }
        let Some(variant) = self.definitions.ward_variant(&object.name) else {
            return false;
        };

        tracing::debug!(
            network_id = object.network_id,
            name = %object.name,
            "Observed enemy ward"
        );
        self.observed.push(ObservedWard::from_object(object, variant));
        self.eliminate_duplicates();
        true
    }

    /// Forget a destroyed ward object, and any calculated ward sitting where it was
    pub fn on_object_destroyed(&mut self, object: &GameObject) {
        if !self.definitions.is_ward_name(&object.name) {
            return;
        }

        self.observed
            .retain(|ward| ward.network_id != object.network_id);

        let before = self.calculated.len();
        self.calculated
            .retain(|ward| !ward.position.is_within(&object.position, DEDUP_RADIUS));

        tracing::debug!(
            network_id = object.network_id,
            calculated_removed = before - self.calculated.len(),
            "Ward destroyed"
        );
    }

    /// Infer a ward from an enemy hero's cast.
    ///
    /// Returns the new calculated ward, or `None` if the cast was ignored.
    pub fn on_spell_cast(
        &mut self,
        caster: &GameObject,
        ability_name: &str,
        end_position: Vec3,
        clock: f32,
    ) -> Option<&CalculatedWard> {
        if caster.is_ally || !caster.is_hero() {
            return None;
        }
        let ability = self.definitions.ability(ability_name)?;

        let lifetime = ability.lifetime.resolve(caster.level);
        let ward = CalculatedWard {
            position: end_position,
            end_time: clock + lifetime,
            variant: ability.variant,
            ability_name: ability.name.clone(),
        };

        tracing::debug!(
            caster = %caster.name,
            level = caster.level,
            ability = ability_name,
            end_time = ward.end_time,
            "Calculated ward from cast"
        );

        self.calculated.push(ward);
        self.eliminate_duplicates();
        self.calculated.last()
    }

    /// Per-frame update. Sweeps expired calculated wards at most once per
    /// game second; returns how many were removed.
    pub fn on_update(&mut self, clock: f32) -> usize {
        if clock - self.last_tick <= UPDATE_INTERVAL_SECS {
            return 0;
        }
        self.last_tick = clock;

        let before = self.calculated.len();
        self.calculated.retain(|ward| !ward.is_expired(clock));
        let removed = before - self.calculated.len();
        if removed > 0 {
            tracing::debug!(removed, clock, "Expired calculated wards");
        }
        removed
    }

    /// Remove observed wards that sit on top of a calculated ward.
    ///
    /// The calculated entry survives so its expiry estimate keeps driving
    /// the displayed timer.
    fn eliminate_duplicates(&mut self) -> usize {
        let before = self.observed.len();
        let calculated = &self.calculated;
        self.observed.retain(|observed| {
            !calculated
                .iter()
                .any(|ward| ward.position.is_within(&observed.position, DEDUP_RADIUS))
        });

        let removed = before - self.observed.len();
        if removed > 0 {
            tracing::debug!(removed, "Dropped observed wards shadowed by calculated wards");
        }
        removed
    }
}

impl SignalHandler for WardTracker {
    fn handle_signal(&mut self, signal: &GameSignal) {
        match signal {
            GameSignal::ObjectCreated { object } => {
                self.on_object_created(object);
            }
            GameSignal::ObjectDestroyed { object } => {
                self.on_object_destroyed(object);
            }
            GameSignal::SpellCast {
                caster,
                ability_name,
                end_position,
                clock,
            } => {
                self.on_spell_cast(caster, ability_name, *end_position, *clock);
            }
            GameSignal::Update { clock } => {
                self.on_update(*clock);
            }
        }
    }
}
