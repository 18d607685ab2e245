//! Tests for ward tracker
//!
//! Covers observed/calculated bookkeeping, deduplication, destruction
//! proximity and throttled expiry.

use super::tracker::{DEDUP_RADIUS, WardTracker};
use crate::events::{GameObject, GameSignal, ObjectType, SignalHandler};
use crate::geometry::Vec3;
use crate::tracking::{UNBOUNDED_LIFETIME_SECS, WardDefinitions, WardVariant, parse_definitions};
use wardwatch_types::WardOverlayConfig;

fn hero(name: &str, level: u32, is_ally: bool) -> GameObject {
    GameObject {
        network_id: 1000,
        name: name.to_string(),
        position: Vec3::default(),
        is_ally,
        object_type: ObjectType::Hero,
        level,
    }
}

fn enemy_hero(level: u32) -> GameObject {
    hero("Thresh", level, false)
}

fn ward_object(network_id: u32, name: &str, position: Vec3, is_ally: bool) -> GameObject {
    GameObject {
        network_id,
        name: name.to_string(),
        position,
        is_ally,
        object_type: ObjectType::Ward,
        level: 0,
    }
}

fn enemy_ward(network_id: u32, name: &str, position: Vec3) -> GameObject {
    ward_object(network_id, name, position, false)
}

fn at(x: f32, z: f32) -> Vec3 {
    Vec3::new(x, 0.0, z)
}

// ─────────────────────────────────────────────────────────────────────────────
// Object created / destroyed
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_enemy_ward_created_is_observed() {
    let mut tracker = WardTracker::default();

    assert!(tracker.on_object_created(&enemy_ward(7, "SightWard", at(100.0, 100.0))));

    assert_eq!(tracker.observed().len(), 1);
    let ward = &tracker.observed()[0];
    assert_eq!(ward.network_id, 7);
    assert_eq!(ward.variant, WardVariant::Standard);
    assert_eq!(ward.position, at(100.0, 100.0));
}

#[test]
fn test_jammer_observed_with_jammer_variant() {
    let mut tracker = WardTracker::default();
    tracker.on_object_created(&enemy_ward(8, "JammerDevice", at(0.0, 0.0)));
    assert_eq!(tracker.observed()[0].variant, WardVariant::Jammer);
}

#[test]
fn test_allied_or_untracked_objects_ignored() {
    let mut tracker = WardTracker::default();

    assert!(!tracker.on_object_created(&ward_object(1, "SightWard", at(0.0, 0.0), true)));
    assert!(!tracker.on_object_created(&enemy_ward(2, "Minion_T200", at(0.0, 0.0))));
    assert!(!tracker.on_object_created(&enemy_ward(3, "sightward", at(0.0, 0.0))));

    assert!(tracker.observed().is_empty());
}

#[test]
fn test_destroy_removes_by_identity_only() {
    let mut tracker = WardTracker::default();
    tracker.on_object_created(&enemy_ward(1, "SightWard", at(0.0, 0.0)));
    tracker.on_object_created(&enemy_ward(2, "SightWard", at(5000.0, 0.0)));
    tracker.on_object_created(&enemy_ward(3, "VisionWard", at(0.0, 5000.0)));

    tracker.on_object_destroyed(&enemy_ward(2, "SightWard", at(5000.0, 0.0)));

    let ids: Vec<u32> = tracker.observed().iter().map(|w| w.network_id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_destroy_untracked_name_is_ignored() {
    let mut tracker = WardTracker::default();
    tracker.on_object_created(&enemy_ward(1, "SightWard", at(0.0, 0.0)));
    tracker.on_spell_cast(&enemy_hero(5), "ItemGhostWard", at(3000.0, 3000.0), 10.0);

    // Same network id and position, but not a ward name
    tracker.on_object_destroyed(&enemy_ward(1, "Minion", at(3000.0, 3000.0)));

    assert_eq!(tracker.observed().len(), 1);
    assert_eq!(tracker.calculated().len(), 1);
}

#[test]
fn test_destroy_removes_nearby_calculated_wards() {
    let mut tracker = WardTracker::default();
    let hero = enemy_hero(5);
    tracker.on_spell_cast(&hero, "ItemGhostWard", at(1000.0, 1000.0), 10.0);
    tracker.on_spell_cast(&hero, "ItemGhostWard", at(1010.0, 1015.0), 11.0);
    tracker.on_spell_cast(&hero, "ItemGhostWard", at(1030.0, 1000.0), 12.0);

    // Destroyed object never tracked as observed (different id), near the first two
    tracker.on_object_destroyed(&enemy_ward(99, "SightWard", at(1005.0, 1005.0)));

    assert_eq!(tracker.calculated().len(), 1);
    assert_eq!(tracker.calculated()[0].position, at(1030.0, 1000.0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Spell casts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_trinket_end_time_scales_with_level() {
    let mut tracker = WardTracker::default();

    let ward = tracker
        .on_spell_cast(&enemy_hero(9), "TrinketTotemLvl1", at(200.0, 200.0), 100.0)
        .cloned()
        .unwrap();

    assert_eq!(ward.end_time, 188.5);
    assert_eq!(ward.position, at(200.0, 200.0));
    assert_eq!(ward.variant, WardVariant::Standard);
    assert_eq!(ward.ability_name, "TrinketTotemLvl1");

    for level in 1..=18 {
        let mut tracker = WardTracker::default();
        let ward = tracker
            .on_spell_cast(&enemy_hero(level), "TrinketTotemLvl1", at(0.0, 0.0), 50.0)
            .unwrap();
        let expected = 50.0 + ((level - 1) as f32 * 3.5 + 60.5);
        assert_eq!(ward.end_time, expected, "level {level}");
    }
}

#[test]
fn test_control_ward_has_fixed_lifetime() {
    let mut tracker = WardTracker::default();
    let ward = tracker
        .on_spell_cast(&enemy_hero(14), "ItemGhostWard", at(0.0, 0.0), 240.0)
        .unwrap();
    assert_eq!(ward.end_time, 390.0);
}

#[test]
fn test_jammer_is_effectively_unbounded() {
    let mut tracker = WardTracker::default();
    let ward = tracker
        .on_spell_cast(&enemy_hero(2), "JammerDevice", at(0.0, 0.0), 30.0)
        .cloned()
        .unwrap();

    assert_eq!(ward.end_time, 30.0 + UNBOUNDED_LIFETIME_SECS);
    assert_eq!(ward.variant, WardVariant::Jammer);

    // Survives any realistic match length
    tracker.on_update(3.0 * 3600.0);
    assert_eq!(tracker.calculated().len(), 1);
}

#[test]
fn test_casts_from_allies_and_non_heroes_ignored() {
    let mut tracker = WardTracker::default();

    let ally = hero("Janna", 9, true);
    assert!(tracker.on_spell_cast(&ally, "TrinketTotemLvl1", at(0.0, 0.0), 10.0).is_none());

    let mut minion = enemy_hero(9);
    minion.object_type = ObjectType::Minion;
    assert!(tracker.on_spell_cast(&minion, "TrinketTotemLvl1", at(0.0, 0.0), 10.0).is_none());

    assert!(tracker.on_spell_cast(&enemy_hero(9), "Flash", at(0.0, 0.0), 10.0).is_none());

    assert!(tracker.calculated().is_empty());
}

#[test]
fn test_custom_definitions_drive_casts() {
    let defs = parse_definitions(
        r#"
[[ward]]
name = "ZombieWard"

[[ability]]
name = "ZombieWardSpawn"
lifetime = { type = "fixed", secs = 120.0 }
"#,
    )
    .unwrap();
    let mut tracker = WardTracker::new(defs, WardOverlayConfig::default());

    assert!(tracker.on_spell_cast(&enemy_hero(3), "TrinketTotemLvl1", at(0.0, 0.0), 0.0).is_none());
    let ward = tracker
        .on_spell_cast(&enemy_hero(3), "ZombieWardSpawn", at(0.0, 0.0), 10.0)
        .unwrap();
    assert_eq!(ward.end_time, 130.0);

    tracker.set_definitions(WardDefinitions::new());
    assert!(!tracker.on_object_created(&enemy_ward(1, "ZombieWard", at(900.0, 900.0))));
    assert_eq!(tracker.calculated().len(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Deduplication
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_observed_ward_near_calculated_is_dropped() {
    let mut tracker = WardTracker::default();
    tracker.on_spell_cast(&enemy_hero(9), "TrinketTotemLvl1", at(500.0, 500.0), 100.0);

    // The ward object lands two seconds later, a few units off the cast point
    tracker.on_object_created(&enemy_ward(42, "SightWard", at(510.0, 505.0)));

    assert!(tracker.observed().is_empty());
    assert_eq!(tracker.calculated().len(), 1);
    assert_eq!(tracker.calculated()[0].end_time, 188.5);
}

#[test]
fn test_cast_drops_existing_observed_duplicate() {
    let mut tracker = WardTracker::default();
    tracker.on_object_created(&enemy_ward(1, "SightWard", at(500.0, 500.0)));
    tracker.on_object_created(&enemy_ward(2, "SightWard", at(900.0, 900.0)));

    tracker.on_spell_cast(&enemy_hero(4), "ItemGhostWard", at(500.0, 520.0), 20.0);

    let ids: Vec<u32> = tracker.observed().iter().map(|w| w.network_id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(tracker.calculated().len(), 1);
}

#[test]
fn test_dedup_threshold_is_strict() {
    let mut tracker = WardTracker::default();
    tracker.on_spell_cast(&enemy_hero(4), "ItemGhostWard", at(0.0, 0.0), 0.0);

    tracker.on_object_created(&enemy_ward(1, "SightWard", at(DEDUP_RADIUS, 0.0)));
    assert_eq!(tracker.observed().len(), 1);

    tracker.on_object_created(&enemy_ward(2, "SightWard", at(DEDUP_RADIUS - 0.5, 0.0)));
    let ids: Vec<u32> = tracker.observed().iter().map(|w| w.network_id).collect();
    assert_eq!(ids, vec![1]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Expiry
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_expired_wards_removed_on_tick() {
    let mut tracker = WardTracker::default();
    let hero = enemy_hero(1);
    tracker.on_spell_cast(&hero, "TrinketTotemLvl1", at(0.0, 0.0), 10.0); // ends 70.5
    tracker.on_spell_cast(&hero, "ItemGhostWard", at(3000.0, 0.0), 10.0); // ends 160

    assert_eq!(tracker.on_update(70.0), 0);
    assert_eq!(tracker.calculated().len(), 2);

    assert_eq!(tracker.on_update(71.5), 1);
    assert_eq!(tracker.calculated().len(), 1);
    assert_eq!(tracker.calculated()[0].ability_name, "ItemGhostWard");
}

#[test]
fn test_end_time_equal_to_clock_is_expired() {
    let mut tracker = WardTracker::default();
    tracker.on_spell_cast(&enemy_hero(1), "ItemGhostWard", at(0.0, 0.0), 10.0); // ends 160

    assert_eq!(tracker.on_update(160.0), 1);
    assert!(tracker.calculated().is_empty());
}

#[test]
fn test_update_is_throttled_to_once_per_second() {
    let mut tracker = WardTracker::default();
    tracker.on_spell_cast(&enemy_hero(1), "ItemGhostWard", at(0.0, 0.0), 0.0); // ends 150

    // Sweep runs at 149.5, so the next one cannot happen before 150.5
    assert_eq!(tracker.on_update(149.5), 0);
    assert_eq!(tracker.on_update(150.2), 0);
    assert_eq!(tracker.calculated().len(), 1);

    assert_eq!(tracker.on_update(150.6), 1);
    assert!(tracker.calculated().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Signal dispatch
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_scenario_through_signals() {
    let mut tracker = WardTracker::default();
    let position = at(2100.0, 8400.0);

    tracker.handle_signals(&[
        GameSignal::SpellCast {
            caster: enemy_hero(9),
            ability_name: "TrinketTotemLvl1".to_string(),
            end_position: position,
            clock: 100.0,
        },
        GameSignal::Update { clock: 101.5 },
        GameSignal::ObjectCreated {
            object: enemy_ward(55, "SightWard", position),
        },
        GameSignal::Update { clock: 102.0 },
    ]);

    assert!(tracker.observed().is_empty());
    assert_eq!(tracker.calculated().len(), 1);
    assert_eq!(tracker.calculated()[0].end_time, 188.5);
    assert_eq!(tracker.calculated()[0].remaining_secs(102.0), 86.5);

    tracker.handle_signal(&GameSignal::Update { clock: 189.0 });
    assert!(tracker.calculated().is_empty());
}

#[test]
fn test_destroy_signal_clears_calculated_entry() {
    let mut tracker = WardTracker::default();
    let position = at(700.0, 700.0);

    tracker.handle_signal(&GameSignal::SpellCast {
        caster: enemy_hero(6),
        ability_name: "JammerDevice".to_string(),
        end_position: position,
        clock: 300.0,
    });
    tracker.handle_signal(&GameSignal::ObjectDestroyed {
        object: enemy_ward(12, "JammerDevice", at(712.0, 690.0)),
    });

    assert!(tracker.calculated().is_empty());
}

#[test]
fn test_clear_resets_state() {
    let mut tracker = WardTracker::default();
    tracker.on_object_created(&enemy_ward(1, "SightWard", at(0.0, 0.0)));
    tracker.on_spell_cast(&enemy_hero(1), "ItemGhostWard", at(900.0, 0.0), 0.0);
    tracker.on_update(50.0);

    tracker.clear();

    assert!(tracker.observed().is_empty());
    assert!(tracker.calculated().is_empty());
    // Tick clock reset too
    tracker.on_spell_cast(&enemy_hero(1), "ItemGhostWard", at(900.0, 0.0), 0.0);
    assert_eq!(tracker.on_update(1.5), 0);
    assert_eq!(tracker.calculated().len(), 1);
}
