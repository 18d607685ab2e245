//! Ward definition types
//!
//! Definitions are the explicit table of what the tracker treats as a ward:
//! object names it observes, and abilities whose casts imply a ward with an
//! estimated lifetime.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use wardwatch_types::{Rgba, colors};

/// Lifetime assigned to wards that never expire on their own (jammers).
pub const UNBOUNDED_LIFETIME_SECS: f32 = u16::MAX as f32;

// ═══════════════════════════════════════════════════════════════════════════
// Variant
// ═══════════════════════════════════════════════════════════════════════════

/// Visual class of a ward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WardVariant {
    /// Sight wards and trinkets
    #[default]
    Standard,
    /// Jammer devices
    Jammer,
}

impl WardVariant {
    pub fn color(&self) -> Rgba {
        match self {
            Self::Standard => colors::STANDARD_WARD,
            Self::Jammer => colors::JAMMER_WARD,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Lifetime
// ═══════════════════════════════════════════════════════════════════════════

/// How long a ward placed by an ability is assumed to last
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Lifetime {
    /// Same duration regardless of caster
    Fixed { secs: f32 },
    /// `(level - 1) * per_level_secs + base_secs`
    LevelScaled { base_secs: f32, per_level_secs: f32 },
    /// Lasts until destroyed
    Unbounded,
}

impl Lifetime {
    /// Resolve the lifetime in seconds for a caster of the given level
    pub fn resolve(&self, caster_level: u32) -> f32 {
        match *self {
            Self::Fixed { secs } => secs,
            Self::LevelScaled {
                base_secs,
                per_level_secs,
            } => caster_level.saturating_sub(1) as f32 * per_level_secs + base_secs,
            Self::Unbounded => UNBOUNDED_LIFETIME_SECS,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Definitions
// ═══════════════════════════════════════════════════════════════════════════

/// An object name the tracker observes as a ward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardKind {
    pub name: String,
    #[serde(default)]
    pub variant: WardVariant,
}

/// An ability whose cast places a ward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardAbility {
    pub name: String,
    #[serde(default)]
    pub variant: WardVariant,
    pub lifetime: Lifetime,
}

/// On-disk form of the definition table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionConfig {
    #[serde(default, rename = "ward")]
    pub wards: Vec<WardKind>,

    #[serde(default, rename = "ability")]
    pub abilities: Vec<WardAbility>,
}

/// Lookup table consulted by the tracker for every event
#[derive(Debug, Clone, Default)]
pub struct WardDefinitions {
    /// Object name -> variant
    wards: HashMap<String, WardVariant>,
    /// Ability name -> definition
    abilities: HashMap<String, WardAbility>,
}

impl WardDefinitions {
    /// Create an empty table (tracks nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the tracker
    pub fn builtin() -> Self {
        let mut set = Self::new();
        set.add_config(Self::builtin_config());
        set
    }

    pub fn builtin_config() -> DefinitionConfig {
        let ward = |name: &str, variant| WardKind {
            name: name.to_string(),
            variant,
        };
        let ability = |name: &str, lifetime, variant| WardAbility {
            name: name.to_string(),
            lifetime,
            variant,
        };

        DefinitionConfig {
            wards: vec![
                ward("SightWard", WardVariant::Standard),
                ward("VisionWard", WardVariant::Standard),
                ward("JammerDevice", WardVariant::Jammer),
            ],
            abilities: vec![
                ability(
                    "TrinketTotemLvl1",
                    Lifetime::LevelScaled {
                        base_secs: 60.5,
                        per_level_secs: 3.5,
                    },
                    WardVariant::Standard,
                ),
                ability(
                    "ItemGhostWard",
                    Lifetime::Fixed { secs: 150.0 },
                    WardVariant::Standard,
                ),
                ability("JammerDevice", Lifetime::Unbounded, WardVariant::Jammer),
            ],
        }
    }

    /// Add definitions from a config, returns names that were already present.
    /// Later entries replace earlier ones.
    pub fn add_config(&mut self, config: DefinitionConfig) -> Vec<String> {
        let mut duplicates = Vec::new();

        for ward in config.wards {
            if self.wards.insert(ward.name.clone(), ward.variant).is_some() {
                duplicates.push(ward.name);
            }
        }

        for ability in config.abilities {
            let name = ability.name.clone();
            if self.abilities.insert(name.clone(), ability).is_some() {
                duplicates.push(name);
            }
        }

        duplicates
    }

    /// Variant of a tracked ward object, `None` if the name is not a ward
    pub fn ward_variant(&self, object_name: &str) -> Option<WardVariant> {
        self.wards.get(object_name).copied()
    }

    pub fn is_ward_name(&self, object_name: &str) -> bool {
        self.wards.contains_key(object_name)
    }

    /// Ward-placing ability by name
    pub fn ability(&self, ability_name: &str) -> Option<&WardAbility> {
        self.abilities.get(ability_name)
    }

    pub fn ward_names(&self) -> HashSet<&str> {
        self.wards.keys().map(String::as_str).collect()
    }

    pub fn abilities(&self) -> impl Iterator<Item = &WardAbility> {
        self.abilities.values()
    }

    /// Back to the on-disk form, sorted by name for stable output
    pub fn to_config(&self) -> DefinitionConfig {
        let mut wards: Vec<WardKind> = self
            .wards
            .iter()
            .map(|(name, variant)| WardKind {
                name: name.clone(),
                variant: *variant,
            })
            .collect();
        wards.sort_by(|a, b| a.name.cmp(&b.name));

        let mut abilities: Vec<WardAbility> = self.abilities.values().cloned().collect();
        abilities.sort_by(|a, b| a.name.cmp(&b.name));

        DefinitionConfig { wards, abilities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lifetimes() {
        let defs = WardDefinitions::builtin();

        let trinket = defs.ability("TrinketTotemLvl1").unwrap();
        assert_eq!(trinket.lifetime.resolve(1), 60.5);
        assert_eq!(trinket.lifetime.resolve(9), 88.5);
        assert_eq!(trinket.lifetime.resolve(18), 120.0);

        let ghost = defs.ability("ItemGhostWard").unwrap();
        assert_eq!(ghost.lifetime.resolve(1), 150.0);
        assert_eq!(ghost.lifetime.resolve(18), 150.0);

        let jammer = defs.ability("JammerDevice").unwrap();
        assert_eq!(jammer.lifetime.resolve(5), UNBOUNDED_LIFETIME_SECS);
        assert_eq!(jammer.variant, WardVariant::Jammer);
    }

    #[test]
    fn test_builtin_ward_names() {
        let defs = WardDefinitions::builtin();
        assert_eq!(defs.ward_variant("SightWard"), Some(WardVariant::Standard));
        assert_eq!(defs.ward_variant("VisionWard"), Some(WardVariant::Standard));
        assert_eq!(defs.ward_variant("JammerDevice"), Some(WardVariant::Jammer));
        assert_eq!(defs.ward_variant("TrinketTotemLvl1"), None);
        assert_eq!(defs.ward_names().len(), 3);
    }

    #[test]
    fn test_level_zero_does_not_underflow() {
        let lifetime = Lifetime::LevelScaled {
            base_secs: 60.5,
            per_level_secs: 3.5,
        };
        assert_eq!(lifetime.resolve(0), 60.5);
    }

    #[test]
    fn test_add_config_reports_duplicates() {
        let mut defs = WardDefinitions::builtin();
        let duplicates = defs.add_config(DefinitionConfig {
            wards: vec![],
            abilities: vec![WardAbility {
                name: "ItemGhostWard".to_string(),
                lifetime: Lifetime::Fixed { secs: 90.0 },
                variant: WardVariant::Standard,
            }],
        });

        assert_eq!(duplicates, vec!["ItemGhostWard".to_string()]);
        assert_eq!(defs.ability("ItemGhostWard").unwrap().lifetime.resolve(1), 90.0);
    }

    #[test]
    fn test_to_config_is_sorted() {
        let config = WardDefinitions::builtin().to_config();
        let names: Vec<&str> = config.abilities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["ItemGhostWard", "JammerDevice", "TrinketTotemLvl1"]);
        assert_eq!(config.wards[0].name, "JammerDevice");
    }
}
