//! Ward definitions
//!
//! This module provides:
//! - **Definitions**: which object names count as wards and which abilities
//!   place them, with the lifetime each placement is assumed to have
//! - **Config loading**: TOML files that replace the builtin table
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   WardDefinitions (builtin/TOML)                 │
//! │  "TrinketTotemLvl1 lasts (level-1)*3.5 + 60.5s, standard ward"  │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                     GameSignal::SpellCast
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  CalculatedWard (runtime state)                  │
//! │  "Ward at (2100, 50, 8400), expires at clock 188.5"             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod definitions;

pub use config::{DefinitionError, load_definitions, load_file, parse_definitions, save_file};
pub use definitions::{
    DefinitionConfig, Lifetime, UNBOUNDED_LIFETIME_SECS, WardAbility, WardDefinitions,
    WardKind, WardVariant,
};
