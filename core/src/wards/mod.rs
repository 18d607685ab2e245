//! Ward tracking
//!
//! - **Observed wards**: enemy ward objects currently on the map
//! - **Calculated wards**: wards inferred from enemy casts, with an estimated
//!   expiry, that have not (yet) shown up as objects
//! - **Tracker**: signal handler reconciling the two and expiring stale entries

mod active;
pub mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use active::{CalculatedWard, ObservedWard};
pub use tracker::{DEDUP_RADIUS, UPDATE_INTERVAL_SECS, WardTracker};
