//! Subcommand implementations

use std::fmt;
use std::path::{Path, PathBuf};

use wardwatch_core::tracking::load_definitions;
use wardwatch_core::{CalculatedWard, ObservedWard, SignalHandler, WardTracker};
use wardwatch_types::formatting::format_clock;
use wardwatch_types::{OverlayToggle, WardOverlayConfig};

use crate::scenario::{Scenario, ScenarioError, ScenarioEvent};
use crate::surface::TraceSurface;

pub const APP_NAME: &str = "wardwatch";

/// End times past this are shown as unbounded in summaries
const DISPLAY_HORIZON_SECS: f32 = 4.0 * 3600.0;

/// Load the persisted overlay toggles, or from an explicit file
pub fn load_overlay_config(path: Option<&Path>) -> Result<WardOverlayConfig, confy::ConfyError> {
    match path {
        Some(path) => confy::load_path(path),
        None => confy::load(APP_NAME, None),
    }
}

/// Where the overlay toggles are persisted by default
pub fn overlay_config_path() -> Result<PathBuf, confy::ConfyError> {
    confy::get_configuration_file_path(APP_NAME, None)
}

/// Outcome of replaying a scenario
#[derive(Debug, Clone, Default)]
pub struct ReplaySummary {
    pub events: usize,
    pub renders: usize,
    pub draw_calls: usize,
    pub labels: Vec<String>,
    pub last_clock: f32,
    pub observed: Vec<ObservedWard>,
    pub calculated: Vec<CalculatedWard>,
}

impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Replayed {} events ({} renders, {} draw calls), last clock {}",
            self.events,
            self.renders,
            self.draw_calls,
            format_clock(self.last_clock, DISPLAY_HORIZON_SECS)
        )?;

        writeln!(f, "Observed wards: {}", self.observed.len())?;
        for ward in &self.observed {
            writeln!(
                f,
                "  #{:<8} {:<14} ({:.0}, {:.0})",
                ward.network_id, ward.name, ward.position.x, ward.position.z
            )?;
        }

        writeln!(f, "Calculated wards: {}", self.calculated.len())?;
        for ward in &self.calculated {
            writeln!(
                f,
                "  {:<18} ({:.0}, {:.0}) ends {}",
                ward.ability_name,
                ward.position.x,
                ward.position.z,
                format_clock(ward.end_time, DISPLAY_HORIZON_SECS)
            )?;
        }
        Ok(())
    }
}

/// Feed a scenario through a fresh tracker
pub fn replay(
    scenario: &Scenario,
    definitions: Option<&Path>,
    config: WardOverlayConfig,
) -> Result<ReplaySummary, ScenarioError> {
    let definitions = load_definitions(definitions)?;
    let mut tracker = WardTracker::new(definitions, config);
    let mut surface = TraceSurface::new(scenario.surface());
    let mut summary = ReplaySummary::default();

    for event in &scenario.events {
        summary.events += 1;

        if let Some(signal) = event.to_signal() {
            if let Some(clock) = signal.clock() {
                summary.last_clock = clock;
            }
            tracker.handle_signal(&signal);
            continue;
        }

        match event {
            ScenarioEvent::Render { clock } => {
                summary.renders += 1;
                summary.last_clock = *clock;

                surface.set_pass("world");
                tracker.render_world(&mut surface, *clock);
                surface.set_pass("minimap");
                tracker.render_minimap(&mut surface);
            }
            ScenarioEvent::Toggle { toggle, value } => {
                let previous = tracker.config_mut().set(*toggle, *value);
                tracing::info!(toggle = toggle.label(), previous, value, "Toggle changed");
            }
            _ => {}
        }
    }

    summary.draw_calls = surface.draw_count();
    summary.labels = surface
        .recorded()
        .texts()
        .filter(|text| text.ends_with(" sec"))
        .map(str::to_string)
        .collect();
    summary.observed = tracker.observed().to_vec();
    summary.calculated = tracker.calculated().to_vec();
    Ok(summary)
}

/// The active definition table rendered as TOML
pub fn show_definitions(definitions: Option<&Path>) -> Result<String, ScenarioError> {
    let defs = load_definitions(definitions)?;
    Ok(toml::to_string_pretty(&defs.to_config())?)
}

/// Human-readable listing of the overlay toggles
pub fn show_config(config: &WardOverlayConfig, path: Option<&Path>) -> String {
    let mut out = String::new();
    if let Some(path) = path {
        out.push_str(&format!("Config file: {}\n", path.display()));
    }
    for toggle in OverlayToggle::ALL {
        let state = if config.get(toggle) { "on" } else { "off" };
        out.push_str(&format!("  {:<26} {}\n", toggle.label(), state));
    }
    out
}
