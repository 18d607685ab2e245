//! Text formatting for overlay labels and tool output.

/// Format a remaining lifetime as the world-space label (`"N sec"`).
///
/// Seconds are rounded to the nearest whole number. Negative input clamps to zero.
///
/// # Examples
/// ```
/// use wardwatch_types::formatting::format_seconds_label;
/// assert_eq!(format_seconds_label(88.4), "88 sec");
/// assert_eq!(format_seconds_label(88.6), "89 sec");
/// assert_eq!(format_seconds_label(-3.0), "0 sec");
/// ```
pub fn format_seconds_label(secs: f32) -> String {
    format!("{:.0} sec", secs.max(0.0))
}

/// Format a duration as `M:SS`.
///
/// # Examples
/// ```
/// use wardwatch_types::formatting::format_duration;
/// assert_eq!(format_duration(125), "2:05");
/// assert_eq!(format_duration(59), "0:59");
/// assert_eq!(format_duration(0), "0:00");
/// ```
pub fn format_duration(secs: i64) -> String {
    let mins = secs / 60;
    let secs = secs % 60;
    format!("{}:{:02}", mins, secs)
}

/// Format a game clock or end time for display, `∞` past the given horizon.
///
/// Jammer devices carry an end time far beyond any real match length; this
/// keeps tool output readable.
///
/// # Examples
/// ```
/// use wardwatch_types::formatting::format_clock;
/// assert_eq!(format_clock(188.5, 3600.0), "3:08");
/// assert_eq!(format_clock(65_635.0, 3600.0), "∞");
/// ```
pub fn format_clock(secs: f32, horizon: f32) -> String {
    if secs > horizon {
        return "∞".to_string();
    }
    format_duration(secs.max(0.0).floor() as i64)
}
