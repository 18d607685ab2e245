//! Ward marker colors
//!
//! Colors are stored as `[r, g, b, a]` so they serialize cleanly to TOML and
//! convert directly into whatever the host renderer uses.

/// RGBA color, 0-255 per channel
pub type Rgba = [u8; 4];

/// Standard sight wards and trinkets (lawn green)
pub const STANDARD_WARD: Rgba = [124, 252, 0, 255];

/// Jammer devices (magenta)
pub const JAMMER_WARD: Rgba = [255, 0, 255, 255];

/// Dark strip drawn under minimap glyphs
pub const MINIMAP_UNDERLAY: Rgba = [0, 0, 0, 175];

/// Format a color as `#RRGGBBAA` for logs and tool output
pub fn to_hex(color: Rgba) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        color[0], color[1], color[2], color[3]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(STANDARD_WARD), "#7CFC00FF");
        assert_eq!(to_hex(JAMMER_WARD), "#FF00FFFF");
        assert_eq!(to_hex(MINIMAP_UNDERLAY), "#000000AF");
    }
}
