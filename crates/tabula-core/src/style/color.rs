//! Color representation

use std::fmt;

/// Color value as stored in font, fill and border records
///
/// Colors are opaque to the style engine: two colors are the same iff they compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Automatic (application-chosen) color
    Auto,

    /// ARGB color
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Theme color with tint (-100..=100 percent)
    Theme { index: u8, tint: i8 },

    /// Indexed color (legacy palette)
    Indexed(u8),
}

impl Color {
    /// Create an opaque RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a: 255, r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create a theme color
    pub const fn theme(index: u8, tint: i8) -> Self {
        Color::Theme { index, tint }
    }

    /// Create from a hex string (`"#FF0000"`, `"FF0000"` or `"80FF0000"`)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// ARGB hex string as written to `rgb` attributes, if this is an explicit color
    pub fn to_argb_hex(&self) -> Option<String> {
        match self {
            Color::Argb { a, r, g, b } => Some(format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b)),
            _ => None,
        }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Argb { a, r, g, b } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
            Color::Theme { index, tint } => write!(f, "theme({}, {}%)", index, tint),
            Color::Indexed(i) => write!(f, "indexed({})", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(
            Color::from_hex("80FFFFFF"),
            Some(Color::argb(128, 255, 255, 255))
        );
        assert_eq!(Color::from_hex("F00"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
    }

    #[test]
    fn test_to_argb_hex() {
        assert_eq!(Color::RED.to_argb_hex().as_deref(), Some("FFFF0000"));
        assert_eq!(Color::theme(4, 0).to_argb_hex(), None);
    }
}
