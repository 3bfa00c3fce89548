//! Text alignment
//!
//! Alignment is stored whole inside a cell format: two formats with different alignments are
//! different formats, and a merge adopts an alignment as one value.

use crate::error::{Error, Result};

/// Rotation value meaning "stacked vertical text"
pub const VERTICAL_TEXT_ROTATION: i16 = 255;

/// Largest indent level accepted by spreadsheet applications
pub const MAX_INDENT: u8 = 250;

/// Text alignment settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub wrap_text: bool,
    pub shrink_to_fit: bool,
    /// Indent level (0-250)
    pub indent: u8,
    /// Degrees in -90..=90, or [`VERTICAL_TEXT_ROTATION`]
    pub rotation: i16,
}

impl Alignment {
    /// Alignment with only the horizontal placement set
    pub fn horizontal(horizontal: HorizontalAlignment) -> Self {
        Self {
            horizontal,
            ..Self::default()
        }
    }

    /// Centered both ways
    pub fn centered() -> Self {
        Self {
            horizontal: HorizontalAlignment::Center,
            vertical: VerticalAlignment::Center,
            ..Self::default()
        }
    }

    /// Indent the text, clamped to [`MAX_INDENT`]
    pub fn indented(mut self, indent: u8) -> Self {
        self.indent = indent.min(MAX_INDENT);
        self
    }

    /// Rotate the text
    ///
    /// Accepts -90..=90 degrees or [`VERTICAL_TEXT_ROTATION`].
    pub fn rotated(mut self, degrees: i16) -> Result<Self> {
        if !(-90..=90).contains(&degrees) && degrees != VERTICAL_TEXT_ROTATION {
            return Err(Error::InvalidFormat(format!(
                "text rotation {} is outside -90..=90",
                degrees
            )));
        }
        self.rotation = degrees;
        Ok(self)
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Text left, numbers right
    #[default]
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterContinuous,
    Distributed,
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    Top,
    Center,
    #[default]
    Bottom,
    Justify,
    Distributed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let centered = Alignment::centered();
        assert_eq!(centered.horizontal, HorizontalAlignment::Center);
        assert_eq!(centered.vertical, VerticalAlignment::Center);
        assert_ne!(centered, Alignment::horizontal(HorizontalAlignment::Center));
        assert_eq!(Alignment::default().indented(255).indent, MAX_INDENT);
    }

    #[test]
    fn test_rotation_bounds() {
        assert_eq!(Alignment::default().rotated(-45).unwrap().rotation, -45);
        assert!(Alignment::default().rotated(VERTICAL_TEXT_ROTATION).is_ok());
        assert!(matches!(
            Alignment::default().rotated(91),
            Err(Error::InvalidFormat(_))
        ));
    }
}
