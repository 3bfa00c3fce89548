//! Fill/background style types

use super::table::{Attribute, AttributeKind};
use super::Color;

/// Pattern fill record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    /// Pattern type
    pub pattern: Option<PatternType>,
    /// Pattern foreground color (the visible color of a solid fill)
    pub foreground: Option<Color>,
    /// Pattern background color
    pub background: Option<Color>,
}

impl Fill {
    /// Create an empty fill record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: Some(PatternType::Solid),
            foreground: Some(color),
            background: None,
        }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, foreground: Color, background: Color) -> Self {
        Self {
            pattern: Some(pattern),
            foreground: Some(foreground),
            background: Some(background),
        }
    }
}

impl Attribute for Fill {
    const KIND: AttributeKind = AttributeKind::Fill;

    fn merge(&self, overlay: &Self) -> Self {
        Self {
            pattern: overlay.pattern.or(self.pattern),
            foreground: overlay.foreground.or(self.foreground),
            background: overlay.background.or(self.background),
        }
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternType {
    /// No pattern
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    DarkHorizontal,
    DarkVertical,
    DarkDown,
    DarkUp,
    DarkGrid,
    DarkTrellis,
    LightHorizontal,
    LightVertical,
    LightDown,
    LightUp,
    LightGrid,
    LightTrellis,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_base_pattern() {
        let base = Fill::solid(Color::RED);
        let overlay = Fill {
            foreground: Some(Color::BLUE),
            ..Fill::default()
        };

        let merged = base.merge(&overlay);
        assert_eq!(merged.pattern, Some(PatternType::Solid));
        assert_eq!(merged.foreground, Some(Color::BLUE));
        assert_eq!(merged.background, None);
    }
}
