//! Font style types

use super::table::{Attribute, AttributeKind};
use super::Color;

/// Font record
///
/// Every field is optional; `None` means "inherit / not specified".
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold
    pub bold: Option<bool>,
    /// Italic
    pub italic: Option<bool>,
    /// Underline style
    pub underline: Option<Underline>,
    /// Strikethrough
    pub strikethrough: Option<bool>,
    /// Font color
    pub color: Option<Color>,
    /// Superscript/subscript
    pub vertical_align: Option<FontVerticalAlign>,
}

impl Font {
    /// Create an empty font record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set font size (`-0.0` is stored as `0.0`)
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size + 0.0);
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Set strikethrough
    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = Some(strikethrough);
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set superscript/subscript
    pub fn with_vertical_align(mut self, align: FontVerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }
}

impl Attribute for Font {
    const KIND: AttributeKind = AttributeKind::Font;

    fn merge(&self, overlay: &Self) -> Self {
        Self {
            name: overlay.name.clone().or_else(|| self.name.clone()),
            size: overlay.size.or(self.size),
            bold: overlay.bold.or(self.bold),
            italic: overlay.italic.or(self.italic),
            underline: overlay.underline.or(self.underline),
            strikethrough: overlay.strikethrough.or(self.strikethrough),
            color: overlay.color.or(self.color),
            vertical_align: overlay.vertical_align.or(self.vertical_align),
        }
    }
}

impl std::hash::Hash for Font {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.map(f64::to_bits).hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.strikethrough.hash(state);
        self.color.hash(state);
        self.vertical_align.hash(state);
    }
}

// Sizes compare by bit pattern so equality agrees with `Hash`.
impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.size.map(f64::to_bits) == other.size.map(f64::to_bits)
            && self.bold == other.bold
            && self.italic == other.italic
            && self.underline == other.underline
            && self.strikethrough == other.strikethrough
            && self.color == other.color
            && self.vertical_align == other.vertical_align
    }
}

impl Eq for Font {}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Underline {
    /// No underline
    None,
    /// Single underline
    Single,
    /// Double underline
    Double,
    /// Single accounting underline (extends to cell width)
    SingleAccounting,
    /// Double accounting underline
    DoubleAccounting,
}

/// Font vertical alignment (superscript/subscript)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontVerticalAlign {
    Baseline,
    Superscript,
    Subscript,
}
