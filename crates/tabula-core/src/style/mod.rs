//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`Style`] - Style description passed in by callers
//! - [`Font`], [`Fill`], [`Border`] - Interned attribute records
//! - [`NumberFormat`] - Built-in or custom display format
//! - [`Alignment`] - Text alignment
//! - [`Stylesheet`] - Deduplicating store that turns a [`Style`] into a [`CellFormat`]

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;
mod stylesheet;
mod table;

pub use alignment::{
    Alignment, HorizontalAlignment, VerticalAlignment, MAX_INDENT, VERTICAL_TEXT_ROTATION,
};
pub use border::{Border, BorderEdge, BorderLineStyle};
pub use color::Color;
pub use fill::{Fill, PatternType};
pub use font::{Font, FontVerticalAlign, Underline};
pub use number_format::{NumberFormat, NumberFormatTable, FIRST_CUSTOM_NUMBER_FORMAT_ID};
pub use stylesheet::{AttributeIds, CellFormat, StyleSink, Stylesheet, StylesheetOptions};
pub use table::{Attribute, AttributeKind, AttributeTable};

/// Style description
///
/// Every part is optional; an absent part means "no customization" and resolves to id 0
/// when the style is stored with [`Stylesheet::create_style`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Font settings
    pub font: Option<Font>,
    /// Fill/background settings
    pub fill: Option<Fill>,
    /// Border settings
    pub border: Option<Border>,
    /// Number format
    pub number_format: Option<NumberFormat>,
    /// Text alignment
    pub alignment: Option<Alignment>,
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font_mut().bold = Some(bold);
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font_mut().italic = Some(italic);
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_mut().size = Some(size + 0.0);
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font_mut().name = Some(name.into());
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_mut().color = Some(color);
        self
    }

    /// Set a solid background color
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(Fill::solid(color));
        self
    }

    /// Set the border
    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Set a custom number format code
    pub fn number_format<S: Into<String>>(mut self, code: S) -> Self {
        self.number_format = Some(NumberFormat::custom(code));
        self
    }

    /// Set the number format
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = Some(format);
        self
    }

    /// Set the whole font
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the whole fill
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set the whole alignment
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment_mut().horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment_mut().vertical = align;
        self
    }

    /// Set text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment_mut().wrap_text = wrap;
        self
    }

    /// True when nothing is customized
    pub fn is_empty(&self) -> bool {
        self.font.is_none()
            && self.fill.is_none()
            && self.border.is_none()
            && self.number_format.is_none()
            && self.alignment.is_none()
    }

    fn font_mut(&mut self) -> &mut Font {
        self.font.get_or_insert_with(Font::default)
    }

    fn alignment_mut(&mut self) -> &mut Alignment {
        self.alignment.get_or_insert_with(Alignment::default)
    }
}
