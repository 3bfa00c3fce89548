//! A single addressable cell

use std::cell::OnceCell;

use super::address::{parse_reference, CellAddress};
use super::CellValue;

/// What a cell holds
///
/// A value and a formula are mutually exclusive: setting one replaces the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellContent {
    /// Nothing
    #[default]
    Empty,
    /// A literal value
    Value(CellValue),
    /// Formula text without the leading `=`
    Formula(String),
}

impl CellContent {
    /// Build formula content, dropping a leading `=`
    pub fn formula<S: AsRef<str>>(text: S) -> Self {
        let text = text.as_ref().trim();
        CellContent::Formula(text.strip_prefix('=').unwrap_or(text).to_string())
    }
}

macro_rules! content_from_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellContent {
                fn from(value: $t) -> Self {
                    CellContent::Value(value.into())
                }
            }
        )*
    };
}

content_from_value!(CellValue, bool, i32, u32, i64, f64, &str, String);

/// Complete data for a single cell
#[derive(Debug, Clone)]
pub struct Cell {
    /// Canonical A1 reference
    reference: String,
    /// `(column, row)` derived from the reference on first use
    position: OnceCell<(u32, u32)>,
    /// Index into the stylesheet's cell formats (0 = default style)
    style_index: u32,
    content: CellContent,
}

impl Cell {
    /// Create an empty cell at a validated address
    pub fn new(address: CellAddress) -> Self {
        Self {
            reference: address.to_a1_string(),
            position: OnceCell::new(),
            style_index: 0,
            content: CellContent::Empty,
        }
    }

    /// The cell's A1 reference
    pub fn reference(&self) -> &str {
        &self.reference
    }

    fn position(&self) -> (u32, u32) {
        *self
            .position
            .get_or_init(|| parse_reference(&self.reference).unwrap_or((0, 0)))
    }

    /// 1-based column index
    pub fn column(&self) -> u32 {
        self.position().0
    }

    /// 1-based row index
    pub fn row(&self) -> u32 {
        self.position().1
    }

    /// Index of the cell format applied to this cell
    pub fn style_index(&self) -> u32 {
        self.style_index
    }

    /// Stamp a resolved cell format index onto this cell
    pub fn set_style_index(&mut self, style_index: u32) {
        self.style_index = style_index;
    }

    /// Get the cell content
    pub fn content(&self) -> &CellContent {
        &self.content
    }

    /// Get the literal value, if any
    pub fn value(&self) -> Option<&CellValue> {
        match &self.content {
            CellContent::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Get the raw value text, if any
    pub fn raw_value(&self) -> Option<&str> {
        self.value().map(CellValue::as_str)
    }

    /// Get the formula text (without `=`), if any
    pub fn formula(&self) -> Option<&str> {
        match &self.content {
            CellContent::Formula(f) => Some(f),
            _ => None,
        }
    }

    /// Check if the cell holds a literal value
    pub fn has_value(&self) -> bool {
        matches!(self.content, CellContent::Value(_))
    }

    /// Check if the cell holds a formula
    pub fn has_formula(&self) -> bool {
        matches!(self.content, CellContent::Formula(_))
    }

    /// Check if the cell holds nothing
    pub fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
    }

    /// Replace the content
    pub fn set_content(&mut self, content: CellContent) {
        self.content = content;
    }

    /// Set a literal value, clearing any formula
    pub fn set_value<V: Into<CellValue>>(&mut self, value: V) {
        self.content = CellContent::Value(value.into());
    }

    /// Set a formula, clearing any value
    pub fn set_formula<S: AsRef<str>>(&mut self, formula: S) {
        self.content = CellContent::formula(formula);
    }

    /// Remove the content, keeping the style
    pub fn clear(&mut self) {
        self.content = CellContent::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell(reference: &str) -> Cell {
        Cell::new(CellAddress::parse(reference).unwrap())
    }

    #[test]
    fn test_position_from_reference() {
        let c = cell("AB12");
        assert_eq!(c.reference(), "AB12");
        assert_eq!(c.column(), 28);
        assert_eq!(c.row(), 12);
    }

    #[test]
    fn test_value_and_formula_are_exclusive() {
        let mut c = cell("B1");
        assert!(c.is_empty());

        c.set_value(5);
        assert!(c.has_value());
        assert!(!c.has_formula());

        c.set_formula("=SUM(A1:A1)");
        assert!(c.has_formula());
        assert!(!c.has_value());
        assert_eq!(c.formula(), Some("SUM(A1:A1)"));
        assert_eq!(c.raw_value(), None);

        c.set_value("x");
        assert_eq!(c.formula(), None);
        assert_eq!(c.raw_value(), Some("x"));
    }

    #[test]
    fn test_clear_keeps_style() {
        let mut c = cell("C3");
        c.set_style_index(4);
        c.set_value(1);
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.style_index(), 4);
    }
}
