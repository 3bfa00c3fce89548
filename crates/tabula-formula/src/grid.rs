//! Read-only cell access for the evaluator

use tabula_core::cell::column_to_letters;
use tabula_core::Row;

/// Cells of a single row, addressed by 1-based column
///
/// Formula ranges are read column by column within the row that holds the formula.
pub trait CellGrid {
    /// 1-based index of the row
    fn row_index(&self) -> u32;

    /// Raw literal text of the cell at `column`, if it holds a value
    fn raw_value(&self, column: u32) -> Option<&str>;

    /// Formula text of the cell at `column`, if it holds a formula
    fn formula(&self, column: u32) -> Option<&str>;

    fn has_value(&self, column: u32) -> bool {
        self.raw_value(column).is_some()
    }

    fn has_formula(&self, column: u32) -> bool {
        self.formula(column).is_some()
    }

    /// A1 reference of the cell at `column`, for error reporting
    fn reference(&self, column: u32) -> String {
        let mut reference = column_to_letters(column).unwrap_or_else(|_| "?".to_string());
        reference.push_str(&self.row_index().to_string());
        reference
    }
}

impl CellGrid for Row {
    fn row_index(&self) -> u32 {
        self.index()
    }

    fn raw_value(&self, column: u32) -> Option<&str> {
        self.cell(column).and_then(|cell| cell.raw_value())
    }

    fn formula(&self, column: u32) -> Option<&str> {
        self.cell(column).and_then(|cell| cell.formula())
    }
}
