//! Formula values for rows, worksheets and workbooks
//!
//! # Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let (sheet, styles) = workbook.sheet_and_styles_mut(0).unwrap();
//! sheet.set_cell_value(styles, "A3", 10).unwrap();
//! sheet.set_cell_value(styles, "B3", 20).unwrap();
//! sheet.set_cell_formula(styles, "C3", "=SUM(A3:B3)").unwrap();
//!
//! assert_eq!(sheet.formula_value("C3").unwrap(), 30);
//! ```

use tabula_core::{CellAddress, Row, Workbook, Worksheet};
use tabula_formula::{CellGrid, Evaluator, FormulaError, FormulaResult};

/// Statistics from a calculation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationStats {
    /// Total number of formula cells
    pub formula_count: usize,
    /// Number of cells calculated successfully
    pub cells_calculated: usize,
    /// Number of circular references detected
    pub circular_references: usize,
    /// Number of other errors encountered during calculation
    pub errors: usize,
}

impl CalculationStats {
    fn record(&mut self, result: &FormulaResult<i64>) {
        self.formula_count += 1;
        match result {
            Ok(_) => self.cells_calculated += 1,
            Err(FormulaError::CircularReference(_)) => self.circular_references += 1,
            Err(_) => self.errors += 1,
        }
    }

    fn absorb(&mut self, other: CalculationStats) {
        self.formula_count += other.formula_count;
        self.cells_calculated += other.cells_calculated;
        self.circular_references += other.circular_references;
        self.errors += other.errors;
    }
}

/// Formula values for the cells of a row
pub trait RowFormulaExt {
    /// Value of the cell at `column`
    ///
    /// A formula cell is evaluated; a value cell must hold an integer.
    fn formula_value(&self, column: u32) -> FormulaResult<i64>;

    /// Evaluate every formula cell in the row
    fn calculate(&self) -> CalculationStats;
}

impl RowFormulaExt for Row {
    fn formula_value(&self, column: u32) -> FormulaResult<i64> {
        if self.has_formula(column) {
            return Evaluator::new(self).evaluate_cell(column);
        }

        self.raw_value(column)
            .and_then(|raw| raw.trim().parse().ok())
            .ok_or_else(|| FormulaError::InvalidCellContent {
                reference: CellGrid::reference(self, column),
            })
    }

    fn calculate(&self) -> CalculationStats {
        let mut stats = CalculationStats::default();
        for cell in self.cells().iter().filter(|cell| cell.has_formula()) {
            let result = Evaluator::new(self).evaluate_cell(cell.column());
            if let Err(e) = &result {
                log::debug!("formula in {} failed: {}", cell.reference(), e);
            }
            stats.record(&result);
        }
        stats
    }
}

/// Formula values addressed by A1 reference
pub trait WorksheetFormulaExt {
    /// Value of the cell at `reference` (e.g. `"E3"`)
    fn formula_value(&self, reference: &str) -> FormulaResult<i64>;

    /// Evaluate every formula cell in the sheet
    fn calculate(&self) -> CalculationStats;
}

impl WorksheetFormulaExt for Worksheet {
    fn formula_value(&self, reference: &str) -> FormulaResult<i64> {
        let address = CellAddress::parse(reference)?;
        match self.row(address.row) {
            Some(row) => row.formula_value(address.column),
            None => Err(FormulaError::InvalidCellContent {
                reference: address.to_string(),
            }),
        }
    }

    fn calculate(&self) -> CalculationStats {
        let mut stats = CalculationStats::default();
        for row in self.rows() {
            stats.absorb(RowFormulaExt::calculate(row));
        }
        stats
    }
}

/// Extension trait for Workbook to add calculation methods
pub trait WorkbookCalculationExt {
    /// Evaluate every formula cell in every sheet
    fn calculate(&self) -> CalculationStats;
}

impl WorkbookCalculationExt for Workbook {
    fn calculate(&self) -> CalculationStats {
        let mut stats = CalculationStats::default();
        for sheet in self.worksheets() {
            let sheet_stats = WorksheetFormulaExt::calculate(sheet);
            log::debug!(
                "calculated {} of {} formulas in '{}'",
                sheet_stats.cells_calculated,
                sheet_stats.formula_count,
                sheet.name()
            );
            stats.absorb(sheet_stats);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabula_core::Stylesheet;

    #[test]
    fn test_row_formula_value() {
        let mut styles = Stylesheet::new();
        let mut row = Row::new(2).unwrap();
        row.add_cell(&mut styles, 4, None).unwrap();
        row.add_cell(&mut styles, "text", None).unwrap();
        row.add_formula(&mut styles, "SUM(A2)", None).unwrap();

        assert_eq!(row.formula_value(1), Ok(4));
        assert_eq!(row.formula_value(3), Ok(4));
        assert_eq!(
            row.formula_value(2),
            Err(FormulaError::InvalidCellContent {
                reference: "B2".into()
            })
        );
        assert!(row.formula_value(9).is_err());
    }

    #[test]
    fn test_calculate_counts_outcomes() {
        let mut styles = Stylesheet::new();
        let mut row = Row::new(1).unwrap();
        row.add_cell(&mut styles, 1, None).unwrap();
        row.add_formula(&mut styles, "SUM(A1)", None).unwrap();
        row.add_formula(&mut styles, "SUM(C1)", None).unwrap();
        row.add_formula(&mut styles, "AVERAGE(A1)", None).unwrap();

        assert_eq!(
            RowFormulaExt::calculate(&row),
            CalculationStats {
                formula_count: 3,
                cells_calculated: 1,
                circular_references: 1,
                errors: 1,
            }
        );
    }
}
