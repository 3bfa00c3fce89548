//! Formula evaluator
//!
//! Evaluates SUM, COUNT, COUNTIF and MEDIAN over a [`CellGrid`], recursing into formula
//! cells. Results are integers.

use ahash::AHashSet;

use crate::ast::{ColumnRange, Criterion, Formula};
use crate::error::{FormulaError, FormulaResult};
use crate::grid::CellGrid;
use crate::parser::parse_formula;

/// Maximum number of formula cells evaluated inside one another
pub const MAX_EVALUATION_DEPTH: usize = 256;

/// Evaluate formula text against a grid
pub fn evaluate<G: CellGrid + ?Sized>(text: &str, grid: &G) -> FormulaResult<i64> {
    Evaluator::new(grid).evaluate(text)
}

/// Evaluate the formula stored at `column`
pub fn evaluate_cell<G: CellGrid + ?Sized>(grid: &G, column: u32) -> FormulaResult<i64> {
    Evaluator::new(grid).evaluate_cell(column)
}

/// Formula evaluator over one grid
///
/// Tracks the formula cells currently being evaluated so that a cycle is reported as
/// [`FormulaError::CircularReference`] instead of recursing forever, and chains nested
/// deeper than [`MAX_EVALUATION_DEPTH`] as [`FormulaError::TooDeep`]. The grid is only
/// read, so an aborted evaluation leaves it untouched.
pub struct Evaluator<'g, G: CellGrid + ?Sized> {
    grid: &'g G,
    in_progress: AHashSet<u32>,
}

impl<'g, G: CellGrid + ?Sized> Evaluator<'g, G> {
    /// Create an evaluator with nothing in progress
    pub fn new(grid: &'g G) -> Self {
        Self {
            grid,
            in_progress: AHashSet::new(),
        }
    }

    /// Parse and evaluate formula text
    pub fn evaluate(&mut self, text: &str) -> FormulaResult<i64> {
        let formula = parse_formula(text)?;
        self.evaluate_formula(&formula)
    }

    /// Evaluate a parsed formula
    pub fn evaluate_formula(&mut self, formula: &Formula) -> FormulaResult<i64> {
        log::trace!(
            "evaluating {} in row {}",
            formula,
            self.grid.row_index()
        );

        match formula {
            Formula::Sum(range) => self.sum(range),
            Formula::Count(range) => Ok(self.count(range)),
            Formula::CountIf(range, criterion) => self.count_if(range, criterion),
            Formula::Median(range) => self.median(range),
        }
    }

    /// Evaluate the formula held by the cell at `column`
    pub fn evaluate_cell(&mut self, column: u32) -> FormulaResult<i64> {
        let grid = self.grid;
        let text = grid
            .formula(column)
            .ok_or_else(|| FormulaError::invalid_content(grid.reference(column)))?;

        if !self.in_progress.insert(column) {
            let reference = grid.reference(column);
            log::warn!("circular reference through {}", reference);
            return Err(FormulaError::CircularReference(reference));
        }
        if self.in_progress.len() > MAX_EVALUATION_DEPTH {
            self.in_progress.remove(&column);
            log::warn!("formula nesting too deep at {}", grid.reference(column));
            return Err(FormulaError::TooDeep(MAX_EVALUATION_DEPTH));
        }

        log::trace!("entering formula cell {}", grid.reference(column));
        let result = self.evaluate(text);
        self.in_progress.remove(&column);
        result
    }

    fn sum(&mut self, range: &ColumnRange) -> FormulaResult<i64> {
        let mut total: i64 = 0;
        for column in range.columns() {
            let value = if self.grid.has_formula(column) {
                self.evaluate_cell(column)?
            } else {
                self.grid
                    .raw_value(column)
                    .and_then(parse_integer)
                    .ok_or_else(|| FormulaError::invalid_content(self.grid.reference(column)))?
            };
            total = total.checked_add(value).ok_or(FormulaError::Overflow)?;
        }
        Ok(total)
    }

    fn count(&self, range: &ColumnRange) -> i64 {
        range
            .columns()
            .filter(|&column| self.grid.has_value(column))
            .count() as i64
    }

    fn count_if(&mut self, range: &ColumnRange, criterion: &Criterion) -> FormulaResult<i64> {
        let target = self.resolve_criterion(criterion)?;
        let matches = range
            .columns()
            .filter(|&column| self.grid.raw_value(column).unwrap_or("") == target)
            .count();
        Ok(matches as i64)
    }

    /// Text a criterion compares against
    ///
    /// A reference resolves by column within the grid; its row is ignored.
    fn resolve_criterion(&mut self, criterion: &Criterion) -> FormulaResult<String> {
        match criterion {
            Criterion::Literal(text) => Ok(text.clone()),
            Criterion::Reference(address) if self.grid.has_formula(address.column) => {
                Ok(self.evaluate_cell(address.column)?.to_string())
            }
            Criterion::Reference(address) => Ok(self
                .grid
                .raw_value(address.column)
                .unwrap_or_default()
                .to_string()),
        }
    }

    fn median(&mut self, range: &ColumnRange) -> FormulaResult<i64> {
        let mut values = Vec::with_capacity(range.len());
        for column in range.columns() {
            if self.grid.has_formula(column) {
                values.push(self.evaluate_cell(column)?);
            } else if let Some(value) = self.grid.raw_value(column).and_then(parse_integer) {
                values.push(value);
            }
        }

        if values.is_empty() {
            return Err(FormulaError::EmptyRange(range.to_string()));
        }

        values.sort_unstable();
        let mid = values.len() / 2;
        if values.len() % 2 == 1 {
            Ok(values[mid])
        } else {
            let sum = i128::from(values[mid - 1]) + i128::from(values[mid]);
            // The mean of two i64 values always fits
            Ok((sum / 2) as i64)
        }
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
