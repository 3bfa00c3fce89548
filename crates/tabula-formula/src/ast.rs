//! Formula AST types

use std::fmt;
use std::ops::RangeInclusive;

use tabula_core::cell::{column_to_letters, letters_to_column, parse_range};
use tabula_core::{CellAddress, MAX_COLS};

use crate::error::{FormulaError, FormulaResult};

/// A parsed formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// `SUM(range)`
    Sum(ColumnRange),
    /// `COUNT(range)`
    Count(ColumnRange),
    /// `COUNTIF(range, criterion)`
    CountIf(ColumnRange, Criterion),
    /// `MEDIAN(range)`
    Median(ColumnRange),
}

impl Formula {
    /// Function name as written in formula text
    pub fn function_name(&self) -> &'static str {
        match self {
            Formula::Sum(_) => "SUM",
            Formula::Count(_) => "COUNT",
            Formula::CountIf(_, _) => "COUNTIF",
            Formula::Median(_) => "MEDIAN",
        }
    }

    /// The range the function aggregates over
    pub fn range(&self) -> &ColumnRange {
        match self {
            Formula::Sum(range)
            | Formula::Count(range)
            | Formula::CountIf(range, _)
            | Formula::Median(range) => range,
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::CountIf(range, criterion) => {
                write!(f, "{}({},{})", self.function_name(), range, criterion)
            }
            _ => write!(f, "{}({})", self.function_name(), self.range()),
        }
    }
}

/// An inclusive span of columns within a single row
///
/// Rows written in the range text are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnRange {
    /// First column (1-based)
    pub from: u32,
    /// Last column (1-based, >= `from`)
    pub to: u32,
}

impl ColumnRange {
    /// Create a range, normalizing reversed endpoints
    pub fn new(from: u32, to: u32) -> Self {
        Self {
            from: from.min(to),
            to: from.max(to),
        }
    }

    /// Parse `"B1:D1"`, `"C5"` or the column-only form `"B:D"`
    pub fn parse(text: &str) -> FormulaResult<Self> {
        let text = text.trim();
        let invalid = |e: tabula_core::Error| {
            FormulaError::InvalidFormat(format!("bad range '{}': {}", text, e))
        };

        let (from, to) = match text.split_once(':') {
            Some((start, end)) if is_letters(start) && is_letters(end) => (
                letters_to_column(start).map_err(invalid)?,
                letters_to_column(end).map_err(invalid)?,
            ),
            _ => parse_range(text).map_err(invalid)?,
        };

        if to.max(from) > MAX_COLS {
            return Err(FormulaError::InvalidFormat(format!(
                "range '{}' extends past column {}",
                text, MAX_COLS
            )));
        }

        Ok(Self::new(from, to))
    }

    /// Columns covered, in ascending order
    pub fn columns(&self) -> RangeInclusive<u32> {
        self.from..=self.to
    }

    /// Number of columns covered
    pub fn len(&self) -> usize {
        (self.to - self.from) as usize + 1
    }

    /// Always false; a range covers at least one column
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn is_letters(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

impl fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = column_to_letters(self.from).map_err(|_| fmt::Error)?;
        let to = column_to_letters(self.to).map_err(|_| fmt::Error)?;
        write!(f, "{}:{}", from, to)
    }
}

/// COUNTIF match criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Text compared against raw cell values
    Literal(String),
    /// A cell whose value or formula result is the text to compare against
    ///
    /// Only the column is used: the row is discarded and the cell is looked up in the
    /// formula's own row, as with [`ColumnRange`].
    Reference(CellAddress),
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Literal(text) => write!(f, "\"{}\"", text.replace('"', "\"\"")),
            Criterion::Reference(address) => write!(f, "{}", address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_range_parse() {
        assert_eq!(ColumnRange::parse("B1:D1").unwrap(), ColumnRange::new(2, 4));
        assert_eq!(ColumnRange::parse(" D3:B3 ").unwrap(), ColumnRange { from: 2, to: 4 });
        assert_eq!(ColumnRange::parse("C7").unwrap().len(), 1);
        assert_eq!(ColumnRange::parse("b:d").unwrap(), ColumnRange::new(2, 4));
    }

    #[test]
    fn test_column_range_errors() {
        assert!(matches!(
            ColumnRange::parse("1:2"),
            Err(FormulaError::InvalidFormat(_))
        ));
        assert!(ColumnRange::parse("B1:").is_err());
        assert!(ColumnRange::parse("A1:XFE1").is_err());
    }

    #[test]
    fn test_display() {
        let formula = Formula::CountIf(
            ColumnRange::new(1, 3),
            Criterion::Literal("say \"hi\"".into()),
        );
        assert_eq!(formula.to_string(), "COUNTIF(A:C,\"say \"\"hi\"\"\")");

        let formula = Formula::Median(ColumnRange::new(27, 28));
        assert_eq!(formula.to_string(), "MEDIAN(AA:AB)");
        assert_eq!(formula.range().columns().collect::<Vec<_>>(), vec![27, 28]);
    }
}
