//! # tabula
//!
//! A Rust library for building styled spreadsheet documents.
//!
//! ## Features
//!
//! - Workbooks, worksheets, rows and cells addressed with A1 references
//! - A deduplicating stylesheet: identical fonts, fills, borders, number formats and
//!   cell formats share one record and one index
//! - Style inheritance from sheet to row to cell
//! - `SUM`, `COUNT`, `COUNTIF` and `MEDIAN` formulas with cycle detection
//!
//! ## Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! // Create a new workbook
//! let mut workbook = Workbook::new();
//! let (sheet, styles) = workbook.sheet_and_styles_mut(0).unwrap();
//!
//! // Header row in bold
//! let header = sheet.add_row(styles, Some(&Style::new().bold(true))).unwrap();
//! header.add_cell(styles, "Q1", None).unwrap();
//! header.add_cell(styles, "Q2", None).unwrap();
//! header.add_cell(styles, "Total", None).unwrap();
//!
//! // Values with a formula
//! let row = sheet.add_row(styles, None).unwrap();
//! row.add_cell(styles, 120, None).unwrap();
//! row.add_cell(styles, 80, None).unwrap();
//! row.add_formula(styles, "=SUM(A2:B2)", Some(&Style::new().number_format("#,##0"))).unwrap();
//!
//! assert_eq!(sheet.formula_value("C2").unwrap(), 200);
//! ```

pub mod calculation;
pub mod prelude;

// Re-export calculation types
pub use calculation::{
    CalculationStats, RowFormulaExt, WorkbookCalculationExt, WorksheetFormulaExt,
};

// Re-export core types
pub use tabula_core::{
    // Style types
    Alignment,
    AttributeIds,
    AttributeKind,
    Border,
    BorderEdge,
    BorderLineStyle,
    // Cell types
    Cell,
    CellAddress,
    CellContent,
    CellFormat,
    CellValue,
    Color,
    // Error types
    Error,
    Fill,
    Font,
    HorizontalAlignment,
    NumberFormat,
    PatternType,
    Result,
    // Main types
    Row,
    Style,
    StyleSink,
    Stylesheet,
    StylesheetOptions,
    ValueType,
    VerticalAlignment,
    Workbook,
    Worksheet,
};

// Re-export formula types
pub use tabula_formula::{
    evaluate, evaluate_cell, parse_formula, CellGrid, ColumnRange, Criterion, Evaluator,
    Formula, FormulaError, FormulaResult,
};
