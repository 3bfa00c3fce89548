//! # tabula-core
//!
//! Core data structures for the tabula spreadsheet model.
//!
//! This crate provides the fundamental types used throughout tabula:
//! - [`CellAddress`] and the address codec - 1-based A1 references and column letters
//! - [`Stylesheet`] - the interning store for fonts, fills, borders, number formats and cell formats
//! - [`Cell`], [`Row`], [`Worksheet`], [`Workbook`] - the document structure
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::{Style, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let (sheet, styles) = workbook.sheet_and_styles_mut(0).unwrap();
//!
//! let row = sheet.add_row(styles, None).unwrap();
//! row.add_cell(styles, "Hello", Some(&Style::new().bold(true))).unwrap();
//! row.add_cell(styles, 42, None).unwrap();
//!
//! assert_eq!(sheet.cell("B1").unwrap().unwrap().raw_value(), Some("42"));
//! ```

pub mod cell;
pub mod error;
pub mod row;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, CellContent, CellValue, ValueType};
pub use error::{Error, Result};
pub use row::Row;
pub use workbook::Workbook;
pub use worksheet::Worksheet;

// Re-export all style types for convenience
pub use style::{
    Alignment, AttributeIds, AttributeKind, Border, BorderEdge, BorderLineStyle, CellFormat, Color,
    Fill, Font, HorizontalAlignment, NumberFormat, PatternType, Style, StyleSink, Stylesheet,
    StylesheetOptions, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
