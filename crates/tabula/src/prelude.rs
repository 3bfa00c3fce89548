//! Prelude module - common imports for tabula users
//!
//! ```rust
//! use tabula::prelude::*;
//! ```

pub use crate::{
    // Style types
    Alignment,
    Border,
    BorderLineStyle,
    // Calculation types
    CalculationStats,
    CellAddress,
    CellContent,
    CellFormat,
    // Cell types
    CellValue,
    Color,
    // Error types
    Error,
    Fill,
    Font,
    FormulaError,
    FormulaResult,
    HorizontalAlignment,
    NumberFormat,
    Result,
    Row,
    // Extension traits
    RowFormulaExt,
    Style,
    Stylesheet,
    VerticalAlignment,
    // Main types
    Workbook,
    WorkbookCalculationExt,
    Worksheet,
    WorksheetFormulaExt,
};
