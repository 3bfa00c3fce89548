//! # tabula-formula
//!
//! Formula parser and evaluator for tabula.
//!
//! This crate provides:
//! - Formula parsing (text → [`Formula`])
//! - Evaluation of `SUM`, `COUNT`, `COUNTIF` and `MEDIAN` over a row of cells
//! - Circular-reference detection and a nesting limit while recursing into formula cells
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::{Row, Stylesheet};
//! use tabula_formula::evaluate;
//!
//! let mut styles = Stylesheet::new();
//! let mut row = Row::new(1).unwrap();
//! row.add_cell(&mut styles, 2, None).unwrap();
//! row.add_cell(&mut styles, 5, None).unwrap();
//!
//! assert_eq!(evaluate("=SUM(A1:B1)", &row).unwrap(), 7);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod grid;
pub mod parser;

pub use ast::{ColumnRange, Criterion, Formula};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, evaluate_cell, Evaluator, MAX_EVALUATION_DEPTH};
pub use grid::CellGrid;
pub use parser::parse_formula;
