//! Cell-related types and utilities
//!
//! This module contains:
//! - the address codec ([`column_to_letters`], [`parse_reference`], [`parse_range`], [`CellAddress`])
//! - [`CellValue`] - a literal value in raw text form
//! - [`Cell`] - a cell with its reference, style index and content

mod address;
mod storage;
mod value;

pub use address::{
    column_to_letters, is_reference, letters_to_column, parse_range, parse_reference, CellAddress,
};
pub use storage::{Cell, CellContent};
pub use value::{CellValue, ValueType};
