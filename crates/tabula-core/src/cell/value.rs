//! Cell value types

use std::fmt;

/// The kind of literal a cell holds
///
/// Values are kept in their raw text form; the kind records how that text should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    /// Numeric value
    Number,
    /// Plain text
    #[default]
    Text,
    /// Boolean, stored as `"1"`/`"0"`
    Boolean,
    /// Date or time, stored as a serial number
    Date,
}

/// A literal cell value in raw text form plus its type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellValue {
    /// Raw text, as written to the document
    pub raw: String,
    /// How the raw text should be interpreted
    pub kind: ValueType,
}

impl CellValue {
    /// Create a value with an explicit type
    pub fn new<S: Into<String>>(raw: S, kind: ValueType) -> Self {
        Self {
            raw: raw.into(),
            kind,
        }
    }

    /// Create a text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        Self::new(s, ValueType::Text)
    }

    /// Create a numeric value
    pub fn number(n: f64) -> Self {
        Self::new(format_number(n), ValueType::Number)
    }

    /// Create a date value from a serial number
    pub fn date(serial: f64) -> Self {
        Self::new(format_number(serial), ValueType::Date)
    }

    /// Get the raw text
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Read the raw text as an integer, if it is one
    pub fn as_integer(&self) -> Option<i64> {
        self.raw.trim().parse().ok()
    }

}

/// Integral values are written without a decimal point (`3.0` -> `"3"`)
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ValueType::Boolean => write!(f, "{}", if self.raw == "1" { "TRUE" } else { "FALSE" }),
            _ => write!(f, "{}", self.raw),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::new(if b { "1" } else { "0" }, ValueType::Boolean)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::new(n.to_string(), ValueType::Number)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::new(n.to_string(), ValueType::Number)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::new(n.to_string(), ValueType::Number)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::text(s)
    }
}
