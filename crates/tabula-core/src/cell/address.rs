//! Cell address codec
//!
//! Translates between 1-based `(column, row)` pairs and A1-style reference strings,
//! and extracts column spans from range text such as `"B1:D1"`.

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA, ...)
///
/// This is bijective base-26: digits run 1..=26 and there is no zero digit.
///
/// # Examples
/// ```
/// use tabula_core::cell::column_to_letters;
///
/// assert_eq!(column_to_letters(1).unwrap(), "A");
/// assert_eq!(column_to_letters(28).unwrap(), "AB");
/// assert!(column_to_letters(0).is_err());
/// ```
pub fn column_to_letters(column: u32) -> Result<String> {
    if column == 0 {
        return Err(Error::invalid_format("column index must be >= 1"));
    }

    let mut letters = Vec::with_capacity(3);
    let mut n = column;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();

    Ok(letters.into_iter().map(char::from).collect())
}

/// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27, ...)
///
/// Case-insensitive. Anything outside `A-Z` is rejected.
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::invalid_format("empty column letters"));
    }

    let mut column: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidFormat(format!(
                "invalid column letter '{}' in '{}'",
                c, letters
            )));
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        column = column
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidFormat(format!("column '{}' is too large", letters)))?;
    }

    Ok(column)
}

/// Split a reference into its column and row (`"E3"` -> `(5, 3)`)
///
/// A reference is a run of letters followed by a run of digits, nothing else.
pub fn parse_reference(reference: &str) -> Result<(u32, u32)> {
    let s = reference.trim();
    let split = s
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(s.len());
    let (letters, digits) = s.split_at(split);

    if letters.is_empty() {
        return Err(Error::InvalidFormat(format!(
            "no column letters in '{}'",
            reference
        )));
    }
    if digits.is_empty() {
        return Err(Error::InvalidFormat(format!(
            "no row number in '{}'",
            reference
        )));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidFormat(format!(
            "'{}' is not letters followed by digits",
            reference
        )));
    }

    let column = letters_to_column(letters)?;
    let row: u32 = digits
        .parse()
        .map_err(|_| Error::InvalidFormat(format!("invalid row number in '{}'", reference)))?;
    if row == 0 {
        return Err(Error::InvalidFormat(format!(
            "row number must be >= 1 in '{}'",
            reference
        )));
    }

    Ok((column, row))
}

/// Extract the column span of a same-row range (`"B1:D1"` -> `(2, 4)`)
///
/// Rows are discarded: ranges are read as a single row of cells, column by column.
/// A lone reference yields a one-column span, and reversed endpoints are normalized.
pub fn parse_range(range: &str) -> Result<(u32, u32)> {
    let s = range.trim();
    let (from, to) = match s.split_once(':') {
        Some((start, end)) => (parse_reference(start)?.0, parse_reference(end)?.0),
        None => {
            let (column, _) = parse_reference(s)?;
            (column, column)
        }
    };

    Ok((from.min(to), from.max(to)))
}

/// Check `s` against the reference grammar `^[A-Za-z]+[0-9]+$`
pub fn is_reference(s: &str) -> bool {
    let split = s.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(0);
    split > 0 && split < s.len() && s[split..].bytes().all(|b| b.is_ascii_digit())
}

/// A cell address (e.g., "A1", "XFD1048576")
///
/// Both indices are 1-based, matching how they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (1-based)
    pub row: u32,
    /// Column index (1-based, A=1, B=2, ..., XFD=16384)
    pub column: u32,
}

impl CellAddress {
    /// Create a new cell address, validating both indices
    pub fn new(column: u32, row: u32) -> Result<Self> {
        if column == 0 || row == 0 {
            return Err(Error::InvalidFormat(format!(
                "cell indices start at 1 (column {}, row {})",
                column, row
            )));
        }
        if column > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(column, MAX_COLS));
        }
        if row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        Ok(Self { row, column })
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use tabula_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("E3").unwrap();
    /// assert_eq!(addr.column, 5);
    /// assert_eq!(addr.row, 3);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (column, row) = parse_reference(s)?;
        Self::new(column, row)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = column_to_letters(self.column).unwrap_or_default();
        result.push_str(&self.row.to_string());
        result
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(column_to_letters(1).unwrap(), "A");
        assert_eq!(column_to_letters(2).unwrap(), "B");
        assert_eq!(column_to_letters(26).unwrap(), "Z");
        assert_eq!(column_to_letters(27).unwrap(), "AA");
        assert_eq!(column_to_letters(28).unwrap(), "AB");
        assert_eq!(column_to_letters(52).unwrap(), "AZ");
        assert_eq!(column_to_letters(702).unwrap(), "ZZ");
        assert_eq!(column_to_letters(703).unwrap(), "AAA");
        assert_eq!(column_to_letters(16384).unwrap(), "XFD"); // Max Excel column
    }

    #[test]
    fn test_column_zero_is_invalid() {
        assert!(matches!(column_to_letters(0), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(letters_to_column("A").unwrap(), 1);
        assert_eq!(letters_to_column("Z").unwrap(), 26);
        assert_eq!(letters_to_column("AA").unwrap(), 27);
        assert_eq!(letters_to_column("ZZ").unwrap(), 702);
        assert_eq!(letters_to_column("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(letters_to_column("a").unwrap(), 1);
        assert_eq!(letters_to_column("xfd").unwrap(), 16384);
    }

    #[test]
    fn test_letters_to_column_errors() {
        assert!(matches!(letters_to_column(""), Err(Error::InvalidFormat(_))));
        assert!(matches!(letters_to_column("A1"), Err(Error::InvalidFormat(_))));
        assert!(matches!(letters_to_column("Ä"), Err(Error::InvalidFormat(_))));
        assert!(letters_to_column("ZZZZZZZZZZ").is_err());
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(parse_reference("E3").unwrap(), (5, 3));
        assert_eq!(parse_reference("a1").unwrap(), (1, 1));
        assert_eq!(parse_reference("AB120").unwrap(), (28, 120));
    }

    #[test]
    fn test_parse_reference_errors() {
        assert!(parse_reference("").is_err());
        assert!(parse_reference("A").is_err());
        assert!(parse_reference("12").is_err());
        assert!(parse_reference("A0").is_err());
        assert!(parse_reference("A1B2").is_err());
        assert!(parse_reference("$A$1").is_err());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("B1:D1").unwrap(), (2, 4));
        // Rows are ignored
        assert_eq!(parse_range("B1:D7").unwrap(), (2, 4));
        assert_eq!(parse_range("D1:B1").unwrap(), (2, 4));
        assert_eq!(parse_range("C5").unwrap(), (3, 3));
        assert!(parse_range("B1:").is_err());
        assert!(parse_range(":D1").is_err());
    }

    #[test]
    fn test_is_reference() {
        assert!(is_reference("B1"));
        assert!(is_reference("xfd1048576"));
        assert!(!is_reference("car"));
        assert!(!is_reference("12"));
        assert!(!is_reference("B1C"));
        assert!(!is_reference(""));
    }

    #[test]
    fn test_cell_address() {
        let addr = CellAddress::parse("E3").unwrap();
        assert_eq!(addr, CellAddress { column: 5, row: 3 });
        assert_eq!(addr.to_string(), "E3");
        assert_eq!("XFD1048576".parse::<CellAddress>().unwrap().column, 16384);

        assert!(matches!(
            CellAddress::parse("XFE1"),
            Err(Error::ColumnOutOfBounds(16385, _))
        ));
        assert!(matches!(
            CellAddress::parse("A1048577"),
            Err(Error::RowOutOfBounds(1048577, _))
        ));
        assert!(matches!(
            CellAddress::new(0, 1),
            Err(Error::InvalidFormat(_))
        ));
    }

    proptest! {
        #[test]
        fn column_letters_roundtrip(n in 1u32..=16384) {
            let letters = column_to_letters(n).unwrap();
            prop_assert_eq!(letters_to_column(&letters).unwrap(), n);
        }

        #[test]
        fn reference_roundtrip(column in 1u32..=16384, row in 1u32..=1_048_576) {
            let addr = CellAddress::new(column, row).unwrap();
            prop_assert_eq!(parse_reference(&addr.to_string()).unwrap(), (column, row));
        }
    }
}
