//! Number format types and the number-format table

use ahash::AHashMap;

use super::table::AttributeKind;
use crate::error::{Error, Result};

/// First id handed out to a custom format code
///
/// Ids below this are left to current and future built-in formats.
pub const FIRST_CUSTOM_NUMBER_FORMAT_ID: u32 = 170;

/// Built-in format codes at their fixed ids
const BUILTIN_FORMATS: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (5, "\"$\"#,##0_);(\"$\"#,##0)"),
    (6, "\"$\"#,##0_);[Red](\"$\"#,##0)"),
    (7, "\"$\"#,##0.00_);(\"$\"#,##0.00)"),
    (8, "\"$\"#,##0.00_);[Red](\"$\"#,##0.00)"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

/// Number format for cell display
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberFormat {
    /// Built-in format by ID
    BuiltIn(u32),

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// 0 - General
    pub const ID_GENERAL: u32 = 0;
    /// 1 - 0
    pub const ID_NUMBER_INT: u32 = 1;
    /// 2 - 0.00
    pub const ID_NUMBER_DEC2: u32 = 2;
    /// 3 - #,##0
    pub const ID_NUMBER_SEP: u32 = 3;
    /// 9 - 0%
    pub const ID_PERCENT_INT: u32 = 9;
    /// 10 - 0.00%
    pub const ID_PERCENT_DEC2: u32 = 10;
    /// 14 - mm-dd-yy
    pub const ID_DATE_SHORT: u32 = 14;
    /// 22 - m/d/yy h:mm
    pub const ID_DATETIME: u32 = 22;
    /// 49 - @
    pub const ID_TEXT: u32 = 49;

    /// Create a number format from a format string
    pub fn custom<S: Into<String>>(format: S) -> Self {
        NumberFormat::Custom(format.into())
    }

    /// General format
    pub fn general() -> Self {
        NumberFormat::BuiltIn(Self::ID_GENERAL)
    }

    /// Integer format (0)
    pub fn integer() -> Self {
        NumberFormat::BuiltIn(Self::ID_NUMBER_INT)
    }

    /// Decimal format (0.00)
    pub fn decimal() -> Self {
        NumberFormat::BuiltIn(Self::ID_NUMBER_DEC2)
    }

    /// Percentage (0%)
    pub fn percent() -> Self {
        NumberFormat::BuiltIn(Self::ID_PERCENT_INT)
    }

    /// Short date (mm-dd-yy)
    pub fn date_short() -> Self {
        NumberFormat::BuiltIn(Self::ID_DATE_SHORT)
    }

    /// Text format (@)
    pub fn text() -> Self {
        NumberFormat::BuiltIn(Self::ID_TEXT)
    }

    /// Get the format code of a built-in id
    pub fn builtin_code(id: u32) -> Option<&'static str> {
        BUILTIN_FORMATS
            .iter()
            .find(|(builtin_id, _)| *builtin_id == id)
            .map(|(_, code)| *code)
    }

    /// Get the built-in id of a format code
    pub fn builtin_id(code: &str) -> Option<u32> {
        BUILTIN_FORMATS
            .iter()
            .find(|(_, builtin_code)| *builtin_code == code)
            .map(|(id, _)| *id)
    }

    /// Check that a built-in id is known; custom codes are always valid
    pub fn validate(&self) -> Result<()> {
        match self {
            NumberFormat::BuiltIn(id) if Self::builtin_code(*id).is_none() => {
                Err(Error::InvalidAttributeId {
                    kind: AttributeKind::NumberFormat,
                    id: *id,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::general()
    }
}

/// Number-format table: fixed built-ins plus custom codes keyed by their text
///
/// The custom-id counter belongs to the table, so every stylesheet starts
/// allocating from the same first id.
#[derive(Debug, Clone)]
pub struct NumberFormatTable {
    /// Custom format code -> id
    custom: AHashMap<String, u32>,
    /// Custom formats in allocation order
    custom_order: Vec<(u32, String)>,
    next_custom_id: u32,
}

impl NumberFormatTable {
    /// Create a table whose first custom id is [`FIRST_CUSTOM_NUMBER_FORMAT_ID`]
    pub fn new() -> Self {
        Self::with_first_custom_id(FIRST_CUSTOM_NUMBER_FORMAT_ID)
    }

    /// Create a table with an explicit first custom id
    pub fn with_first_custom_id(first_custom_id: u32) -> Self {
        Self {
            custom: AHashMap::new(),
            custom_order: Vec::new(),
            next_custom_id: first_custom_id,
        }
    }

    /// Resolve a number format to its id, allocating one for a new custom code
    ///
    /// A custom code that spells a built-in resolves to the built-in id.
    pub fn intern(&mut self, format: &NumberFormat) -> Result<u32> {
        format.validate()?;

        let code = match format {
            NumberFormat::BuiltIn(id) => return Ok(*id),
            NumberFormat::Custom(code) => code,
        };

        if let Some(id) = NumberFormat::builtin_id(code) {
            return Ok(id);
        }
        if let Some(&id) = self.custom.get(code) {
            return Ok(id);
        }

        let id = self.next_custom_id;
        self.next_custom_id += 1;
        log::debug!("allocating number format {} for {:?}", id, code);
        self.custom.insert(code.clone(), id);
        self.custom_order.push((id, code.clone()));
        Ok(id)
    }

    /// Get the format code for an id
    pub fn code(&self, id: u32) -> Option<&str> {
        NumberFormat::builtin_code(id).or_else(|| {
            self.custom_order
                .iter()
                .find(|(custom_id, _)| *custom_id == id)
                .map(|(_, code)| code.as_str())
        })
    }

    /// Get the number format for an id
    pub fn get(&self, id: u32) -> Option<NumberFormat> {
        if NumberFormat::builtin_code(id).is_some() {
            return Some(NumberFormat::BuiltIn(id));
        }
        self.code(id).map(NumberFormat::custom)
    }

    /// Check whether an id resolves to a format
    pub fn contains(&self, id: u32) -> bool {
        self.code(id).is_some()
    }

    /// Custom formats in id order
    pub fn custom_formats(&self) -> impl Iterator<Item = (u32, &str)> {
        self.custom_order
            .iter()
            .map(|(id, code)| (*id, code.as_str()))
    }
}

impl Default for NumberFormatTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(NumberFormat::builtin_code(0), Some("General"));
        assert_eq!(NumberFormat::builtin_code(49), Some("@"));
        assert_eq!(NumberFormat::builtin_code(23), None);
        assert_eq!(NumberFormat::builtin_id("0.00%"), Some(10));
    }

    #[test]
    fn test_builtin_reused() {
        let mut table = NumberFormatTable::new();
        assert_eq!(table.intern(&NumberFormat::percent()).unwrap(), 9);
        assert_eq!(table.intern(&NumberFormat::custom("0%")).unwrap(), 9);
        assert_eq!(table.custom_formats().count(), 0);
    }

    #[test]
    fn test_custom_ids_start_at_170() {
        let mut table = NumberFormatTable::new();
        let a = table.intern(&NumberFormat::custom("0.000")).unwrap();
        let b = table.intern(&NumberFormat::custom("yyyy-mm-dd")).unwrap();
        let again = table.intern(&NumberFormat::custom("0.000")).unwrap();

        assert_eq!(a, 170);
        assert_eq!(b, 171);
        assert_eq!(again, a);
        assert_eq!(table.code(171), Some("yyyy-mm-dd"));
        assert_eq!(
            table.custom_formats().collect::<Vec<_>>(),
            vec![(170, "0.000"), (171, "yyyy-mm-dd")]
        );
    }

    #[test]
    fn test_counters_are_per_table() {
        let mut first = NumberFormatTable::new();
        let mut second = NumberFormatTable::new();
        first.intern(&NumberFormat::custom("0.0")).unwrap();
        first.intern(&NumberFormat::custom("0.000")).unwrap();

        assert_eq!(second.intern(&NumberFormat::custom("0.0000")).unwrap(), 170);
    }

    #[test]
    fn test_unknown_builtin_rejected() {
        let mut table = NumberFormatTable::new();
        let err = table.intern(&NumberFormat::BuiltIn(30)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAttributeId {
                kind: AttributeKind::NumberFormat,
                id: 30
            }
        );
        assert!(!table.contains(30));
    }
}
