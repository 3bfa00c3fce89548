//! Workbook type - the main document structure

use crate::error::{Error, Result};
use crate::style::{Stylesheet, StylesheetOptions};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

const INVALID_SHEET_NAME_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// A workbook (spreadsheet document)
///
/// A workbook owns its worksheets and the stylesheet they all index into.
#[derive(Debug, Clone)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Shared style tables
    stylesheet: Stylesheet,
}

impl Workbook {
    /// Create a new workbook with one worksheet named `Sheet1`
    pub fn new() -> Self {
        Self {
            worksheets: vec![Worksheet::new("Sheet1")],
            stylesheet: Stylesheet::new(),
        }
    }

    /// Create an empty workbook with no worksheets
    pub fn empty() -> Self {
        Self::with_stylesheet_options(StylesheetOptions::default())
    }

    /// Create an empty workbook whose stylesheet uses `options`
    pub fn with_stylesheet_options(options: StylesheetOptions) -> Self {
        Self {
            worksheets: Vec::new(),
            stylesheet: Stylesheet::with_options(options),
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// The shared stylesheet
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// The shared stylesheet, mutably
    pub fn stylesheet_mut(&mut self) -> &mut Stylesheet {
        &mut self.stylesheet
    }

    /// Borrow a worksheet and the stylesheet together for editing
    pub fn sheet_and_styles_mut(
        &mut self,
        index: usize,
    ) -> Option<(&mut Worksheet, &mut Stylesheet)> {
        let sheet = self.worksheets.get_mut(index)?;
        Some((sheet, &mut self.stylesheet))
    }

    /// Add a new worksheet with default name
    pub fn add_worksheet(&mut self) -> Result<usize> {
        let name = self.generate_sheet_name();
        self.add_worksheet_with_name(&name)
    }

    /// Add a new worksheet with specified name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.validate_sheet_name(name, None)?;

        let index = self.worksheets.len();
        self.worksheets.push(Worksheet::new(name));
        Ok(index)
    }

    /// Rename a worksheet
    pub fn rename_worksheet(&mut self, index: usize, new_name: &str) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.validate_sheet_name(new_name, Some(index))?;

        self.worksheets[index].set_name(new_name);
        Ok(())
    }

    /// Validate a sheet name, optionally excluding a sheet from the duplicate check
    fn validate_sheet_name(&self, name: &str, exclude_index: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = name.chars().find(|c| INVALID_SHEET_NAME_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        let name_lower = name.to_lowercase();
        let taken = self
            .worksheets
            .iter()
            .enumerate()
            .any(|(i, ws)| Some(i) != exclude_index && ws.name().to_lowercase() == name_lower);
        if taken {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }

    fn generate_sheet_name(&self) -> String {
        (self.worksheets.len() + 1..)
            .map(|n| format!("Sheet{}", n))
            .find(|name| self.validate_sheet_name(name, None).is_ok())
            .unwrap_or_default()
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
