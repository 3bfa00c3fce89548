//! Worksheet type

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::cell::{parse_reference, Cell, CellAddress, CellContent};
use crate::error::{Error, Result};
use crate::row::Row;
use crate::style::{Style, Stylesheet};
use crate::MAX_ROWS;

/// A worksheet (single sheet in a workbook)
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Sheet-level cell format index (0 = default)
    style_index: u32,
    /// Rows keyed by 1-based index
    rows: BTreeMap<u32, Row>,
    /// Highest row index created so far
    current_row: u32,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            style_index: 0,
            rows: BTreeMap::new(),
            current_row: 0,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Sheet-level cell format index
    pub fn style_index(&self) -> u32 {
        self.style_index
    }

    /// Highest row index created so far (0 for an empty sheet)
    pub fn current_row(&self) -> u32 {
        self.current_row
    }

    /// Index the next [`add_row`](Self::add_row) will target
    pub fn next_row(&self) -> u32 {
        self.current_row + 1
    }

    /// Merge a style into the sheet format
    ///
    /// Rows created afterwards carry the sheet format underneath their own.
    pub fn set_style(&mut self, styles: &mut Stylesheet, style: &Style) -> Result<u32> {
        self.style_index = styles.merge_style(self.style_index, style)?.index;
        Ok(self.style_index)
    }

    /// Create the row at `index`, or get it if it already exists
    ///
    /// A given style is merged on top of the row's current format.
    pub fn create_row(
        &mut self,
        styles: &mut Stylesheet,
        index: u32,
        style: Option<&Style>,
    ) -> Result<&mut Row> {
        if index == 0 {
            return Err(Error::invalid_format("row index must be >= 1"));
        }
        if index > MAX_ROWS {
            return Err(Error::RowOutOfBounds(index, MAX_ROWS));
        }

        let row = match self.rows.entry(index) {
            Entry::Occupied(entry) => {
                let row = entry.into_mut();
                if let Some(style) = style {
                    row.set_style(styles, style)?;
                }
                row
            }
            Entry::Vacant(entry) => {
                // Inserted only once fully built
                let mut row = Row::new(index)?;
                if self.style_index != 0 {
                    row.apply_base_format(styles, self.style_index)?;
                }
                if let Some(style) = style {
                    row.set_style(styles, style)?;
                }
                self.current_row = self.current_row.max(index);
                entry.insert(row)
            }
        };
        Ok(row)
    }

    /// Append a row after the highest existing one
    pub fn add_row(&mut self, styles: &mut Stylesheet, style: Option<&Style>) -> Result<&mut Row> {
        let index = self.next_row();
        self.create_row(styles, index, style)
    }

    /// Get a row by index
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Get a row by index mutably
    pub fn row_mut(&mut self, index: u32) -> Option<&mut Row> {
        self.rows.get_mut(&index)
    }

    /// Iterate over rows in index order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    /// Number of rows created
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a cell by A1 reference
    ///
    /// Returns `Ok(None)` for a well-formed reference that was never populated.
    pub fn cell(&self, reference: &str) -> Result<Option<&Cell>> {
        let address = CellAddress::parse(reference)?;
        Ok(self.cell_at(address.column, address.row))
    }

    /// Get a cell by 1-based column and row
    pub fn cell_at(&self, column: u32, row: u32) -> Option<&Cell> {
        self.rows.get(&row)?.cell(column)
    }

    /// Set a value at an A1 reference, creating the row and cell as needed
    pub fn set_cell_value<C: Into<CellContent>>(
        &mut self,
        styles: &mut Stylesheet,
        reference: &str,
        content: C,
    ) -> Result<&mut Cell> {
        let (column, row) = parse_reference(reference)?;
        CellAddress::new(column, row)?;
        self.create_row(styles, row, None)?
            .create_cell(styles, column, content, None)
    }

    /// Set a formula at an A1 reference, creating the row and cell as needed
    pub fn set_cell_formula(
        &mut self,
        styles: &mut Stylesheet,
        reference: &str,
        formula: &str,
    ) -> Result<&mut Cell> {
        self.set_cell_value(styles, reference, CellContent::formula(formula))
    }
}
