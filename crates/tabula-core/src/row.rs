//! Row type

use crate::cell::{Cell, CellAddress, CellContent};
use crate::error::{Error, Result};
use crate::style::{Style, Stylesheet};
use crate::MAX_ROWS;

/// A row of cells
///
/// Cells are kept contiguous from column 1: addressing column `n` materializes empty
/// cells for every missing column below `n`. Cells are never removed.
#[derive(Debug, Clone)]
pub struct Row {
    /// Row index (1-based)
    index: u32,
    /// Row-level cell format index (0 = default)
    style_index: u32,
    /// Cells ordered by column; `cells[i]` is column `i + 1`
    cells: Vec<Cell>,
}

impl Row {
    /// Create an empty row
    pub fn new(index: u32) -> Result<Self> {
        if index == 0 {
            return Err(Error::invalid_format("row index must be >= 1"));
        }
        if index > MAX_ROWS {
            return Err(Error::RowOutOfBounds(index, MAX_ROWS));
        }

        Ok(Self {
            index,
            style_index: 0,
            cells: Vec::new(),
        })
    }

    /// Row index (1-based)
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Row-level cell format index
    pub fn style_index(&self) -> u32 {
        self.style_index
    }

    /// All cells, ordered by column
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cell at a 1-based column
    pub fn cell(&self, column: u32) -> Option<&Cell> {
        let slot = column.checked_sub(1)?;
        self.cells.get(slot as usize)
    }

    /// Get the cell at a 1-based column mutably
    pub fn cell_mut(&mut self, column: u32) -> Option<&mut Cell> {
        let slot = column.checked_sub(1)?;
        self.cells.get_mut(slot as usize)
    }

    /// Highest column populated so far (0 for an empty row)
    pub fn current_column(&self) -> u32 {
        self.cells.len() as u32
    }

    /// Column the next [`add_cell`](Self::add_cell) will target
    pub fn next_column(&self) -> u32 {
        self.current_column() + 1
    }

    /// Create or update the cell at `column`
    ///
    /// A given style is merged on top of the row format. Without one, a new cell takes the
    /// row's format and an existing cell keeps its own.
    ///
    /// # Examples
    /// ```
    /// use tabula_core::{Row, Style, Stylesheet};
    ///
    /// let mut styles = Stylesheet::new();
    /// let mut row = Row::new(1).unwrap();
    /// row.create_cell(&mut styles, 3, 7, Some(&Style::new().bold(true))).unwrap();
    ///
    /// assert_eq!(row.current_column(), 3);
    /// assert!(row.cell(2).unwrap().is_empty());
    /// assert_eq!(row.cell(3).unwrap().reference(), "C1");
    /// ```
    pub fn create_cell<C: Into<CellContent>>(
        &mut self,
        styles: &mut Stylesheet,
        column: u32,
        content: C,
        style: Option<&Style>,
    ) -> Result<&mut Cell> {
        let address = CellAddress::new(column, self.index)?;
        let style_index = match style {
            Some(style) => Some(styles.merge_style(self.style_index, style)?.index),
            None => None,
        };

        while self.current_column() < address.column {
            let mut cell = Cell::new(CellAddress {
                column: self.next_column(),
                row: self.index,
            });
            cell.set_style_index(self.style_index);
            self.cells.push(cell);
        }

        let cell = &mut self.cells[(address.column - 1) as usize];
        cell.set_content(content.into());
        if let Some(style_index) = style_index {
            cell.set_style_index(style_index);
        }
        Ok(cell)
    }

    /// Append a cell after the last populated column
    pub fn add_cell<C: Into<CellContent>>(
        &mut self,
        styles: &mut Stylesheet,
        content: C,
        style: Option<&Style>,
    ) -> Result<&mut Cell> {
        let column = self.next_column();
        self.create_cell(styles, column, content, style)
    }

    /// Create or update a formula cell at `column`
    pub fn create_formula(
        &mut self,
        styles: &mut Stylesheet,
        column: u32,
        formula: &str,
        style: Option<&Style>,
    ) -> Result<&mut Cell> {
        self.create_cell(styles, column, CellContent::formula(formula), style)
    }

    /// Append a formula cell after the last populated column
    pub fn add_formula(
        &mut self,
        styles: &mut Stylesheet,
        formula: &str,
        style: Option<&Style>,
    ) -> Result<&mut Cell> {
        let column = self.next_column();
        self.create_formula(styles, column, formula, style)
    }

    /// Merge a style into the row format
    ///
    /// Existing cells keep their formats; cells created later inherit the new one.
    pub fn set_style(&mut self, styles: &mut Stylesheet, style: &Style) -> Result<u32> {
        self.style_index = styles.merge_style(self.style_index, style)?.index;
        Ok(self.style_index)
    }

    /// Place the format at `base_index` underneath the row's own format
    pub fn apply_base_format(&mut self, styles: &mut Stylesheet, base_index: u32) -> Result<u32> {
        let base = styles.cell_format(base_index)?.clone();
        let own = styles.cell_format(self.style_index)?.clone();
        self.style_index = styles.create_merged_style(&base, Some(&own))?.index;
        Ok(self.style_index)
    }
}
