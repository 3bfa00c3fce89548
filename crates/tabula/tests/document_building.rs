//! Tests for building documents row by row

use pretty_assertions::assert_eq;
use tabula::prelude::*;
use tabula::{Cell, ValueType};

#[test]
fn test_fluent_rows_and_cells() {
    let mut workbook = Workbook::new();
    let (sheet, styles) = workbook.sheet_and_styles_mut(0).unwrap();

    let header = sheet.add_row(styles, None).unwrap();
    for title in ["Name", "Score", "Passed"] {
        header.add_cell(styles, title, None).unwrap();
    }
    let row = sheet.add_row(styles, None).unwrap();
    row.add_cell(styles, "Ada", None).unwrap();
    row.add_cell(styles, 97.0, None).unwrap();
    row.add_cell(styles, true, None).unwrap();

    let score = sheet.cell("B2").unwrap().unwrap();
    assert_eq!(score.raw_value(), Some("97"));
    assert_eq!(score.value().unwrap().kind, ValueType::Number);

    let passed = sheet.cell("C2").unwrap().unwrap();
    assert_eq!(passed.raw_value(), Some("1"));
    assert_eq!(passed.value().unwrap().kind, ValueType::Boolean);
    assert_eq!(sheet.current_row(), 2);
}

#[test]
fn test_cells_are_materialized_contiguously() {
    let mut workbook = Workbook::new();
    let (sheet, styles) = workbook.sheet_and_styles_mut(0).unwrap();

    sheet.set_cell_value(styles, "D4", "last").unwrap();
    let row = sheet.row(4).unwrap();
    let refs: Vec<&str> = row.cells().iter().map(Cell::reference).collect();
    assert_eq!(refs, vec!["A4", "B4", "C4", "D4"]);
    assert_eq!(row.cell(4).unwrap().column(), 4);
    assert_eq!(row.cell(4).unwrap().row(), 4);
}

#[test]
fn test_readdressing_replaces_content() {
    let mut workbook = Workbook::new();
    let (sheet, styles) = workbook.sheet_and_styles_mut(0).unwrap();

    sheet.set_cell_formula(styles, "A1", "=COUNT(B1:C1)").unwrap();
    let cell = sheet.set_cell_value(styles, "A1", 5).unwrap();
    assert!(cell.has_value());
    assert!(!cell.has_formula());

    let cell = sheet.set_cell_formula(styles, "A1", "COUNT(B1:C1)").unwrap();
    assert!(cell.has_formula());
    assert!(!cell.has_value());
}

#[test]
fn test_out_of_bounds_addresses() {
    let mut workbook = Workbook::new();
    let (sheet, styles) = workbook.sheet_and_styles_mut(0).unwrap();

    assert!(matches!(
        sheet.set_cell_value(styles, "XFE1", 1),
        Err(Error::ColumnOutOfBounds(16_385, _))
    ));
    assert!(matches!(
        sheet.set_cell_value(styles, "A0", 1),
        Err(Error::InvalidFormat(_))
    ));
    assert_eq!(sheet.row_count(), 0);
}

#[test]
fn test_multiple_sheets() {
    let mut workbook = Workbook::new();
    let data = workbook.add_worksheet_with_name("Data").unwrap();

    let (sheet, styles) = workbook.sheet_and_styles_mut(data).unwrap();
    sheet.set_cell_value(styles, "A1", "x").unwrap();

    assert!(workbook.worksheet(0).unwrap().cell("A1").unwrap().is_none());
    assert_eq!(
        workbook
            .worksheet_by_name("Data")
            .unwrap()
            .cell("A1")
            .unwrap()
            .and_then(Cell::raw_value),
        Some("x")
    );
}
