//! Tests for style interning and inheritance

use pretty_assertions::assert_eq;
use tabula::prelude::*;
use tabula::{AttributeKind, StylesheetOptions};

#[test]
fn test_identical_styles_share_an_index() {
    let mut workbook = Workbook::new();
    let (sheet, styles) = workbook.sheet_and_styles_mut(0).unwrap();
    let style = Style::new().bold(true).font_color(Color::RED);

    let row = sheet.add_row(styles, None).unwrap();
    let a = row.add_cell(styles, "a", Some(&style)).unwrap().style_index();
    let b = row.add_cell(styles, "b", Some(&style.clone())).unwrap().style_index();
    let c = row
        .add_cell(styles, "c", Some(&Style::new().italic(true)))
        .unwrap()
        .style_index();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(workbook.stylesheet().cell_formats().len(), 3);
}

#[test]
fn test_merge_without_overlay_returns_base() {
    let mut styles = Stylesheet::new();
    let samples = [
        Style::new(),
        Style::new().bold(true),
        Style::new().fill_color(Color::GREEN).number_format("0.0%"),
        Style::new()
            .border(Border::outline(BorderLineStyle::Medium, Color::BLACK))
            .horizontal_alignment(HorizontalAlignment::Right),
    ];

    for style in &samples {
        let base = styles.create_style(style).unwrap();
        assert_eq!(styles.create_merged_style(&base, None).unwrap(), base);
    }
}

#[test]
fn test_style_inheritance_chain() {
    let mut workbook = Workbook::new();
    let (sheet, styles) = workbook.sheet_and_styles_mut(0).unwrap();

    sheet
        .set_style(styles, &Style::new().font_name("Calibri").font_size(11.0))
        .unwrap();
    let row = sheet
        .add_row(styles, Some(&Style::new().fill_color(Color::YELLOW)))
        .unwrap();
    let inherited = row.add_cell(styles, 1, None).unwrap().style_index();
    let own = row
        .add_cell(styles, 2, Some(&Style::new().bold(true).font_size(14.0)))
        .unwrap()
        .style_index();

    let styles = workbook.stylesheet();
    let inherited = styles.cell_format(inherited).unwrap();
    let inherited_font = styles.font(inherited.font_id).unwrap();
    assert_eq!(inherited_font.name.as_deref(), Some("Calibri"));
    assert_eq!(styles.fill(inherited.fill_id), Some(&Fill::solid(Color::YELLOW)));

    let own = styles.cell_format(own).unwrap();
    let own_font = styles.font(own.font_id).unwrap();
    assert_eq!(own_font.name.as_deref(), Some("Calibri"));
    assert_eq!(own_font.size, Some(14.0));
    assert_eq!(own_font.bold, Some(true));
    assert_eq!(own.fill_id, inherited.fill_id);
}

#[test]
fn test_builtin_and_custom_number_formats() {
    let mut styles = Stylesheet::new();

    let percent = styles.create_style(&Style::new().number_format("0%")).unwrap();
    assert_eq!(percent.number_format_id, 9);

    let custom = styles
        .create_style(&Style::new().number_format("0.0000"))
        .unwrap();
    let again = styles
        .create_style(&Style::new().number_format("0.0000").bold(true))
        .unwrap();
    assert_eq!(custom.number_format_id, 170);
    assert_eq!(again.number_format_id, 170);
    assert_eq!(styles.number_format_code(170), Some("0.0000"));
}

#[test]
fn test_number_format_counter_is_per_stylesheet() {
    let mut first = Workbook::new();
    let mut second = Workbook::new();

    let a = first
        .stylesheet_mut()
        .create_style(&Style::new().number_format("00.00"))
        .unwrap();
    let b = second
        .stylesheet_mut()
        .create_style(&Style::new().number_format("#.#"))
        .unwrap();
    assert_eq!(a.number_format_id, 170);
    assert_eq!(b.number_format_id, 170);

    let mut custom = Workbook::with_stylesheet_options(StylesheetOptions {
        first_custom_number_format_id: 300,
    });
    let c = custom
        .stylesheet_mut()
        .create_style(&Style::new().number_format("#.#"))
        .unwrap();
    assert_eq!(c.number_format_id, 300);
}

#[test]
fn test_unknown_builtin_number_format_fails_cleanly() {
    let mut workbook = Workbook::new();
    let (sheet, styles) = workbook.sheet_and_styles_mut(0).unwrap();
    let row = sheet.add_row(styles, None).unwrap();

    let bad = Style::new()
        .bold(true)
        .with_number_format(NumberFormat::BuiltIn(23));
    let err = row.add_cell(styles, 1, Some(&bad)).unwrap_err();

    assert_eq!(
        err,
        Error::InvalidAttributeId {
            kind: AttributeKind::NumberFormat,
            id: 23
        }
    );
    assert!(row.cells().is_empty());
    assert_eq!(workbook.stylesheet().fonts().len(), 1);
    assert_eq!(workbook.stylesheet().cell_formats().len(), 1);
}
