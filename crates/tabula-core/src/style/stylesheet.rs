//! Stylesheet: the interning store behind every style index

use ahash::AHashMap;

use super::number_format::{NumberFormatTable, FIRST_CUSTOM_NUMBER_FORMAT_ID};
use super::table::{Attribute, AttributeKind, AttributeTable};
use super::{Alignment, Border, Fill, Font, NumberFormat, Style};
use crate::error::{Error, Result};

/// Ids of the four interned attributes that make up a cell format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeIds {
    pub font_id: u32,
    pub fill_id: u32,
    pub border_id: u32,
    pub number_format_id: u32,
}

/// A stored cell format (style record)
///
/// Its identity is `index`, its position in the stylesheet. Two formats have the same
/// content iff all four ids match and their alignments are both absent or equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFormat {
    /// Position in the stylesheet's cell format table
    pub index: u32,
    pub font_id: u32,
    pub fill_id: u32,
    pub border_id: u32,
    pub number_format_id: u32,
    pub alignment: Option<Alignment>,
}

impl CellFormat {
    /// The attribute ids of this format
    pub fn ids(&self) -> AttributeIds {
        AttributeIds {
            font_id: self.font_id,
            fill_id: self.fill_id,
            border_id: self.border_id,
            number_format_id: self.number_format_id,
        }
    }

    /// Compare content, ignoring `index`
    pub fn same_content(&self, other: &CellFormat) -> bool {
        self.ids() == other.ids() && self.alignment == other.alignment
    }

    /// True when nothing is customized
    pub fn is_default(&self) -> bool {
        self.ids() == AttributeIds::default() && self.alignment.is_none()
    }

    fn key(&self) -> FormatKey {
        FormatKey {
            ids: self.ids(),
            alignment: self.alignment.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FormatKey {
    ids: AttributeIds,
    alignment: Option<Alignment>,
}

/// Construction options for a [`Stylesheet`]
#[derive(Debug, Clone)]
pub struct StylesheetOptions {
    /// First id given to a custom number format
    pub first_custom_number_format_id: u32,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            first_custom_number_format_id: FIRST_CUSTOM_NUMBER_FORMAT_ID,
        }
    }
}

/// Raw style-table contract offered to a document packaging layer
///
/// All methods append-or-reuse by content; none of them ever removes a record.
pub trait StyleSink {
    /// Intern a font, returning its id
    fn intern_font(&mut self, font: Font) -> u32;

    /// Intern a fill, returning its id
    fn intern_fill(&mut self, fill: Fill) -> u32;

    /// Intern a border, returning its id
    fn intern_border(&mut self, border: Border) -> u32;

    /// Intern a number format, returning its id
    fn intern_number_format(&mut self, format: &NumberFormat) -> Result<u32>;

    /// Intern a whole cell format from already interned attribute ids
    fn intern_style(&mut self, ids: AttributeIds, alignment: Option<Alignment>)
        -> Result<CellFormat>;

    /// Look up a cell format by index
    fn style_by_index(&self, index: u32) -> Option<&CellFormat>;
}

/// Deduplicating store of fonts, fills, borders, number formats and cell formats
///
/// Owned by a document and lives as long as it; records are never evicted.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    fonts: AttributeTable<Font>,
    fills: AttributeTable<Fill>,
    borders: AttributeTable<Border>,
    number_formats: NumberFormatTable,
    /// All unique cell formats (index 0 is the default)
    cell_formats: Vec<CellFormat>,
    format_index: AHashMap<FormatKey, u32>,
}

impl Stylesheet {
    /// Create a stylesheet holding only the default records
    pub fn new() -> Self {
        Self::with_options(StylesheetOptions::default())
    }

    /// Create a stylesheet with explicit options
    pub fn with_options(options: StylesheetOptions) -> Self {
        let default = CellFormat::default();
        let mut format_index = AHashMap::new();
        format_index.insert(default.key(), 0);

        Self {
            fonts: AttributeTable::new(),
            fills: AttributeTable::new(),
            borders: AttributeTable::new(),
            number_formats: NumberFormatTable::with_first_custom_id(
                options.first_custom_number_format_id,
            ),
            cell_formats: vec![default],
            format_index,
        }
    }

    /// Resolve a style to a stored cell format
    ///
    /// Absent attributes resolve to id 0. Nothing is stored if the style is invalid.
    pub fn create_style(&mut self, style: &Style) -> Result<CellFormat> {
        if let Some(format) = &style.number_format {
            format.validate()?;
        }

        let ids = AttributeIds {
            font_id: style.font.clone().map_or(0, |f| self.intern_font(f)),
            fill_id: style.fill.clone().map_or(0, |f| self.intern_fill(f)),
            border_id: style.border.clone().map_or(0, |b| self.intern_border(b)),
            number_format_id: match &style.number_format {
                Some(format) => self.intern_number_format(format)?,
                None => 0,
            },
        };

        self.intern_style(ids, style.alignment.clone())
    }

    /// Combine `overlay` on top of `base` and store the result
    ///
    /// Fonts, fills and borders are merged field by field; the number format and alignment
    /// are taken whole. With no overlay, `base` is returned and nothing is stored.
    pub fn create_merged_style(
        &mut self,
        base: &CellFormat,
        overlay: Option<&CellFormat>,
    ) -> Result<CellFormat> {
        let Some(overlay) = overlay else {
            return Ok(base.clone());
        };

        let font = merged_record(&self.fonts, base.font_id, overlay.font_id)?;
        let fill = merged_record(&self.fills, base.fill_id, overlay.fill_id)?;
        let border = merged_record(&self.borders, base.border_id, overlay.border_id)?;

        let number_format_id =
            if overlay.number_format_id != 0 && overlay.number_format_id != base.number_format_id
            {
                overlay.number_format_id
            } else {
                base.number_format_id
            };
        if !self.number_formats.contains(number_format_id) {
            return Err(Error::InvalidAttributeId {
                kind: AttributeKind::NumberFormat,
                id: number_format_id,
            });
        }

        let ids = AttributeIds {
            font_id: font.map_or(base.font_id, |f| self.fonts.intern(f)),
            fill_id: fill.map_or(base.fill_id, |f| self.fills.intern(f)),
            border_id: border.map_or(base.border_id, |b| self.borders.intern(b)),
            number_format_id,
        };
        let alignment = base
            .alignment
            .clone()
            .or_else(|| overlay.alignment.clone());

        self.intern_style(ids, alignment)
    }

    /// Merge a style on top of the format at `base_index`
    pub fn merge_style(&mut self, base_index: u32, style: &Style) -> Result<CellFormat> {
        let base = self.cell_format(base_index)?.clone();
        let overlay = self.create_style(style)?;
        self.create_merged_style(&base, Some(&overlay))
    }

    /// Rebuild the style bag a format was made from
    ///
    /// Feeding the result back into [`create_style`](Self::create_style) yields the same index.
    pub fn style_of(&self, index: u32) -> Result<Style> {
        let format = self.cell_format(index)?;
        let lookup = |id: u32, kind: AttributeKind| Error::InvalidAttributeId { kind, id };

        Ok(Style {
            font: match format.font_id {
                0 => None,
                id => Some(self.font(id).ok_or_else(|| lookup(id, AttributeKind::Font))?.clone()),
            },
            fill: match format.fill_id {
                0 => None,
                id => Some(self.fill(id).ok_or_else(|| lookup(id, AttributeKind::Fill))?.clone()),
            },
            border: match format.border_id {
                0 => None,
                id => Some(
                    self.border(id)
                        .ok_or_else(|| lookup(id, AttributeKind::Border))?
                        .clone(),
                ),
            },
            number_format: match format.number_format_id {
                0 => None,
                id => Some(
                    self.number_formats
                        .get(id)
                        .ok_or_else(|| lookup(id, AttributeKind::NumberFormat))?,
                ),
            },
            alignment: format.alignment.clone(),
        })
    }

    /// Get a cell format by index
    pub fn cell_format(&self, index: u32) -> Result<&CellFormat> {
        self.cell_formats
            .get(index as usize)
            .ok_or(Error::InvalidStyleIndex(index))
    }

    /// The default cell format (index 0)
    pub fn default_format(&self) -> &CellFormat {
        &self.cell_formats[0]
    }

    /// All cell formats in index order
    pub fn cell_formats(&self) -> &[CellFormat] {
        &self.cell_formats
    }

    /// Get a font by id
    pub fn font(&self, id: u32) -> Option<&Font> {
        self.fonts.get(id)
    }

    /// Get a fill by id
    pub fn fill(&self, id: u32) -> Option<&Fill> {
        self.fills.get(id)
    }

    /// Get a border by id
    pub fn border(&self, id: u32) -> Option<&Border> {
        self.borders.get(id)
    }

    /// Get a number format code by id
    pub fn number_format_code(&self, id: u32) -> Option<&str> {
        self.number_formats.code(id)
    }

    /// The font table
    pub fn fonts(&self) -> &AttributeTable<Font> {
        &self.fonts
    }

    /// The fill table
    pub fn fills(&self) -> &AttributeTable<Fill> {
        &self.fills
    }

    /// The border table
    pub fn borders(&self) -> &AttributeTable<Border> {
        &self.borders
    }

    /// The number format table
    pub fn number_formats(&self) -> &NumberFormatTable {
        &self.number_formats
    }

    fn validate_ids(&self, ids: &AttributeIds) -> Result<()> {
        let checks = [
            (AttributeKind::Font, ids.font_id, self.fonts.get(ids.font_id).is_some()),
            (AttributeKind::Fill, ids.fill_id, self.fills.get(ids.fill_id).is_some()),
            (
                AttributeKind::Border,
                ids.border_id,
                self.borders.get(ids.border_id).is_some(),
            ),
            (
                AttributeKind::NumberFormat,
                ids.number_format_id,
                self.number_formats.contains(ids.number_format_id),
            ),
        ];

        match checks.into_iter().find(|(_, _, known)| !known) {
            Some((kind, id, _)) => Err(Error::InvalidAttributeId { kind, id }),
            None => Ok(()),
        }
    }
}

/// Field-merge the records behind two ids, or `None` when the base id is kept as is
fn merged_record<T: Attribute>(
    table: &AttributeTable<T>,
    base_id: u32,
    overlay_id: u32,
) -> Result<Option<T>> {
    let missing = |id| Error::InvalidAttributeId { kind: T::KIND, id };

    let base = table.get(base_id).ok_or_else(|| missing(base_id))?;
    if overlay_id == 0 || overlay_id == base_id {
        return Ok(None);
    }
    let overlay = table.get(overlay_id).ok_or_else(|| missing(overlay_id))?;

    Ok(Some(base.merge(overlay)))
}

impl StyleSink for Stylesheet {
    fn intern_font(&mut self, font: Font) -> u32 {
        self.fonts.intern(font)
    }

    fn intern_fill(&mut self, fill: Fill) -> u32 {
        self.fills.intern(fill)
    }

    fn intern_border(&mut self, border: Border) -> u32 {
        self.borders.intern(border)
    }

    fn intern_number_format(&mut self, format: &NumberFormat) -> Result<u32> {
        self.number_formats.intern(format)
    }

    fn intern_style(
        &mut self,
        ids: AttributeIds,
        alignment: Option<Alignment>,
    ) -> Result<CellFormat> {
        self.validate_ids(&ids)?;

        let key = FormatKey { ids, alignment };
        if let Some(&index) = self.format_index.get(&key) {
            return Ok(self.cell_formats[index as usize].clone());
        }

        let index = self.cell_formats.len() as u32;
        let format = CellFormat {
            index,
            font_id: key.ids.font_id,
            fill_id: key.ids.fill_id,
            border_id: key.ids.border_id,
            number_format_id: key.ids.number_format_id,
            alignment: key.alignment.clone(),
        };
        log::debug!("appending cell format {}: {:?}", index, key);
        self.format_index.insert(key, index);
        self.cell_formats.push(format.clone());
        Ok(format)
    }

    fn style_by_index(&self, index: u32) -> Option<&CellFormat> {
        self.cell_formats.get(index as usize)
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}
