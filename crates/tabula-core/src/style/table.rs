//! Append-only, content-addressed attribute tables

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;

/// The attribute kinds interned by a [`Stylesheet`](super::Stylesheet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Font,
    Fill,
    Border,
    NumberFormat,
    CellFormat,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeKind::Font => "font",
            AttributeKind::Fill => "fill",
            AttributeKind::Border => "border",
            AttributeKind::NumberFormat => "number format",
            AttributeKind::CellFormat => "cell format",
        };
        f.write_str(name)
    }
}

/// A formatting record that can be interned and merged field by field
///
/// Sub-fields are optional so that "not set" stays distinct from any explicit value.
pub trait Attribute: Clone + Eq + Hash + Default + fmt::Debug {
    /// Kind reported in errors and log records
    const KIND: AttributeKind;

    /// True when no sub-field is set
    fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Combine with `overlay`: sub-fields set in the overlay win, the rest come from `self`
    fn merge(&self, overlay: &Self) -> Self;
}

/// An append-only sequence of attribute records, deduplicated by content
///
/// Id 0 holds the default (empty) record. A default candidate interns to 0 and a
/// non-default candidate never does.
#[derive(Debug, Clone)]
pub struct AttributeTable<T: Attribute> {
    records: Vec<T>,
    /// Content -> id, for ids >= 1
    index: AHashMap<T, u32>,
}

impl<T: Attribute> AttributeTable<T> {
    /// Create a table holding only the default record at id 0
    pub fn new() -> Self {
        Self {
            records: vec![T::default()],
            index: AHashMap::new(),
        }
    }

    /// Return the id of a record equal to `candidate`, appending it if there is none
    pub fn intern(&mut self, candidate: T) -> u32 {
        if candidate.is_default() {
            return 0;
        }
        if let Some(&id) = self.index.get(&candidate) {
            return id;
        }

        let id = self.records.len() as u32;
        log::debug!("appending {} record {}: {:?}", T::KIND, id, candidate);
        self.index.insert(candidate.clone(), id);
        self.records.push(candidate);
        id
    }

    /// Get a record by id
    pub fn get(&self, id: u32) -> Option<&T> {
        self.records.get(id as usize)
    }

    /// Number of records, including the default
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when only the default record exists
    pub fn is_empty(&self) -> bool {
        self.records.len() <= 1
    }

    /// Iterate over all records with their ids
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.records.iter().enumerate().map(|(i, r)| (i as u32, r))
    }
}

impl<T: Attribute> Default for AttributeTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Fill, Font};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_record() {
        let table = AttributeTable::<Font>::new();
        assert_eq!(table.len(), 1);
        assert!(table.is_empty());
        assert_eq!(table.get(0), Some(&Font::default()));
    }

    #[test]
    fn test_deduplication() {
        let mut table = AttributeTable::new();

        let bold = Font::new().with_bold(true);
        let italic = Font::new().with_italic(true);

        let a = table.intern(bold.clone());
        let b = table.intern(bold);
        let c = table.intern(italic);

        assert_eq!(a, b); // Same content, same id
        assert_ne!(a, c); // Different content, different id
        assert_eq!(a, 1);
        assert_eq!(c, 2);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_default_candidate_maps_to_zero() {
        let mut table = AttributeTable::<Fill>::new();
        assert_eq!(table.intern(Fill::default()), 0);
        assert_eq!(table.len(), 1);

        let id = table.intern(Fill::solid(Color::RED));
        assert_eq!(id, 1);
        assert_eq!(table.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_font_sizes_intern_by_value() {
        let mut table = AttributeTable::<Font>::new();

        let zero = table.intern(Font::new().with_size(0.0));
        let negative_zero = table.intern(Font::new().with_size(-0.0));
        assert_eq!(zero, negative_zero);
        assert_eq!(table.len(), 2);

        let nan = table.intern(Font::new().with_size(f64::NAN));
        assert_eq!(table.intern(Font::new().with_size(f64::NAN)), nan);
        assert_eq!(table.len(), 3);
    }
}
