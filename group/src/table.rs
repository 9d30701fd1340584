//! The notation table: every S4 element in both notations, with its S3 image
//! and coset.
//!
//! The table is derived once from [`Permutation::all`] and the quotient map,
//! then shared. Lookups take the displayed strings and return `None` for
//! anything that is not one of the 24 canonical forms.

use std::sync::OnceLock;

use crate::alphabet::{DIGITS, LETTERS};
use crate::notation::Notation;
use crate::quotient::{cosets, quotient_image, Coset, S3, S4};

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    /// The S4 element.
    pub element: S4,
    /// Canonical cycle notation, e.g. `"(123)"`.
    pub cycle: String,
    /// One-line notation, e.g. `"2314"`.
    pub one_line: String,
    /// The image in S3.
    pub image: S3,
    /// The image in cycle notation, e.g. `"(abc)"`.
    pub image_cycle: String,
    /// The image in one-line notation, e.g. `"bca"`.
    pub image_one_line: String,
    /// Index into [`NotationTable::cosets`].
    pub coset: usize,
}

impl Entry {
    /// The element written in `notation`.
    #[must_use]
    pub fn label(&self, notation: Notation) -> &str {
        match notation {
            Notation::Cycle => &self.cycle,
            Notation::OneLine => &self.one_line,
        }
    }

    /// The S3 image written in `notation`.
    #[must_use]
    pub fn image_label(&self, notation: Notation) -> &str {
        match notation {
            Notation::Cycle => &self.image_cycle,
            Notation::OneLine => &self.image_one_line,
        }
    }
}

/// All 24 elements of S4 with their notations, images and cosets.
#[derive(Debug)]
pub struct NotationTable {
    entries: Vec<Entry>,
    cosets: Vec<Coset>,
}

impl NotationTable {
    /// Returns the shared table.
    ///
    /// ```
    /// use quotient_group::NotationTable;
    ///
    /// let table = NotationTable::full();
    /// assert_eq!(table.cycle_to_one_line("(123)"), Some("2314"));
    /// assert_eq!(table.one_line_to_cycle("2143"), Some("(12)(34)"));
    /// assert_eq!(table.cycle_to_one_line("(321)"), None);
    /// ```
    #[must_use]
    pub fn full() -> &'static NotationTable {
        static TABLE: OnceLock<NotationTable> = OnceLock::new();
        TABLE.get_or_init(NotationTable::build)
    }

    fn build() -> Self {
        let cosets = cosets();
        let entries = S4::all()
            .into_iter()
            .map(|element| {
                let image = quotient_image(&element);
                Entry {
                    element,
                    cycle: element.cycle_notation(&DIGITS),
                    one_line: element.one_line(&DIGITS),
                    image,
                    image_cycle: image.cycle_notation(&LETTERS),
                    image_one_line: image.one_line(&LETTERS),
                    coset: cosets
                        .iter()
                        .position(|c| c.image == image)
                        .unwrap_or_default(),
                }
            })
            .collect();
        Self { entries, cosets }
    }

    /// All rows in display order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The element labels for a selector in `notation`, in display order.
    pub fn elements(&self, notation: Notation) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(move |e| e.label(notation))
    }

    /// Finds the row whose label in `notation` is exactly `label`.
    #[must_use]
    pub fn find(&self, notation: Notation, label: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.label(notation) == label)
    }

    /// Finds the row for an element.
    #[must_use]
    pub fn entry(&self, element: &S4) -> Option<&Entry> {
        self.entries.iter().find(|e| e.element == *element)
    }

    /// Converts canonical cycle notation to one-line notation.
    #[must_use]
    pub fn cycle_to_one_line(&self, cycle: &str) -> Option<&str> {
        self.find(Notation::Cycle, cycle).map(|e| e.one_line.as_str())
    }

    /// Converts one-line notation to canonical cycle notation.
    #[must_use]
    pub fn one_line_to_cycle(&self, one_line: &str) -> Option<&str> {
        self.find(Notation::OneLine, one_line).map(|e| e.cycle.as_str())
    }

    /// The S3 image of `label`, written in the same notation.
    ///
    /// ```
    /// use quotient_group::{Notation, NotationTable};
    ///
    /// let table = NotationTable::full();
    /// assert_eq!(table.image(Notation::Cycle, "(1234)"), Some("(ac)"));
    /// assert_eq!(table.image(Notation::OneLine, "2341"), Some("cba"));
    /// ```
    #[must_use]
    pub fn image(&self, notation: Notation, label: &str) -> Option<&str> {
        self.find(notation, label).map(|e| e.image_label(notation))
    }

    /// The six cosets of K4, kernel first.
    #[must_use]
    pub fn cosets(&self) -> &[Coset] {
        &self.cosets
    }

    /// The kernel K4 (the coset whose image is the identity).
    #[must_use]
    pub fn kernel(&self) -> &Coset {
        &self.cosets[0]
    }

    /// The coset containing `element`.
    #[must_use]
    pub fn coset_of(&self, element: &S4) -> Option<&Coset> {
        self.entry(element).and_then(|e| self.cosets.get(e.coset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_24_rows() {
        let table = NotationTable::full();
        assert_eq!(table.entries().len(), 24);
        assert_eq!(table.elements(Notation::Cycle).next(), Some("() = id"));
        assert_eq!(table.elements(Notation::OneLine).last(), Some("4123"));
    }

    #[test]
    fn identity_row() {
        let table = NotationTable::full();
        let id = table.find(Notation::Cycle, "() = id").unwrap();
        assert_eq!(id.one_line, "1234");
        assert_eq!(id.image_cycle, "() = id");
        assert_eq!(id.image_one_line, "abc");
        assert_eq!(id.coset, 0);
    }

    #[test]
    fn lookup_miss_is_none() {
        let table = NotationTable::full();
        assert_eq!(table.cycle_to_one_line("(231)"), None);
        assert_eq!(table.one_line_to_cycle("1123"), None);
        assert_eq!(table.image(Notation::OneLine, "(12)"), None);
    }

    #[test]
    fn coset_of_matches_image() {
        let table = NotationTable::full();
        for entry in table.entries() {
            let coset = table.coset_of(&entry.element).unwrap();
            assert_eq!(coset.image, entry.image);
            assert!(coset.contains(&entry.element));
        }
    }
}
