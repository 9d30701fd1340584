//! Data model types for the page generator.
//!
//! These are plain data: everything the renderer needs for one selection,
//! with no HTML in them.

use quotient_group::Notation;
use serde::Serialize;

/// One line `from ↦ to` of an explicit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapsTo {
    /// The label.
    pub from: char,
    /// Its image.
    pub to: char,
}

impl From<(char, char)> for MapsTo {
    fn from((from, to): (char, char)) -> Self {
        Self { from, to }
    }
}

/// Everything shown for one selected S4 element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementView {
    /// The notation the element is displayed in.
    pub notation: Notation,
    /// The element as written in the selector.
    pub label: String,
    /// The element in one-line notation (keys the animation).
    pub one_line: String,
    /// Path of the animation, relative to the site root.
    pub animation: String,
    /// `i ↦ σ(i)` for `i = 1..4`.
    pub s4_action: Vec<MapsTo>,
    /// The S3 image, written in the same notation.
    pub s3_image: String,
    /// `x ↦ φ(σ)(x)` for `x = a, b, c`.
    pub s3_action: Vec<MapsTo>,
    /// Whether the symmetry is a rotation (even) or involves a reflection.
    pub rotation: bool,
}

/// An entry of the element selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementOption {
    /// URL-safe identifier, also the page file stem.
    pub value: String,
    /// Text shown in the selector.
    pub text: String,
}

/// One of the six description panels: a coset and its shared image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CosetPanel {
    /// Position, `1..=6`.
    pub index: usize,
    /// The shared S3 image.
    pub image: String,
    /// The four members.
    pub members: Vec<String>,
}

/// The kernel written out as a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KernelDescription {
    /// The four members of K4.
    pub members: Vec<String>,
}

/// A row of `elements.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementRecord {
    /// Canonical cycle notation.
    pub cycle: String,
    /// One-line notation.
    pub one_line: String,
    /// S3 image, cycle notation.
    pub image_cycle: String,
    /// S3 image, one-line notation.
    pub image_one_line: String,
    /// Coset position, `1..=6`.
    pub coset: usize,
    /// Cycle structure name.
    pub cycle_type: &'static str,
    /// `1` for even, `-1` for odd.
    pub sign: i8,
    /// Animation file name.
    pub animation: String,
}

/// An `<option>` of a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// The option value.
    pub value: String,
    /// Text shown to the reader.
    pub text: String,
    /// Page to navigate to when chosen.
    pub href: String,
    /// Whether this is the current choice.
    pub selected: bool,
}

/// A `<select>` control with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// Element id.
    pub id: String,
    /// Visible label.
    pub label: String,
    /// The options, in order.
    pub options: Vec<SelectOption>,
}
