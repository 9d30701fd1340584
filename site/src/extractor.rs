//! Builds page data from the notation table.
//!
//! Every function here takes the selection as parameters and returns plain
//! data; nothing depends on what was selected before.

use quotient_group::action::{explicit_action, one_line_action};
use quotient_group::alphabet::{DIGITS, LETTERS};
use quotient_group::notation::cycle_texts;
use quotient_group::tetrahedron::{animation_file, is_rotation};
use quotient_group::{Notation, NotationTable};

use crate::model::{
    CosetPanel, ElementOption, ElementRecord, ElementView, KernelDescription, MapsTo,
};

/// The URL-safe file stem for an element label.
///
/// One-line labels are used as they are; cycle labels keep their digits and
/// separate cycles with `-` (`(12)(34)` → `12-34`); the identity is `id`.
#[must_use]
pub fn slug(notation: Notation, label: &str) -> String {
    match notation {
        Notation::OneLine => label.to_string(),
        Notation::Cycle => {
            let cycles = cycle_texts(label);
            if cycles.is_empty() {
                "id".to_string()
            } else {
                cycles.join("-")
            }
        }
    }
}

/// Page path of a selection, relative to the site root.
#[must_use]
pub fn page_path(notation: Notation, label: &str) -> String {
    format!("{}/{}.html", notation.as_str(), slug(notation, label))
}

/// The selector entries for `notation`, in display order.
#[must_use]
pub fn element_options(notation: Notation) -> Vec<ElementOption> {
    NotationTable::full()
        .elements(notation)
        .map(|label| ElementOption {
            value: slug(notation, label),
            text: label.to_string(),
        })
        .collect()
}

/// The selector text for the option whose value is `value`, or `None` if no
/// option has that value.
#[must_use]
pub fn option_text(notation: Notation, value: &str) -> Option<String> {
    element_options(notation)
        .into_iter()
        .find(|o| o.value == value)
        .map(|o| o.text)
}

/// The full display for one selection, or `None` if `label` is not one of
/// the 24 elements in `notation`.
///
/// ```
/// use quotient_group::Notation;
/// use quotient_site::extractor::element_view;
///
/// let view = element_view(Notation::Cycle, "(123)", "GIFs").unwrap();
/// assert_eq!(view.one_line, "2314");
/// assert_eq!(view.s3_image, "(abc)");
/// assert_eq!(view.animation, "GIFs/tetrahedron_reflection_swap_2314.gif");
/// ```
#[must_use]
pub fn element_view(notation: Notation, label: &str, gif_dir: &str) -> Option<ElementView> {
    let entry = NotationTable::full().find(notation, label)?;
    let s3_image = entry.image_label(notation).to_string();

    let (s4_action, s3_action) = match notation {
        Notation::Cycle => (
            explicit_action(&entry.cycle, &DIGITS).map(MapsTo::from).to_vec(),
            explicit_action(&s3_image, &LETTERS).map(MapsTo::from).to_vec(),
        ),
        Notation::OneLine => (
            one_line_action(&entry.one_line, &DIGITS).map(MapsTo::from).to_vec(),
            one_line_action(&s3_image, &LETTERS).map(MapsTo::from).to_vec(),
        ),
    };

    let animation = animation_file(&entry.element);
    let animation = if gif_dir.is_empty() {
        animation
    } else {
        format!("{}/{}", gif_dir.trim_end_matches('/'), animation)
    };

    Some(ElementView {
        notation,
        label: label.to_string(),
        one_line: entry.one_line.clone(),
        animation,
        s4_action,
        s3_image,
        s3_action,
        rotation: is_rotation(&entry.element),
    })
}

/// The six coset panels, each listing its members and their shared image in
/// `notation`.
#[must_use]
pub fn coset_panels(notation: Notation) -> Vec<CosetPanel> {
    let table = NotationTable::full();
    table
        .cosets()
        .iter()
        .enumerate()
        .map(|(i, coset)| {
            let members: Vec<String> = coset
                .members
                .iter()
                .filter_map(|m| table.entry(m))
                .map(|e| e.label(notation).to_string())
                .collect();
            let image = coset
                .members
                .first()
                .and_then(|m| table.entry(m))
                .map(|e| e.image_label(notation).to_string())
                .unwrap_or_default();
            CosetPanel {
                index: i + 1,
                image,
                members,
            }
        })
        .collect()
}

/// The kernel K4 written in `notation`.
#[must_use]
pub fn kernel_description(notation: Notation) -> KernelDescription {
    let table = NotationTable::full();
    KernelDescription {
        members: table
            .kernel()
            .members
            .iter()
            .filter_map(|m| table.entry(m))
            .map(|e| e.label(notation).to_string())
            .collect(),
    }
}

/// One record per element for `elements.json`.
#[must_use]
pub fn element_records() -> Vec<ElementRecord> {
    NotationTable::full()
        .entries()
        .iter()
        .map(|e| ElementRecord {
            cycle: e.cycle.clone(),
            one_line: e.one_line.clone(),
            image_cycle: e.image_cycle.clone(),
            image_one_line: e.image_one_line.clone(),
            coset: e.coset + 1,
            cycle_type: e.element.cycle_type().as_str(),
            sign: e.element.sign(),
            animation: animation_file(&e.element),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(view: &[MapsTo]) -> Vec<(char, char)> {
        view.iter().map(|m| (m.from, m.to)).collect()
    }

    #[test]
    fn slugs() {
        assert_eq!(slug(Notation::Cycle, "() = id"), "id");
        assert_eq!(slug(Notation::Cycle, "(12)(34)"), "12-34");
        assert_eq!(slug(Notation::OneLine, "2143"), "2143");
        assert_eq!(page_path(Notation::Cycle, "(123)"), "cycle/123.html");
    }

    #[test]
    fn option_lookup() {
        assert_eq!(option_text(Notation::Cycle, "13-24"), Some("(13)(24)".to_string()));
        assert_eq!(option_text(Notation::OneLine, "3412"), Some("3412".to_string()));
        assert_eq!(option_text(Notation::Cycle, "3412"), None);
        assert_eq!(element_options(Notation::OneLine).len(), 24);
    }

    #[test]
    fn both_notations_agree() {
        let table = NotationTable::full();
        for entry in table.entries() {
            let cycle = element_view(Notation::Cycle, &entry.cycle, "").unwrap();
            let one_line = element_view(Notation::OneLine, &entry.one_line, "").unwrap();
            assert_eq!(cycle.s4_action, one_line.s4_action, "{}", entry.cycle);
            assert_eq!(cycle.s3_action, one_line.s3_action, "{}", entry.cycle);
            assert_eq!(cycle.animation, one_line.animation);
        }
    }

    #[test]
    fn identity_view() {
        let view = element_view(Notation::Cycle, "() = id", "GIFs/").unwrap();
        assert_eq!(view.animation, "GIFs/tetrahedron_reflection_swap_1234.gif");
        assert_eq!(
            pairs(&view.s4_action),
            [('1', '1'), ('2', '2'), ('3', '3'), ('4', '4')]
        );
        assert_eq!(pairs(&view.s3_action), [('a', 'a'), ('b', 'b'), ('c', 'c')]);
        assert!(view.rotation);
    }

    #[test]
    fn one_line_view() {
        let view = element_view(Notation::OneLine, "2314", "").unwrap();
        assert_eq!(view.s3_image, "bca");
        assert_eq!(pairs(&view.s3_action), [('a', 'b'), ('b', 'c'), ('c', 'a')]);
    }

    #[test]
    fn unknown_label_has_no_view() {
        assert!(element_view(Notation::Cycle, "(21)", "").is_none());
        assert!(element_view(Notation::OneLine, "(12)", "").is_none());
    }

    #[test]
    fn panels_and_kernel() {
        let panels = coset_panels(Notation::Cycle);
        assert_eq!(panels.len(), 6);
        assert_eq!(panels[0].image, "() = id");
        assert_eq!(panels[4].image, "(abc)");
        assert!(panels.iter().all(|p| p.members.len() == 4));

        let kernel = kernel_description(Notation::OneLine);
        assert_eq!(kernel.members, ["1234", "2143", "3412", "4321"]);
    }

    #[test]
    fn records_cover_all_elements() {
        let records = element_records();
        assert_eq!(records.len(), 24);
        assert_eq!(records[7].cycle, "(123)");
        assert_eq!(records[7].coset, 5);
        assert_eq!(records[7].cycle_type, "3-cycle");
    }
}
