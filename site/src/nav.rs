//! The two selectors: notation, and element of S4.

use quotient_group::Notation;

use crate::extractor::{element_options, page_path};
use crate::model::{SelectOption, Selector};
use crate::renderer::escape_html;

/// Id of the notation selector.
pub const NOTATION_SELECT_ID: &str = "notation_select";

/// Id of the element selector.
pub const ELEMENT_SELECT_ID: &str = "S4-element-select";

/// Builds both selectors for the page showing `current` in `notation`.
///
/// Choosing a notation goes to the first element (the identity) in that
/// notation; choosing an element goes to its page. `root` is the relative
/// path from the page to the site root (`""` or `"../"`).
#[must_use]
pub fn build_selectors(notation: Notation, current: &str, root: &str) -> Vec<Selector> {
    let notation_options = Notation::ALL
        .iter()
        .map(|&n| {
            let first = element_options(n)
                .into_iter()
                .next()
                .map(|o| o.text)
                .unwrap_or_default();
            SelectOption {
                value: n.as_str().to_string(),
                text: n.title().to_string(),
                href: format!("{root}{}", page_path(n, &first)),
                selected: n == notation,
            }
        })
        .collect();

    let elements = element_options(notation)
        .into_iter()
        .map(|o| SelectOption {
            href: format!("{root}{}", page_path(notation, &o.text)),
            selected: o.text == current,
            value: o.value,
            text: o.text,
        })
        .collect();

    vec![
        Selector {
            id: NOTATION_SELECT_ID.to_string(),
            label: "Notation".to_string(),
            options: notation_options,
        },
        Selector {
            id: ELEMENT_SELECT_ID.to_string(),
            label: "Element of S4".to_string(),
            options: elements,
        },
    ]
}

/// Renders the selectors as an HTML form.
#[must_use]
pub fn render_selectors(selectors: &[Selector]) -> String {
    let mut html = String::from("<form class=\"selectors\">\n");
    for selector in selectors {
        render_selector(&mut html, selector);
    }
    html.push_str("</form>\n");
    html
}

fn render_selector(html: &mut String, selector: &Selector) {
    let id = escape_html(&selector.id);
    html.push_str(&format!(
        "<label for=\"{id}\">{}</label>\n<select id=\"{id}\" name=\"{id}\">\n",
        escape_html(&selector.label)
    ));
    for option in &selector.options {
        let selected = if option.selected { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\" data-href=\"{}\"{selected}>{}</option>\n",
            escape_html(&option.value),
            escape_html(&option.href),
            escape_html(&option.text),
        ));
    }
    html.push_str("</select>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_selector_points_at_identity() {
        let selectors = build_selectors(Notation::Cycle, "(12)", "../");
        let notation = &selectors[0];
        assert_eq!(notation.options.len(), 2);
        assert!(notation.options[0].selected);
        assert_eq!(notation.options[1].href, "../one-line/1234.html");
        assert_eq!(notation.options[0].href, "../cycle/id.html");
    }

    #[test]
    fn element_selector_marks_current() {
        let selectors = build_selectors(Notation::OneLine, "2143", "");
        let elements = &selectors[1];
        assert_eq!(elements.options.len(), 24);
        let selected: Vec<_> = elements.options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].href, "one-line/2143.html");
    }

    #[test]
    fn renders_select_elements() {
        let html = render_selectors(&build_selectors(Notation::Cycle, "() = id", ""));
        assert!(html.contains("<select id=\"notation_select\""));
        assert!(html.contains("<select id=\"S4-element-select\""));
        assert!(html.contains("data-href=\"cycle/12-34.html\">(12)(34)</option>"));
        assert!(html.contains("<option value=\"id\" data-href=\"cycle/id.html\" selected>() = id</option>"));
    }
}
