//! Static page generator for the S4 → S3 quotient visualiser.
//!
//! Each choice of notation and element is rendered ahead of time into its
//! own page; the two selectors at the top of every page navigate between
//! them. All page content is derived from
//! `quotient_group::NotationTable::full()`.
//!
//! # Entry Point
//!
//! ```no_run
//! use quotient_site::{generate, SiteConfig};
//!
//! let config = SiteConfig::default();
//! generate(&config).expect("Site generation failed");
//! ```
//!
//! # Output Structure
//!
//! ```text
//! public/
//!   index.html             (the identity, in the configured notation)
//!   cycle/<slug>.html      (24 pages: id.html, 12.html, …, 12-34.html, …)
//!   one-line/<slug>.html   (24 pages: 1234.html, 2134.html, …)
//!   elements.json
//!   css/style.css
//!   js/select.js
//! ```
//!
//! The tetrahedron animations are static assets expected under
//! `public/<gif_dir>/`; they are referenced, not generated.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod colour;
pub mod config;
pub mod data;
pub mod extractor;
pub mod model;
pub mod nav;
pub mod renderer;
pub mod writer;

use anyhow::{anyhow, Result};
use quotient_group::{Notation, NotationTable};

pub use config::SiteConfig;

use extractor::{coset_panels, element_view, kernel_description, page_path};
use nav::{build_selectors, render_selectors};
use renderer::{markdown_to_html, render_description, render_element_body, render_page};

/// Relative path from a page in a notation directory to the site root.
const SUBPAGE_ROOT: &str = "../";

/// Generates the complete site into `config.out_dir`.
///
/// Returns the number of HTML pages written.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn generate(config: &SiteConfig) -> Result<usize> {
    let out_dir = &config.out_dir;
    let table = NotationTable::full();
    let intro_html = markdown_to_html(intro_md());
    let mut pages = 0usize;

    for notation in Notation::ALL {
        let description =
            render_description(notation, &coset_panels(notation), &kernel_description(notation));

        for label in table.elements(notation) {
            let html = render_selection(
                config,
                notation,
                label,
                &intro_html,
                &description,
                SUBPAGE_ROOT,
            )?;
            writer::write(&out_dir.join(page_path(notation, label)), &html)?;
            pages += 1;
        }
        tracing::debug!(notation = %notation, "rendered element pages");
    }

    // Landing page: the identity in the default notation.
    let notation = config.default_notation;
    let first = table
        .elements(notation)
        .next()
        .ok_or_else(|| anyhow!("Notation table is empty"))?;
    let description =
        render_description(notation, &coset_panels(notation), &kernel_description(notation));
    let index = render_selection(config, notation, first, &intro_html, &description, "")?;
    writer::write(&out_dir.join("index.html"), &index)?;
    pages += 1;

    writer::write(&out_dir.join("elements.json"), &data::generate_elements_json()?)?;
    writer::write(&out_dir.join("css").join("style.css"), style_css())?;
    writer::write(&out_dir.join("js").join("select.js"), data::select_js())?;

    tracing::info!(pages, out_dir = %out_dir.display(), "site generated");
    Ok(pages)
}

/// Renders the full page for one selection.
///
/// # Errors
///
/// Returns an error if `label` is not an element in `notation`.
pub fn render_selection(
    config: &SiteConfig,
    notation: Notation,
    label: &str,
    intro_html: &str,
    description_html: &str,
    root: &str,
) -> Result<String> {
    let view = element_view(notation, label, &config.gif_dir)
        .ok_or_else(|| anyhow!("Unknown {} element: {}", notation, label))?;
    let nav_html = render_selectors(&build_selectors(notation, label, root));
    let body = render_element_body(&view, intro_html, description_html, root);
    Ok(render_page(config, label, &body, &nav_html, root))
}

/// Returns the introductory text (Markdown).
fn intro_md() -> &'static str {
    include_str!("../content/intro.md")
}

/// Returns the complete CSS stylesheet.
fn style_css() -> &'static str {
    include_str!("../static/css/style.css")
}
