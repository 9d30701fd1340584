//! Renders page data as HTML.
//!
//! Maths is emitted as `\( … \)` markup for MathJax to typeset in the
//! browser; S3 letters are coloured with [`colourise`].

use pulldown_cmark::{html, Options, Parser};
use quotient_group::Notation;

use crate::colour::colourise;
use crate::config::SiteConfig;
use crate::model::{CosetPanel, ElementView, KernelDescription, MapsTo};

/// The arrow between a label and its image.
pub const MAPSTO: &str = r"\( \mapsto \)";

/// Renders a complete page inside the site shell.
///
/// `root` is the relative path from the page to the site root.
#[must_use]
pub fn render_page(
    config: &SiteConfig,
    title: &str,
    body_html: &str,
    nav_html: &str,
    root: &str,
) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} — {site_title}</title>
<link rel="stylesheet" href="{css_url}">
<script async src="{mathjax_url}"></script>
</head>
<body>
<a href="#main-content" class="skip-link">Skip to main content</a>
<header class="site-header">
<a href="{home_url}" class="site-logo">{site_title}</a>
<nav aria-label="Element selection">
{nav_html}
</nav>
</header>
<main id="main-content">
{body_html}
</main>
<footer class="site-footer">
<p>Symmetries of the tetrahedron and the quotient S4/K4 ≅ S3.</p>
</footer>
<script src="{js_url}" defer></script>
</body>
</html>
"##,
        title = escape_html(title),
        site_title = escape_html(&config.title),
        css_url = escape_html(&format!("{root}css/style.css")),
        mathjax_url = escape_html(&config.mathjax_url),
        home_url = escape_html(&format!("{root}index.html")),
        js_url = escape_html(&format!("{root}js/select.js")),
        nav_html = nav_html,
        body_html = body_html,
    )
}

/// Renders the body for one selection: animation, explicit actions, and the
/// description of the map.
#[must_use]
pub fn render_element_body(
    view: &ElementView,
    intro_html: &str,
    description_html: &str,
    root: &str,
) -> String {
    let kind = if view.rotation { "rotation" } else { "reflection" };
    format!(
        r#"<section class="intro">
{intro_html}
</section>
<section class="mapping" aria-label="Selected element">
<figure class="animation">
<img id="animation" src="{src}" alt="Tetrahedron symmetry {one_line}">
<figcaption>{label} acts on the tetrahedron as a {kind}.</figcaption>
</figure>
<div class="explicit s4-action">
<h2>{label}</h2>
{s4_lines}
</div>
<div class="explicit s3-action">
<h2>Image in S3</h2>
<p id="S3-element">{s3_image}</p>
{s3_lines}
</div>
</section>
{description_html}"#,
        src = escape_html(&format!("{root}{}", view.animation)),
        one_line = escape_html(&view.one_line),
        label = escape_html(&view.label),
        s4_lines = render_s4_action(&view.s4_action),
        s3_image = colourise(&view.s3_image),
        s3_lines = render_s3_action(&view.s3_action),
    )
}

/// Renders `i ↦ σ(i)` lines with ids `S4image1` … `S4image4`.
#[must_use]
pub fn render_s4_action(action: &[MapsTo]) -> String {
    action
        .iter()
        .map(|m| {
            format!(
                "<p id=\"S4image{from}\">{from} {MAPSTO} {to}</p>\n",
                from = escape_html(&m.from.to_string()),
                to = escape_html(&m.to.to_string()),
            )
        })
        .collect()
}

/// Renders coloured `x ↦ y` lines with ids `S3imagea` … `S3imagec`.
#[must_use]
pub fn render_s3_action(action: &[MapsTo]) -> String {
    action
        .iter()
        .map(|m| {
            format!(
                "<p id=\"S3image{id}\">{from} {MAPSTO} {to}</p>\n",
                id = escape_html(&m.from.to_string()),
                from = colourise(&m.from.to_string()),
                to = colourise(&m.to.to_string()),
            )
        })
        .collect()
}

/// Renders the six coset panels and the kernel for `notation`.
#[must_use]
pub fn render_description(
    notation: Notation,
    panels: &[CosetPanel],
    kernel: &KernelDescription,
) -> String {
    let mut html = String::from("<section class=\"description\" aria-label=\"The quotient map\">\n");
    html.push_str(&format!(
        "<h2>The map S4 → S3 ({})</h2>\n<div class=\"desc-grid\">\n",
        escape_html(notation.title())
    ));
    for panel in panels {
        html.push_str(&render_coset_panel(panel));
    }
    html.push_str("</div>\n");
    html.push_str(&render_kernel(kernel));
    html.push_str("</section>\n");
    html
}

/// Renders one panel: each member followed by its (shared) image.
#[must_use]
pub fn render_coset_panel(panel: &CosetPanel) -> String {
    let mut html = format!(
        "<div class=\"desc-column\" id=\"desc-column-{}\">\n",
        panel.index
    );
    for member in &panel.members {
        html.push_str(&format!(
            "<p>{} {MAPSTO} {}</p>\n",
            escape_html(member),
            colourise(&panel.image)
        ));
    }
    html.push_str("</div>\n");
    html
}

/// Renders the kernel as an explicit set.
#[must_use]
pub fn render_kernel(kernel: &KernelDescription) -> String {
    let members: Vec<String> = kernel
        .members
        .iter()
        .map(|m| escape_html(m.as_str()))
        .collect();
    format!(
        "<p id=\"K4-desc\">\\(K_4 = \\big\\{{ \\) {}\\( \\big\\}}. \\)</p>\n",
        members.join(", ")
    )
}

/// Converts Markdown to HTML using pulldown-cmark.
#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, opts);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Escapes HTML special characters in a string.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{coset_panels, element_view, kernel_description};

    #[test]
    fn s4_lines() {
        let view = element_view(Notation::Cycle, "(123)", "GIFs").unwrap();
        let html = render_s4_action(&view.s4_action);
        assert!(html.contains(r#"<p id="S4image1">1 \( \mapsto \) 2</p>"#));
        assert!(html.contains(r#"<p id="S4image4">4 \( \mapsto \) 4</p>"#));
        assert_eq!(html.lines().count(), 4);
    }

    #[test]
    fn s3_lines_are_coloured() {
        let view = element_view(Notation::Cycle, "(123)", "GIFs").unwrap();
        let html = render_s3_action(&view.s3_action);
        assert!(html.starts_with(
            r#"<p id="S3imagea"><span style="color:red;">a</span> \( \mapsto \) <span style="color:blue;">b</span></p>"#
        ));
        assert_eq!(html.lines().count(), 3);
    }

    #[test]
    fn kernel_line() {
        let html = render_kernel(&kernel_description(Notation::Cycle));
        assert_eq!(
            html,
            "<p id=\"K4-desc\">\\(K_4 = \\big\\{ \\) () = id, (12)(34), (13)(24), (14)(23)\\( \\big\\}. \\)</p>\n"
        );
    }

    #[test]
    fn description_has_six_columns() {
        let html = render_description(
            Notation::OneLine,
            &coset_panels(Notation::OneLine),
            &kernel_description(Notation::OneLine),
        );
        for i in 1..=6 {
            assert!(html.contains(&format!("id=\"desc-column-{i}\"")));
        }
        assert!(!html.contains("desc-column-7"));
        assert!(html.contains(r"<p>2143 \( \mapsto \) "));
    }

    #[test]
    fn page_shell_links_relative_to_root() {
        let config = SiteConfig::default();
        let html = render_page(&config, "(12)", "<p>body</p>", "", "../");
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("href=\"../css/style.css\""));
        assert!(html.contains("src=\"../js/select.js\""));
        assert!(html.contains("<title>(12) — "));
    }

    #[test]
    fn markdown_renders() {
        assert_eq!(markdown_to_html("*S4*"), "<p><em>S4</em></p>\n");
    }
}
