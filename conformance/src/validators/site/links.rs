//! Site internal link validator.
//!
//! Checks that every `href` and selector `data-href` in the generated pages
//! points to an existing file.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

use super::{html_pages, relative};

const VALIDATOR: &str = "site/links";

/// Validates internal links across all site pages.
///
/// # Errors
///
/// Returns an error if the artifacts directory cannot be walked.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !artifacts.exists() {
        report.push(TestResult::warn(
            VALIDATOR,
            "Artifacts directory not found, skipping link check",
        ));
        return Ok(report);
    }

    let all_files: HashSet<String> = WalkDir::new(artifacts)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| relative(artifacts, e.path()))
        .collect();

    let (pages, mut broken) = html_pages(artifacts);
    let mut checked = 0usize;

    for (path, content) in &pages {
        let dir = path.rsplit_once('/').map(|(d, _)| d).unwrap_or("");
        for href in extract_hrefs(content) {
            if is_external(href) {
                continue;
            }
            checked += 1;
            let resolved = resolve_href(dir, href);
            if !all_files.contains(&resolved) {
                broken.push(format!("{path}: broken link → {href}"));
            }
        }
    }

    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {checked} internal links resolve"),
        format!("{} broken internal link(s) in site", broken.len()),
        broken,
    ));
    Ok(report)
}

fn is_external(href: &str) -> bool {
    href.is_empty()
        || href.starts_with('#')
        || href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("//")
        || href.starts_with("mailto:")
}

/// Extracts the values of `href="…"` attributes, including `data-href`.
fn extract_hrefs(content: &str) -> Vec<&str> {
    let mut hrefs = Vec::new();
    let mut remaining = content;
    while let Some(idx) = remaining.find("href=\"") {
        remaining = &remaining[idx + 6..];
        match remaining.find('"') {
            Some(end) => {
                hrefs.push(&remaining[..end]);
                remaining = &remaining[end..];
            }
            None => break,
        }
    }
    hrefs
}

/// Resolves `href` relative to the page directory `dir`.
fn resolve_href(dir: &str, href: &str) -> String {
    let href = href.split('#').next().unwrap_or(href);
    let mut parts: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in href.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            s => parts.push(s),
        }
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_and_data_hrefs() {
        let html = r##"<a href="#main-content">skip</a><option data-href="../cycle/12.html">"##;
        assert_eq!(extract_hrefs(html), ["#main-content", "../cycle/12.html"]);
    }

    #[test]
    fn resolves_relative_paths() {
        assert_eq!(resolve_href("one-line", "../cycle/12-34.html"), "cycle/12-34.html");
        assert_eq!(resolve_href("", "css/style.css"), "css/style.css");
        assert_eq!(resolve_href("cycle", "../index.html#top"), "index.html");
    }

    #[test]
    fn generated_site_has_no_broken_links() {
        let dir = tempfile::tempdir().unwrap();
        let config = quotient_site::SiteConfig {
            out_dir: dir.path().to_path_buf(),
            ..quotient_site::SiteConfig::default()
        };
        quotient_site::generate(&config).unwrap();

        let report = validate(dir.path()).unwrap();
        assert!(report.all_passed(), "{:#?}", report.results);
    }
}
