//! HTML5 structural validator for the generated site.
//!
//! Checks on every `.html` file in the artifacts directory:
//! - `<title>`, `<nav>`, `<main>`, and `<footer>` present
//! - `lang` attribute on `<html>`
//! - skip-to-content link and `alt` on every `<img>`
//! - both selectors and every output slot the mapping is written into

use std::path::Path;

use anyhow::Result;

use crate::report::{ConformanceReport, TestResult};

use super::html_pages;

const VALIDATOR: &str = "site/html";

/// Element ids every page must carry.
const OUTPUT_IDS: [&str; 17] = [
    "notation_select",
    "S4-element-select",
    "S4image1",
    "S4image2",
    "S4image3",
    "S4image4",
    "S3-element",
    "S3imagea",
    "S3imageb",
    "S3imagec",
    "desc-column-1",
    "desc-column-2",
    "desc-column-3",
    "desc-column-4",
    "desc-column-5",
    "desc-column-6",
    "K4-desc",
];

/// Validates the structure of all site pages.
///
/// # Errors
///
/// Returns an error if the artifacts directory cannot be walked.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !artifacts.exists() {
        report.push(TestResult::warn(
            VALIDATOR,
            "Artifacts directory not found, skipping HTML validation",
        ));
        return Ok(report);
    }

    let (pages, mut issues) = html_pages(artifacts);
    if pages.is_empty() {
        report.push(TestResult::warn(
            VALIDATOR,
            "No HTML files found in artifacts directory",
        ));
        return Ok(report);
    }

    for (path, content) in &pages {
        issues.extend(check_html_structure(path, content));
    }

    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {} HTML pages pass structural validation", pages.len()),
        format!("HTML structure issues across {} pages checked", pages.len()),
        issues,
    ));
    Ok(report)
}

/// Checks a single page using string-based heuristics.
fn check_html_structure(path: &str, content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    let mut issues = Vec::new();

    for tag in ["<title", "<main", "<nav", "<footer"] {
        if !lower.contains(tag) {
            issues.push(format!("{path}: missing {tag}> element"));
        }
    }
    if !lower.contains("<html lang=") {
        issues.push(format!("{path}: <html> missing lang attribute"));
    }
    if !lower.contains("href=\"#main-content\"") {
        issues.push(format!("{path}: missing skip-to-main-content link"));
    }

    let mut remaining = lower.as_str();
    while let Some(idx) = remaining.find("<img") {
        remaining = &remaining[idx + 4..];
        let end = remaining.find('>').unwrap_or(remaining.len());
        if !remaining[..end].contains("alt=") {
            issues.push(format!("{path}: <img> missing alt attribute"));
        }
    }

    for id in OUTPUT_IDS {
        if !content.contains(&format!("id=\"{id}\"")) {
            issues.push(format!("{path}: missing #{id}"));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_warns() {
        let report = validate(Path::new("/nonexistent/quotient-site")).unwrap();
        assert!(report.all_passed());
        assert_eq!(report.results.len(), 1);
    }

    #[test]
    fn flags_missing_slots() {
        let issues = check_html_structure(
            "x.html",
            "<html lang=\"en\"><title>x</title><nav></nav><main></main><footer></footer>",
        );
        assert!(issues.iter().any(|i| i.contains("skip-to-main-content")));
        assert!(issues.iter().any(|i| i.ends_with("#K4-desc")));
        assert!(issues.iter().any(|i| i.ends_with("#S4image1")));
    }

    #[test]
    fn flags_img_without_alt() {
        let issues = check_html_structure("x.html", "<img src=\"a.gif\">");
        assert!(issues.iter().any(|i| i.contains("alt attribute")));
    }
}
