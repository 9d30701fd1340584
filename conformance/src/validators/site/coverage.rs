//! Site coverage validator.
//!
//! Verifies that the site covers the whole group:
//! - one page per element per notation, plus `index.html`
//! - `elements.json` lists all 24 elements
//! - the stylesheet and selector script are present
//! - the tetrahedron animations are present (warning only)

use std::path::Path;

use anyhow::{Context, Result};
use quotient_group::tetrahedron::animation_file;
use quotient_group::{Notation, NotationTable};
use quotient_site::extractor::page_path;
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "site/coverage";

/// Validates that every element has its pages and assets.
///
/// # Errors
///
/// Returns an error if `elements.json` exists but cannot be read.
pub fn validate(artifacts: &Path, gif_dir: &str) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    check_element_pages(artifacts, &mut report);
    check_elements_json(artifacts, &mut report)?;
    check_assets(artifacts, &mut report);
    check_animations(artifacts, gif_dir, &mut report);

    Ok(report)
}

/// Checks that each element has a page in each notation.
fn check_element_pages(artifacts: &Path, report: &mut ConformanceReport) {
    let table = NotationTable::full();
    let mut missing: Vec<String> = Vec::new();

    for notation in Notation::ALL {
        for label in table.elements(notation) {
            let page = page_path(notation, label);
            if !artifacts.join(&page).exists() {
                missing.push(page);
            }
        }
    }
    if !artifacts.join("index.html").exists() {
        missing.push("index.html".to_string());
    }

    report.push(TestResult::from_issues(
        VALIDATOR,
        "All 48 element pages and index.html present",
        "Missing element pages",
        missing,
    ));
}

/// Checks that `elements.json` lists every element with its image.
fn check_elements_json(artifacts: &Path, report: &mut ConformanceReport) -> Result<()> {
    let json_path = artifacts.join("elements.json");
    if !json_path.exists() {
        report.push(TestResult::fail(VALIDATOR, "elements.json not found"));
        return Ok(());
    }

    let content = std::fs::read_to_string(&json_path)
        .with_context(|| format!("Failed to read {}", json_path.display()))?;
    let rows: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("elements.json is not valid JSON: {e}"),
            ));
            return Ok(());
        }
    };

    let table = NotationTable::full();
    let mut issues: Vec<String> = Vec::new();
    let rows = rows.as_array().map(Vec::as_slice).unwrap_or_default();
    if rows.len() != table.entries().len() {
        issues.push(format!(
            "expected {} rows, found {}",
            table.entries().len(),
            rows.len()
        ));
    }
    for entry in table.entries() {
        let row = rows
            .iter()
            .find(|r| r.get("cycle").and_then(Value::as_str) == Some(entry.cycle.as_str()));
        match row {
            None => issues.push(format!("{}: missing row", entry.cycle)),
            Some(row) => {
                if row.get("image_cycle").and_then(Value::as_str) != Some(entry.image_cycle.as_str())
                {
                    issues.push(format!("{}: wrong image", entry.cycle));
                }
                if row.get("one_line").and_then(Value::as_str) != Some(entry.one_line.as_str()) {
                    issues.push(format!("{}: wrong one-line form", entry.cycle));
                }
            }
        }
    }

    report.push(TestResult::from_issues(
        VALIDATOR,
        "elements.json lists all 24 elements",
        "elements.json is incomplete",
        issues,
    ));
    Ok(())
}

/// Checks the stylesheet and selector script.
fn check_assets(artifacts: &Path, report: &mut ConformanceReport) {
    let missing: Vec<String> = ["css/style.css", "js/select.js"]
        .into_iter()
        .filter(|p| !artifacts.join(p).exists())
        .map(str::to_string)
        .collect();
    report.push(TestResult::from_issues(
        VALIDATOR,
        "Stylesheet and selector script present",
        "Missing site assets",
        missing,
    ));
}

/// Animations are not generated, so their absence is a warning.
fn check_animations(artifacts: &Path, gif_dir: &str, report: &mut ConformanceReport) {
    let missing: Vec<String> = NotationTable::full()
        .entries()
        .iter()
        .map(|e| format!("{gif_dir}/{}", animation_file(&e.element)))
        .filter(|p| !artifacts.join(p).exists())
        .collect();

    if missing.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "All 24 animations present"));
    } else {
        report.push(
            TestResult::warn(
                VALIDATOR,
                format!("{} of 24 animations missing", missing.len()),
            )
            .with_details(missing),
        );
    }
}
