//! Conformance suite for the S4 → S3 quotient visualiser.
//!
//! Checks the derived group tables against the laws they must satisfy and
//! the generated site against the structure the pages promise.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Notation table | Round-trip, bijective actions, coset partition, K4 kernel, homomorphism |
//! | Site | HTML5 structure, output slots, page coverage, internal links |
//!
//! # Entry Point
//!
//! ```no_run
//! use quotient_conformance::{run_all, SitePaths};
//! use std::path::PathBuf;
//!
//! let paths = SitePaths {
//!     artifacts: PathBuf::from("public"),
//!     gif_dir: "GIFs".to_string(),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
pub struct SitePaths {
    /// Directory containing the generated site (`index.html`, `cycle/`, …).
    pub artifacts: std::path::PathBuf,
    /// Animation directory, relative to `artifacts`.
    pub gif_dir: String,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Group tables (operates on the live table, no file I/O)
/// 2. Site HTML structure
/// 3. Site coverage
/// 4. Site internal links
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &SitePaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::group::validate());
    report.extend(validators::site::html::validate(&paths.artifacts)?);
    report.extend(validators::site::coverage::validate(
        &paths.artifacts,
        &paths.gif_dir,
    )?);
    report.extend(validators::site::links::validate(&paths.artifacts)?);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_site_conforms() {
        let dir = tempfile::tempdir().unwrap();
        let config = quotient_site::SiteConfig {
            out_dir: dir.path().to_path_buf(),
            ..quotient_site::SiteConfig::default()
        };
        quotient_site::generate(&config).unwrap();

        let report = run_all(&SitePaths {
            artifacts: dir.path().to_path_buf(),
            gif_dir: config.gif_dir.clone(),
        })
        .unwrap();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "Conformance failures: {:#?}", failures);
    }

    #[test]
    fn missing_site_fails_coverage() {
        let report = run_all(&SitePaths {
            artifacts: "/nonexistent/quotient-site".into(),
            gif_dir: "GIFs".to_string(),
        })
        .unwrap();
        assert!(!report.all_passed());
    }
}
