//! `quotient-conformance` — Validates the group tables and a generated site.
//!
//! Runs the complete conformance suite across:
//! - Notation table (round-trip, actions, cosets, kernel, homomorphism)
//! - Site artifacts (HTML5 structure, output slots, coverage, links)
//!
//! **Usage:**
//! ```
//! quotient-conformance [--artifacts <path>] [--gif-dir <dir>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use quotient_conformance::{run_all, Severity, SitePaths};
use tracing_subscriber::EnvFilter;

/// Run the quotient visualiser conformance suite.
#[derive(Parser)]
#[command(
    name = "quotient-conformance",
    about = "Validate the group tables and the generated site"
)]
struct Args {
    /// Path to the generated site (default: public/).
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,

    /// Animation directory relative to the site root.
    #[arg(long, default_value = "GIFs")]
    gif_dir: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let paths = SitePaths {
        artifacts: args.artifacts,
        gif_dir: args.gif_dir,
    };

    let report = run_all(&paths)?;

    println!("Quotient Visualiser Conformance Report");
    println!("======================================");
    println!();

    for result in &report.results {
        println!("[{}] {} — {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let failed = report.count(Severity::Failure);
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
