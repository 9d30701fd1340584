//! `quotient-show` — Prints the explicit action of one S4 element and of its
//! image in S3.
//!
//! **Usage:**
//! ```
//! quotient-show [--notation <cycle|one-line>] [--json] <element>
//! ```
//!
//! The element may be written in any valid form (`"(231)"`, `"(1)(23)"`,
//! `"id"`); it is shown in canonical form.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use quotient_group::alphabet::DIGITS;
use quotient_group::{Notation, NotationTable};
use quotient_site::extractor::element_view;
use quotient_site::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Show how an S4 element acts and where it lands in S3.
#[derive(Parser)]
#[command(
    name = "quotient-show",
    about = "Show the explicit action of an S4 element and its image in S3"
)]
struct Args {
    /// Notation the element is written in.
    #[arg(long, default_value = "cycle")]
    notation: Notation,

    /// Print the mapping as JSON.
    #[arg(long)]
    json: bool,

    /// The element, e.g. "(123)" or "2314".
    element: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let sigma = args
        .notation
        .parse(&args.element, &DIGITS)
        .with_context(|| format!("Cannot read {:?} in {}", args.element, args.notation.title()))?;
    let label = args.notation.format(&sigma, &DIGITS);
    tracing::debug!(input = %args.element, canonical = %label, "parsed element");

    let config = SiteConfig::default();
    let view = element_view(args.notation, &label, &config.gif_dir)
        .ok_or_else(|| anyhow!("No table entry for {}", label))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let table = NotationTable::full();
    let entry = table
        .entry(&sigma)
        .ok_or_else(|| anyhow!("No table entry for {}", label))?;

    println!("{}  ({})", view.label, args.notation.title());
    for line in &view.s4_action {
        println!("  {} ↦ {}", line.from, line.to);
    }
    println!();
    println!("Image in S3: {}", view.s3_image);
    for line in &view.s3_action {
        println!("  {} ↦ {}", line.from, line.to);
    }
    println!();
    println!(
        "{}, {}; coset {} of K4",
        sigma.cycle_type().as_str(),
        if view.rotation { "rotation" } else { "reflection" },
        entry.coset + 1
    );
    println!("Animation: {}", view.animation);

    Ok(())
}
