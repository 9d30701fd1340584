//! `quotient-site` — Generates the S4 → S3 quotient visualiser as a static site.
//!
//! **Outputs (`public/`):**
//! - `index.html` — The identity in the default notation
//! - `cycle/<slug>.html` — One page per element in cycle notation (24)
//! - `one-line/<slug>.html` — One page per element in one-line notation (24)
//! - `elements.json` — The full notation table
//! - `css/style.css`, `js/select.js` — Stylesheet and selector navigation
//!
//! **Usage:**
//! ```
//! quotient-site [--out <path>] [--config <site.toml>] [--notation <cycle|one-line>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use quotient_group::Notation;
use quotient_site::{generate, SiteConfig};
use tracing_subscriber::EnvFilter;

/// Generate the S4 → S3 quotient visualiser.
#[derive(Parser)]
#[command(
    name = "quotient-site",
    about = "Generate the S4 → S3 quotient visualiser as a static site"
)]
struct Args {
    /// Output directory (overrides the config file; default: public/).
    #[arg(long)]
    out: Option<PathBuf>,

    /// TOML site configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Notation shown on the landing page (overrides the config file).
    #[arg(long)]
    notation: Option<Notation>,

    /// Animation directory relative to the output (overrides the config file).
    #[arg(long)]
    gif_dir: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    if let Some(out) = args.out {
        config.out_dir = out;
    }
    if let Some(notation) = args.notation {
        config.default_notation = notation;
    }
    if let Some(gif_dir) = args.gif_dir {
        config.gif_dir = gif_dir;
    }

    let pages = generate(&config)?;

    println!("Site generated successfully.");
    println!("  Pages:  {}", pages);
    println!("  Output: {}", config.out_dir.display());

    Ok(())
}
