//! Site generator configuration.
//!
//! Every field has a default, so an empty TOML file (or none at all) is a
//! valid configuration. Command-line flags override what the file sets.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quotient_group::Notation;
use serde::{Deserialize, Serialize};

/// MathJax 2 from a public CDN, configured for `\( … \)` inline maths.
pub const DEFAULT_MATHJAX_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.9/MathJax.js?config=TeX-AMS_HTML";

/// Settings for one run of the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title.
    pub title: String,
    /// Directory the site is written to.
    pub out_dir: PathBuf,
    /// Directory (relative to the site root) holding the tetrahedron GIFs.
    pub gif_dir: String,
    /// Script URL for the maths typesetter.
    pub mathjax_url: String,
    /// Notation shown on the landing page.
    pub default_notation: Notation,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "S4 → S3 via the Klein four-group".to_string(),
            out_dir: PathBuf::from("public"),
            gif_dir: "GIFs".to_string(),
            mathjax_url: DEFAULT_MATHJAX_URL.to_string(),
            default_notation: Notation::Cycle,
        }
    }
}

impl SiteConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or names an unknown key.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid site configuration")
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config: {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("In config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded site configuration");
        Ok(config)
    }
}
