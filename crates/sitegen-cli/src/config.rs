//! Site configuration.
//!
//! Values come from the defaults below, then an optional TOML file, then
//! command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file read when `--config` is not given, if it exists
pub const DEFAULT_CONFIG_FILE: &str = "sitegen.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Static assets mirrored into `public_dir`
    pub static_dir: PathBuf,

    /// Output directory, wiped before every build
    pub public_dir: PathBuf,

    /// Markdown source of the page
    pub content: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,

    /// Generated page
    pub dest: PathBuf,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            public_dir: PathBuf::from("public"),
            content: PathBuf::from("content/index.md"),
            template: PathBuf::from("template.html"),
            dest: PathBuf::from("public/index.html"),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid site config")
    }

    /// Load `path` if given, else `sitegen.toml` if present, else defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}
