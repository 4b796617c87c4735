//! Optional project-local configuration.
//!
//! `orgh` reads `.orgh.toml` from the working directory when present.
//! A missing file means defaults; a present-but-broken file is an error
//! (silent fallback would mask typos).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Contents of `.orgh.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Default snapshot file, used when neither `--snapshot` nor
    /// `ORGH_SNAPSHOT` is given.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from `dir/.orgh.toml`, defaulting when absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(".orgh.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
    }
}
