use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OctoechosConfig {
    /// Date line settings.
    #[serde(default)]
    pub display: DisplayToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_true")]
    pub show_weekday: bool,
    #[serde(default = "default_true")]
    pub show_tone: bool,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            show_weekday: true,
            show_tone: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Load the configuration file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<OctoechosConfig> {
    let Some(path) = path else {
        return Ok(OctoechosConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
