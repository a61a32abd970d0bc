use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Almanac configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Formatting settings.
    #[serde(default)]
    pub format: FormatToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatToml {
    /// Locale key; omitted means the system locale.
    #[serde(default)]
    pub locale: Option<String>,
    /// Format name or pattern used for input and output.
    #[serde(default = "default_format")]
    pub default: String,
    /// Custom named patterns.
    #[serde(default)]
    pub patterns: BTreeMap<String, String>,
}

impl Default for FormatToml {
    fn default() -> Self {
        Self {
            locale: None,
            default: default_format(),
            patterns: BTreeMap::new(),
        }
    }
}

fn default_format() -> String {
    "iso8601".to_string()
}

impl AlmanacConfig {
    /// Reads and parses a TOML file, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
