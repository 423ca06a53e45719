//! User configuration loaded from `config.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// How results are rendered on the display.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places kept for fractional results.
    pub precision: usize,
    /// Group the integer part in thousands (display only, never the clipboard).
    pub thousands_separator: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: 10,
            thousands_separator: false,
        }
    }
}

/// Clean-up applied to typed text before evaluation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub strip_whitespace: bool,
    /// Accept `×`, `÷` and `−` as operators.
    pub unicode_operators: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            strip_whitespace: true,
            unicode_operators: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy every successful result to the clipboard.
    pub copy_results: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub clipboard: ClipboardConfig,
}

impl Config {
    /// Default config file location, `~/.config/abacus/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("abacus").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the defaults. An explicitly given path
    /// must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => {
                    tracing::debug!("no config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
