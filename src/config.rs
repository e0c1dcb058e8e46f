//! User configuration loaded from `config.toml`.

use crate::calculator::{DEFAULT_ERROR_MARKER, DEFAULT_PRECISION, MAX_PRECISION};
use crate::keypad::Settings;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from `$XDG_CONFIG_HOME/calcpad/config.toml`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fractional digits shown in results (clamped to `MAX_PRECISION`).
    pub precision: u32,
    /// Text shown when an expression cannot be evaluated.
    pub error_marker: String,
    /// Copy every successful result to the clipboard.
    pub copy_on_evaluate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
            copy_on_evaluate: false,
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn parse(contents: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(contents)?;
        if config.precision > MAX_PRECISION {
            tracing::warn!(
                precision = config.precision,
                max = MAX_PRECISION,
                "precision too large, clamping"
            );
            config.precision = MAX_PRECISION;
        }
        Ok(config)
    }

    /// Calculator settings derived from this config.
    pub fn settings(&self) -> Settings {
        Settings {
            precision: self.precision,
            error_marker: self.error_marker.clone(),
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
}
