//! Configuration loading for the engine

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "TAGDEX_CONFIG";

/// Engine configuration: asset store location and HTTP behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Base URL of the static asset store
    pub base_url: String,

    /// Path prefix applied to item references when reporting matches
    pub item_store: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "data".to_string(),
            item_store: "/data/sprites".to_string(),
            timeout_secs: 30,
        }
    }
}

impl EngineConfig {
    /// Resolve configuration following the priority order:
    /// 1. Explicit path argument (highest priority)
    /// 2. `TAGDEX_CONFIG` environment variable
    /// 3. Platform config file (`<config_dir>/tagdex/config.toml`)
    /// 4. Compiled defaults (fallback)
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }

        if let Some(path) = default_config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a TOML file
    ///
    /// Missing keys fall back to their defaults; unparseable TOML is a
    /// configuration error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Platform config file location
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tagdex").join("config.toml"))
}
