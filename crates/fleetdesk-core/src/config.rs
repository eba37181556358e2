//! Configuration resolution for `FleetDesk`.
//!
//! Implements hierarchical config resolution:
//! 1. Built-in defaults
//! 2. Global config (`<config dir>/fleetdesk/settings.json`)
//! 3. Explicit config file (`--config`)
//! 4. Environment variables
//! 5. CLI arguments (highest priority, applied by the binary)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Complete `FleetDesk` configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Directory holding the built dashboard; unset means API only.
    pub static_dir: Option<PathBuf>,
    pub max_body_bytes: usize,
    /// Load the three sample computers on startup.
    pub seed_sample_data: bool,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            static_dir: None,
            max_body_bytes: 64 * 1024,
            seed_sample_data: true,
            log_level: "info".to_string(),
        }
    }
}

/// Load configuration with hierarchical resolution.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global_path) = global_config_path() {
        if global_path.exists() {
            config = load_config_file(&global_path)?;
        }
    }

    // An explicitly requested file must exist
    if let Some(path) = explicit_path {
        config = load_config_file(path)?;
    }

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    Ok(config)
}

/// Get the global config file path.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("fleetdesk").join("settings.json"))
}

fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}

fn apply_env_overrides(config: &mut Config, var: impl Fn(&str) -> Option<String>) {
    if let Some(val) = var("FLEETDESK_LISTEN_ADDR") {
        config.server.listen_addr = val;
    }
    if let Some(val) = var("FLEETDESK_STATIC_DIR") {
        config.server.static_dir = Some(PathBuf::from(val));
    }
    if let Some(val) = var("FLEETDESK_MAX_BODY_BYTES") {
        if let Ok(n) = val.parse() {
            config.server.max_body_bytes = n;
        }
    }
    if let Some(val) = var("FLEETDESK_SEED_SAMPLE_DATA") {
        if let Ok(b) = val.parse() {
            config.server.seed_sample_data = b;
        }
    }
    if let Some(val) = var("FLEETDESK_LOG_LEVEL") {
        config.server.log_level = val;
    }
}
