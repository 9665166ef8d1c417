//! # Configuration
//!
//! Centralizes settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wayfarer/config.toml`. The app has a single tunable,
//! the discovery API base URL, but the resolution order matters for tests
//! and for pointing the browser at a mock or staging server.

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;

/// Env var consulted between the config file and the CLI flag.
pub const BASE_URL_ENV: &str = "WAYFARER_BASE_URL";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WayfarerConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

/// Fully resolved settings, ready to hand to the TUI.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".wayfarer").join("config.toml"))
}

/// Reads the config file if present. A missing file is the common case and
/// yields defaults; a malformed file is logged and also yields defaults
/// rather than blocking startup.
pub fn load() -> WayfarerConfig {
    let Some(path) = config_path() else {
        return WayfarerConfig::default();
    };
    match fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str(&raw) {
            Ok(config) => {
                debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("ignoring malformed config {}: {e}", path.display());
                WayfarerConfig::default()
            }
        },
        Err(_) => WayfarerConfig::default(),
    }
}

/// Applies the override hierarchy. `cli_base_url` comes from `--base-url`
/// and wins over everything.
pub fn resolve(config: &WayfarerConfig, cli_base_url: Option<String>) -> ResolvedConfig {
    let base_url = cli_base_url
        .or_else(|| std::env::var(BASE_URL_ENV).ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig { base_url }
}
