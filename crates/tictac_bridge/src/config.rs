//! Bridge configuration.

use crate::BridgeError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the transport bridges and the console front end.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Interface the HTTP bridge binds to.
    #[serde(default = "default_host")]
    host: String,

    /// Port the HTTP bridge binds to.
    #[serde(default = "default_port")]
    port: u16,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Pause before the console starts a new game after one ends.
    #[serde(default = "default_auto_reset_delay_ms")]
    auto_reset_delay_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_filter() -> String {
    "info,tictac_engine=debug".to_string()
}

fn default_auto_reset_delay_ms() -> u64 {
    2000
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
            auto_reset_delay_ms: default_auto_reset_delay_ms(),
        }
    }
}

impl BridgeConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            BridgeError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)?;
        info!(host = %config.host, port = config.port, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces host and port when given on the command line.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}
