//! # Service Configuration
//!
//! Layered configuration: an optional TOML file overlaid with
//! `DASHBUILDER_`-prefixed environment variables. Every field carries a
//! default so the service starts with no configuration present.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file probed when no explicit path is given.
const DEFAULT_CONFIG_FILE: &str = "config/dashbuilder.toml";

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    pub web: WebConfig,
    pub storage: StorageConfig,
    pub security: SecurityConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub bind_address: String,
    pub request_timeout_ms: u64,
    pub cors_enabled: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_ms: 30_000,
            cors_enabled: true,
        }
    }
}

/// Filesystem locations for application state and export artifacts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root of the application state exported by `GET /dashbuilder/export`.
    pub data_dir: PathBuf,
    /// Directory export artifacts are written into. Created on demand.
    pub export_dir: PathBuf,
    /// Directory holding one `{name}.json` layout document per perspective.
    pub perspectives_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            export_dir: PathBuf::from("exports"),
            perspectives_dir: PathBuf::from("data/perspectives"),
        }
    }
}

/// Security registry configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// TOML registry of users with their page read grants.
    pub users_file: PathBuf,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from("config/users.toml"),
        }
    }
}

impl TransferConfig {
    /// Load configuration from `path` (or the default location) plus the
    /// environment. Missing files are not an error; the defaults apply.
    ///
    /// Environment variables use `__` as the section separator, e.g.
    /// `DASHBUILDER_WEB__BIND_ADDRESS=127.0.0.1:9090`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = path
            .map(File::from)
            .unwrap_or_else(|| File::from(Path::new(DEFAULT_CONFIG_FILE)))
            .required(false);

        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("DASHBUILDER").separator("__"))
            .build()?
            .try_deserialize()
    }
}
