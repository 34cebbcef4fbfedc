//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values, using Figment for source merging.

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sapi_domain::error::{Error, Result};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources
    /// override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `SAPI_LOGGING_LEVEL`)
    pub fn load(&self) -> Result<AppConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Configuration file not found: {}", config_path.display());
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            info!("Configuration loaded from {}", default_path.display());
        }

        // Add environment variables
        // Uses underscore as separator for nested keys (e.g., SAPI_LOGGING_LEVEL)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        // Extract and deserialize configuration
        let app_config: AppConfig = figment.extract().map_err(|e| {
            Error::configuration_with_source("Failed to extract configuration", e)
        })?;

        // Validate configuration
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the default configuration file, if any exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        // Try various common config file locations
        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections after extraction.
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_server_configs(config)?;
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_configs(config: &AppConfig) -> Result<()> {
    for (server_id, server) in &config.servers {
        if server.backend.is_empty() {
            return Err(Error::configuration(format!(
                "Server '{server_id}' has an empty backend name"
            )));
        }

        // Solr-family backends need a reachable update endpoint
        if server.backend.starts_with("solr") {
            if server.connector.base_url.is_empty() {
                return Err(Error::configuration(format!(
                    "Server '{server_id}' is missing connector.base_url"
                )));
            }
            if server.connector.core.is_empty() {
                return Err(Error::configuration(format!(
                    "Server '{server_id}' is missing connector.core"
                )));
            }
        }

        let mut seen = HashSet::new();
        for index in &server.indexes {
            if index.id.is_empty() {
                return Err(Error::configuration(format!(
                    "Server '{server_id}' has an index with an empty id"
                )));
            }
            if !seen.insert(index.id.as_str()) {
                return Err(Error::configuration(format!(
                    "Server '{server_id}' has duplicate index id '{}'",
                    index.id
                )));
            }
        }
    }
    Ok(())
}
