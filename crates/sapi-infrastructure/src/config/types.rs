//! Configuration types
//!
//! The TOML schema mirrors the entity model: servers own indexes and name a
//! backend provider; the connector block carries transport settings.
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [servers.pantheon]
//! name = "Pantheon Solr"
//! backend = "solr"
//!
//! [servers.pantheon.connector]
//! base_url = "http://localhost:8983"
//! core = "collection1"
//!
//! [[servers.pantheon.indexes]]
//! id = "content"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Configured search servers, keyed by server id
    pub servers: HashMap<String, ServerConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// A configured search server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Human-readable name; defaults to the server id
    pub name: String,
    /// Backend provider name from the registry
    pub backend: String,
    /// Connector transport settings
    pub connector: ConnectorConfig,
    /// Indexes attached to this server, in order
    pub indexes: Vec<IndexConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            backend: "solr".to_string(),
            connector: ConnectorConfig::default(),
            indexes: Vec::new(),
        }
    }
}

/// Connector transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Base URL of the search service
    pub base_url: String,
    /// Default core or collection name
    pub core: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Basic-auth username
    pub username: Option<String>,
    /// Basic-auth password
    pub password: Option<String>,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            core: String::new(),
            timeout_secs: 30,
            username: None,
            password: None,
        }
    }
}

/// An index attached to a configured server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Index identifier
    pub id: String,
    /// Whether the index is enabled
    pub enabled: bool,
    /// Whether the index is read-only for maintenance operations
    pub read_only: bool,
    /// Cloud-mode collection name; defaults to the index id
    pub collection: Option<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            enabled: true,
            read_only: false,
            collection: None,
        }
    }
}
