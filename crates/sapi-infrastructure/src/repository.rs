//! Configuration-backed server repository
//!
//! Hydrates `Server` entities from loaded configuration and resolves their
//! backends through the provider registry at lookup time.

use async_trait::async_trait;
use std::sync::Arc;

// Force-link sapi-providers so registry entries are present wherever this
// repository is used
use sapi_providers as _;

use sapi_application::ports::registry::{BackendProviderConfig, resolve_backend};
use sapi_domain::entities::{Index, Server};
use sapi_domain::error::{Error, Result};
use sapi_domain::repositories::{ServerEntry, ServerRepository};

use crate::config::{AppConfig, ServerConfig};

/// Server repository over the loaded application configuration
pub struct ConfigServerRepository {
    config: AppConfig,
}

impl ConfigServerRepository {
    /// Create a repository over a loaded configuration
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Hydrate a server entity from its configuration
    fn server_from_config(server_id: &str, config: &ServerConfig) -> Server {
        let name = if config.name.is_empty() {
            server_id.to_string()
        } else {
            config.name.clone()
        };
        Server {
            id: server_id.to_string(),
            name,
            backend: config.backend.clone(),
            indexes: config
                .indexes
                .iter()
                .map(|index| Index {
                    id: index.id.clone(),
                    server_id: server_id.to_string(),
                    enabled: index.enabled,
                    read_only: index.read_only,
                    collection: index.collection.clone(),
                })
                .collect(),
        }
    }

    /// Build registry configuration for a server's backend
    fn backend_config(config: &ServerConfig) -> BackendProviderConfig {
        let mut backend_config = BackendProviderConfig::new(config.backend.clone())
            .with_timeout_secs(config.connector.timeout_secs);
        if !config.connector.base_url.is_empty() {
            backend_config = backend_config.with_base_url(config.connector.base_url.clone());
        }
        if !config.connector.core.is_empty() {
            backend_config = backend_config.with_core(config.connector.core.clone());
        }
        if let (Some(username), Some(password)) =
            (&config.connector.username, &config.connector.password)
        {
            backend_config = backend_config.with_credentials(username.clone(), password.clone());
        }
        backend_config
    }
}

#[async_trait]
impl ServerRepository for ConfigServerRepository {
    async fn find_by_id(&self, server_id: &str) -> Result<ServerEntry> {
        let server_config = self
            .config
            .servers
            .get(server_id)
            .ok_or_else(|| Error::not_found(format!("server '{server_id}'")))?;

        let backend = resolve_backend(&Self::backend_config(server_config)).map_err(|e| {
            Error::configuration(format!(
                "Failed to resolve backend for server '{server_id}': {e}"
            ))
        })?;

        Ok(ServerEntry {
            server: Self::server_from_config(server_id, server_config),
            backend,
        })
    }

    async fn list(&self) -> Result<Vec<Server>> {
        let mut servers: Vec<Server> = self
            .config
            .servers
            .iter()
            .map(|(id, config)| Self::server_from_config(id, config))
            .collect();
        servers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(servers)
    }
}
