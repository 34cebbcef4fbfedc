//! Backend Provider Registry
//!
//! Auto-registration system for search backend providers using linkme
//! distributed slices. Providers register themselves via
//! `#[linkme::distributed_slice]` and are discovered at runtime by name.

use std::collections::HashMap;
use std::sync::Arc;

use sapi_domain::ports::SearchBackend;

/// Configuration for backend provider creation
///
/// Contains the connection options a backend provider might need. Providers
/// should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct BackendProviderConfig {
    /// Provider name (e.g., "solr", "solr_cloud", "null")
    pub provider: String,
    /// Base URL of the search service
    pub base_url: Option<String>,
    /// Default core or collection name
    pub core: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Basic-auth username
    pub username: Option<String>,
    /// Basic-auth password
    pub password: Option<String>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl BackendProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the default core
    pub fn with_core(mut self, core: impl Into<String>) -> Self {
        self.core = Some(core.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Set basic-auth credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for backend providers
///
/// Each backend implementation registers itself with this entry using
/// `#[linkme::distributed_slice(BACKEND_PROVIDERS)]`. The entry contains
/// metadata and a factory function to create backend instances.
pub struct BackendProviderEntry {
    /// Unique provider name (e.g., "solr", "solr_cloud", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create backend instance
    pub factory: fn(&BackendProviderConfig) -> Result<Arc<dyn SearchBackend>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static BACKEND_PROVIDERS: [BackendProviderEntry] = [..];

/// Resolve a backend provider by name from the registry
///
/// Searches the registry for a provider matching the configured name and
/// creates an instance using the provider's factory function.
///
/// # Arguments
/// * `config` - Configuration containing provider name and settings
///
/// # Returns
/// * `Ok(Arc<dyn SearchBackend>)` - Created backend instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_backend(
    config: &BackendProviderConfig,
) -> Result<Arc<dyn SearchBackend>, String> {
    let provider_name = &config.provider;

    for entry in BACKEND_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    // List available providers for helpful error message
    let available: Vec<&str> = BACKEND_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown backend provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered backend providers
///
/// Returns a list of (name, description) tuples for all registered backend
/// providers. Useful for CLI help output.
pub fn list_backend_providers() -> Vec<(&'static str, &'static str)> {
    BACKEND_PROVIDERS.iter().map(|e| (e.name, e.description)).collect()
}
