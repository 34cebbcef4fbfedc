//! Null backend provider
//!
//! Stand-in for server configurations whose backend is not Solr-compatible.
//! It carries no connector and no capability; maintenance operations that
//! require Solr fail with an unsupported-backend error when they meet it.

use std::sync::Arc;

use sapi_application::ports::registry::{
    BACKEND_PROVIDERS, BackendProviderConfig, BackendProviderEntry,
};
use sapi_domain::ports::{SearchBackend, SolrBackend};

/// Backend without any search-service capability
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSearchBackend;

impl NullSearchBackend {
    /// Create a new null backend
    pub fn new() -> Self {
        Self
    }
}

impl SearchBackend for NullSearchBackend {
    fn name(&self) -> &str {
        "null"
    }

    fn as_solr(&self) -> Option<&dyn SolrBackend> {
        None
    }
}

/// Factory function for creating null backend instances.
fn null_factory(
    _config: &BackendProviderConfig,
) -> std::result::Result<Arc<dyn SearchBackend>, String> {
    Ok(Arc::new(NullSearchBackend::new()))
}

#[linkme::distributed_slice(BACKEND_PROVIDERS)]
static NULL_BACKEND: BackendProviderEntry = BackendProviderEntry {
    name: "null",
    description: "Null backend without search-service capability",
    factory: null_factory,
};
