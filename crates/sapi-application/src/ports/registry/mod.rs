//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for backend providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Usage
//!
//! ### Registering a Provider (in sapi-providers)
//!
//! ```ignore
//! use sapi_application::ports::registry::{BackendProviderEntry, BACKEND_PROVIDERS};
//!
//! #[linkme::distributed_slice(BACKEND_PROVIDERS)]
//! static SOLR_BACKEND: BackendProviderEntry = BackendProviderEntry {
//!     name: "solr",
//!     description: "Solr HTTP backend (single core)",
//!     factory: |config| Ok(Arc::new(SolrSearchBackend::from_config(config)?)),
//! };
//! ```
//!
//! ### Resolving a Provider (in sapi-infrastructure)
//!
//! ```ignore
//! use sapi_application::ports::registry::resolve_backend;
//!
//! let config = BackendProviderConfig::new("solr").with_base_url("http://localhost:8983");
//! let backend = resolve_backend(&config)?;
//! ```

/// Backend provider registry entries and resolution
pub mod backend;

pub use backend::{
    BACKEND_PROVIDERS, BackendProviderConfig, BackendProviderEntry, list_backend_providers,
    resolve_backend,
};
