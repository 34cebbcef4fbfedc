//! # sapi - Provider Implementations
//!
//! Concrete adapters for the ports defined in `sapi-domain`. Each provider
//! implements a port (trait) and registers itself in the backend registry
//! declared by `sapi-application` where applicable.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Backend | `SearchBackend` / `SolrBackend` | Solr (standard), Solr (cloud), Null |
//! | Events | `EventPublisher` | Tokio broadcast |
//! | Reindex | `ReindexTrigger` | Event bus |

// Re-export sapi-domain types commonly used with providers
pub use sapi_domain::error::{Error, Result};
pub use sapi_domain::ports::{ReindexTrigger, SearchBackend, SolrBackend, SolrConnector};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Search backend implementations
///
/// Implements the `SearchBackend` / `SolrBackend` traits for the Solr HTTP
/// update API, plus the null backend for non-Solr server configurations.
pub mod backend;

/// Event bus implementations
///
/// Implements `EventPublisher` for in-process broadcast distribution.
pub mod events;

/// Reindex trigger implementations
pub mod reindex;
