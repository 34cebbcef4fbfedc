//! Application-layer ports
//!
//! The registry is declared here rather than in the domain so that the
//! domain stays free of registration machinery while providers and
//! infrastructure share one discovery surface.

/// Backend provider registry
pub mod registry;

pub use registry::{
    BACKEND_PROVIDERS, BackendProviderConfig, BackendProviderEntry, list_backend_providers,
    resolve_backend,
};
