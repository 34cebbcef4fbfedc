//! Search backend providers

/// Null backend for non-Solr server configurations
pub mod null;
/// Solr HTTP backend (standard and cloud topologies)
pub mod solr;

pub use null::NullSearchBackend;
pub use solr::{SolrHttpConnector, SolrSearchBackend};
