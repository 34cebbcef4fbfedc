//! Shared provider utilities

/// HTTP response processing helpers
pub mod http_response;

pub use http_response::SolrResponseUtils;
