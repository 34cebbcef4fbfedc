//! Update targets for cores and collections

use serde::{Deserialize, Serialize};

use crate::constants::{SOLR_PATH_PREFIX, UPDATE_HANDLER_PATH};

/// A Solr update target: a base URL plus a core or collection segment
///
/// In standard topology every index shares the server's default core; in
/// cloud topology each index maps to its own collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    base_url: String,
    target: String,
}

impl Endpoint {
    /// Create an endpoint for a core or collection under a base URL
    pub fn new<B: Into<String>, T: Into<String>>(base_url: B, target: T) -> Self {
        Self {
            base_url: base_url.into(),
            target: target.into(),
        }
    }

    /// The core or collection this endpoint addresses
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Full URL of the JSON update handler for this target
    pub fn update_url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            SOLR_PATH_PREFIX,
            self.target,
            UPDATE_HANDLER_PATH
        )
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.update_url())
    }
}
