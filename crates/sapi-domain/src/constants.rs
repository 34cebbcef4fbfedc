//! Domain layer constants
//!
//! Constants that are part of the domain logic and are used by the
//! application layer. Transport-specific constants live in the provider
//! crate.

/// Wildcard query matching every document in a core or collection
pub const MATCH_ALL_QUERY: &str = "*:*";

/// Path segment of the Solr JSON update API, relative to a core URL
pub const UPDATE_HANDLER_PATH: &str = "update";

/// Path prefix under which Solr exposes cores and collections
pub const SOLR_PATH_PREFIX: &str = "solr";
