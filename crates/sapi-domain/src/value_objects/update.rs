//! Solr update request value objects

use serde_json::{Value, json};

use crate::constants::MATCH_ALL_QUERY;

/// An update request against the Solr JSON update API
///
/// Accumulates delete-by-query clauses and a commit flag. The request is
/// transport-agnostic; connectors serialize it with [`UpdateRequest::to_json_body`]
/// and decide how the commit flag is expressed on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateRequest {
    delete_queries: Vec<String>,
    commit: bool,
}

impl UpdateRequest {
    /// Create an empty update request
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical wildcard form: delete every document, then commit
    pub fn delete_all() -> Self {
        Self::new().with_delete_query(MATCH_ALL_QUERY).with_commit(true)
    }

    /// Add a delete-by-query clause
    pub fn with_delete_query<S: Into<String>>(mut self, query: S) -> Self {
        self.delete_queries.push(query.into());
        self
    }

    /// Set whether the update should be committed immediately
    pub fn with_commit(mut self, commit: bool) -> Self {
        self.commit = commit;
        self
    }

    /// Delete-by-query clauses carried by this request
    pub fn delete_queries(&self) -> &[String] {
        &self.delete_queries
    }

    /// Whether the request carries no clauses at all
    ///
    /// Connectors must reject empty requests before touching the transport.
    pub fn is_empty(&self) -> bool {
        self.delete_queries.is_empty()
    }

    /// Whether the update should be committed immediately
    pub fn commit(&self) -> bool {
        self.commit
    }

    /// Serialize to the Solr JSON update body
    ///
    /// A single clause produces `{"delete": {"query": ...}}`; multiple
    /// clauses produce an array of query objects.
    pub fn to_json_body(&self) -> Value {
        match self.delete_queries.as_slice() {
            [query] => json!({ "delete": { "query": query } }),
            queries => json!({
                "delete": queries
                    .iter()
                    .map(|q| json!({ "query": q }))
                    .collect::<Vec<_>>(),
            }),
        }
    }
}
