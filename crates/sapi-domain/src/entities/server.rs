//! Search server and index entities

use serde::{Deserialize, Serialize};

/// A configured search server
///
/// Identified by a unique string id, owns zero or more indexes, and names
/// the backend provider that talks to the underlying search service. The
/// backend itself is resolved separately so the entity stays plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Unique server identifier
    pub id: String,
    /// Human-readable server name
    pub name: String,
    /// Registry name of the backend provider (e.g., "solr", "solr_cloud")
    pub backend: String,
    /// Indexes attached to this server, in configured order
    pub indexes: Vec<Index>,
}

impl Server {
    /// Number of indexes that are enabled and writable
    pub fn writable_index_count(&self) -> usize {
        self.indexes.iter().filter(|i| i.is_writable()).count()
    }
}

/// An index attached to a search server
///
/// Belongs to exactly one server. Disabled or read-only indexes must never
/// be purged or reindexed by maintenance operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Unique index identifier (within its server)
    pub id: String,
    /// Id of the owning server
    pub server_id: String,
    /// Whether the index is enabled
    pub enabled: bool,
    /// Whether the index is read-only for this tool
    pub read_only: bool,
    /// Cloud-mode collection name; defaults to the index id when absent
    pub collection: Option<String>,
}

impl Index {
    /// Whether maintenance operations may write to this index
    pub fn is_writable(&self) -> bool {
        self.enabled && !self.read_only
    }

    /// The Solr collection this index maps to in cloud topology
    pub fn collection_name(&self) -> &str {
        self.collection.as_deref().unwrap_or(&self.id)
    }
}
