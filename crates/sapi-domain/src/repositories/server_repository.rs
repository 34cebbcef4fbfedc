//! Server lookup contract

use crate::entities::Server;
use crate::error::Result;
use crate::ports::SearchBackend;
use async_trait::async_trait;
use std::sync::Arc;

/// A server together with its resolved backend
///
/// The entity is plain data; the backend is the live capability object the
/// purge flow operates through.
pub struct ServerEntry {
    /// The server entity
    pub server: Server,
    /// The backend resolved for this server
    pub backend: Arc<dyn SearchBackend>,
}

impl std::fmt::Debug for ServerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerEntry")
            .field("server", &self.server)
            .finish_non_exhaustive()
    }
}

/// Server Repository Port
///
/// Resolves server ids to configured servers. Lookup failures surface as
/// not-found errors; no side effects may be performed on a failed lookup.
#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Resolve a server id to its entity and backend
    ///
    /// # Returns
    /// The server entry, or a not-found error when no server with that id
    /// is configured
    async fn find_by_id(&self, server_id: &str) -> Result<ServerEntry>;

    /// List all configured servers
    async fn list(&self) -> Result<Vec<Server>>;
}
