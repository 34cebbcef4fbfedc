//! Bulk Purge Use Case
//!
//! Deletes every document on a Solr search server (across all indexes) and
//! schedules reindexing of every enabled, writable index. The sequence is
//! linear and non-resumable: a failure part-way leaves the server partially
//! purged, and remediation is the operator's responsibility.

use std::sync::Arc;

use tracing::{debug, info};

use sapi_domain::entities::Index;
use sapi_domain::error::{Error, Result};
use sapi_domain::ports::ReindexTrigger;
use sapi_domain::repositories::ServerRepository;
use sapi_domain::value_objects::UpdateRequest;

/// Outcome summary of a completed purge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeOutcome {
    /// Id of the purged server
    pub server_id: String,
    /// Update submissions issued: one for the default endpoint, plus one
    /// per eligible index in cloud topology
    pub deletes_issued: usize,
    /// Indexes whose reindex was scheduled
    pub indexes_reindexed: usize,
}

/// Purge service - orchestrates delete-all and reindex scheduling
///
/// Dependencies arrive through constructor injection as trait objects, so
/// tests substitute fakes without a DI container.
pub struct PurgeService {
    servers: Arc<dyn ServerRepository>,
    reindex_trigger: Arc<dyn ReindexTrigger>,
}

impl PurgeService {
    /// Create a new purge service with injected collaborators
    pub fn new(servers: Arc<dyn ServerRepository>, reindex_trigger: Arc<dyn ReindexTrigger>) -> Self {
        Self {
            servers,
            reindex_trigger,
        }
    }

    /// Delete all documents on a server and schedule reindexing
    ///
    /// Fails rather than silently no-ops:
    /// - unknown server id -> not-found error, zero side effects
    /// - non-Solr backend -> unsupported-backend error, zero side effects
    /// - connector or trigger failure -> aborts the remaining sequence and
    ///   propagates unmodified; no retry, no rollback
    ///
    /// The default-endpoint delete is issued unconditionally, before index
    /// eligibility is consulted. Disabled and read-only indexes are skipped
    /// entirely: no per-collection delete, no reindex, in any topology.
    pub async fn purge_server(&self, server_id: &str) -> Result<PurgeOutcome> {
        if server_id.trim().is_empty() {
            return Err(Error::invalid_argument("server id must not be empty"));
        }

        let entry = self.servers.find_by_id(server_id).await?;
        let backend = entry
            .backend
            .as_solr()
            .ok_or_else(|| Error::unsupported_backend(server_id, entry.backend.name()))?;
        let connector = backend.connector();

        let request = UpdateRequest::delete_all();
        info!(
            server_id,
            base_url = connector.base_url(),
            "Deleting all documents on default endpoint"
        );
        connector.update(&request, None).await?;

        let mut deletes_issued = 1;
        let mut indexes_reindexed = 0;

        for index in &entry.server.indexes {
            if !self.process_index(backend, &request, index, &mut deletes_issued).await? {
                continue;
            }
            indexes_reindexed += 1;
        }

        info!(server_id, deletes_issued, indexes_reindexed, "Purge complete");
        Ok(PurgeOutcome {
            server_id: server_id.to_string(),
            deletes_issued,
            indexes_reindexed,
        })
    }

    /// Purge and reindex a single index; returns false when skipped
    async fn process_index(
        &self,
        backend: &dyn sapi_domain::ports::SolrBackend,
        request: &UpdateRequest,
        index: &Index,
        deletes_issued: &mut usize,
    ) -> Result<bool> {
        if !index.is_writable() {
            debug!(
                index_id = %index.id,
                enabled = index.enabled,
                read_only = index.read_only,
                "Skipping index"
            );
            return Ok(false);
        }

        let connector = backend.connector();
        if connector.is_cloud() {
            // The default-endpoint delete is not guaranteed to reach
            // per-index collections in cloud topology.
            let endpoint = backend.collection_endpoint(index);
            debug!(index_id = %index.id, endpoint = %endpoint, "Deleting collection documents");
            connector.update(request, Some(&endpoint)).await?;
            *deletes_issued += 1;
        }

        debug!(index_id = %index.id, "Scheduling reindex");
        self.reindex_trigger.reindex(index).await?;
        Ok(true)
    }
}
