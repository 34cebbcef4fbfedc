//! Reindex trigger port

use crate::entities::Index;
use crate::error::Result;
use async_trait::async_trait;

/// Reindex Trigger Port
///
/// Schedules all tracked items of an index for re-submission to the search
/// engine. Scheduling is asynchronous and fire-and-forget: implementations
/// MUST NOT block waiting for reindexing to complete.
#[async_trait]
pub trait ReindexTrigger: Send + Sync {
    /// Schedule a full reindex of the given index
    ///
    /// # Returns
    /// Ok(()) once the request has been handed off; failures to hand off
    /// propagate to the caller
    async fn reindex(&self, index: &Index) -> Result<()>;
}
