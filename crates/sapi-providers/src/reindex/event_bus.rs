//! Event-bus-backed reindex trigger
//!
//! Schedules reindexing by publishing a `ReindexRequested` event. The
//! publish is a hand-off: whatever tracks index items consumes the event on
//! its own schedule, and the trigger never waits for processing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use sapi_domain::entities::Index;
use sapi_domain::error::Result;
use sapi_domain::events::{DomainEvent, EventPublisher};
use sapi_domain::ports::ReindexTrigger;

/// Reindex trigger that publishes scheduling events
pub struct EventBusReindexTrigger {
    events: Arc<dyn EventPublisher>,
}

impl EventBusReindexTrigger {
    /// Create a new trigger publishing on the given bus
    pub fn new(events: Arc<dyn EventPublisher>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl ReindexTrigger for EventBusReindexTrigger {
    async fn reindex(&self, index: &Index) -> Result<()> {
        debug!(server_id = %index.server_id, index_id = %index.id, "Requesting reindex");
        self.events
            .publish(DomainEvent::ReindexRequested {
                server_id: index.server_id.clone(),
                index_id: index.id.clone(),
            })
            .await
    }
}
