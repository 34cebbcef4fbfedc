//! Event Publisher Domain Port
//!
//! Defines the business contract for publishing system events. This
//! abstraction lets services publish events without coupling to a specific
//! transport (tokio broadcast, message queue, etc.).

use crate::error::Result;
use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// System-wide event types for decoupled service communication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DomainEvent {
    /// An index's tracked items should be rescheduled for submission to the
    /// search engine. Scheduling only; completion is never awaited.
    ReindexRequested {
        /// Id of the owning server
        server_id: String,
        /// Id of the index to reindex
        index_id: String,
    },
    /// All documents on a server were deleted
    ServerPurged {
        /// Id of the purged server
        server_id: String,
        /// Number of update submissions issued (default endpoint plus any
        /// per-collection resubmissions)
        collections: usize,
    },
}

/// Stream of domain events delivered to a subscriber
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send>>;

/// Domain Port for Publishing System Events
///
/// Publishing is fire-and-forget: "successfully published" means the event
/// was sent, not that any subscriber has processed it. Publishing with zero
/// subscribers succeeds.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event to all subscribers
    async fn publish(&self, event: DomainEvent) -> Result<()>;

    /// Subscribe to all subsequently published events
    async fn subscribe(&self) -> Result<DomainEventStream>;

    /// Whether any subscriber is currently attached
    fn has_subscribers(&self) -> bool;
}
