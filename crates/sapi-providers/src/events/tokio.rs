//! Tokio Broadcast Event Bus Provider
//!
//! Event bus implementation using tokio broadcast channels for in-process
//! event distribution.
//!
//! ## Features
//!
//! - In-process event broadcasting
//! - Multiple subscribers support
//! - Configurable channel capacity
//! - No persistence (events are ephemeral)

use async_trait::async_trait;
use futures::stream;
use sapi_domain::error::Result;
use sapi_domain::events::{DomainEvent, DomainEventStream, EventPublisher};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::constants::EVENT_BUS_DEFAULT_CAPACITY;

/// Event bus provider using tokio broadcast channels
///
/// Provides in-process event distribution with multiple subscribers.
/// Events are broadcast to all active subscribers without persistence.
/// When the channel is full, the oldest events are dropped.
#[derive(Clone)]
pub struct TokioEventBus {
    /// Broadcast sender for publishing events
    sender: Arc<broadcast::Sender<DomainEvent>>,
    /// Channel capacity
    capacity: usize,
}

impl TokioEventBus {
    /// Create a new tokio event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of events in the channel buffer
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for TokioEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioEventBus")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl EventPublisher for TokioEventBus {
    async fn publish(&self, event: DomainEvent) -> Result<()> {
        match self.sender.send(event) {
            Ok(count) => {
                debug!("Published event to {} subscribers", count);
            }
            Err(_) => {
                debug!("Published event but no subscribers");
            }
        }
        Ok(())
    }

    async fn subscribe(&self) -> Result<DomainEventStream> {
        let receiver = self.sender.subscribe();

        // Convert broadcast receiver to a Stream that handles lagged errors
        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Event stream lagged by {} events", n);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        return None;
                    }
                }
            }
        });

        Ok(Box::pin(stream))
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}
