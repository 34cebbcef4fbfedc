//! Domain Events
//!
//! Event types and the publisher port for decoupled, fire-and-forget
//! signaling between the purge flow and whatever tracks reindexing.

/// Event types and publisher port
pub mod domain_events;

pub use domain_events::{DomainEvent, DomainEventStream, EventPublisher};
