//! # sapi - Domain Layer
//!
//! Core types for Solr search-server maintenance: the entities describing
//! servers and their indexes, the value objects expressing Solr update
//! requests, and the port traits that backends, connectors, and reindex
//! triggers implement.
//!
//! ## Architecture
//!
//! The domain layer owns no I/O. Ports define the contracts that external
//! layers must implement, following the Dependency Inversion Principle:
//! - High-level modules (domain) define interfaces
//! - Low-level modules (providers, infrastructure) implement them
//!
//! ## Organization
//!
//! - **entities/** - Servers and indexes as plain data
//! - **value_objects/** - Update requests and endpoints
//! - **events/** - Domain events and the publisher port
//! - **ports/** - Backend, connector, and reindex trigger contracts
//! - **repositories/** - Server lookup contract

/// Domain layer constants
pub mod constants;
/// Entity types (servers, indexes)
pub mod entities;
/// Error taxonomy and result alias
pub mod error;
/// Domain events and the event publisher port
pub mod events;
/// Boundary contracts implemented by providers and infrastructure
pub mod ports;
/// Repository contracts for entity lookup
pub mod repositories;
/// Immutable value objects
pub mod value_objects;

// Re-export the most commonly used types
pub use entities::{Index, Server};
pub use error::{Error, Result};
pub use events::{DomainEvent, DomainEventStream, EventPublisher};
pub use ports::{ReindexTrigger, SearchBackend, SolrBackend, SolrConnector};
pub use repositories::{ServerEntry, ServerRepository};
pub use value_objects::{Endpoint, UpdateRequest};
