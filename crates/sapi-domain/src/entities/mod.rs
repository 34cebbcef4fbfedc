//! Domain Entities
//!
//! Entities carry identity and are hydrated from configuration. The
//! maintenance tool never creates, reshapes, or destroys them; it only
//! triggers side effects against the external search service they describe.

/// Search server and index entities
pub mod server;

pub use server::{Index, Server};
