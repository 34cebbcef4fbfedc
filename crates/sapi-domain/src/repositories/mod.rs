//! Repository contracts
//!
//! Lookup contracts hydrating entities from whatever store the
//! infrastructure layer provides (configuration, in tests: fixtures).

/// Server lookup contract
pub mod server_repository;

pub use server_repository::{ServerEntry, ServerRepository};
