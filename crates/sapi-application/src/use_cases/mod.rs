//! Application use cases

/// Bulk purge of a search server
pub mod purge_service;

pub use purge_service::{PurgeOutcome, PurgeService};
