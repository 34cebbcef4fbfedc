//! Event bus providers

/// Tokio broadcast event bus
pub mod tokio;

pub use tokio::TokioEventBus;
