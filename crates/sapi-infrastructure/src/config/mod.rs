//! Configuration
//!
//! Typed configuration structs plus the figment-based loader that merges
//! defaults, a TOML file, and environment overrides.

/// Configuration loader
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ConnectorConfig, IndexConfig, LoggingConfig, ServerConfig};
