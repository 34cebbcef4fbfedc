//! Infrastructure Layer - sapi
//!
//! Cross-cutting technical concerns: configuration loading and validation,
//! logging setup, and the configuration-backed server repository that
//! resolves backends through the provider registry.

/// Infrastructure constants
pub mod constants;

/// Configuration loading and types
pub mod config;

/// Structured logging with tracing
pub mod logging;

/// Configuration-backed server repository
pub mod repository;

pub use config::{AppConfig, ConfigLoader, ConnectorConfig, IndexConfig, LoggingConfig, ServerConfig};
pub use logging::init_logging;
pub use repository::ConfigServerRepository;
