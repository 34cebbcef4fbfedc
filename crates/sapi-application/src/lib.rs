//! Application Layer - sapi
//!
//! Implements the maintenance use cases and the registry through which
//! backend providers are discovered.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains use case implementations (application services)
//! - Declares the backend provider registry
//! - Orchestrates domain entities through domain ports
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Use Cases
//!
//! - Bulk purge: delete every document on a server, reindex eligible indexes
//!
//! ## Dependencies
//!
//! This crate depends only on `sapi-domain` and pure Rust libraries.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
