//! Provider layer constants

/// JSON content type for Solr update requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default connection timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error message for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Default event bus channel capacity
pub const EVENT_BUS_DEFAULT_CAPACITY: usize = 1024;
