//! Infrastructure layer constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "SAPI";

/// Environment variable consulted for log filtering before the config file
pub const LOG_FILTER_ENV: &str = "SAPI_LOG";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sapi.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "sapi";
