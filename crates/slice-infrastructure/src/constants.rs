//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `slice_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "slice.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "slice";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SLICE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_NESTED_SEPARATOR: &str = "__";

// ============================================================================
// STATISTICS CONSTANTS
// ============================================================================

/// Whether newly created repositories record usage
pub const STATISTICS_ENABLED_BY_DEFAULT: bool = true;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SLICE_LOG";

/// Maximum number of daily log files to keep
pub const LOG_MAX_FILES: usize = 5;
