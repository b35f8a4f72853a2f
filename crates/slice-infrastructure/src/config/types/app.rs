//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;
pub use super::statistics::{InjectorDefinition, StatisticsConfig};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Statistics configuration
    pub statistics: StatisticsConfig,

    /// Injectors registered at bootstrap
    pub injectors: Vec<InjectorDefinition>,
}
