//! Domain entities

/// Injector descriptor
pub mod injector_config;
/// Model usage tree
pub mod model_usage;

pub use injector_config::InjectorConfig;
pub use model_usage::ModelUsageData;
