//! Configuration management
//!
//! Figment-based loading of [`AppConfig`] from defaults, a TOML file and
//! `SLICE_` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, InjectorDefinition, LoggingConfig, StatisticsConfig};
