//! Statistics and injector hierarchy configuration types

use crate::constants::STATISTICS_ENABLED_BY_DEFAULT;
use serde::{Deserialize, Serialize};
use slice_domain::constants::DEFAULT_MAX_HIERARCHY_DEPTH;
use slice_domain::InjectorConfig;

/// Model usage statistics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Whether repositories record usage from the start
    pub enabled: bool,

    /// Ancestry depth after which a hierarchy is treated as cyclic
    pub max_hierarchy_depth: usize,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            enabled: STATISTICS_ENABLED_BY_DEFAULT,
            max_hierarchy_depth: DEFAULT_MAX_HIERARCHY_DEPTH,
        }
    }
}

/// An injector declared in configuration
///
/// ```toml
/// [[injectors]]
/// name = "app"
///
/// [[injectors]]
/// name = "app-content"
/// parent = "app"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectorDefinition {
    /// Unique injector name
    pub name: String,

    /// Name of the parent injector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl InjectorDefinition {
    /// Descriptor handed to the hierarchy
    pub fn to_config(&self) -> InjectorConfig {
        match &self.parent {
            Some(parent) => InjectorConfig::with_parent(self.name.clone(), parent.clone()),
            None => InjectorConfig::new(self.name.clone()),
        }
    }
}
