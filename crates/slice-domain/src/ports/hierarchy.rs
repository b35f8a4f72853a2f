//! Injector Hierarchy Port
//!
//! Read-side contract of the injector registry, as consumed by the
//! statistics facade.

use crate::entities::InjectorConfig;
use crate::error::Result;
use crate::ports::statistics::StatisticsRepositoryInterface;
use std::sync::Arc;

/// One injector as seen by [`InjectorHierarchyInterface::snapshot`]
#[derive(Clone)]
pub struct InjectorEntry {
    /// Injector descriptor
    pub config: InjectorConfig,
    /// Repository owned by the injector
    pub statistics: Arc<dyn StatisticsRepositoryInterface>,
}

/// Registry of named injectors
pub trait InjectorHierarchyInterface: Send + Sync {
    /// Names of all registered injectors, stable within one call
    fn injector_names(&self) -> Vec<String>;

    /// Descriptor of the injector registered under `name`
    ///
    /// Fails with `Error::NotFound` for unregistered names.
    fn injector_config_by_name(&self, name: &str) -> Result<InjectorConfig>;

    /// Statistics repository owned by the injector registered under `name`
    ///
    /// Fails with `Error::NotFound` for unregistered names.
    fn statistics_by_name(&self, name: &str) -> Result<Arc<dyn StatisticsRepositoryInterface>>;

    /// Every registered injector taken from a single view of the registry
    ///
    /// Registrations and removals that happen while the caller works through
    /// the entries are not reflected, so every parent named by an entry is
    /// itself part of the result.
    fn snapshot(&self) -> Result<Vec<InjectorEntry>>;
}
