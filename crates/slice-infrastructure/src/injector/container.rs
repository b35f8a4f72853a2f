//! Injector - an IoC container bound to a name and a statistics repository
//!
//! Bindings live in a dill [`Catalog`]. The injector also owns its
//! [`InjectorStatisticsRepository`] directly, so statistics are reachable
//! without going through the container.

use crate::constants::STATISTICS_ENABLED_BY_DEFAULT;
use crate::error_ext::ErrorContext;
use crate::monitoring::{InjectionTracker, InjectorStatisticsRepository};
use dill::{Catalog, CatalogBuilder};
use slice_domain::error::Result;
use slice_domain::InjectorConfig;
use std::fmt;
use std::sync::Arc;

/// A named dependency-injection container
pub struct Injector {
    config: InjectorConfig,
    catalog: Catalog,
    statistics: Arc<InjectorStatisticsRepository>,
}

impl Injector {
    /// Injector with an empty catalog
    pub fn new(config: InjectorConfig) -> Self {
        Self::builder(config).build()
    }

    /// Start building an injector with bindings
    pub fn builder(config: InjectorConfig) -> InjectorBuilder {
        InjectorBuilder {
            config,
            catalog: CatalogBuilder::new(),
            statistics_enabled: STATISTICS_ENABLED_BY_DEFAULT,
        }
    }

    /// Injector name
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Injector descriptor
    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// The injector's own statistics repository
    pub fn statistics(&self) -> Arc<InjectorStatisticsRepository> {
        Arc::clone(&self.statistics)
    }

    /// Underlying dill catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// New instantiation tracker recording into this injector's statistics
    pub fn tracker(&self) -> InjectionTracker {
        InjectionTracker::new(self.statistics())
    }

    /// Resolve a binding from the catalog
    pub fn get_instance<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.catalog.get_one::<T>().injection_context(format!(
            "Injector '{}' cannot provide {}",
            self.name(),
            std::any::type_name::<T>()
        ))
    }
}

impl fmt::Debug for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injector")
            .field("config", &self.config)
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Injector`]
pub struct InjectorBuilder {
    config: InjectorConfig,
    catalog: CatalogBuilder,
    statistics_enabled: bool,
}

impl InjectorBuilder {
    /// Bind a value into the injector's catalog
    pub fn add_value<V>(mut self, value: V) -> Self
    where
        V: Clone + Send + Sync + 'static,
    {
        self.catalog.add_value(value);
        self
    }

    /// Initial state of the statistics repository
    pub fn statistics_enabled(mut self, enabled: bool) -> Self {
        self.statistics_enabled = enabled;
        self
    }

    /// Finish the injector
    pub fn build(mut self) -> Injector {
        Injector {
            catalog: self.catalog.build(),
            statistics: InjectorStatisticsRepository::new_shared(self.statistics_enabled),
            config: self.config,
        }
    }
}
