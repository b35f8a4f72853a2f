//! Injector hierarchy registry
//!
//! Owns every registered [`Injector`] and resolves them by name. Each
//! injector carries its own [`InjectorConfig`], so a name can never resolve to
//! an injector without a config or the other way round.
//!
//! ## Publication
//!
//! ```text
//! register/unregister ──► writer lock ──► clone snapshot ──► mutate ──► ArcSwap::store
//!                                                                          │
//! injector_by_name / injector_names ◄──────────── ArcSwap::load ◄─────────┘
//! ```
//!
//! Readers never block and always observe a complete snapshot.
//!
//! Parents must be registered before their children and cannot be removed
//! while children remain, which keeps the parent relation acyclic.

use crate::injector::container::Injector;
use crate::monitoring::InjectorStatisticsRepository;
use arc_swap::ArcSwap;
use slice_domain::error::{Error, Result};
use slice_domain::ports::{
    InjectorEntry, InjectorHierarchyInterface, StatisticsRepositoryInterface,
};
use slice_domain::InjectorConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

#[derive(Debug, Default, Clone)]
struct HierarchySnapshot {
    /// Names in registration order
    order: Vec<String>,
    injectors: HashMap<String, Arc<Injector>>,
}

impl HierarchySnapshot {
    fn get(&self, name: &str) -> Result<&Arc<Injector>> {
        self.injectors
            .get(name)
            .ok_or_else(|| Error::not_found(format!("injector '{name}'")))
    }
}

/// Registry of named injectors
pub struct InjectorHierarchy {
    snapshot: ArcSwap<HierarchySnapshot>,
    writer: Mutex<()>,
}

impl Default for InjectorHierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl InjectorHierarchy {
    /// Create an empty hierarchy
    pub fn new() -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(HierarchySnapshot::default()),
            writer: Mutex::new(()),
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register an injector
    ///
    /// Fails if the name is invalid or taken, or if the parent is not
    /// registered yet.
    pub fn register(&self, injector: Injector) -> Result<Arc<Injector>> {
        let config = injector.config().clone();
        config.validate()?;

        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.snapshot.load_full();

        if current.injectors.contains_key(config.name()) {
            return Err(Error::already_exists(format!("injector '{}'", config.name())));
        }
        if let Some(parent) = config.parent_name() {
            if !current.injectors.contains_key(parent) {
                return Err(Error::not_found(format!(
                    "parent injector '{parent}' of '{}'",
                    config.name()
                )));
            }
        }

        let injector = Arc::new(injector);
        let mut next = HierarchySnapshot::clone(&current);
        next.order.push(config.name().to_string());
        next.injectors
            .insert(config.name().to_string(), Arc::clone(&injector));
        self.snapshot.store(Arc::new(next));

        info!(
            injector = config.name(),
            parent = config.parent_name().unwrap_or("-"),
            "Registered injector"
        );
        Ok(injector)
    }

    /// Remove an injector that has no children
    pub fn unregister(&self, name: &str) -> Result<Arc<Injector>> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.snapshot.load_full();
        current.get(name)?;

        if let Some(child) = current
            .injectors
            .values()
            .find(|injector| injector.config().parent_name() == Some(name))
        {
            return Err(Error::invalid_argument(format!(
                "Cannot unregister injector '{name}' while '{}' inherits from it",
                child.name()
            )));
        }

        let mut next = HierarchySnapshot::clone(&current);
        next.order.retain(|registered| registered != name);
        let removed = next
            .injectors
            .remove(name)
            .ok_or_else(|| Error::not_found(format!("injector '{name}'")))?;
        self.snapshot.store(Arc::new(next));

        info!(injector = name, "Unregistered injector");
        Ok(removed)
    }

    /// Names of all registered injectors, in registration order
    pub fn injector_names(&self) -> Vec<String> {
        self.snapshot.load().order.clone()
    }

    /// Injector registered under `name`
    pub fn injector_by_name(&self, name: &str) -> Result<Arc<Injector>> {
        self.snapshot.load().get(name).map(Arc::clone)
    }

    /// Descriptor of the injector registered under `name`
    pub fn injector_config_by_name(&self, name: &str) -> Result<InjectorConfig> {
        self.snapshot
            .load()
            .get(name)
            .map(|injector| injector.config().clone())
    }

    /// Statistics repository of the injector registered under `name`
    pub fn statistics_by_name(&self, name: &str) -> Result<Arc<InjectorStatisticsRepository>> {
        self.injector_by_name(name).map(|injector| injector.statistics())
    }

    /// All injectors, in registration order
    pub fn injectors(&self) -> Vec<Arc<Injector>> {
        let snapshot = self.snapshot.load();
        snapshot
            .order
            .iter()
            .filter_map(|name| snapshot.injectors.get(name).cloned())
            .collect()
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.snapshot.load().injectors.contains_key(name)
    }

    /// Number of registered injectors
    pub fn len(&self) -> usize {
        self.snapshot.load().order.len()
    }

    /// Whether no injector is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InjectorHierarchyInterface for InjectorHierarchy {
    fn injector_names(&self) -> Vec<String> {
        InjectorHierarchy::injector_names(self)
    }

    fn injector_config_by_name(&self, name: &str) -> Result<InjectorConfig> {
        InjectorHierarchy::injector_config_by_name(self, name)
    }

    fn statistics_by_name(&self, name: &str) -> Result<Arc<dyn StatisticsRepositoryInterface>> {
        let repository = InjectorHierarchy::statistics_by_name(self, name)?;
        Ok(repository)
    }

    fn snapshot(&self) -> Result<Vec<InjectorEntry>> {
        Ok(self
            .injectors()
            .into_iter()
            .map(|injector| InjectorEntry {
                config: injector.config().clone(),
                statistics: injector.statistics(),
            })
            .collect())
    }
}
