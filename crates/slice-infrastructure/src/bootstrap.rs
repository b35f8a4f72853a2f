//! Composition root
//!
//! Builds the injector hierarchy declared in [`AppConfig`] and wires the
//! statistics facade on top of it.
//!
//! ```text
//! AppConfig.injectors ──► build_hierarchy() ──► InjectorHierarchy
//!                                                     │
//!                               StatisticsFacade ◄────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = init_app(config)?;
//!
//! let report = context.statistics().collect_statistics()?;
//! context.statistics().update_statistics_repositories(false);
//! ```

use crate::config::{AppConfig, InjectorDefinition};
use crate::injector::{Injector, InjectorHierarchy};
use slice_application::StatisticsFacade;
use slice_domain::error::{Error, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Application context bundling configuration, hierarchy and facade
pub struct SliceContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    hierarchy: Arc<InjectorHierarchy>,
    statistics: Arc<StatisticsFacade>,
}

impl SliceContext {
    /// Injector registry
    pub fn hierarchy(&self) -> Arc<InjectorHierarchy> {
        Arc::clone(&self.hierarchy)
    }

    /// Statistics aggregation and control
    pub fn statistics(&self) -> Arc<StatisticsFacade> {
        Arc::clone(&self.statistics)
    }
}

/// Build the application context from configuration
pub fn init_app(config: AppConfig) -> Result<SliceContext> {
    let hierarchy = build_hierarchy(&config)?;
    let statistics = Arc::new(StatisticsFacade::with_max_depth(
        hierarchy.clone(),
        config.statistics.max_hierarchy_depth,
    ));

    info!(injectors = hierarchy.len(), "Slice context initialized");

    Ok(SliceContext {
        config: Arc::new(config),
        hierarchy,
        statistics,
    })
}

/// Register every configured injector, parents before children
///
/// Definitions may appear in any order. Fails with `Error::NotFound` when a
/// parent is never declared and with `Error::Cycle` when the remaining
/// definitions only point at each other.
pub fn build_hierarchy(config: &AppConfig) -> Result<Arc<InjectorHierarchy>> {
    let hierarchy = InjectorHierarchy::new_shared();
    let declared: HashSet<&str> = config.injectors.iter().map(|d| d.name.as_str()).collect();
    let mut pending: Vec<&InjectorDefinition> = config.injectors.iter().collect();

    while !pending.is_empty() {
        let (ready, blocked): (Vec<_>, Vec<_>) = pending.into_iter().partition(|definition| {
            definition
                .parent
                .as_deref()
                .is_none_or(|parent| hierarchy.contains(parent))
        });

        if ready.is_empty() {
            return Err(unresolvable(&blocked, &declared));
        }

        for definition in ready {
            let injector = Injector::builder(definition.to_config())
                .statistics_enabled(config.statistics.enabled)
                .build();
            hierarchy.register(injector)?;
        }
        pending = blocked;
    }

    Ok(hierarchy)
}

fn unresolvable(blocked: &[&InjectorDefinition], declared: &HashSet<&str>) -> Error {
    if let Some((definition, parent)) = blocked.iter().find_map(|definition| {
        definition
            .parent
            .as_deref()
            .filter(|parent| !declared.contains(parent))
            .map(|parent| (definition, parent))
    }) {
        return Error::not_found(format!(
            "parent injector '{parent}' of '{}'",
            definition.name
        ));
    }

    Error::cycle(
        "configured injectors form a parent cycle",
        blocked.iter().map(|definition| definition.name.clone()).collect(),
    )
}
