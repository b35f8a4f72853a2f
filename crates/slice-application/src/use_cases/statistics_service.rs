//! Statistics facade
//!
//! Aggregates model usage statistics across every injector of a hierarchy
//! and fans enable/disable/reset commands out to each injector's repository.
//!
//! ```text
//! InjectorHierarchyInterface ──► StatisticsRepositoryInterface (per injector)
//!            │                                 │
//!            └──── StatisticsFacade ◄──────────┘
//!                    collect_statistics()  → BTreeMap<path, ModelUsageData>
//!                    update_statistics_repositories(bool)
//!                    reset()
//! ```

use serde::Serialize;
use slice_domain::constants::{DEFAULT_MAX_HIERARCHY_DEPTH, HIERARCHY_PATH_SEPARATOR};
use slice_domain::error::{Error, Result};
use slice_domain::ports::{InjectorHierarchyInterface, StatisticsRepositoryInterface};
use slice_domain::{InjectorConfig, ModelUsageData};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Outcome of a best-effort fan-out across all injectors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FanOutReport {
    /// Injectors whose repository received the command
    pub updated: Vec<String>,
    /// Injectors that could not be resolved, with the failure message
    pub failed: Vec<(String, String)>,
}

impl FanOutReport {
    /// Whether every injector was reached
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// One injector's statistics inside a [`StatisticsReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsEntry {
    /// Hierarchy path string, root ancestor first
    pub path: String,
    /// Number of instantiations recorded in the tree
    pub total_usages: u64,
    /// Snapshot of the injector's usage tree
    pub root: ModelUsageData,
}

/// Serializable statistics snapshot for administrative callers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatisticsReport {
    /// Entries ordered by hierarchy path
    pub entries: Vec<StatisticsEntry>,
    /// Sum of `total_usages` over all entries
    pub total_usages: u64,
}

/// Aggregation and control layer over an injector hierarchy
///
/// Holds no statistics itself; every call reads from or writes to the
/// repositories reachable through the hierarchy.
pub struct StatisticsFacade {
    hierarchy: Arc<dyn InjectorHierarchyInterface>,
    max_depth: usize,
}

impl StatisticsFacade {
    /// Create a facade using the default ancestry depth bound
    pub fn new(hierarchy: Arc<dyn InjectorHierarchyInterface>) -> Self {
        Self::with_max_depth(hierarchy, DEFAULT_MAX_HIERARCHY_DEPTH)
    }

    /// Create a facade with a custom ancestry depth bound
    pub fn with_max_depth(hierarchy: Arc<dyn InjectorHierarchyInterface>, max_depth: usize) -> Self {
        Self {
            hierarchy,
            max_depth: max_depth.max(1),
        }
    }

    /// Collect the usage trees of all injectors that recorded anything
    ///
    /// Keys are hierarchy path strings (`"root > child"`), ordered
    /// lexicographically. Injectors whose tree is empty are skipped. Names,
    /// repositories and ancestry all come from one registry snapshot, so
    /// concurrent registration or removal cannot fail the collection.
    pub fn collect_statistics(&self) -> Result<BTreeMap<String, ModelUsageData>> {
        let entries = self.hierarchy.snapshot()?;
        let configs: HashMap<&str, &InjectorConfig> = entries
            .iter()
            .map(|entry| (entry.config.name(), &entry.config))
            .collect();
        let lookup = |name: &str| {
            configs
                .get(name)
                .map(|config| (*config).clone())
                .ok_or_else(|| Error::not_found(format!("injector '{name}'")))
        };

        let mut statistics = BTreeMap::new();
        for entry in &entries {
            let root = entry.statistics.model_usage_data_root();
            if root.is_empty() {
                continue;
            }

            let injector_name = entry.config.name();
            let path = self.ancestry_path(injector_name, lookup)?;
            if statistics.contains_key(&path) {
                error!(path = %path, "Two injectors resolved to the same hierarchy path");
                return Err(Error::internal(format!(
                    "Duplicate hierarchy path '{path}' for injector '{injector_name}'"
                )));
            }
            statistics.insert(path, root);
        }

        debug!(injectors = statistics.len(), "Collected injector statistics");
        Ok(statistics)
    }

    /// Same data as [`collect_statistics`](Self::collect_statistics), flattened
    /// into a serializable report
    pub fn statistics_report(&self) -> Result<StatisticsReport> {
        let entries: Vec<StatisticsEntry> = self
            .collect_statistics()?
            .into_iter()
            .map(|(path, root)| StatisticsEntry {
                path,
                total_usages: root.total_usages(),
                root,
            })
            .collect();
        let total_usages = entries.iter().map(|entry| entry.total_usages).sum();

        Ok(StatisticsReport {
            entries,
            total_usages,
        })
    }

    /// Render an injector's ancestry as `"root > ... > name"`
    ///
    /// Fails with `Error::NotFound` if any name on the chain is unregistered
    /// and with `Error::Cycle` if a name repeats or the chain is longer than
    /// the configured depth bound.
    pub fn resolve_hierarchy_path(&self, injector_name: &str) -> Result<String> {
        self.ancestry_path(injector_name, |name| {
            self.hierarchy.injector_config_by_name(name)
        })
    }

    fn ancestry_path<F>(&self, injector_name: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Result<InjectorConfig>,
    {
        let mut chain = vec![injector_name.to_string()];
        let mut visited: HashSet<String> = HashSet::from([injector_name.to_string()]);
        let mut config = lookup(injector_name)?;

        while let Some(parent) = config.parent_name().map(str::to_string) {
            if !visited.insert(parent.clone()) {
                chain.push(parent.clone());
                error!(injector = injector_name, "Injector ancestry contains a cycle");
                return Err(Error::cycle(
                    format!("injector '{parent}' appears twice in the ancestry of '{injector_name}'"),
                    chain,
                ));
            }
            chain.push(parent.clone());
            if chain.len() > self.max_depth {
                error!(
                    injector = injector_name,
                    max_depth = self.max_depth,
                    "Injector ancestry exceeds depth bound"
                );
                return Err(Error::cycle(
                    format!(
                        "ancestry of '{injector_name}' exceeds {} levels",
                        self.max_depth
                    ),
                    chain,
                ));
            }
            config = lookup(&parent)?;
        }

        chain.reverse();
        Ok(chain.join(HIERARCHY_PATH_SEPARATOR))
    }

    /// Enable or disable recording on every injector
    ///
    /// Data collected so far is kept. An injector that cannot be resolved is
    /// logged and skipped; the rest are still updated.
    pub fn update_statistics_repositories(&self, enabled: bool) -> FanOutReport {
        let report = self.fan_out(|repository| repository.set_enabled(enabled));
        info!(
            enabled,
            updated = report.updated.len(),
            failed = report.failed.len(),
            "Updated statistics repositories"
        );
        report
    }

    /// Delete all statistics collected so far, on every injector
    pub fn reset(&self) -> FanOutReport {
        let report = self.fan_out(|repository| repository.clear());
        info!(
            cleared = report.updated.len(),
            failed = report.failed.len(),
            "Reset statistics repositories"
        );
        report
    }

    fn fan_out<F>(&self, command: F) -> FanOutReport
    where
        F: Fn(&dyn StatisticsRepositoryInterface),
    {
        let mut report = FanOutReport::default();
        for injector_name in self.hierarchy.injector_names() {
            match self.hierarchy.statistics_by_name(&injector_name) {
                Ok(repository) => {
                    command(repository.as_ref());
                    report.updated.push(injector_name);
                }
                Err(e) => {
                    warn!(injector = %injector_name, error = %e, "Skipping injector during fan-out");
                    report.failed.push((injector_name, e.to_string()));
                }
            }
        }
        report
    }
}
