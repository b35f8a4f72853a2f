//! Tests for the statistics facade against an in-memory hierarchy

use slice_application::StatisticsFacade;
use slice_domain::ports::{
    InjectorEntry, InjectorHierarchyInterface, StatisticsRepositoryInterface,
};
use slice_domain::{Error, InjectorConfig, ModelUsageData, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct TestRepository {
    enabled: AtomicBool,
    root: Mutex<ModelUsageData>,
}

impl TestRepository {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            enabled: AtomicBool::new(true),
            root: Mutex::new(ModelUsageData::root()),
        })
    }
}

impl StatisticsRepositoryInterface for TestRepository {
    fn record_usage_timed(&self, model_path: &[&str], elapsed: Duration) {
        if self.is_enabled() {
            self.root.lock().unwrap().record(model_path, elapsed);
        }
    }

    fn model_usage_data_root(&self) -> ModelUsageData {
        self.root.lock().unwrap().clone()
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn clear(&self) {
        *self.root.lock().unwrap() = ModelUsageData::root();
    }
}

/// Hierarchy whose entries may lack a repository, to simulate lookup failures
#[derive(Default)]
struct TestHierarchy {
    entries: Vec<(InjectorConfig, Option<Arc<TestRepository>>)>,
}

impl TestHierarchy {
    fn with(mut self, config: InjectorConfig) -> Self {
        self.entries.push((config, Some(TestRepository::new())));
        self
    }

    fn with_repository(mut self, config: InjectorConfig, repository: Arc<TestRepository>) -> Self {
        self.entries.push((config, Some(repository)));
        self
    }

    fn with_broken(mut self, config: InjectorConfig) -> Self {
        self.entries.push((config, None));
        self
    }

    fn repository(&self, name: &str) -> Arc<TestRepository> {
        self.entries
            .iter()
            .find(|(config, _)| config.name() == name)
            .and_then(|(_, repository)| repository.clone())
            .expect("repository registered")
    }
}

impl InjectorHierarchyInterface for TestHierarchy {
    fn injector_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(config, _)| config.name().to_string())
            .collect()
    }

    fn injector_config_by_name(&self, name: &str) -> Result<InjectorConfig> {
        self.entries
            .iter()
            .find(|(config, _)| config.name() == name)
            .map(|(config, _)| config.clone())
            .ok_or_else(|| Error::not_found(format!("injector '{name}'")))
    }

    fn statistics_by_name(&self, name: &str) -> Result<Arc<dyn StatisticsRepositoryInterface>> {
        let (_, repository) = self
            .entries
            .iter()
            .find(|(config, _)| config.name() == name)
            .ok_or_else(|| Error::not_found(format!("injector '{name}'")))?;
        match repository {
            Some(repository) => Ok(repository.clone()),
            None => Err(Error::injection(format!("no repository bound for '{name}'"))),
        }
    }

    fn snapshot(&self) -> Result<Vec<InjectorEntry>> {
        self.entries
            .iter()
            .map(|(config, repository)| match repository {
                Some(repository) => Ok(InjectorEntry {
                    config: config.clone(),
                    statistics: repository.clone(),
                }),
                None => Err(Error::injection(format!(
                    "no repository bound for '{}'",
                    config.name()
                ))),
            })
            .collect()
    }
}

fn chain_hierarchy() -> Arc<TestHierarchy> {
    Arc::new(
        TestHierarchy::default()
            .with(InjectorConfig::with_parent("a", "b"))
            .with(InjectorConfig::with_parent("b", "c"))
            .with(InjectorConfig::new("c")),
    )
}

#[test]
fn test_resolve_hierarchy_path_root_first() {
    let facade = StatisticsFacade::new(chain_hierarchy());

    assert_eq!(facade.resolve_hierarchy_path("a").unwrap(), "c > b > a");
    assert_eq!(facade.resolve_hierarchy_path("b").unwrap(), "c > b");
    assert_eq!(facade.resolve_hierarchy_path("c").unwrap(), "c");
}

#[test]
fn test_resolve_hierarchy_path_unknown_injector() {
    let facade = StatisticsFacade::new(chain_hierarchy());
    let result = facade.resolve_hierarchy_path("missing");
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_resolve_hierarchy_path_detects_cycle() {
    let hierarchy = Arc::new(
        TestHierarchy::default()
            .with(InjectorConfig::with_parent("x", "y"))
            .with(InjectorConfig::with_parent("y", "z"))
            .with(InjectorConfig::with_parent("z", "x")),
    );
    let facade = StatisticsFacade::new(hierarchy);

    match facade.resolve_hierarchy_path("x") {
        Err(Error::Cycle { chain, .. }) => {
            assert_eq!(chain, vec!["x", "y", "z", "x"]);
        }
        other => panic!("Expected Cycle error, got {other:?}"),
    }
}

#[test]
fn test_resolve_hierarchy_path_depth_bound() {
    let facade = StatisticsFacade::with_max_depth(chain_hierarchy(), 2);

    assert_eq!(facade.resolve_hierarchy_path("b").unwrap(), "c > b");
    assert!(matches!(
        facade.resolve_hierarchy_path("a"),
        Err(Error::Cycle { .. })
    ));
}

#[test]
fn test_collect_statistics_orders_paths_and_skips_empty() {
    let hierarchy = Arc::new(
        TestHierarchy::default()
            .with(InjectorConfig::with_parent("b", "root"))
            .with(InjectorConfig::with_parent("a", "root"))
            .with(InjectorConfig::new("root"))
            .with(InjectorConfig::with_parent("idle", "root")),
    );
    for name in ["b", "a", "root"] {
        hierarchy.repository(name).record_usage(&["ModelX"]);
    }
    let facade = StatisticsFacade::new(hierarchy);

    let statistics = facade.collect_statistics().unwrap();
    let paths: Vec<&str> = statistics.keys().map(String::as_str).collect();
    assert_eq!(paths, vec!["root", "root > a", "root > b"]);
}

#[test]
fn test_collect_statistics_propagates_lookup_failure() {
    let hierarchy = Arc::new(
        TestHierarchy::default()
            .with(InjectorConfig::new("root"))
            .with_broken(InjectorConfig::with_parent("broken", "root")),
    );
    let facade = StatisticsFacade::new(hierarchy);

    assert!(matches!(
        facade.collect_statistics(),
        Err(Error::Injection { .. })
    ));
}

#[test]
fn test_fan_out_continues_past_broken_injector() {
    let hierarchy = Arc::new(
        TestHierarchy::default()
            .with(InjectorConfig::new("first"))
            .with_broken(InjectorConfig::with_parent("broken", "first"))
            .with(InjectorConfig::with_parent("last", "first")),
    );
    let facade = StatisticsFacade::new(hierarchy.clone());

    let report = facade.update_statistics_repositories(false);
    assert_eq!(report.updated, vec!["first", "last"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "broken");
    assert!(!report.is_complete());
    assert!(!hierarchy.repository("first").is_enabled());
    assert!(!hierarchy.repository("last").is_enabled());

    hierarchy.repository("last").set_enabled(true);
    hierarchy.repository("last").record_usage(&["ModelX"]);
    let report = facade.reset();
    assert_eq!(report.updated, vec!["first", "last"]);
    assert!(hierarchy.repository("last").model_usage_data_root().is_empty());
}

#[test]
fn test_reset_is_idempotent() {
    let hierarchy = chain_hierarchy();
    hierarchy.repository("a").record_usage(&["ModelX", "ModelY"]);
    let facade = StatisticsFacade::new(hierarchy);

    assert!(facade.reset().is_complete());
    assert!(facade.collect_statistics().unwrap().is_empty());
    assert!(facade.reset().is_complete());
    assert!(facade.collect_statistics().unwrap().is_empty());
}

#[test]
fn test_statistics_report_totals() {
    let hierarchy = chain_hierarchy();
    hierarchy.repository("a").record_usage(&["ModelX", "ModelY"]);
    hierarchy.repository("a").record_usage(&["ModelX"]);
    hierarchy.repository("c").record_usage(&["ModelZ"]);
    let facade = StatisticsFacade::new(hierarchy);

    let report = facade.statistics_report().unwrap();
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].path, "c");
    assert_eq!(report.entries[0].total_usages, 1);
    assert_eq!(report.entries[1].path, "c > b > a");
    assert_eq!(report.entries[1].total_usages, 2);
    assert_eq!(report.total_usages, 3);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["entries"][1]["path"], "c > b > a");
}

#[test]
fn test_collect_statistics_rejects_duplicate_paths() {
    let first = TestRepository::new();
    let second = TestRepository::new();
    first.record_usage(&["ModelX"]);
    second.record_usage(&["ModelY"]);
    let hierarchy = Arc::new(
        TestHierarchy::default()
            .with_repository(InjectorConfig::new("shared"), first.clone())
            .with_repository(InjectorConfig::new("shared"), second.clone()),
    );
    let facade = StatisticsFacade::new(hierarchy);

    match facade.collect_statistics() {
        Err(Error::Internal { message }) => assert!(message.contains("'shared'")),
        other => panic!("Expected Internal error, got {other:?}"),
    }
    assert!(matches!(
        facade.statistics_report(),
        Err(Error::Internal { .. })
    ));

    // Neither tree was merged into or replaced by the other
    let first_root = first.model_usage_data_root();
    assert!(first_root.sub_model("ModelX").is_some());
    assert!(first_root.sub_model("ModelY").is_none());
    assert!(second.model_usage_data_root().sub_model("ModelX").is_none());
}

#[test]
fn test_collect_statistics_resolves_ancestry_from_snapshot() {
    let hierarchy = chain_hierarchy();
    hierarchy.repository("a").record_usage(&["ModelX"]);
    let facade = StatisticsFacade::new(hierarchy);

    let statistics = facade.collect_statistics().unwrap();
    assert_eq!(
        statistics.keys().collect::<Vec<_>>(),
        vec!["c > b > a"]
    );
}
