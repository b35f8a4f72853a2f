//! Injection Scope Tests

use slice_domain::ports::StatisticsRepositoryInterface;
use slice_infrastructure::monitoring::{InjectionTracker, InjectorStatisticsRepository};
use std::sync::Arc;

#[test]
fn test_nested_scopes_record_chain() {
    let repository = InjectorStatisticsRepository::new_shared(true);
    let tracker = InjectionTracker::new(repository.clone());

    {
        let article = tracker.enter("ArticleModel");
        assert_eq!(article.depth(), 1);
        {
            let image = tracker.enter("ImageModel");
            assert_eq!(image.depth(), 2);
            assert_eq!(tracker.current_chain(), vec!["ArticleModel", "ImageModel"]);
        }
        assert_eq!(tracker.depth(), 1);
    }
    assert_eq!(tracker.depth(), 0);

    let root = repository.model_usage_data_root();
    let article = root.sub_model("ArticleModel").unwrap();
    assert_eq!(article.count(), 1);
    assert_eq!(article.sub_model("ImageModel").unwrap().count(), 1);
}

#[test]
fn test_sibling_scopes_share_parent_node() {
    let repository = InjectorStatisticsRepository::new_shared(true);
    let tracker = InjectionTracker::new(repository.clone());

    {
        let _page = tracker.enter("PageModel");
        drop(tracker.enter("LinkModel"));
        drop(tracker.enter("LinkModel"));
    }

    let root = repository.model_usage_data_root();
    let page = root.sub_model("PageModel").unwrap();
    assert_eq!(page.sub_models().len(), 1);
    assert_eq!(page.sub_model("LinkModel").unwrap().count(), 2);
}

#[test]
fn test_scope_respects_disabled_repository() {
    let repository = InjectorStatisticsRepository::new_shared(false);
    let tracker = InjectionTracker::new(repository.clone());

    drop(tracker.enter("ModelX"));
    assert!(repository.model_usage_data_root().is_empty());
    assert_eq!(tracker.depth(), 0);
}

#[test]
fn test_parent_closed_first_skips_orphaned_child() {
    let repository = InjectorStatisticsRepository::new_shared(true);
    let tracker = InjectionTracker::new(repository.clone() as Arc<dyn StatisticsRepositoryInterface>);

    let outer = tracker.enter("Outer");
    let inner = tracker.enter("Inner");
    drop(outer);
    drop(inner);

    let root = repository.model_usage_data_root();
    let outer = root.sub_model("Outer").unwrap();
    assert_eq!(outer.count(), 1);
    assert!(outer.sub_model("Inner").is_none());
    assert_eq!(tracker.depth(), 0);
}

#[test]
fn test_stale_child_does_not_close_reopened_depth() {
    let repository = InjectorStatisticsRepository::new_shared(true);
    let tracker = InjectionTracker::new(repository.clone());

    let a = tracker.enter("A");
    let b = tracker.enter("B");
    drop(a);
    let c = tracker.enter("C");
    let d = tracker.enter("D");
    drop(b);
    assert_eq!(tracker.current_chain(), vec!["C", "D"]);
    drop(d);
    assert_eq!(tracker.current_chain(), vec!["C"]);
    drop(c);
    assert_eq!(tracker.depth(), 0);

    let root = repository.model_usage_data_root();
    let a = root.sub_model("A").unwrap();
    assert_eq!(a.count(), 1);
    assert!(a.sub_model("B").is_none());
    let c = root.sub_model("C").unwrap();
    assert_eq!(c.count(), 1);
    assert_eq!(c.sub_model("D").unwrap().count(), 1);
    assert_eq!(root.total_usages(), 3);
}
