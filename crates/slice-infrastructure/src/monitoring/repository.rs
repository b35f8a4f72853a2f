//! Per-injector statistics repository
//!
//! Thread-safe implementation of [`StatisticsRepositoryInterface`]. The usage
//! tree sits behind a mutex so concurrent recordings never lose increments,
//! and readers always receive a deep snapshot taken under the same lock.

use slice_domain::ModelUsageData;
use slice_domain::ports::StatisticsRepositoryInterface;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::trace;

/// Model usage store owned by a single injector
#[derive(Debug)]
pub struct InjectorStatisticsRepository {
    /// Whether instantiations are currently recorded
    enabled: AtomicBool,

    /// Root of the usage tree
    root: Mutex<ModelUsageData>,
}

impl InjectorStatisticsRepository {
    /// Create an empty repository
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            root: Mutex::new(ModelUsageData::root()),
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared(enabled: bool) -> Arc<Self> {
        Arc::new(Self::new(enabled))
    }

    /// Whether anything has been recorded since the last clear
    pub fn has_data(&self) -> bool {
        !self.lock_root().is_empty()
    }

    // Every mutation leaves the tree consistent, so a poisoned lock is safe to reuse
    fn lock_root(&self) -> MutexGuard<'_, ModelUsageData> {
        self.root.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InjectorStatisticsRepository {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StatisticsRepositoryInterface for InjectorStatisticsRepository {
    fn record_usage_timed(&self, model_path: &[&str], elapsed: Duration) {
        if !self.is_enabled() {
            return;
        }
        // Re-checked under the lock that set_enabled also takes
        let mut root = self.lock_root();
        if self.is_enabled() && root.record(model_path, elapsed) {
            trace!(path = ?model_path, "Recorded model usage");
        }
    }

    fn model_usage_data_root(&self) -> ModelUsageData {
        self.lock_root().clone()
    }

    fn set_enabled(&self, enabled: bool) {
        let _root = self.lock_root();
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn clear(&self) {
        *self.lock_root() = ModelUsageData::root();
    }
}
