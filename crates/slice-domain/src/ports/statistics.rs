//! Statistics Repository Port
//!
//! Defines the contract for the per-injector model usage store.

use crate::entities::ModelUsageData;
use std::time::Duration;

/// Per-injector model usage store
///
/// Implementations must serialize mutations of their own tree; repositories
/// are independent of each other.
pub trait StatisticsRepositoryInterface: Send + Sync {
    /// Record one instantiation of the innermost model of `model_path`
    ///
    /// No-op when recording is disabled or the path is empty.
    fn record_usage_timed(&self, model_path: &[&str], elapsed: Duration);

    /// Record one instantiation without timing information
    fn record_usage(&self, model_path: &[&str]) {
        self.record_usage_timed(model_path, Duration::ZERO);
    }

    /// Consistent snapshot of the current usage tree
    fn model_usage_data_root(&self) -> ModelUsageData;

    /// Enable or disable recording; collected data is kept
    fn set_enabled(&self, enabled: bool);

    /// Whether recording is currently enabled
    fn is_enabled(&self) -> bool;

    /// Drop everything collected so far
    fn clear(&self);
}
