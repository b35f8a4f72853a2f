//! Domain Port Interfaces
//!
//! Boundary contracts between the statistics use cases and the injector
//! infrastructure that implements them.
//!
//! - **hierarchy** - Injector registry lookups
//! - **statistics** - Per-injector usage repositories

/// Injector registry port
pub mod hierarchy;
/// Usage statistics repository port
pub mod statistics;

pub use hierarchy::{InjectorEntry, InjectorHierarchyInterface};
pub use statistics::StatisticsRepositoryInterface;
