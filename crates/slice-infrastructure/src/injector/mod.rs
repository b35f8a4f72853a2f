//! Injectors and their hierarchy
//!
//! ```text
//! InjectorHierarchy (registry)
//! ├── Injector "app"            ── InjectorStatisticsRepository
//! │   └── Injector "app-content" ── InjectorStatisticsRepository
//! └── Injector "admin"          ── InjectorStatisticsRepository
//! ```

pub mod container;
pub mod hierarchy;

pub use container::{Injector, InjectorBuilder};
pub use hierarchy::InjectorHierarchy;
