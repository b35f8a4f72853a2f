//! # Slice
//!
//! Named, parent-linked dependency-injection containers ("injectors") that
//! each keep a tree of the data models they instantiated, plus a facade that
//! aggregates, toggles and resets those statistics across the hierarchy.
//!
//! ## Example
//!
//! ```ignore
//! use slice::prelude::*;
//!
//! let hierarchy = InjectorHierarchy::new_shared();
//! hierarchy.register(Injector::new(InjectorConfig::new("app")))?;
//! let content = hierarchy.register(Injector::new(InjectorConfig::with_parent("content", "app")))?;
//!
//! content.statistics().record_usage(&["ArticleModel", "ImageModel"]);
//!
//! let facade = StatisticsFacade::new(hierarchy);
//! for (path, root) in facade.collect_statistics()? {
//!     println!("{path}: {} usages", root.total_usages()); // "app > content: 1 usages"
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, errors and port traits
//! - `application` - Statistics aggregation and control
//! - `infrastructure` - Injectors, hierarchy registry, repositories, config, logging

/// Domain layer - entities, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use slice_domain::*;
}

/// Application layer - statistics facade
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use slice_application::*;
}

/// Infrastructure layer - injectors, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use slice_infrastructure::*;
}

/// Commonly used types
pub mod prelude {
    pub use slice_application::{FanOutReport, StatisticsFacade, StatisticsReport};
    pub use slice_domain::ports::{InjectorHierarchyInterface, StatisticsRepositoryInterface};
    pub use slice_domain::{Error, InjectorConfig, ModelUsageData, Result};
    pub use slice_infrastructure::config::{AppConfig, ConfigLoader};
    pub use slice_infrastructure::{
        init_app, InjectionTracker, Injector, InjectorHierarchy, InjectorStatisticsRepository,
        SliceContext,
    };
}
