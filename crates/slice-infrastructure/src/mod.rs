//! # Slice Infrastructure Layer
//!
//! Concrete injector registry, statistics storage and the cross-cutting
//! technical concerns around them.
//!
//! ### Injectors & Statistics
//! | Module | Description |
//! |--------|-------------|
//! | [`injector`] | dill-backed injectors and the hierarchy registry |
//! | [`monitoring`] | Per-injector usage repositories and instantiation scopes |
//! | [`bootstrap`] | Composition root building the hierarchy from configuration |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (TOML + environment) |
//! | [`constants`] | Centralized configuration constants |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Error context helpers |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod injector;
pub mod logging;
pub mod monitoring;

// Re-export commonly used types
pub use bootstrap::{build_hierarchy, init_app, SliceContext};
pub use error_ext::ErrorContext;
pub use injector::{Injector, InjectorBuilder, InjectorHierarchy};
pub use monitoring::{InjectionScope, InjectionTracker, InjectorStatisticsRepository};
