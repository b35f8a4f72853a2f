//! Model usage monitoring
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`repository`] | Per-injector usage store |
//! | [`scope`] | RAII tracking of nested instantiations |

pub mod repository;
pub mod scope;

pub use repository::InjectorStatisticsRepository;
pub use scope::{InjectionScope, InjectionTracker};
