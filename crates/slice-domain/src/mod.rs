//! # Slice Domain Layer
//!
//! Core types of the injector hierarchy and its usage statistics.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `InjectorConfig` and the `ModelUsageData` tree |
//! | [`ports`] | Traits implemented by the infrastructure layer |
//! | [`error`] | Domain error type |
//! | [`constants`] | Separator and bounds shared across layers |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;

pub use entities::{InjectorConfig, ModelUsageData};
pub use error::{Error, Result};
pub use ports::{InjectorHierarchyInterface, StatisticsRepositoryInterface};
