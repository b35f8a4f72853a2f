//! Application use cases

/// Statistics aggregation and control
pub mod statistics_service;

pub use statistics_service::StatisticsFacade;
