//! # Slice Application Layer
//!
//! Use cases orchestrating the injector hierarchy through the domain ports.
//! The only use case today is statistics aggregation and control, consumed
//! by administrative callers.

pub mod use_cases;

pub use use_cases::statistics_service::{
    FanOutReport, StatisticsEntry, StatisticsFacade, StatisticsReport,
};
