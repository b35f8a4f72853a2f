//! Configuration types module

pub mod app;
pub mod logging;
pub mod statistics;

// Re-export main types
pub use app::*;
