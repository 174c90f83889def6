// Core business logic module

pub mod config;
pub mod tracker;

// Re-export commonly used items
pub use config::TrackerConfig;
pub use tracker::{Tracker, TrackerRuntime, TrackerSnapshot, TrackerStatus};
