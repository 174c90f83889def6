// Wattmon Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, WattmonError};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::TrackerConfig;
pub use crate::core::tracker::{Tracker, TrackerRuntime, TrackerSnapshot, TrackerStatus};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
