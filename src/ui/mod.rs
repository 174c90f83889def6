// UI and formatting module

pub mod formatters;
pub mod tracker_tui;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_cost, format_elapsed, format_interval, format_kwh};
