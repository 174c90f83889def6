//! Terminal User Interface for the energy tracker.
//!
//! Provides a real-time dashboard using ratatui.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_tracker_app, ConfigEditor, EditorField, TrackerApp};
pub use event_handler::TrackerEvent;
