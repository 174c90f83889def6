//! Energy tracking core functionality.
//!
//! This module provides the tracking state machine, the snapshot type
//! published to observers, the scheduled tick runtime, and the bounded
//! reading history backing the dashboard charts.

mod history;
mod runtime;
mod snapshot;
mod state;

pub use history::ReadingHistory;
pub use runtime::{engine_task, RuntimeConfig, TrackerCommand, TrackerRuntime};
pub use snapshot::TrackerSnapshot;
pub use state::{Tracker, TrackerStatus};
