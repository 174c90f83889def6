use serde::{Deserialize, Serialize};

use super::state::{Tracker, TrackerStatus};
use crate::core::config::TrackerConfig;

/// Immutable copy of the tracker state published to observers.
///
/// A fresh snapshot goes out over the watch channel after every applied tick
/// and every state-changing command, so the dashboard and the JSON stream
/// never touch the live state machine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub status: TrackerStatus,
    pub consumption_kwh: f64,
    pub total_cost: f64,
    /// Ticks applied since the last fresh start
    pub ticks: u64,
    /// Wall-clock `HH:MM:SS` of the most recent tick, `None` before the first
    pub timestamp: Option<String>,
    /// Current configuration, so editors can prefill their fields
    pub config: TrackerConfig,
}

impl TrackerSnapshot {
    /// Capture the current tracker and configuration state.
    pub fn capture(
        tracker: &Tracker,
        config: &TrackerConfig,
        timestamp: Option<String>,
    ) -> Self {
        Self {
            status: tracker.status(),
            consumption_kwh: tracker.consumption_kwh(),
            total_cost: tracker.total_cost(),
            ticks: tracker.ticks(),
            timestamp,
            config: *config,
        }
    }
}
