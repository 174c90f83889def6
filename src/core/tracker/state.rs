//! The tracking state machine and its per-tick update rule.
//!
//! Pure and synchronous: the runtime drives it from the scheduled tick, the
//! tests drive it directly. Wall-clock concerns stay out of this module.

use serde::{Deserialize, Serialize};

use crate::core::config::TrackerConfig;

/// Current tracking status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerStatus {
    /// Fresh process state, nothing tracked yet
    #[default]
    Idle,
    /// The periodic tick is advancing the readings
    Tracking,
    /// Tracking was stopped; readings are frozen but kept
    Paused,
}

impl TrackerStatus {
    /// Human-readable status label for displays.
    pub fn label(&self) -> &'static str {
        match self {
            TrackerStatus::Idle => "Not Tracking",
            TrackerStatus::Tracking => "Tracking",
            TrackerStatus::Paused => "Paused",
        }
    }
}

/// Accumulated tracking state.
///
/// Readings only move as a result of [`Tracker::tick`] while the status is
/// `Tracking`, and both reset to zero only through a fresh [`Tracker::start`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tracker {
    status: TrackerStatus,
    consumption_kwh: f64,
    total_cost: f64,
    ticks: u64,
}

impl Tracker {
    /// Create an idle tracker with zero readings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> TrackerStatus {
        self.status
    }

    pub fn consumption_kwh(&self) -> f64 {
        self.consumption_kwh
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of ticks applied since the last fresh start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Begin tracking from zero.
    ///
    /// No-op while already `Tracking`. From `Idle` or `Paused` this resets
    /// both readings unconditionally and transitions to `Tracking`. Starting
    /// over from `Paused` deliberately discards the frozen readings; use
    /// [`Tracker::resume`] to keep them. Returns whether the transition
    /// happened.
    pub fn start(&mut self) -> bool {
        if self.status == TrackerStatus::Tracking {
            return false;
        }

        self.consumption_kwh = 0.0;
        self.total_cost = 0.0;
        self.ticks = 0;
        self.status = TrackerStatus::Tracking;
        true
    }

    /// Pause tracking, keeping the accumulated readings.
    ///
    /// Only effective from `Tracking`; returns whether the transition
    /// happened.
    pub fn stop(&mut self) -> bool {
        if self.status != TrackerStatus::Tracking {
            return false;
        }

        self.status = TrackerStatus::Paused;
        true
    }

    /// Continue tracking without resetting the readings.
    ///
    /// Guards on "not currently Tracking": resuming from `Idle` also takes
    /// effect and begins ticking over the zero readings, skipping the reset a
    /// fresh start performs. Returns whether the transition happened.
    pub fn resume(&mut self) -> bool {
        if self.status == TrackerStatus::Tracking {
            return false;
        }

        self.status = TrackerStatus::Tracking;
        true
    }

    /// Apply one fixed-period update.
    ///
    /// No-op unless `Tracking`. Adds the minutes-normalized watt rate as an
    /// hourly increment, then accumulates the running product
    /// `consumption_kwh * price_per_watt_hour` into the total cost. The
    /// running-product accumulation (rather than a one-shot
    /// `consumption * price`) is intentional, preserved behavior: the total
    /// grows proportionally to elapsed-time squared. Returns whether the
    /// readings advanced.
    pub fn tick(&mut self, config: &TrackerConfig) -> bool {
        if self.status != TrackerStatus::Tracking {
            return false;
        }

        self.consumption_kwh += config.watt_rate_per_minute / 60.0;
        let current_cost = self.consumption_kwh * config.price_per_watt_hour;
        self.total_cost += current_cost;
        self.ticks += 1;
        true
    }
}
