use std::collections::VecDeque;

const DEFAULT_HISTORY_SIZE: usize = 60;

/// Bounded ring buffers of recent readings (for the dashboard charts)
#[derive(Debug, Clone)]
pub struct ReadingHistory {
    capacity: usize,
    pub consumption_kwh: VecDeque<f64>,
    pub total_cost: VecDeque<f64>,
}

impl ReadingHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            consumption_kwh: VecDeque::with_capacity(capacity),
            total_cost: VecDeque::with_capacity(capacity),
        }
    }

    /// Record one tick's readings, evicting the oldest pair when full.
    pub fn push_reading(&mut self, consumption_kwh: f64, total_cost: f64) {
        if self.consumption_kwh.len() >= self.capacity {
            self.consumption_kwh.pop_front();
            self.total_cost.pop_front();
        }
        self.consumption_kwh.push_back(consumption_kwh);
        self.total_cost.push_back(total_cost);
    }

    /// Drop all recorded readings (a fresh start restarts the chart).
    pub fn clear(&mut self) {
        self.consumption_kwh.clear();
        self.total_cost.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.consumption_kwh.is_empty()
    }

    /// Consumption series normalized to 0-100 for the bar chart widget.
    ///
    /// The readings are open-ended (kWh keeps growing), so values are scaled
    /// against the window maximum rather than a fixed bound.
    pub fn consumption_as_u64(&self) -> Vec<u64> {
        Self::normalize(&self.consumption_kwh)
    }

    /// Cost series normalized to 0-100 for the bar chart widget.
    pub fn cost_as_u64(&self) -> Vec<u64> {
        Self::normalize(&self.total_cost)
    }

    fn normalize(series: &VecDeque<f64>) -> Vec<u64> {
        let max = series.iter().cloned().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return vec![0; series.len()];
        }
        series.iter().map(|&v| (v / max * 100.0) as u64).collect()
    }
}

impl Default for ReadingHistory {
    fn default() -> Self {
        Self::new()
    }
}
