use std::time::Duration;

/// Format a kilowatt-hour reading for the dashboard (6 decimals).
pub fn format_kwh(kwh: f64) -> String {
    format!("{:.6} kWh", kwh)
}

/// Format an accumulated cost figure.
///
/// The running-product total grows slowly at default parameters, so nine
/// decimals keep the first ticks visible instead of rendering as $0.00.
pub fn format_cost(cost: f64) -> String {
    format!("${:.9}", cost)
}

/// Format elapsed tracking time from the tick count and tick period.
pub fn format_elapsed(ticks: u64, tick_interval_ms: u64) -> String {
    let total_secs = Duration::from_millis(ticks.saturating_mul(tick_interval_ms)).as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format the tick period for the header (whole seconds when exact).
pub fn format_interval(tick_interval_ms: u64) -> String {
    if tick_interval_ms % 1000 == 0 {
        format!("{}s", tick_interval_ms / 1000)
    } else {
        format!("{}ms", tick_interval_ms)
    }
}
