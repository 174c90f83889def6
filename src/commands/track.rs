//! Tracking command handler.
//!
//! Runs the energy tracking dashboard, or a headless JSON stream printing
//! one snapshot per tick for scripting.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::config::{
    TrackerConfig, DEFAULT_PRICE_PER_WATT_HOUR, DEFAULT_WATT_RATE_PER_MINUTE,
};
use crate::core::tracker::{RuntimeConfig, TrackerRuntime};
use crate::ui::tracker_tui::run_tracker_app;

/// Execute the track command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    // Extract arguments
    let interval = matches.get_one::<u64>("interval").copied().unwrap_or(1000);

    let rate = matches
        .get_one::<f64>("rate")
        .copied()
        .unwrap_or(DEFAULT_WATT_RATE_PER_MINUTE);

    let price = matches
        .get_one::<f64>("price")
        .copied()
        .unwrap_or(DEFAULT_PRICE_PER_WATT_HOUR);

    let json_output = matches.get_flag("json");

    let config = RuntimeConfig {
        tick_interval_ms: interval.max(1),
        config: TrackerConfig::new(rate, price),
    };

    // Handle JSON output mode (non-TUI)
    if json_output {
        let max_ticks = matches.get_one::<u64>("ticks").copied().unwrap_or(0);
        return run_json_stream(config, max_ticks);
    }

    run_tracker_app(config).context("Failed to run tracking dashboard")
}

/// Run in JSON output mode (for scripting).
///
/// Tracking starts immediately; one snapshot line goes out per applied tick
/// until `max_ticks` is reached (0 means until interrupted).
fn run_json_stream(config: RuntimeConfig, max_ticks: u64) -> Result<()> {
    let interval_ms = config.tick_interval_ms;
    let runtime = TrackerRuntime::new(config).context("Failed to start tracker engine")?;
    let mut snapshot_rx = runtime.snapshot_rx.clone();

    let interrupted = Arc::new(AtomicBool::new(false));
    let handler_flag = interrupted.clone();
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    runtime.start().context("Failed to start tracking")?;

    // Poll well under one tick period so no published tick is missed
    let poll = Duration::from_millis((interval_ms / 4).clamp(10, 250));

    while !interrupted.load(Ordering::SeqCst) {
        if snapshot_rx.has_changed().unwrap_or(false) {
            let snapshot = snapshot_rx.borrow_and_update().clone();

            // Skip the initial Start publication; only tick snapshots carry
            // a timestamp
            if snapshot.timestamp.is_some() {
                println!("{}", serde_json::to_string(&snapshot)?);

                if max_ticks > 0 && snapshot.ticks >= max_ticks {
                    break;
                }
            }
        }

        std::thread::sleep(poll);
    }

    runtime.shutdown();
    Ok(())
}
