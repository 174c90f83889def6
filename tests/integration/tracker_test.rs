use wattmon::{Tracker, TrackerConfig, TrackerStatus};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_fresh_tracker_is_idle() {
    let tracker = Tracker::new();
    assert_eq!(tracker.status(), TrackerStatus::Idle);
    assert_eq!(tracker.consumption_kwh(), 0.0);
    assert_eq!(tracker.total_cost(), 0.0);
}

#[test]
fn test_default_scenario_matches_expected_readings() {
    // rate=1.0, price=0.1: tick 1 gives 1/60 kWh and 1/600 cost; tick 2
    // gives 2/60 kWh and 1/600 + 2/600 = 0.005 accumulated cost.
    let mut tracker = Tracker::new();
    let config = TrackerConfig::default();

    tracker.start();

    tracker.tick(&config);
    assert_close(tracker.consumption_kwh(), 1.0 / 60.0);
    assert_close(tracker.total_cost(), 0.1 / 60.0);

    tracker.tick(&config);
    assert_close(tracker.consumption_kwh(), 2.0 / 60.0);
    assert_close(tracker.total_cost(), 0.005);
}

#[test]
fn test_consumption_increments_by_rate_over_sixty() {
    let mut tracker = Tracker::new();
    let config = TrackerConfig::new(2.5, 0.2);

    tracker.start();
    for n in 1..=10u64 {
        tracker.tick(&config);
        assert_close(tracker.consumption_kwh(), n as f64 * 2.5 / 60.0);
    }
}

#[test]
fn test_cost_is_running_product_accumulation() {
    // total_cost after tick n is the sum over ticks 1..n of
    // consumption_i * price, not a one-shot consumption_n * price.
    let mut tracker = Tracker::new();
    let config = TrackerConfig::new(1.0, 0.1);

    tracker.start();
    let mut expected = 0.0;
    for n in 1..=30u64 {
        tracker.tick(&config);
        expected += (n as f64 / 60.0) * 0.1;
        assert_close(tracker.total_cost(), expected);
    }

    // Distinctly larger than the one-shot figure
    let one_shot = tracker.consumption_kwh() * 0.1;
    assert!(tracker.total_cost() > one_shot);
}

#[test]
fn test_full_session_start_stop_resume_restart() {
    let mut tracker = Tracker::new();
    let config = TrackerConfig::default();

    // Start and accumulate
    tracker.start();
    tracker.tick(&config);
    tracker.tick(&config);
    let running = tracker.consumption_kwh();

    // Stop freezes the readings and ticks stop applying
    tracker.stop();
    assert_eq!(tracker.status(), TrackerStatus::Paused);
    assert!(!tracker.tick(&config));
    assert_eq!(tracker.consumption_kwh(), running);

    // Resume continues from the frozen readings
    tracker.resume();
    tracker.tick(&config);
    assert!(tracker.consumption_kwh() > running);

    // Starting over resets everything
    tracker.stop();
    tracker.start();
    assert_eq!(tracker.consumption_kwh(), 0.0);
    assert_eq!(tracker.total_cost(), 0.0);
    assert_eq!(tracker.status(), TrackerStatus::Tracking);
}

#[test]
fn test_stop_is_noop_outside_tracking() {
    let mut tracker = Tracker::new();
    assert!(!tracker.stop());
    assert_eq!(tracker.status(), TrackerStatus::Idle);

    tracker.start();
    tracker.stop();
    assert!(!tracker.stop());
    assert_eq!(tracker.status(), TrackerStatus::Paused);
}

#[test]
fn test_resume_from_idle_starts_without_reset() {
    // The resume guard is "not currently Tracking", so it also takes effect
    // from Idle; readings there are already zero, so nothing is missed.
    let mut tracker = Tracker::new();
    let config = TrackerConfig::default();

    assert!(tracker.resume());
    assert_eq!(tracker.status(), TrackerStatus::Tracking);

    tracker.tick(&config);
    assert_close(tracker.consumption_kwh(), 1.0 / 60.0);
}

#[test]
fn test_reconfiguration_applies_from_next_tick() {
    let mut tracker = Tracker::new();
    let mut config = TrackerConfig::default();

    tracker.start();
    tracker.tick(&config);

    config.save("6.0", "0.5").unwrap();
    tracker.tick(&config);

    assert_close(tracker.consumption_kwh(), 1.0 / 60.0 + 6.0 / 60.0);
}

#[test]
fn test_readings_survive_rejected_save() {
    let mut tracker = Tracker::new();
    let mut config = TrackerConfig::default();

    tracker.start();
    tracker.tick(&config);
    assert!(config.save("bogus", "0.2").is_err());

    // Prior configuration still drives the next tick
    tracker.tick(&config);
    assert_close(tracker.consumption_kwh(), 2.0 / 60.0);
}
