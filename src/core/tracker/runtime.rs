//! Tokio runtime and scheduled tick task for the tracker.
//!
//! The engine task owns the state machine and the configuration store; user
//! actions arrive as commands over an mpsc channel and every state change
//! goes back out as a snapshot over a watch channel. All mutations are
//! serialized through the task's select loop, so no locking is involved.

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use super::snapshot::TrackerSnapshot;
use super::state::Tracker;
use crate::core::config::TrackerConfig;
use crate::error::{Result, WattmonError};

/// Initial parameters for the tracker runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Tick period in milliseconds
    pub tick_interval_ms: u64,
    /// Seed values for the configuration store
    pub config: TrackerConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            config: TrackerConfig::default(),
        }
    }
}

/// Commands accepted by the engine task.
#[derive(Debug)]
pub enum TrackerCommand {
    /// Begin tracking from zero readings
    Start,
    /// Pause tracking, keeping the readings
    Stop,
    /// Continue tracking without a reset
    Resume,
    /// Parse the raw editor fields and replace the configuration
    SaveConfig {
        watt_text: String,
        price_text: String,
        reply: oneshot::Sender<Result<TrackerConfig>>,
    },
}

/// Wrapper around the Tokio runtime driving the tracker engine.
///
/// Owns a dedicated runtime so callers (the TUI runs on a plain thread) never
/// need an async context of their own.
pub struct TrackerRuntime {
    /// Receiver for tracker snapshots
    pub snapshot_rx: watch::Receiver<TrackerSnapshot>,

    /// Sender for user commands
    command_tx: mpsc::Sender<TrackerCommand>,

    /// Shutdown signal sender
    shutdown_tx: broadcast::Sender<()>,

    /// Handle to the runtime (for shutdown)
    _runtime_handle: tokio::runtime::Runtime,
}

impl TrackerRuntime {
    /// Create a new TrackerRuntime with the engine task spawned.
    pub fn new(cfg: RuntimeConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .thread_name("tracker-engine")
            .build()?;

        let initial = TrackerSnapshot::capture(&Tracker::new(), &cfg.config, None);
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);
        let (command_tx, command_rx) = mpsc::channel::<TrackerCommand>(32);
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        let shutdown_rx = shutdown_tx.subscribe();
        runtime.spawn(engine_task(cfg, snapshot_tx, command_rx, shutdown_rx));

        Ok(Self {
            snapshot_rx,
            command_tx,
            shutdown_tx,
            _runtime_handle: runtime,
        })
    }

    /// Copy of the most recently published snapshot.
    pub fn snapshot(&self) -> TrackerSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Begin tracking from zero readings.
    pub fn start(&self) -> Result<()> {
        self.send(TrackerCommand::Start)
    }

    /// Pause tracking, keeping the readings.
    pub fn stop(&self) -> Result<()> {
        self.send(TrackerCommand::Stop)
    }

    /// Continue tracking without a reset.
    pub fn resume(&self) -> Result<()> {
        self.send(TrackerCommand::Resume)
    }

    /// Parse and save both configuration fields, waiting for the outcome.
    ///
    /// Blocks the calling thread until the engine replies; the caller must
    /// not be a tokio worker (the TUI thread is not).
    pub fn save_config(&self, watt_text: &str, price_text: &str) -> Result<TrackerConfig> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(TrackerCommand::SaveConfig {
            watt_text: watt_text.to_string(),
            price_text: price_text.to_string(),
            reply: reply_tx,
        })?;

        reply_rx
            .blocking_recv()
            .map_err(|_| WattmonError::runtime("engine task dropped the save reply"))?
    }

    fn send(&self, command: TrackerCommand) -> Result<()> {
        self.command_tx
            .try_send(command)
            .map_err(|e| WattmonError::runtime(format!("engine task unavailable: {e}")))
    }

    /// Shutdown the runtime gracefully.
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        // Runtime will shutdown when dropped
    }
}

/// The scheduled tick task.
///
/// Owns the tracker and the configuration store for its whole lifetime.
/// The interval fires its first tick one full period after creation, and is
/// reset on Start and Resume so the first post-transition tick also lands a
/// full period later.
pub async fn engine_task(
    cfg: RuntimeConfig,
    snapshot_tx: watch::Sender<TrackerSnapshot>,
    mut command_rx: mpsc::Receiver<TrackerCommand>,
    mut shutdown: broadcast::Receiver<()>,
) {
    log::debug!(
        "tracker engine started (tick every {}ms)",
        cfg.tick_interval_ms
    );

    let mut tracker = Tracker::new();
    let mut config = cfg.config;
    let mut last_tick_time: Option<String> = None;

    let period = Duration::from_millis(cfg.tick_interval_ms.max(1));
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // No-op unless Tracking; silent ticks publish nothing
                if tracker.tick(&config) {
                    last_tick_time = Some(wall_clock_hhmmss());
                    publish(&snapshot_tx, &tracker, &config, &last_tick_time);
                }
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    // All command handles dropped
                    break;
                };

                match command {
                    TrackerCommand::Start => {
                        if tracker.start() {
                            log::debug!("tracking started");
                            last_tick_time = None;
                            ticker.reset();
                            publish(&snapshot_tx, &tracker, &config, &last_tick_time);
                        }
                    }
                    TrackerCommand::Stop => {
                        if tracker.stop() {
                            log::debug!("tracking paused at {} ticks", tracker.ticks());
                            publish(&snapshot_tx, &tracker, &config, &last_tick_time);
                        }
                    }
                    TrackerCommand::Resume => {
                        if tracker.resume() {
                            log::debug!("tracking resumed");
                            ticker.reset();
                            publish(&snapshot_tx, &tracker, &config, &last_tick_time);
                        }
                    }
                    TrackerCommand::SaveConfig { watt_text, price_text, reply } => {
                        let result = config.save(&watt_text, &price_text).map(|()| config);
                        if result.is_ok() {
                            log::debug!(
                                "configuration saved: rate={} price={}",
                                config.watt_rate_per_minute,
                                config.price_per_watt_hour
                            );
                            publish(&snapshot_tx, &tracker, &config, &last_tick_time);
                        }
                        // Receiver may have given up waiting; nothing to do then
                        let _ = reply.send(result);
                    }
                }
            }
            _ = shutdown.recv() => {
                log::debug!("tracker engine shutting down");
                break;
            }
        }
    }
}

fn publish(
    snapshot_tx: &watch::Sender<TrackerSnapshot>,
    tracker: &Tracker,
    config: &TrackerConfig,
    last_tick_time: &Option<String>,
) {
    // watch::send() only fails if there are no receivers (which is fine)
    let _ = snapshot_tx.send(TrackerSnapshot::capture(
        tracker,
        config,
        last_tick_time.clone(),
    ));
}

fn wall_clock_hhmmss() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
