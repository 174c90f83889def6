use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::config::TrackerConfig;
use crate::core::tracker::{ReadingHistory, RuntimeConfig, TrackerRuntime, TrackerSnapshot};

use super::event_handler::TrackerEvent;
use super::render::render_ui;

/// Which editor field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    WattRate,
    Price,
}

/// State of the modal configuration editor
#[derive(Debug, Clone)]
pub struct ConfigEditor {
    pub watt_text: String,
    pub price_text: String,
    pub active_field: EditorField,
    /// Last rejected save, shown until the next keystroke
    pub error: Option<String>,
}

impl ConfigEditor {
    /// Open the editor prefilled with the current configuration.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            watt_text: config.watt_rate_per_minute.to_string(),
            price_text: config.price_per_watt_hour.to_string(),
            active_field: EditorField::WattRate,
            error: None,
        }
    }

    fn active_text_mut(&mut self) -> &mut String {
        match self.active_field {
            EditorField::WattRate => &mut self.watt_text,
            EditorField::Price => &mut self.price_text,
        }
    }

    fn switch_field(&mut self) {
        self.active_field = match self.active_field {
            EditorField::WattRate => EditorField::Price,
            EditorField::Price => EditorField::WattRate,
        };
    }
}

/// Tracker application state
pub struct TrackerApp {
    pub runtime: TrackerRuntime,
    pub snapshot: TrackerSnapshot,
    pub history: ReadingHistory,
    pub interval_ms: u64,
    pub should_quit: bool,
    pub show_help: bool,
    pub editor: Option<ConfigEditor>,
}

impl TrackerApp {
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let interval_ms = config.tick_interval_ms;
        let runtime = TrackerRuntime::new(config).context("Failed to start tracker engine")?;
        let snapshot = runtime.snapshot();

        Ok(Self {
            runtime,
            snapshot,
            history: ReadingHistory::new(),
            interval_ms,
            should_quit: false,
            show_help: false,
            editor: None,
        })
    }

    /// Pull the latest published snapshot, feeding the reading history.
    pub fn refresh_snapshot(&mut self) {
        if !self.runtime.snapshot_rx.has_changed().unwrap_or(false) {
            return;
        }

        let fresh: TrackerSnapshot = self.runtime.snapshot_rx.borrow_and_update().clone();

        // A fresh start rewinds the tick count; restart the chart with it
        if fresh.ticks < self.snapshot.ticks {
            self.history.clear();
        }
        if fresh.ticks > self.snapshot.ticks {
            self.history
                .push_reading(fresh.consumption_kwh, fresh.total_cost);
        }

        self.snapshot = fresh;
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: TrackerEvent) {
        match event {
            TrackerEvent::Quit => self.should_quit = true,
            TrackerEvent::ToggleHelp => self.show_help = !self.show_help,
            TrackerEvent::Start => self.send(TrackerRuntime::start),
            TrackerEvent::Stop => self.send(TrackerRuntime::stop),
            TrackerEvent::Resume => self.send(TrackerRuntime::resume),
            TrackerEvent::OpenEditor => {
                self.editor = Some(ConfigEditor::from_config(&self.snapshot.config));
            }
            TrackerEvent::EditorInput(c) => {
                if let Some(editor) = self.editor.as_mut() {
                    if !c.is_control() {
                        editor.active_text_mut().push(c);
                        editor.error = None;
                    }
                }
            }
            TrackerEvent::EditorBackspace => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.active_text_mut().pop();
                    editor.error = None;
                }
            }
            TrackerEvent::EditorSwitchField => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.switch_field();
                }
            }
            TrackerEvent::EditorSave => self.save_editor(),
            TrackerEvent::EditorCancel => self.editor = None,
            TrackerEvent::None => {}
        }
    }

    /// Parse and save the editor fields through the engine.
    ///
    /// Success closes the editor; a rejected save keeps it open with the
    /// error message and the prior configuration intact.
    fn save_editor(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        match self
            .runtime
            .save_config(&editor.watt_text, &editor.price_text)
        {
            Ok(_) => self.editor = None,
            Err(e) => editor.error = Some(e.to_string()),
        }
    }

    fn send(&mut self, op: fn(&TrackerRuntime) -> crate::error::Result<()>) {
        if let Err(e) = op(&self.runtime) {
            log::warn!("tracker command dropped: {}", e);
        }
    }
}

/// Map a key press to a tracker event, depending on whether the
/// configuration editor is capturing input.
fn map_key(code: KeyCode, editor_open: bool) -> TrackerEvent {
    if editor_open {
        match code {
            KeyCode::Esc => TrackerEvent::EditorCancel,
            KeyCode::Enter => TrackerEvent::EditorSave,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                TrackerEvent::EditorSwitchField
            }
            KeyCode::Backspace => TrackerEvent::EditorBackspace,
            KeyCode::Char(c) => TrackerEvent::EditorInput(c),
            _ => TrackerEvent::None,
        }
    } else {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => TrackerEvent::Quit,
            KeyCode::Char('?') | KeyCode::Char('h') => TrackerEvent::ToggleHelp,
            KeyCode::Char('s') => TrackerEvent::Start,
            KeyCode::Char('p') => TrackerEvent::Stop,
            KeyCode::Char('r') => TrackerEvent::Resume,
            KeyCode::Char('c') => TrackerEvent::OpenEditor,
            _ => TrackerEvent::None,
        }
    }
}

/// Run the tracker TUI application
pub fn run_tracker_app(config: RuntimeConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = TrackerApp::new(config)?;

    // The engine publishes at tick granularity; poll well under one period
    // so key presses stay responsive
    let poll_timeout = Duration::from_millis(200);

    // Main loop
    loop {
        app.refresh_snapshot();

        terminal.draw(|frame| render_ui(frame, &app))?;

        if event::poll(poll_timeout).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let tracker_event = map_key(key.code, app.editor.is_some());
                    app.handle_event(tracker_event);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    let TrackerApp { runtime, .. } = app;
    runtime.shutdown();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_dashboard_mode() {
        assert_eq!(map_key(KeyCode::Char('s'), false), TrackerEvent::Start);
        assert_eq!(map_key(KeyCode::Char('p'), false), TrackerEvent::Stop);
        assert_eq!(map_key(KeyCode::Char('r'), false), TrackerEvent::Resume);
        assert_eq!(map_key(KeyCode::Char('c'), false), TrackerEvent::OpenEditor);
        assert_eq!(map_key(KeyCode::Char('q'), false), TrackerEvent::Quit);
        assert_eq!(map_key(KeyCode::Esc, false), TrackerEvent::Quit);
        assert_eq!(map_key(KeyCode::Char('x'), false), TrackerEvent::None);
    }

    #[test]
    fn test_map_key_editor_mode_captures_input() {
        assert_eq!(
            map_key(KeyCode::Char('2'), true),
            TrackerEvent::EditorInput('2')
        );
        assert_eq!(map_key(KeyCode::Enter, true), TrackerEvent::EditorSave);
        assert_eq!(map_key(KeyCode::Esc, true), TrackerEvent::EditorCancel);
        assert_eq!(map_key(KeyCode::Tab, true), TrackerEvent::EditorSwitchField);
        // 'q' types into the field instead of quitting
        assert_eq!(
            map_key(KeyCode::Char('q'), true),
            TrackerEvent::EditorInput('q')
        );
    }

    #[test]
    fn test_editor_prefills_and_switches_fields() {
        let config = TrackerConfig::new(2.5, 0.2);
        let mut editor = ConfigEditor::from_config(&config);
        assert_eq!(editor.watt_text, "2.5");
        assert_eq!(editor.price_text, "0.2");
        assert_eq!(editor.active_field, EditorField::WattRate);

        editor.switch_field();
        assert_eq!(editor.active_field, EditorField::Price);
        editor.active_text_mut().push('5');
        assert_eq!(editor.price_text, "0.25");
    }
}
