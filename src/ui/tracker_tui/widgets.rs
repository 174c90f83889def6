use ratatui::prelude::*;

use crate::core::tracker::TrackerStatus;

/// Style for the status label in the header
pub fn status_style(status: TrackerStatus) -> Style {
    let color = match status {
        TrackerStatus::Idle => Color::DarkGray,
        TrackerStatus::Tracking => Color::Cyan,
        TrackerStatus::Paused => Color::LightYellow,
    };

    Style::default().fg(color)
}
