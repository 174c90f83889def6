use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, Clear, Paragraph},
};

use crate::ui::formatters::{format_cost, format_elapsed, format_interval, format_kwh};

use super::app::{ConfigEditor, EditorField, TrackerApp};
use super::widgets::status_style;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &TrackerApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with status and elapsed time
            Constraint::Length(5), // Consumption + cost panels
            Constraint::Min(5),    // Consumption history chart
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_metrics_row(frame, chunks[1], app);
    render_history_chart(frame, chunks[2], app);
    render_footer(frame, chunks[3]);

    // Modal overlays
    if let Some(ref editor) = app.editor {
        render_config_editor(frame, area, editor);
    }
    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &TrackerApp) {
    let snapshot = &app.snapshot;

    let header_line = Line::from(vec![
        Span::raw(" Status: "),
        Span::styled(
            snapshot.status.label(),
            status_style(snapshot.status).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ Elapsed: "),
        Span::raw(format_elapsed(snapshot.ticks, app.interval_ms)),
        Span::raw(" │ Tick: "),
        Span::raw(format_interval(app.interval_ms)),
    ]);

    let block = Block::default()
        .title(" wattmon - Energy Tracker ")
        .borders(Borders::ALL);

    let paragraph = Paragraph::new(header_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_metrics_row(frame: &mut Frame, area: Rect, app: &TrackerApp) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_consumption_panel(frame, panels[0], app);
    render_cost_panel(frame, panels[1], app);
}

fn render_consumption_panel(frame: &mut Frame, area: Rect, app: &TrackerApp) {
    let snapshot = &app.snapshot;

    let mut lines = vec![Line::from(Span::styled(
        format_kwh(snapshot.consumption_kwh),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    match snapshot.timestamp {
        Some(ref at) => lines.push(Line::from(Span::styled(
            format!("at {}", at),
            Style::default().fg(Color::DarkGray),
        ))),
        None => lines.push(Line::from(Span::styled(
            "no readings yet",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let block = Block::default()
        .title(" Consumption ")
        .borders(Borders::ALL);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_cost_panel(frame: &mut Frame, area: Rect, app: &TrackerApp) {
    let snapshot = &app.snapshot;
    let (rate, price) = snapshot.config.get();

    let lines = vec![
        Line::from(Span::styled(
            format_cost(snapshot.total_cost),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("rate: {} W/min │ price: {} $/Wh", rate, price),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Accumulated Cost [c: configure] ")
        .borders(Borders::ALL);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_history_chart(frame: &mut Frame, area: Rect, app: &TrackerApp) {
    let block = Block::default()
        .title(" Consumption History (last 60 ticks) ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return; // Not enough space for bars
    }

    let history_data = app.history.consumption_as_u64();
    if history_data.is_empty() {
        let hint = Paragraph::new(" Press s to start tracking ")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    }

    // Each bar needs bar_width + bar_gap columns; show the most recent ones
    let bar_width: u16 = 1;
    let bar_gap: u16 = 1;
    let space_per_bar = (bar_width + bar_gap) as usize;
    let max_bars = (inner.width as usize / space_per_bar).min(history_data.len());
    let start_idx = history_data.len().saturating_sub(max_bars);

    let data_to_show: Vec<(&str, u64)> = history_data[start_idx..]
        .iter()
        .map(|&val| ("", val))
        .collect();

    let chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .max(100)
        .data(&data_to_show);

    frame.render_widget(chart, inner);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = " s: Start │ p: Stop │ r: Resume │ c: Configure │ ?: Help │ q: Quit ";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_config_editor(frame: &mut Frame, area: Rect, editor: &ConfigEditor) {
    let popup_area = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(""),
        editor_field_line(
            "Watt rate (W/min)",
            &editor.watt_text,
            editor.active_field == EditorField::WattRate,
        ),
        Line::from(""),
        editor_field_line(
            "Price ($/Wh)",
            &editor.price_text,
            editor.active_field == EditorField::Price,
        ),
        Line::from(""),
    ];

    if let Some(ref error) = editor.error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Enter: save │ Tab: switch field │ Esc: cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" Configuration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

fn editor_field_line<'a>(label: &'a str, text: &'a str, active: bool) -> Line<'a> {
    let (marker, style) = if active {
        (
            "> ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default())
    };

    let cursor = if active { "_" } else { "" };

    Line::from(vec![
        Span::raw(marker),
        Span::raw(format!("{}: ", label)),
        Span::styled(format!("{}{}", text, cursor), style),
    ])
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    Wattmon Energy Tracker - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc     Quit the application
    ? / h       Toggle this help screen
    s           Start tracking (resets readings)
    p           Stop (pause) tracking
    r           Resume tracking without reset
    c           Open the configuration editor

    Starting over while paused discards the
    frozen readings; resume keeps them.

    Press ? to close this help
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    let popup_area = centered_rect(60, 50, area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
