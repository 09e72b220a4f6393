//! System status screen: platform stats, storage gauge and maintenance toggle

use crate::screens::SystemStatusScreen;
use crate::state::ToggleState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, status: &SystemStatusScreen) {
    let block = Block::default()
        .title(" System Status ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if status.loading {
        let text = Paragraph::new("Loading system status...")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Maintenance
            Constraint::Length(3), // Storage gauge
            Constraint::Length(1), // Critical warning
            Constraint::Min(0),    // Stats
        ])
        .split(inner);

    draw_maintenance(frame, chunks[0], status);
    draw_storage(frame, chunks[1], chunks[2], status);
    draw_stats(frame, chunks[3], status);
}

fn draw_maintenance(frame: &mut Frame, area: Rect, status: &SystemStatusScreen) {
    let toggle = &status.maintenance;
    let (label, color) = if toggle.displayed() {
        ("ON", Color::Yellow)
    } else {
        ("OFF", Color::Green)
    };

    let mut spans = vec![
        Span::raw("Maintenance mode: "),
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ];
    if let ToggleState::Pending { previous, .. } = toggle.state() {
        spans.push(Span::styled(
            format!("  (saving, was {})", if previous { "ON" } else { "OFF" }),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_storage(
    frame: &mut Frame,
    gauge_area: Rect,
    warning_area: Rect,
    status: &SystemStatusScreen,
) {
    let stats = &status.stats;
    let percent = stats.storage_percentage();
    let color = if stats.is_storage_critical() {
        Color::Red
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Storage ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!(
            "{}GB / {}GB ({percent:.0}%)",
            stats.storage_used, stats.total_storage
        ));
    frame.render_widget(gauge, gauge_area);

    if stats.is_storage_critical() {
        let warning = Paragraph::new("Critical storage level!")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(warning, warning_area);
    }
}

fn draw_stats(frame: &mut Frame, area: Rect, status: &SystemStatusScreen) {
    let stats = &status.stats;
    let rows = [
        ("Daily orders", stats.daily_orders.to_string()),
        ("Monthly orders", stats.monthly_orders.to_string()),
        ("Monthly revenue", format!("${:.2}", stats.monthly_revenue)),
        ("Active stores", stats.active_stores.to_string()),
        ("Active admins", stats.active_admins.to_string()),
    ];

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<18}"), Style::default().fg(Color::DarkGray)),
                Span::raw(value),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
