//! Form rendering shared by the admin/store and profile screens

use super::components::{render_button, BUTTON_HEIGHT};
use crate::screens::FormScreen;
use crate::state::{FormField, InputKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// Draw a form: one bordered row per field followed by the submit button
pub fn draw(frame: &mut Frame, area: Rect, form: &FormScreen) {
    let controller = &form.controller;
    let fields = controller.state().fields();

    let block = Block::default()
        .title(format!(" {} ", controller.definition().title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let busy = controller.is_busy();
    for (idx, field) in fields.iter().enumerate() {
        let is_active = !busy && idx == form.focus();
        draw_field(frame, chunks[idx], field, is_active);
    }

    let button_area = chunks[fields.len()];
    let button_area = Rect {
        width: button_area.width.min(30),
        ..button_area
    };
    render_button(frame, button_area, controller.submit_label(), !busy, !busy);
}

/// Draw a single form field
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let accent = if is_active { Color::Cyan } else { Color::DarkGray };

    let value_style = match field.kind {
        InputKind::ReadOnly => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        _ if is_active => Style::default().fg(Color::Cyan),
        _ => Style::default(),
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active && field.kind != InputKind::Checkbox {
        "▌"
    } else {
        ""
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(content.block(block), area);
}
