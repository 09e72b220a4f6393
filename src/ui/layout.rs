//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::screens::Screen;
use crate::state::{SessionContext, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar, returning (sidebar, content)
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the sidebar with one boxed button per view
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        let key = format!("F{}", idx + 1);
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &key,
            view.label(),
            *view == app.state.current_view,
        );
    }
}

/// Draw the status bar on the last row
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let busy = app.state.screen.is_busy();
    spans.push(if busy {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    });

    spans.push(Span::styled(
        view_hints(&app.state.screen),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(user) = app.session().current_user() {
        spans.push(Span::styled(
            format!("  {} ({})", user.username, user.role.label()),
            Style::default().fg(Color::Blue),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn view_hints(screen: &Screen) -> String {
    if screen.form().is_some() {
        format!("Tab: next field | Enter/{SUBMIT_SHORTCUT}: submit | F1-F3: switch | Ctrl+Q: quit")
    } else {
        "m/Space: toggle maintenance | r: refresh | F1-F3: switch | Ctrl+Q: quit".to_string()
    }
}
