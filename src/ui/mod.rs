//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod system_status;

use crate::app::App;
use crate::screens::Screen;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    match &app.state.screen {
        Screen::AdminStore(form) | Screen::Profile(form) => forms::draw(frame, main_area, form),
        Screen::SystemStatus(status) => system_status::draw(frame, main_area, status),
    }

    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1.min(area.height),
    };
    layout::draw_status_bar(frame, status_area, app);

    if let Some(toast) = app.state.toasts.latest() {
        components::render_toast(frame, toast, app.state.toasts.len() - 1);
    }
}
