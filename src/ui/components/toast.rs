//! Toast overlay for the most recent notification

use crate::state::{NotificationKind, Toast};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_MAX_WIDTH: u16 = 48;

/// Render a toast in the top-right corner of the frame
pub fn render_toast(frame: &mut Frame, toast: &Toast, queued: usize) {
    let area = frame.area();
    let notification = &toast.notification;
    let color = match notification.kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    let inner_width = TOAST_MAX_WIDTH.min(area.width).saturating_sub(4) as usize;
    let lines = wrap_text(&notification.message, inner_width.max(1));

    let width = TOAST_MAX_WIDTH.min(area.width);
    let height = (lines.len() as u16 + 3).min(area.height);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);

    let mut title = vec![Span::styled(
        notification.title.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if queued > 0 {
        title.push(Span::styled(
            format!(" (+{queued})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let mut content = vec![Line::from(title)];
    content.extend(lines.into_iter().map(Line::from));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(Paragraph::new(content).block(block), toast_area);
}

/// Greedy word wrap on whitespace
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("Admin and store created successfully", 16);
        assert_eq!(lines, vec!["Admin and store", "created", "successfully"]);
    }

    #[test]
    fn test_wrap_text_keeps_long_word_whole() {
        let lines = wrap_text("supercalifragilistic", 5);
        assert_eq!(lines, vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
    }
}
