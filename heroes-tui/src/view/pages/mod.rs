//! 页面渲染

pub mod form;
pub mod list;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use super::theme::colors;

/// Inline error banner shown above a page body.
fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let c = colors();
    let banner = Paragraph::new(format!(" ✗ {message}"))
        .style(Style::default().fg(c.error).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, area);
}

/// Title and text centered in `area`.
fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let c = colors();
    let y = area.y + area.height.saturating_sub(2) / 2;
    let target = Rect::new(area.x, y, area.width, 2.min(area.height));
    let lines = vec![
        Line::styled(title.to_string(), Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        Line::styled(text.to_string(), Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}
