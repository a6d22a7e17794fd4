//! 弹窗组件

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use heroes_core::types::{ConfirmPrompt, Notification, NotificationKind};

use crate::i18n::t;
use crate::model::App;
use crate::model::state::Modal;
use crate::view::theme::{Styles, colors};

const MODAL_WIDTH: u16 = 56;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Confirm {
            prompt,
            confirm_focused,
            ..
        } => render_confirm(frame, prompt, *confirm_focused),
        Modal::Notification { notification, .. } => {
            let remaining = app.modal.remaining(Instant::now());
            render_notification(
                frame,
                notification,
                app.service.texts().acknowledge,
                remaining.map(|d| d.as_secs() + 1),
            );
        }
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Lines a text needs when wrapped inside the modal.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let lines: usize = text
        .lines()
        .map(|line| unicode_width::UnicodeWidthStr::width(line).div_ceil(width).max(1))
        .sum();
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn modal_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(colors().bg))
}

/// 渲染确认弹窗
fn render_confirm(frame: &mut Frame, prompt: &ConfirmPrompt, confirm_focused: bool) {
    let c = colors();
    let text_height = wrapped_height(&prompt.text, MODAL_WIDTH - 4);
    let area = centered_rect(MODAL_WIDTH, text_height + 6, frame.area());

    frame.render_widget(Clear, area);
    let block = modal_block(&prompt.title, c.warning);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buttons = Line::from(vec![
        Span::styled(
            format!("[ {} ]", prompt.cancel_label),
            Styles::button(!confirm_focused),
        ),
        Span::raw("   "),
        Span::styled(
            format!("[ {} ]", prompt.confirm_label),
            if confirm_focused {
                Style::default()
                    .bg(c.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.error)
            },
        ),
    ]);

    let mut lines: Vec<Line> = prompt
        .text
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(buttons);
    lines.push(Line::styled(
        format!(
            "{} {} · {} {}",
            t().hints.keys.tab,
            t().hints.actions.switch,
            t().hints.keys.enter,
            t().hints.actions.confirm
        ),
        Styles::muted(),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染通知弹窗
///
/// Blocking notifications show an acknowledge button; transient ones show
/// the seconds left before they close.
fn render_notification(
    frame: &mut Frame,
    notification: &Notification,
    acknowledge: &str,
    seconds_left: Option<u64>,
) {
    let c = colors();
    let (color, icon) = match notification.kind {
        NotificationKind::Success => (c.success, "✓"),
        NotificationKind::Warning => (c.warning, "!"),
        NotificationKind::Error => (c.error, "✗"),
    };

    let text_height = wrapped_height(&notification.text, MODAL_WIDTH - 4);
    let area = centered_rect(MODAL_WIDTH, text_height + 5, frame.area());

    frame.render_widget(Clear, area);
    let title = format!("{icon} {}", notification.title);
    let block = modal_block(&title, color);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = notification
        .text
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    lines.push(Line::from(""));
    match seconds_left {
        Some(secs) => lines.push(Line::styled(format!("({secs}s)"), Styles::muted())),
        None => lines.push(Line::styled(format!("[ {acknowledge} ]"), Styles::button(true))),
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let area = centered_rect(MODAL_WIDTH + 20, 9, frame.area());

    frame.render_widget(Clear, area);
    let block = modal_block(texts.modal.help_title, c.highlight);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(texts.modal.help_list),
        Line::from(""),
        Line::from(texts.modal.help_form),
        Line::from(""),
        Line::styled(texts.modal.press_to_close, Styles::muted()),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
