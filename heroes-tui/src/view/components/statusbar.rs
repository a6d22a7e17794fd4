//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::{App, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;

    match &app.modal.active {
        Some(Modal::Confirm { .. }) => {
            return vec![
                (keys.tab, actions.switch),
                (keys.enter, actions.confirm),
                (keys.esc, actions.close),
            ];
        }
        Some(Modal::Notification { .. } | Modal::Help) => {
            return vec![(keys.enter, actions.close)];
        }
        None => {}
    }

    match &app.page {
        Page::List(_) => vec![
            (keys.arrows_ud, actions.select),
            (keys.enter, actions.edit),
            ("n", actions.new),
            ("d", actions.delete),
            ("r", actions.refresh),
            ("?", actions.help),
            ("q", actions.quit),
        ],
        Page::Editor(_) => vec![
            (keys.tab, actions.next_field),
            (keys.space, actions.toggle),
            (keys.ctrl_s, actions.save),
            (keys.esc, actions.back),
            ("F1", actions.help),
        ],
    }
}
