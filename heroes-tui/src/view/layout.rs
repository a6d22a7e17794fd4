//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    match &app.page {
        Page::List(list) => pages::list::render(list, frame, main_layout[1]),
        Page::Editor(form) => pages::form::render(form, frame, main_layout[1]),
    }

    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏：应用名 + 当前路由
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", t().common.app_name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(app.route().path()),
    ]);
    let bar = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}
