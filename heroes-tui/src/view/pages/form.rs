//! 英雄编辑页面（新建 / 编辑）

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use heroes_core::FormState;
use heroes_core::types::{NAME_MAX_CHARS, NAME_MIN_CHARS, POWER_MAX_CHARS, POWER_MIN_CHARS};

use crate::i18n::t;
use crate::model::FormFocus;
use crate::model::state::FormPageState;
use crate::util::text::tail_width;
use crate::view::theme::{Styles, colors};

use super::{render_error_banner, render_placeholder};

/// 渲染编辑页面
pub fn render(page: &FormPageState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let state = page.snapshot();

    let block = Block::default()
        .title(Line::from(title_spans(&state)))
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 编辑模式加载记录期间，整个页面只显示加载提示
    if state.is_loading_record() {
        render_placeholder(
            frame,
            inner,
            texts.list.loading_title,
            texts.form.loading_record,
        );
        return;
    }

    let id_height = if state.mode.is_edit() { 3 } else { 0 };
    let error_height = if state.error.is_some() { 2 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(error_height),
            Constraint::Length(id_height),
            Constraint::Length(4), // 名称
            Constraint::Length(4), // 能力
            Constraint::Length(3), // 状态
            Constraint::Length(3), // 保存按钮
            Constraint::Min(0),
        ])
        .split(inner);

    if let Some(error) = &state.error {
        render_error_banner(frame, chunks[0], error);
    }

    if let Some(id) = state.mode.hero_id() {
        let lines = vec![
            Line::styled(texts.form.id_label, Styles::muted()),
            Line::from(format!("  {id}")),
            Line::styled(format!("  {}", texts.form.id_hint), Styles::muted()),
        ];
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    render_input(
        frame,
        chunks[2],
        &InputView {
            label: texts.form.name_label,
            value: &state.draft.name,
            placeholder: texts.form.name_placeholder,
            hint: &(texts.form.length_hint)(NAME_MIN_CHARS, NAME_MAX_CHARS),
            focused: page.focus == FormFocus::Name,
        },
    );
    render_input(
        frame,
        chunks[3],
        &InputView {
            label: texts.form.power_label,
            value: &state.draft.power,
            placeholder: texts.form.power_placeholder,
            hint: &(texts.form.length_hint)(POWER_MIN_CHARS, POWER_MAX_CHARS),
            focused: page.focus == FormFocus::Power,
        },
    );
    render_status(frame, chunks[4], state.draft.alive, page.focus == FormFocus::Status);
    render_save(frame, chunks[5], &state, page.focus == FormFocus::Save);
}

/// 标题："Edit Hero" / "New Hero" 加上当前名称或占位
fn title_spans(state: &FormState) -> Vec<Span<'static>> {
    let texts = t();
    let (title, placeholder) = if state.mode.is_edit() {
        (texts.form.title_edit, texts.form.loading_subtitle)
    } else {
        (texts.form.title_new, texts.form.new_subtitle)
    };
    let subtitle = if state.draft.name.is_empty() {
        placeholder.to_string()
    } else {
        state.draft.name.clone()
    };
    vec![
        Span::styled(format!(" {title} "), Styles::title()),
        Span::styled(format!("{subtitle} "), Styles::muted()),
    ]
}

struct InputView<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    hint: &'a str,
    focused: bool,
}

fn render_input(frame: &mut Frame, area: Rect, input: &InputView<'_>) {
    let c = colors();
    let label_style = if input.focused {
        Style::default().fg(c.border_focused).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    // 留出缩进与光标的位置
    let width = usize::from(area.width.saturating_sub(4));

    let value_line = if input.value.is_empty() && !input.focused {
        Line::styled(format!("  {}", input.placeholder), Styles::muted())
    } else if input.focused {
        Line::styled(
            format!("  {}▎", tail_width(input.value, width)),
            Style::default().fg(c.border_focused),
        )
    } else {
        Line::from(format!("  {}", tail_width(input.value, width)))
    };

    let lines = vec![
        Line::styled(input.label.to_string(), label_style),
        value_line,
        Line::styled(format!("  {}", input.hint), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// 存活/死亡切换按钮
fn render_status(frame: &mut Frame, area: Rect, alive: bool, focused: bool) {
    let texts = t();
    let c = colors();

    let chosen = |selected: bool, color| {
        let style = Style::default().fg(color);
        if selected {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style
        }
    };

    let label_style = if focused {
        Style::default().fg(c.border_focused).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let lines = vec![
        Line::styled(texts.form.status_label, label_style),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", texts.common.alive), chosen(alive, c.success)),
            Span::raw("  "),
            Span::styled(format!(" {} ", texts.common.dead), chosen(!alive, c.error)),
            if focused {
                Span::styled(
                    format!("  ({} / ←→)", texts.hints.keys.space),
                    Styles::muted(),
                )
            } else {
                Span::raw("")
            },
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// 保存按钮，请求进行中时显示 "Creating..." / "Updating..."
fn render_save(frame: &mut Frame, area: Rect, state: &FormState, focused: bool) {
    let label = save_label(state);
    let style = if state.loading {
        Styles::muted()
    } else {
        Styles::button(focused)
    };
    let texts = t();
    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ {label} ]"), style),
        Span::raw("   "),
        Span::styled(
            format!("{} {}", texts.hints.keys.esc, texts.form.back),
            Styles::muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
}

fn save_label(state: &FormState) -> &'static str {
    let texts = t();
    match (state.mode.is_edit(), state.loading) {
        (true, false) => texts.form.update,
        (true, true) => texts.form.updating,
        (false, false) => texts.form.create,
        (false, true) => texts.form.creating,
    }
}
