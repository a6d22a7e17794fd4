//! 英雄列表页面

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use heroes_core::ListDisplay;

use crate::i18n::t;
use crate::model::state::ListPageState;
use crate::util::text::fit_width;
use crate::view::theme::{Styles, colors};

use super::{render_error_banner, render_placeholder};

/// 渲染列表页面
pub fn render(page: &ListPageState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let state = page.snapshot();

    let block = Block::default()
        .title(format!(" {} ", texts.list.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = match &state.error {
        Some(error) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(0)])
                .split(inner);
            render_error_banner(frame, chunks[0], error);
            chunks[1]
        }
        None => inner,
    };

    match state.display() {
        ListDisplay::Loading => render_placeholder(
            frame,
            body,
            texts.list.loading_title,
            texts.list.loading_text,
        ),
        ListDisplay::Empty => {
            render_placeholder(frame, body, texts.list.empty_title, texts.list.empty_text);
        }
        ListDisplay::Rows => render_table(page, &state.heroes, frame, body),
        ListDisplay::Nothing => {}
    }
}

fn render_table(
    page: &ListPageState,
    heroes: &[heroes_client::Hero],
    frame: &mut Frame,
    area: Rect,
) {
    let texts = t();
    let c = colors();

    let name_width = usize::from(area.width / 3).max(8);
    let power_width = usize::from(area.width / 2).max(8);

    let header = Row::new(vec![
        Cell::from(texts.list.col_name),
        Cell::from(texts.list.col_power),
        Cell::from(texts.list.col_status),
    ])
    .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows = heroes.iter().map(|hero| {
        let status = if hero.is_alive() {
            Span::styled(texts.common.alive, Style::default().fg(c.success))
        } else {
            Span::styled(texts.common.dead, Style::default().fg(c.error))
        };
        Row::new(vec![
            Cell::from(fit_width(&hero.name, name_width)),
            Cell::from(fit_width(&hero.power, power_width)),
            Cell::from(status),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(50),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .row_highlight_style(Styles::selected())
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(page.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}
