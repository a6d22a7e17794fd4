//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ListMessage, ModalMessage};
use crate::model::state::{FormPageState, Modal};
use crate::model::{App, FormFocus, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    match &app.page {
        Page::List(_) => handle_list_keys(key),
        Page::Editor(form) => handle_form_keys(key, form),
    }
}

fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    match modal {
        Modal::Confirm { .. } => match key.code {
            KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleFocus)
            }
            _ => AppMessage::Noop,
        },
        Modal::Notification { .. } | Modal::Help => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => {
                AppMessage::Modal(ModalMessage::Close)
            }
            _ => AppMessage::Noop,
        },
    }
}

/// 处理列表页面的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::LIST_HELP.matches(&key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::ACTION_NEW.matches(&key) {
        return AppMessage::List(ListMessage::New);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::List(ListMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::List(ListMessage::Delete);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::List(ListMessage::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => AppMessage::List(ListMessage::SelectLast),
        KeyCode::Enter => AppMessage::List(ListMessage::Edit),
        KeyCode::Delete => AppMessage::List(ListMessage::Delete),
        _ => AppMessage::Noop,
    }
}

/// 处理编辑页面的按键
fn handle_form_keys(key: KeyEvent, form: &FormPageState) -> AppMessage {
    if DefaultKeymap::SAVE.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::NEXT_FIELD.matches(&key) {
        return AppMessage::Form(FormMessage::NextField);
    }

    match key.code {
        KeyCode::BackTab => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::Up => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Left | KeyCode::Right if form.focus == FormFocus::Status => {
            AppMessage::Form(FormMessage::Toggle)
        }
        KeyCode::Enter => AppMessage::Form(FormMessage::Activate),
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        // 空格在输入框中是字符，在状态按钮上切换
        KeyCode::Char(' ') if form.focus == FormFocus::Status => {
            AppMessage::Form(FormMessage::Toggle)
        }
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}
