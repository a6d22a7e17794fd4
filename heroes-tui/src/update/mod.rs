//! Update 层：状态更新逻辑
//!
//! 唯一可以修改 Model 的地方。按键消息按当前页面分发，
//! 控制器的请求（确认、通知、导航）在这里落到弹窗与页面切换上。
//! 控制器的异步操作经 [`HeroService`](crate::backend::HeroService) 派发，
//! 不会阻塞主循环。

mod form;
mod list;
mod modal;
mod navigation;

use std::time::Instant;

use crate::backend::UiRequest;
use crate::message::AppMessage;
use crate::model::state::Modal;
use crate::model::{App, Page};

pub use navigation::navigate;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    // 状态消息只保留到下一次按键
    if !matches!(msg, AppMessage::Tick | AppMessage::Ui(_) | AppMessage::Noop) {
        app.clear_status();
    }

    match msg {
        AppMessage::Quit => {
            app.page.deactivate();
            app.should_quit = true;
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if let Page::Editor(form) = &app.page {
                form.controller.cancel();
            }
        }

        AppMessage::Refresh => {
            if let Page::List(list) = &app.page
                && !list.is_busy()
            {
                app.service.reload(&list.controller);
            }
        }

        AppMessage::ShowHelp => app.modal.show_help(),

        AppMessage::Tick => {
            app.modal.tick(Instant::now());
            if let Page::List(list) = &mut app.page {
                list.clamp();
            }
        }

        AppMessage::List(list_msg) => list::update(app, list_msg),

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Ui(request) => handle_ui_request(app, request),

        AppMessage::Noop => {}
    }
}

fn handle_ui_request(app: &mut App, request: UiRequest) {
    match request {
        UiRequest::Confirm { prompt, reply } => app.modal.show(Modal::confirm(prompt, reply)),
        UiRequest::Notify(notification) => app.modal.show(Modal::notification(notification)),
        UiRequest::Navigate(route) => navigate(app, route),
    }
}
