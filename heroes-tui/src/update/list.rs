//! 列表页面更新逻辑

use heroes_core::types::Route;

use super::navigate;
use crate::i18n::t;
use crate::message::ListMessage;
use crate::model::{App, Page};

pub fn update(app: &mut App, msg: ListMessage) {
    let Page::List(list) = &mut app.page else {
        return;
    };

    match msg {
        ListMessage::SelectPrevious => list.select_previous(),
        ListMessage::SelectNext => list.select_next(),
        ListMessage::SelectFirst => list.select_first(),
        ListMessage::SelectLast => list.select_last(),

        ListMessage::New => navigate(app, Route::new_hero()),

        // 请求进行中不接受针对行的操作
        ListMessage::Edit | ListMessage::Delete if list.is_busy() => {}

        ListMessage::Edit => match list.selected_hero() {
            Some(hero) => navigate(app, Route::edit_hero(&hero.id)),
            None => app.set_status(t().list.no_selection),
        },

        ListMessage::Delete => match list.selected_hero() {
            Some(hero) => {
                log::debug!("Delete requested for hero {}", hero.id);
                app.service.delete(&list.controller, hero.id);
            }
            None => app.set_status(t().list.no_selection),
        },
    }
}
