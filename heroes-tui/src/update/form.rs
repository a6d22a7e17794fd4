//! 编辑页面更新逻辑

use crate::message::FormMessage;
use crate::model::{App, FormFocus, Page};

pub fn update(app: &mut App, msg: FormMessage) {
    let Page::Editor(form) = &mut app.page else {
        return;
    };

    match msg {
        FormMessage::NextField => form.focus = form.focus.next(),
        FormMessage::PrevField => form.focus = form.focus.prev(),
        _ if form.is_busy() => {}

        FormMessage::Input(ch) => form.input(ch),
        FormMessage::Backspace => form.backspace(),

        FormMessage::Toggle => {
            if form.focus == FormFocus::Status {
                form.controller.toggle_alive();
            }
        }

        FormMessage::Activate => match form.focus {
            FormFocus::Name | FormFocus::Power => form.focus = form.focus.next(),
            FormFocus::Status => form.controller.toggle_alive(),
            FormFocus::Save => app.service.submit(&form.controller),
        },

        FormMessage::Submit => app.service.submit(&form.controller),
    }
}
