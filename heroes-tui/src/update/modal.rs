//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::Confirm => app.modal.confirm(),
        ModalMessage::ToggleFocus => app.modal.toggle_confirm_focus(),
    }
}
