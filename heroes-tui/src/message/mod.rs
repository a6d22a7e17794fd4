//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。按键被翻译为 [`AppMessage`]，
//! 控制器经通道发来的请求也包装为 [`AppMessage::Ui`]，
//! Update 层只根据消息修改 Model。

mod app;
mod form;
mod list;
mod modal;

pub use app::AppMessage;
pub use form::FormMessage;
pub use list::ListMessage;
pub use modal::ModalMessage;
