//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message：
//! - `poll_event`: 事件轮询，受主循环调用，最长等待 timeout
//! - `handle_event`: 事件分发。弹窗打开时优先处理弹窗按键，
//!   其余按键按当前页面（列表 / 编辑）翻译。
//!
//! 编辑页面上的普通字符都是输入，因此单字母快捷键只在列表页面生效。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
