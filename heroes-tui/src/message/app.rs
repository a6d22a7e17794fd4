//! 应用主消息枚举

use super::{FormMessage, ListMessage, ModalMessage};
use crate::backend::UiRequest;

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 返回（关闭弹窗或回到列表）
    GoBack,

    /// 刷新当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 定时器，用于关闭到期的瞬时通知
    Tick,

    /// 列表页面消息
    List(ListMessage),

    /// 编辑页面消息
    Form(FormMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 控制器发来的确认、通知或导航请求
    Ui(UiRequest),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
