//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗（确认弹窗视为取消）
    Close,

    /// 确认
    Confirm,

    /// 在确认弹窗中切换按钮焦点
    ToggleFocus,
}
