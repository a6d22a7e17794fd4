//! 编辑页面消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个控件
    NextField,
    /// 上一个控件
    PrevField,
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 切换存活状态
    Toggle,
    /// Enter on the focused control
    Activate,
    /// 保存
    Submit,
}
