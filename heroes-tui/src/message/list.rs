//! 列表页面消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    // ========== 列表导航 ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // ========== CRUD 操作 ==========
    /// 打开新建页面
    New,
    /// 编辑当前选中项
    Edit,
    /// 删除当前选中项
    Delete,
}
