//! 编辑页面的焦点

use heroes_core::types::DraftField;

/// 编辑页面中当前获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Power,
    /// 存活/死亡切换按钮
    Status,
    Save,
}

impl FormFocus {
    const ORDER: [FormFocus; 4] = [Self::Name, Self::Power, Self::Status, Self::Save];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// 对应的草稿字段（仅输入框）
    pub fn field(self) -> Option<DraftField> {
        match self {
            Self::Name => Some(DraftField::Name),
            Self::Power => Some(DraftField::Power),
            Self::Status | Self::Save => None,
        }
    }
}
