//! 翻译键定义
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **页面内容归对应页面**：`list.*`, `form.*`
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    /// 列表页面文本
    pub list: ListTexts,
    /// 编辑页面文本
    pub form: FormTexts,
    pub modal: ModalTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub alive: &'static str,
    pub dead: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub space: &'static str,
    pub arrows_ud: &'static str,
    pub ctrl_s: &'static str,
}

/// 动作词
pub struct ActionTexts {
    pub select: &'static str,
    pub edit: &'static str,
    pub new: &'static str,
    pub delete: &'static str,
    pub refresh: &'static str,
    pub next_field: &'static str,
    pub toggle: &'static str,
    pub save: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub switch: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 列表页面
// ============================================================================

pub struct ListTexts {
    pub title: &'static str,
    pub col_name: &'static str,
    pub col_power: &'static str,
    pub col_status: &'static str,
    pub loading_title: &'static str,
    pub loading_text: &'static str,
    pub empty_title: &'static str,
    pub empty_text: &'static str,
    /// Status bar text when an action needs a selected row
    pub no_selection: &'static str,
}

// ============================================================================
// 编辑页面
// ============================================================================

pub struct FormTexts {
    pub title_new: &'static str,
    pub title_edit: &'static str,
    /// Subtitle while the name is still empty in create mode
    pub new_subtitle: &'static str,
    /// Subtitle while the name is still empty in edit mode
    pub loading_subtitle: &'static str,
    pub loading_record: &'static str,
    pub id_label: &'static str,
    pub id_hint: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub power_label: &'static str,
    pub power_placeholder: &'static str,
    /// Hint under a text input, from its minimum and maximum length
    pub length_hint: fn(usize, usize) -> String,
    pub status_label: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub creating: &'static str,
    pub updating: &'static str,
    pub back: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub help_title: &'static str,
    pub help_list: &'static str,
    pub help_form: &'static str,
    pub press_to_close: &'static str,
}
