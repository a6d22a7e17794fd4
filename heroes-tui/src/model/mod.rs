//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 编辑页面的焦点（输入框 / 状态按钮 / 保存按钮）
//!         mod page;           // 当前页面及其状态
//!         pub mod state;      // 各页面状态与弹窗状态
//!
//! 页面的业务数据（英雄列表、草稿、加载标志、错误）属于 heroes-core 的控制器，
//! 通过 `watch` 通道发布快照。这里的页面状态只持有控制器与接收端，
//! 以及纯 UI 的部分（选中行、焦点）。
//!
//! 弹窗状态（ModalState）：
//!     - active: Option<Modal>       // None = 无弹窗
//!     - queue: VecDeque<Modal>      // 控制器在弹窗打开时发来的后续弹窗
//!

mod app;
mod focus;
mod page;
pub mod state;

pub use app::App;
pub use focus::FormFocus;
pub use page::Page;
pub use state::{ListPageState, ModalState};
