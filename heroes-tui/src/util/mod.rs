//! Util 层：基础设施和工具函数
//!
//! - `terminal`: 终端的初始化和恢复（原始模式 + 备用屏幕）。
//!   无论程序正常退出还是出错，都必须调用 `restore_terminal`。
//! - `logging`: 文件日志
//! - `text`: 按显示宽度截断文本

mod logging;
mod terminal;
pub mod text;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
