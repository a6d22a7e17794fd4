//! View 层：只读取 Model 并绘制，不修改任何状态

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
