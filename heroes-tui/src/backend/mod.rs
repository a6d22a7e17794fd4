//! Backend 层：连接 UI 与 heroes-core
//!
//! - `config_service`: 配置文件加载与保存
//! - `bridge`: 控制器发起的确认、通知与导航请求 → 主循环
//! - `hero_service`: 为每个页面创建控制器并在 tokio 运行时上执行其异步操作

mod bridge;
mod config_service;
mod hero_service;

pub use bridge::{ChannelInteraction, ChannelNavigator, UiRequest, ui_channel};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use hero_service::HeroService;
