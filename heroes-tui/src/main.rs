//! Heroes TUI
//!
//! 终端前端：列表页面与编辑页面，驱动 `heroes-core` 的控制器。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、控制器派发与 UI 桥接 (`backend/`)
//!
//! 控制器运行在后台 tokio 运行时上，经通道把确认、通知与导航请求
//! 交给同步的主循环。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
#[cfg(test)]
mod test_support;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use heroes_client::HttpHeroesApi;
use heroes_core::Texts;

use backend::{ConfigService, HeroService, LocalConfigService, ui_channel};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志
    let log_path = init_logging()?;
    tracing::info!("Starting heroes-tui, logging to {}", log_path.display());

    // 2. 配置（环境变量覆盖，不写回文件）
    let config_service = LocalConfigService::new();
    let config = config_service
        .load()?
        .with_overrides(|key| std::env::var(key).ok());
    tracing::info!("Config file: {}", config_service.path().display());
    tracing::info!("API base URL: {}", config.api_base_url);

    i18n::set_language(config.language);
    tracing::info!("Language: {}", i18n::current_language().code());
    view::theme::set_theme(config.theme);

    // 3. 后台运行时与控制器依赖
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    let (interaction, navigator, mut requests) = ui_channel();
    let api = HttpHeroesApi::new(&config.client_config()).context("Invalid API configuration")?;
    let service = HeroService::new(
        Arc::new(api),
        interaction,
        navigator,
        Texts::for_language(config.language),
        runtime.handle().clone(),
    );

    // 4. 终端与应用实例
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(service);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut requests);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;
    runtime.shutdown_background();

    if let Err(e) = &result {
        tracing::error!("heroes-tui exited with error: {e:#}");
    }
    result
}
