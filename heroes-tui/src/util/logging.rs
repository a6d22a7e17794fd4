//! 日志初始化
//!
//! stdout 属于终端界面，日志写入平台数据目录下的文件。
//! 库代码经 `log` 门面输出，由 subscriber 的 `tracing-log` 桥接收集。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志级别环境变量
pub const ENV_LOG: &str = "HEROES_LOG";

const DEFAULT_FILTER: &str = "info";

/// 日志文件路径
pub fn log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("heroes-tui")
        .join("heroes-tui.log")
}

/// Install the global subscriber writing to [`log_path`]. Returns the path.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(path)
}
