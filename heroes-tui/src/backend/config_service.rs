//! 配置服务
//!
//! `config.json` under the platform config directory, with environment
//! variable overrides applied on top.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use heroes_client::{ClientConfig, DEFAULT_BASE_URL};
use heroes_core::Language;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// Overrides `api_base_url`
pub const ENV_API_URL: &str = "HEROES_API_URL";
/// Overrides `language` (`en`, `es`, `en-US`, `es-ES`)
pub const ENV_LANG: &str = "HEROES_LANG";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub language: Language,
    pub theme: Theme,
    /// Whole-request timeout. Absent means none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            language: Language::default(),
            theme: Theme::Dark,
            timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Apply environment overrides, reading variables through `lookup`.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(code) = lookup(ENV_LANG) {
            match Language::from_code(&code) {
                Some(language) => self.language = language,
                None => log::warn!("Ignoring unknown {ENV_LANG}={code}"),
            }
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// `<config dir>/heroes-tui/config.json`
    pub fn new() -> Self {
        Self::with_path(
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("heroes-tui")
                .join("config.json"),
        )
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    /// A missing file is created with the defaults.
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            let config = AppConfig::default();
            log::info!("No config at {}, writing defaults", self.path.display());
            self.save(&config)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
