//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use heroes_client::{ApiError, Hero, HeroId, HeroPayload, HeroesApi, SaveReceipt};
use tokio::sync::{RwLock, oneshot};

use crate::i18n::{Language, Texts};
use crate::services::ControllerContext;
use crate::traits::{Navigator, UserInteraction};
use crate::types::{ConfirmPrompt, Notification, Route};

// ===== MockHeroesApi =====

/// A call as the mock received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Get(HeroId),
    Create(HeroPayload),
    Update(HeroId, HeroPayload),
    Delete(HeroId),
}

/// Scripted `HeroesApi`. Every call is recorded before it is answered.
pub struct MockHeroesApi {
    list: RwLock<Result<Vec<Hero>, ApiError>>,
    get: RwLock<Result<Hero, ApiError>>,
    /// Answer for both create and update
    save: RwLock<Result<SaveReceipt, ApiError>>,
    delete: RwLock<Result<(), ApiError>>,
    calls: RwLock<Vec<ApiCall>>,
    /// 如果 Some，下一次调用会等待该信号（用于观察 loading 状态）
    gate: RwLock<Option<oneshot::Receiver<()>>>,
}

impl MockHeroesApi {
    pub fn new() -> Self {
        Self {
            list: RwLock::new(Ok(Vec::new())),
            get: RwLock::new(Err(ApiError::HeroNotFound { id: String::new() })),
            save: RwLock::new(Ok(SaveReceipt {
                message: Some("ok".to_string()),
            })),
            delete: RwLock::new(Ok(())),
            calls: RwLock::new(Vec::new()),
            gate: RwLock::new(None),
        }
    }

    pub async fn set_list(&self, result: Result<Vec<Hero>, ApiError>) {
        *self.list.write().await = result;
    }

    pub async fn set_get(&self, result: Result<Hero, ApiError>) {
        *self.get.write().await = result;
    }

    pub async fn set_save(&self, result: Result<SaveReceipt, ApiError>) {
        *self.save.write().await = result;
    }

    pub async fn set_delete(&self, result: Result<(), ApiError>) {
        *self.delete.write().await = result;
    }

    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.read().await.clone()
    }

    pub async fn clear_calls(&self) {
        self.calls.write().await.clear();
    }

    /// Make the next call wait until the returned sender fires (or is dropped).
    pub async fn hold_next_call(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.write().await = Some(rx);
        tx
    }

    async fn record(&self, call: ApiCall) {
        self.calls.write().await.push(call);
        let gate = self.gate.write().await.take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }
}

#[async_trait]
impl HeroesApi for MockHeroesApi {
    async fn list_heroes(&self) -> heroes_client::Result<Vec<Hero>> {
        self.record(ApiCall::List).await;
        self.list.read().await.clone()
    }

    async fn get_hero(&self, id: &HeroId) -> heroes_client::Result<Hero> {
        self.record(ApiCall::Get(id.clone())).await;
        self.get.read().await.clone()
    }

    async fn create_hero(&self, payload: &HeroPayload) -> heroes_client::Result<SaveReceipt> {
        self.record(ApiCall::Create(payload.clone())).await;
        self.save.read().await.clone()
    }

    async fn update_hero(
        &self,
        id: &HeroId,
        payload: &HeroPayload,
    ) -> heroes_client::Result<SaveReceipt> {
        self.record(ApiCall::Update(id.clone(), payload.clone())).await;
        self.save.read().await.clone()
    }

    async fn delete_hero(&self, id: &HeroId) -> heroes_client::Result<()> {
        self.record(ApiCall::Delete(id.clone())).await;
        self.delete.read().await.clone()
    }
}

// ===== RecordingInteraction =====

pub struct RecordingInteraction {
    confirm_answer: AtomicBool,
    prompts: RwLock<Vec<ConfirmPrompt>>,
    notifications: RwLock<Vec<Notification>>,
}

impl RecordingInteraction {
    /// Confirms every prompt until told otherwise.
    pub fn new() -> Self {
        Self {
            confirm_answer: AtomicBool::new(true),
            prompts: RwLock::new(Vec::new()),
            notifications: RwLock::new(Vec::new()),
        }
    }

    pub fn set_confirm_answer(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    pub async fn prompts(&self) -> Vec<ConfirmPrompt> {
        self.prompts.read().await.clone()
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }
}

#[async_trait]
impl UserInteraction for RecordingInteraction {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.prompts.write().await.push(prompt.clone());
        self.confirm_answer.load(Ordering::SeqCst)
    }

    async fn notify(&self, notification: Notification) {
        self.notifications.write().await.push(notification);
    }
}

// ===== RecordingNavigator =====

pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(Vec::new()),
        }
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ControllerContext`（英文文本）
pub fn create_test_context() -> (
    Arc<ControllerContext>,
    Arc<MockHeroesApi>,
    Arc<RecordingInteraction>,
    Arc<RecordingNavigator>,
) {
    let api = Arc::new(MockHeroesApi::new());
    let interaction = Arc::new(RecordingInteraction::new());
    let navigator = Arc::new(RecordingNavigator::new());

    let ctx = Arc::new(ControllerContext::new(
        api.clone(),
        interaction.clone(),
        navigator.clone(),
        Texts::for_language(Language::EnUs),
    ));

    (ctx, api, interaction, navigator)
}

/// 创建一个用于测试的 `Hero`（存活，能力为 "Test"）
pub fn hero(id: &str, name: &str) -> Hero {
    Hero {
        id: HeroId::from(id),
        name: name.to_string(),
        power: "Test".to_string(),
        alive: Some(true),
    }
}
