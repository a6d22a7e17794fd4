//! Test doubles for the terminal front end

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use heroes_client::{ApiError, Hero, HeroId, HeroPayload, HeroesApi, Result, SaveReceipt};
use heroes_core::{ControllerContext, Language, Texts};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};

use crate::backend::{HeroService, UiRequest, ui_channel};

/// In-memory heroes resource that records which operations ran.
#[derive(Default)]
pub struct InMemoryApi {
    heroes: Mutex<Vec<Hero>>,
    calls: Mutex<Vec<&'static str>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl InMemoryApi {
    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        Self {
            heroes: Mutex::new(heroes),
            ..Self::default()
        }
    }

    /// Operation names in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Make the next call wait until the returned sender fires (or is dropped).
    pub fn hold_next_call(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().unwrap_or_else(PoisonError::into_inner) = Some(rx);
        tx
    }

    async fn record(&self, call: &'static str) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
        let gate = self
            .gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }

    pub fn heroes(&self) -> Vec<Hero> {
        self.heroes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn with<T>(&self, f: impl FnOnce(&mut Vec<Hero>) -> T) -> T {
        f(&mut self.heroes.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[async_trait]
impl HeroesApi for InMemoryApi {
    async fn list_heroes(&self) -> Result<Vec<Hero>> {
        self.record("list").await;
        Ok(self.heroes())
    }

    async fn get_hero(&self, id: &HeroId) -> Result<Hero> {
        self.record("get").await;
        self.with(|heroes| heroes.iter().find(|h| &h.id == id).cloned())
            .ok_or_else(|| ApiError::HeroNotFound { id: id.to_string() })
    }

    async fn create_hero(&self, payload: &HeroPayload) -> Result<SaveReceipt> {
        self.record("create").await;
        self.with(|heroes| {
            heroes.push(Hero {
                id: HeroId::new((heroes.len() + 1).to_string()),
                name: payload.name.clone(),
                power: payload.power.clone(),
                alive: Some(payload.alive),
            });
        });
        Ok(SaveReceipt {
            message: Some("created".into()),
        })
    }

    async fn update_hero(&self, id: &HeroId, payload: &HeroPayload) -> Result<SaveReceipt> {
        self.record("update").await;
        self.with(|heroes| -> Result<SaveReceipt> {
            let hero = heroes
                .iter_mut()
                .find(|h| &h.id == id)
                .ok_or_else(|| ApiError::HeroNotFound { id: id.to_string() })?;
            hero.name.clone_from(&payload.name);
            hero.power.clone_from(&payload.power);
            hero.alive = Some(payload.alive);
            Ok(SaveReceipt {
                message: Some("updated".into()),
            })
        })
    }

    async fn delete_hero(&self, id: &HeroId) -> Result<()> {
        self.record("delete").await;
        self.with(|heroes| heroes.retain(|h| &h.id != id));
        Ok(())
    }
}

pub fn hero(id: &str, name: &str) -> Hero {
    Hero {
        id: HeroId::from(id),
        name: name.to_string(),
        power: format!("{name} power"),
        alive: Some(true),
    }
}

pub fn texts() -> &'static Texts {
    Texts::for_language(Language::EnUs)
}

/// Controller context wired to a UI channel over an empty resource.
pub fn test_context() -> (Arc<ControllerContext>, mpsc::UnboundedReceiver<UiRequest>) {
    let (interaction, navigator, rx) = ui_channel();
    let ctx = ControllerContext::new(
        Arc::new(InMemoryApi::default()),
        Arc::new(interaction),
        Arc::new(navigator),
        texts(),
    );
    (Arc::new(ctx), rx)
}

/// Service over `api`, spawning on the current runtime.
pub fn test_service(api: Arc<InMemoryApi>) -> (HeroService, mpsc::UnboundedReceiver<UiRequest>) {
    let (interaction, navigator, rx) = ui_channel();
    let service = HeroService::new(api, interaction, navigator, texts(), Handle::current());
    (service, rx)
}
