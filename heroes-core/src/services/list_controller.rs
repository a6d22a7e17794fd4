//! Hero list controller

use std::sync::Arc;

use heroes_client::{Hero, HeroId};
use tokio::sync::watch;

use super::{Activation, ControllerContext, notify_if_active};
use crate::error::CoreError;
use crate::types::{ConfirmPrompt, Notification};

/// Snapshot of the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub heroes: Vec<Hero>,
    pub loading: bool,
    /// Inline error text after a failed load
    pub error: Option<String>,
}

/// What the list body shows. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDisplay {
    Loading,
    /// Not loading, no rows and no error
    Empty,
    Rows,
    /// Failed load: only the error banner
    Nothing,
}

impl ListState {
    pub fn display(&self) -> ListDisplay {
        if self.loading {
            ListDisplay::Loading
        } else if !self.heroes.is_empty() {
            ListDisplay::Rows
        } else if self.error.is_some() {
            ListDisplay::Nothing
        } else {
            ListDisplay::Empty
        }
    }
}

/// Fetches the whole collection and deletes rows after confirmation.
///
/// One instance per activation of the list view.
pub struct ListController {
    ctx: Arc<ControllerContext>,
    state: watch::Sender<ListState>,
    activation: Activation,
}

impl ListController {
    #[must_use]
    pub fn new(ctx: Arc<ControllerContext>) -> Self {
        Self {
            ctx,
            state: watch::Sender::new(ListState::default()),
            activation: Activation::new(),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    /// Called when the view is left. Later results are ignored.
    pub fn deactivate(&self) {
        self.activation.deactivate();
    }

    fn update(&self, f: impl FnOnce(&mut ListState)) {
        if self.activation.is_active() {
            self.state.send_modify(f);
        }
    }

    /// Entry point when the view becomes visible.
    pub async fn activate(&self) {
        self.load().await;
    }

    /// Replace the rows with the server's collection.
    pub async fn load(&self) {
        self.update(|s| s.loading = true);

        match self.ctx.api.list_heroes().await {
            Ok(heroes) => {
                log::debug!("Loaded {} heroes", heroes.len());
                self.update(|s| {
                    s.heroes = heroes;
                    s.error = None;
                    s.loading = false;
                });
            }
            Err(e) => {
                CoreError::from(e).log("Failed to load heroes");
                let texts = self.ctx.texts;
                self.update(|s| {
                    s.heroes.clear();
                    s.error = Some(texts.list.load_error.to_string());
                    s.loading = false;
                });
                notify_if_active(
                    &self.ctx,
                    &self.activation,
                    Notification::error(texts.titles.error, texts.list.load_failed),
                )
                .await;
            }
        }
    }

    /// Delete `id` once the user confirms, then reload.
    ///
    /// Declining is a no-op. A failed delete leaves the rows as they were.
    pub async fn delete(&self, id: &HeroId) {
        let texts = self.ctx.texts;
        let prompt = ConfirmPrompt::delete_hero(texts);
        if !self.ctx.interaction.confirm(&prompt).await {
            log::debug!("Delete of hero {id} declined");
            return;
        }

        self.update(|s| s.loading = true);
        let result = self.ctx.api.delete_hero(id).await;
        self.update(|s| s.loading = false);

        match result {
            Ok(()) => {
                log::info!("Deleted hero {id}");
                notify_if_active(
                    &self.ctx,
                    &self.activation,
                    Notification::success(texts.titles.deleted, texts.list.deleted),
                )
                .await;
                if self.activation.is_active() {
                    self.load().await;
                }
            }
            Err(e) => {
                CoreError::from(e).log(&format!("Failed to delete hero {id}"));
                notify_if_active(
                    &self.ctx,
                    &self.activation,
                    Notification::error(texts.titles.error, texts.list.delete_failed),
                )
                .await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ApiCall, create_test_context, hero};
    use crate::types::{Dismissal, NotificationKind};
    use heroes_client::ApiError;

    fn server_error() -> ApiError {
        ApiError::HttpStatus {
            status: 500,
            message: None,
            errors: vec![],
        }
    }

    #[tokio::test]
    async fn load_replaces_rows() {
        let (ctx, api, interaction, _) = create_test_context();
        api.set_list(Ok(vec![hero("1", "Batman"), hero("2", "Robin")])).await;
        let controller = ListController::new(ctx);

        controller.activate().await;

        let state = controller.state();
        assert_eq!(state.heroes.len(), 2);
        assert_eq!(state.heroes[0].name, "Batman");
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.display(), ListDisplay::Rows);
        assert!(interaction.notifications().await.is_empty());
    }

    #[tokio::test]
    async fn empty_collection_shows_empty_affordance() {
        let (ctx, _, _, _) = create_test_context();
        let controller = ListController::new(ctx);

        controller.load().await;
        assert_eq!(controller.state().display(), ListDisplay::Empty);
    }

    #[tokio::test]
    async fn failed_load_clears_rows_and_notifies() {
        let (ctx, api, interaction, _) = create_test_context();
        api.set_list(Ok(vec![hero("1", "Batman")])).await;
        let controller = ListController::new(ctx.clone());
        controller.load().await;

        api.set_list(Err(server_error())).await;
        controller.load().await;

        let state = controller.state();
        assert!(state.heroes.is_empty());
        assert_eq!(state.error.as_deref(), Some(ctx.texts.list.load_error));
        assert_eq!(state.display(), ListDisplay::Nothing);

        let notifications = interaction.notifications().await;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Error);
        assert_eq!(notifications[0].text, ctx.texts.list.load_failed);
        assert!(notifications[0].is_blocking());
    }

    #[tokio::test]
    async fn loading_flag_spans_the_request() {
        let (ctx, api, _, _) = create_test_context();
        api.set_list(Ok(vec![hero("1", "Batman")])).await;
        let controller = ListController::new(ctx);
        let mut rx = controller.subscribe();
        let release = api.hold_next_call().await;

        let observer = async {
            let seen = rx.wait_for(|s| s.loading).await.map(|s| s.display());
            assert_eq!(seen.ok(), Some(ListDisplay::Loading));
            let _ = release.send(());
        };
        tokio::join!(controller.load(), observer);

        assert!(!controller.state().loading);
    }

    #[tokio::test]
    async fn loading_cleared_after_failure() {
        let (ctx, api, _, _) = create_test_context();
        api.set_list(Err(ApiError::NetworkError {
            detail: "refused".into(),
        }))
        .await;
        let controller = ListController::new(ctx);
        let mut rx = controller.subscribe();
        let release = api.hold_next_call().await;

        let observer = async {
            assert!(rx.wait_for(|s| s.loading).await.is_ok());
            let _ = release.send(());
        };
        tokio::join!(controller.load(), observer);

        assert!(!controller.state().loading);
    }

    #[tokio::test]
    async fn declined_delete_is_a_noop() {
        let (ctx, api, interaction, _) = create_test_context();
        api.set_list(Ok(vec![hero("1", "Batman")])).await;
        let controller = ListController::new(ctx);
        controller.load().await;
        let before = controller.state();
        api.clear_calls().await;
        interaction.set_confirm_answer(false);

        controller.delete(&HeroId::from("1")).await;

        assert_eq!(controller.state(), before);
        assert!(api.calls().await.is_empty());
        assert_eq!(interaction.prompts().await.len(), 1);
        assert!(interaction.notifications().await.is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_notifies_then_reloads() {
        let (ctx, api, interaction, _) = create_test_context();
        api.set_list(Ok(vec![hero("1", "Batman"), hero("2", "Robin")])).await;
        let controller = ListController::new(ctx.clone());
        controller.load().await;
        api.clear_calls().await;
        api.set_list(Ok(vec![hero("2", "Robin")])).await;

        controller.delete(&HeroId::from("1")).await;

        assert_eq!(
            api.calls().await,
            vec![ApiCall::Delete(HeroId::from("1")), ApiCall::List]
        );
        let prompts = interaction.prompts().await;
        assert_eq!(prompts[0].title, ctx.texts.confirm_delete.title);

        let notifications = interaction.notifications().await;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Success);
        assert_eq!(notifications[0].title, ctx.texts.titles.deleted);
        assert!(matches!(notifications[0].dismissal, Dismissal::Transient(_)));

        let state = controller.state();
        assert_eq!(state.heroes.len(), 1);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn failed_delete_keeps_stale_row() {
        let (ctx, api, interaction, _) = create_test_context();
        api.set_list(Ok(vec![hero("1", "Batman")])).await;
        let controller = ListController::new(ctx.clone());
        controller.load().await;
        api.clear_calls().await;
        api.set_delete(Err(server_error())).await;

        controller.delete(&HeroId::from("1")).await;

        let state = controller.state();
        assert_eq!(state.heroes.len(), 1);
        assert!(!state.loading);
        assert_eq!(api.calls().await, vec![ApiCall::Delete(HeroId::from("1"))]);

        let notifications = interaction.notifications().await;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].text, ctx.texts.list.delete_failed);
        assert!(notifications[0].is_blocking());
    }

    #[tokio::test]
    async fn deactivated_controller_ignores_late_results() {
        let (ctx, api, interaction, _) = create_test_context();
        api.set_list(Err(server_error())).await;
        let controller = ListController::new(ctx);
        let release = api.hold_next_call().await;

        let leave = async {
            controller.deactivate();
            let _ = release.send(());
        };
        tokio::join!(controller.load(), leave);

        let state = controller.state();
        assert_eq!(state.error, None);
        assert!(interaction.notifications().await.is_empty());
    }
}
