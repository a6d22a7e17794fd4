//! Create/edit form controller

use std::sync::Arc;

use heroes_client::HeroId;
use tokio::sync::watch;

use super::{Activation, ControllerContext, navigate_if_active, notify_if_active};
use crate::error::CoreError;
use crate::types::{Draft, DraftField, FormMode, Notification, Route};

/// Snapshot of the form view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: Draft,
    pub loading: bool,
    pub error: Option<String>,
}

impl FormState {
    /// Edit mode still fetching its record: the whole page is a loading affordance.
    pub fn is_loading_record(&self) -> bool {
        self.loading && self.mode.is_edit()
    }
}

/// Drives one activation of the editor.
pub struct RecordFormController {
    ctx: Arc<ControllerContext>,
    state: watch::Sender<FormState>,
    activation: Activation,
}

impl RecordFormController {
    #[must_use]
    pub fn new(ctx: Arc<ControllerContext>) -> Self {
        Self {
            ctx,
            state: watch::Sender::new(FormState::default()),
            activation: Activation::new(),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Called when the view is left. Later results are ignored.
    pub fn deactivate(&self) {
        self.activation.deactivate();
    }

    fn update(&self, f: impl FnOnce(&mut FormState)) {
        if self.activation.is_active() {
            self.state.send_modify(f);
        }
    }

    /// Pick the mode from the route parameter and prepare the draft.
    pub async fn activate(&self, route_param: Option<&str>) {
        let mode = FormMode::from_route_param(route_param);
        log::debug!("Editor activated in {mode:?}");

        self.update(|s| {
            s.mode = mode.clone();
            s.draft = Draft::default();
            s.error = None;
        });

        if let FormMode::Edit(id) = mode {
            self.load_hero(&id).await;
        }
    }

    async fn load_hero(&self, id: &HeroId) {
        self.update(|s| s.loading = true);

        match self.ctx.api.get_hero(id).await {
            Ok(hero) => {
                let draft = Draft::from_hero(&hero);
                self.update(|s| {
                    s.draft = draft;
                    s.loading = false;
                });
            }
            Err(e) => {
                CoreError::on_load(e).log(&format!("Failed to load hero {id}"));
                let texts = self.ctx.texts;
                self.update(|s| {
                    s.error = Some(texts.form.load_error.to_string());
                    s.loading = false;
                });
                notify_if_active(
                    &self.ctx,
                    &self.activation,
                    Notification::error(texts.titles.error, texts.form.load_failed),
                )
                .await;
            }
        }
    }

    pub fn set_field(&self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        self.update(|s| s.draft.set(field, value));
    }

    /// Edit a field by its input name (`nombre`, `poder`). Unknown names are ignored.
    pub fn set_input(&self, input_name: &str, value: impl Into<String>) {
        match DraftField::from_input_name(input_name) {
            Some(field) => self.set_field(field, value),
            None => log::debug!("Ignoring edit of unknown input {input_name}"),
        }
    }

    pub fn toggle_alive(&self) {
        self.update(|s| s.draft.toggle_alive());
    }

    /// Validate the draft and save it.
    ///
    /// On success with a server message: transient notification, then back to
    /// the list. On failure the draft is kept for another attempt.
    pub async fn submit(&self) {
        let texts = self.ctx.texts;
        let (mode, draft) = {
            let s = self.state.borrow();
            (s.mode.clone(), s.draft.clone())
        };

        if let Err(v) = draft.validate() {
            log::debug!("Draft rejected: {v}");
            notify_if_active(
                &self.ctx,
                &self.activation,
                Notification::warning(texts.titles.validation, v.message(texts)),
            )
            .await;
            return;
        }

        self.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let payload = draft.to_payload();
        let (result, title) = match &mode {
            FormMode::Edit(id) => (
                self.ctx.api.update_hero(id, &payload).await,
                texts.titles.updated,
            ),
            FormMode::Create => (self.ctx.api.create_hero(&payload).await, texts.titles.created),
        };

        match result {
            Ok(receipt) => {
                self.update(|s| s.loading = false);
                let Some(message) = receipt.message else {
                    log::warn!("Save succeeded without a confirmation message, staying on the form");
                    return;
                };
                log::info!("Saved hero ({mode:?}): {message}");
                notify_if_active(
                    &self.ctx,
                    &self.activation,
                    Notification::success(title, message),
                )
                .await;
                navigate_if_active(&self.ctx, &self.activation, Route::List);
            }
            Err(e) => {
                let err = CoreError::from(e);
                err.log("Failed to save hero");
                let message = err.user_message(texts, texts.form.save_failed);
                self.update(|s| {
                    s.error = Some(message.clone());
                    s.loading = false;
                });
                notify_if_active(
                    &self.ctx,
                    &self.activation,
                    Notification::error(texts.titles.error, message),
                )
                .await;
            }
        }
    }

    /// Leave without saving.
    pub fn cancel(&self) {
        navigate_if_active(&self.ctx, &self.activation, Route::List);
    }
}
