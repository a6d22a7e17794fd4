//! 控制器层

mod form_controller;
mod list_controller;

pub use form_controller::{FormState, RecordFormController};
pub use list_controller::{ListController, ListDisplay, ListState};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use heroes_client::HeroesApi;

use crate::i18n::Texts;
use crate::traits::{Navigator, UserInteraction};
use crate::types::{Notification, Route};

/// 控制器上下文 - 持有所有依赖
///
/// 前端需要创建此上下文，并注入平台特定的交互与导航实现。
pub struct ControllerContext {
    /// Remote heroes resource
    pub api: Arc<dyn HeroesApi>,
    /// Prompts and notifications
    pub interaction: Arc<dyn UserInteraction>,
    pub navigator: Arc<dyn Navigator>,
    pub texts: &'static Texts,
}

impl ControllerContext {
    #[must_use]
    pub fn new(
        api: Arc<dyn HeroesApi>,
        interaction: Arc<dyn UserInteraction>,
        navigator: Arc<dyn Navigator>,
        texts: &'static Texts,
    ) -> Self {
        Self {
            api,
            interaction,
            navigator,
            texts,
        }
    }
}

/// Per-activation liveness of a controller.
///
/// Requests are never cancelled; once the view is left, their results are
/// dropped instead of reaching state, notifications or navigation.
#[derive(Debug)]
struct Activation(AtomicBool);

impl Activation {
    fn new() -> Self {
        Self(AtomicBool::new(true))
    }

    fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn deactivate(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Post a notification unless the controller was deactivated.
async fn notify_if_active(ctx: &ControllerContext, activation: &Activation, n: Notification) {
    if activation.is_active() {
        ctx.interaction.notify(n).await;
    } else {
        log::debug!("Dropping notification for inactive view: {}", n.title);
    }
}

fn navigate_if_active(ctx: &ControllerContext, activation: &Activation, route: Route) {
    if activation.is_active() {
        ctx.navigator.navigate(route);
    } else {
        log::debug!("Dropping navigation to {route} from inactive view");
    }
}
