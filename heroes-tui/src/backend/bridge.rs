//! Interaction and navigation over a channel
//!
//! Controllers run on the tokio runtime; the terminal loop is synchronous.
//! Every prompt, notification and navigation is forwarded as a [`UiRequest`]
//! that the loop drains between frames.

use async_trait::async_trait;
use heroes_core::types::{ConfirmPrompt, Notification, Route};
use heroes_core::{Navigator, UserInteraction};
use tokio::sync::{mpsc, oneshot};

/// Request from a controller to the terminal loop.
#[derive(Debug)]
pub enum UiRequest {
    /// Show a yes/no prompt and answer through `reply`
    Confirm {
        prompt: ConfirmPrompt,
        reply: oneshot::Sender<bool>,
    },
    Notify(Notification),
    Navigate(Route),
}

/// Create the interaction/navigation pair and the receiving end for the loop.
pub fn ui_channel() -> (
    ChannelInteraction,
    ChannelNavigator,
    mpsc::UnboundedReceiver<UiRequest>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        ChannelInteraction { tx: tx.clone() },
        ChannelNavigator { tx },
        rx,
    )
}

pub struct ChannelInteraction {
    tx: mpsc::UnboundedSender<UiRequest>,
}

#[async_trait]
impl UserInteraction for ChannelInteraction {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = UiRequest::Confirm {
            prompt: prompt.clone(),
            reply,
        };
        if self.tx.send(request).is_err() {
            log::warn!("UI loop is gone, treating prompt as declined");
            return false;
        }
        // A prompt closed without an answer counts as declined
        answer.await.unwrap_or(false)
    }

    async fn notify(&self, notification: Notification) {
        if self.tx.send(UiRequest::Notify(notification)).is_err() {
            log::warn!("UI loop is gone, dropping notification");
        }
    }
}

pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<UiRequest>,
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, route: Route) {
        if self.tx.send(UiRequest::Navigate(route)).is_err() {
            log::warn!("UI loop is gone, dropping navigation");
        }
    }
}
