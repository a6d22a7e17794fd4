//! User interaction abstract Trait

use async_trait::async_trait;

use crate::types::{ConfirmPrompt, Notification};

/// Modal prompts and notifications.
///
/// Platform implementation:
/// - TUI: `ChannelInteraction` (requests forwarded to the event loop)
/// - Tests: `RecordingInteraction`
#[async_trait]
pub trait UserInteraction: Send + Sync {
    /// Ask a yes/no question and wait for the answer.
    ///
    /// Dismissing the prompt counts as `false`.
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;

    /// Display a notification.
    ///
    /// Returns once the notification is posted, not when it is dismissed.
    async fn notify(&self, notification: Notification);
}
