//! Messages and prompts shown through [`UserInteraction`](crate::traits::UserInteraction)

use std::time::Duration;

use crate::i18n::Texts;

/// How long a transient notification stays up.
pub const TRANSIENT_NOTIFICATION_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// Stays until the user acknowledges it
    Blocking,
    /// Closes by itself after the duration
    Transient(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub text: String,
    pub dismissal: Dismissal,
}

impl Notification {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            text: text.into(),
            dismissal: Dismissal::Transient(TRANSIENT_NOTIFICATION_DURATION),
        }
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            title: title.into(),
            text: text.into(),
            dismissal: Dismissal::Blocking,
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            text: text.into(),
            dismissal: Dismissal::Blocking,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.dismissal == Dismissal::Blocking
    }
}

/// A yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn delete_hero(texts: &Texts) -> Self {
        let t = &texts.confirm_delete;
        Self {
            title: t.title.to_string(),
            text: t.text.to_string(),
            confirm_label: t.confirm.to_string(),
            cancel_label: t.cancel.to_string(),
        }
    }
}
