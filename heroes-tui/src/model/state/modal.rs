//! 弹窗状态

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use heroes_core::types::{ConfirmPrompt, Dismissal, Notification};
use tokio::sync::oneshot;

/// 弹窗类型
#[derive(Debug)]
pub enum Modal {
    /// 是/否确认（回答经 `reply` 返回控制器）
    Confirm {
        prompt: ConfirmPrompt,
        /// 焦点是否在确认按钮上
        confirm_focused: bool,
        reply: Option<oneshot::Sender<bool>>,
    },

    /// 通知（阻塞式需要确认，瞬时式自动关闭）
    Notification {
        notification: Notification,
        shown_at: Instant,
    },

    /// 帮助
    Help,
}

impl Modal {
    pub fn confirm(prompt: ConfirmPrompt, reply: oneshot::Sender<bool>) -> Self {
        Self::Confirm {
            prompt,
            // Cancel has the initial focus
            confirm_focused: false,
            reply: Some(reply),
        }
    }

    pub fn notification(notification: Notification) -> Self {
        Self::Notification {
            notification,
            shown_at: Instant::now(),
        }
    }

    /// Whether a transient notification has outlived its duration at `now`.
    fn is_expired(&self, now: Instant) -> bool {
        match self {
            Self::Notification {
                notification:
                    Notification {
                        dismissal: Dismissal::Transient(duration),
                        ..
                    },
                shown_at,
            } => now.saturating_duration_since(*shown_at) >= *duration,
            _ => false,
        }
    }

    /// Answer a pending confirmation. Later answers are ignored.
    fn answer(&mut self, value: bool) {
        if let Self::Confirm { reply, .. } = self
            && let Some(reply) = reply.take()
        {
            let _ = reply.send(value);
        }
    }
}

/// 弹窗状态容器
///
/// One modal is visible at a time; modals raised meanwhile wait in order.
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
    queue: VecDeque<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗（已有弹窗时排队）
    pub fn show(&mut self, modal: Modal) {
        if self.active.is_some() {
            self.queue.push_back(modal);
        } else {
            self.active = Some(Modal::restart(modal));
        }
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    /// 关闭弹窗。未回答的确认视为取消。
    pub fn close(&mut self) {
        if let Some(mut modal) = self.active.take() {
            modal.answer(false);
        }
        self.active = self.queue.pop_front().map(Modal::restart);
    }

    /// Answer the active confirmation with its focused button and close it.
    pub fn confirm(&mut self) {
        let value = matches!(
            self.active,
            Some(Modal::Confirm {
                confirm_focused: true,
                ..
            })
        );
        if let Some(modal) = self.active.as_mut() {
            modal.answer(value);
        }
        self.close();
    }

    pub fn toggle_confirm_focus(&mut self) {
        if let Some(Modal::Confirm {
            confirm_focused, ..
        }) = self.active.as_mut()
        {
            *confirm_focused = !*confirm_focused;
        }
    }

    /// Close an expired transient notification.
    pub fn tick(&mut self, now: Instant) {
        if self.active.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.close();
        }
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Remaining time of the active transient notification.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match &self.active {
            Some(Modal::Notification {
                notification:
                    Notification {
                        dismissal: Dismissal::Transient(duration),
                        ..
                    },
                shown_at,
            }) => Some(duration.saturating_sub(now.saturating_duration_since(*shown_at))),
            _ => None,
        }
    }
}

impl Modal {
    /// A queued notification's timer starts when it becomes visible.
    fn restart(self) -> Self {
        match self {
            Self::Notification { notification, .. } => Self::notification(notification),
            other => other,
        }
    }
}
