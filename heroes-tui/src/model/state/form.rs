//! 编辑页面状态

use std::sync::Arc;

use heroes_core::{FormState, RecordFormController};
use tokio::sync::watch;

use crate::model::FormFocus;

/// 编辑页面状态
pub struct FormPageState {
    pub controller: Arc<RecordFormController>,
    state: watch::Receiver<FormState>,
    /// Route parameter this page was opened with (`nuevo` or an id)
    pub route_param: String,
    pub focus: FormFocus,
}

impl FormPageState {
    pub fn new(controller: Arc<RecordFormController>, route_param: String) -> Self {
        let state = controller.subscribe();
        Self {
            controller,
            state,
            route_param,
            focus: FormFocus::default(),
        }
    }

    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Controls are disabled while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.state.borrow().loading
    }

    /// Append a character to the focused input, up to its maximum length.
    pub fn input(&self, ch: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.state.borrow().draft.get(field).to_string();
        if value.chars().count() >= field.max_chars() {
            return;
        }
        value.push(ch);
        self.controller.set_field(field, value);
    }

    /// Remove the last character of the focused input.
    pub fn backspace(&self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.state.borrow().draft.get(field).to_string();
        if value.pop().is_some() {
            self.controller.set_field(field, value);
        }
    }
}
