//! 修改邮箱页面状态

use tinyhatchet_client::FieldErrors;

use super::{leftover_message, take_field_errors};
use crate::model::{Field, FocusRing};

pub const SUBMIT_LABEL: &str = "[ Submit ]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEmailState {
    pub email: Field,
    pub focus: FocusRing,
    pub error: Option<String>,
}

impl ChangeEmailState {
    pub fn new() -> Self {
        let mut state = Self {
            email: Field::new("New Email", "mouseion@example.com"),
            focus: FocusRing::new(1, 1),
            error: None,
        };
        state.sync_focus();
        state
    }

    pub fn sync_focus(&mut self) {
        let ring = self.focus;
        ring.sync([&mut self.email]);
    }

    pub fn on_submit_button(&self) -> bool {
        self.focus.button().is_some()
    }

    pub fn apply_errors(&mut self, mut errors: FieldErrors) {
        take_field_errors(&mut errors, "email", &mut self.email);
        self.error = leftover_message(errors);
    }
}

impl Default for ChangeEmailState {
    fn default() -> Self {
        Self::new()
    }
}
