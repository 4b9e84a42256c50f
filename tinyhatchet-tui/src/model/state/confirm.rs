//! 账号确认页面状态

use tinyhatchet_client::FieldErrors;

use super::leftover_message;
use crate::model::Field;

pub const CONFIRM_INTRO: &str = "You must confirm your account before you can continue.\nCheck your email for a confirmation code and enter it below.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub code: Field,
    pub error: Option<String>,
}

impl ConfirmState {
    pub fn new() -> Self {
        let mut code = Field::new("Confirm Token", "ABCD123");
        code.focus();
        Self { code, error: None }
    }

    pub fn apply_errors(&mut self, errors: FieldErrors) {
        self.error = leftover_message(errors);
    }
}

impl Default for ConfirmState {
    fn default() -> Self {
        Self::new()
    }
}
