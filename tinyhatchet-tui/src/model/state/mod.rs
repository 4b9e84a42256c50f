//! 页面状态模块
//!
//! 定义各个页面的状态数据结构。Every state is created fresh when its screen
//! is entered, except the search form which survives a trip to the results
//! list and back.

mod account;
mod api_tokens;
mod change_email;
mod confirm;
mod entry_list;
mod home;
mod login;
mod search;

pub use account::{AccountItemId, AccountState};
pub use api_tokens::{ApiTokenState, TokenMenuItem};
pub use change_email::{ChangeEmailState, SUBMIT_LABEL};
pub use confirm::{ConfirmState, CONFIRM_INTRO};
pub use entry_list::{page_size_for, EntryList, ITEM_HEIGHT, LIST_CHROME_HEIGHT};
pub use home::{HomeItemId, HomeState};
pub use login::{LoginAction, LoginState, EMAIL_PLACEHOLDER};
pub use search::{ResultsState, SearchState, TIMESTAMP_CHAR_LIMIT};

use tinyhatchet_client::{FieldErrors, GENERAL_ERROR_KEY};

use super::Field;

/// Move the messages for `key` onto `field`
fn take_field_errors(errors: &mut FieldErrors, key: &str, field: &mut Field) {
    if let Some(messages) = errors.remove(key) {
        field.set_errors(messages);
    }
}

/// Fold whatever no field claimed into one line for the form's error slot
fn leftover_message(errors: FieldErrors) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    for (key, messages) in errors {
        for message in messages {
            if key == GENERAL_ERROR_KEY {
                parts.insert(0, message);
            } else {
                parts.push(format!("{key}: {message}"));
            }
        }
    }
    (!parts.is_empty()).then(|| parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_error_comes_first() {
        let mut errors = FieldErrors::new();
        errors.insert("confirm_password".into(), vec!["mismatch".into()]);
        errors.insert(GENERAL_ERROR_KEY.into(), vec!["bad input".into()]);
        assert_eq!(
            leftover_message(errors).as_deref(),
            Some("bad input; confirm_password: mismatch")
        );
        assert_eq!(leftover_message(FieldErrors::new()), None);
    }

    #[test]
    fn claimed_errors_leave_the_map() {
        let mut errors = FieldErrors::new();
        errors.insert("email".into(), vec!["required".into()]);
        let mut field = Field::new("Email", "");
        take_field_errors(&mut errors, "email", &mut field);
        assert_eq!(field.errors(), ["required".to_string()]);
        assert!(errors.is_empty());
    }
}
