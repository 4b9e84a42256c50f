//! 登录页面状态

use tinyhatchet_client::{FieldErrors, DEFAULT_SERVER_URL};

use super::{leftover_message, take_field_errors};
use crate::model::{Field, FocusRing, Session};

pub const EMAIL_PLACEHOLDER: &str = "tinyhatchet@example.com";

/// Which button submitted the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    Login,
    Register,
}

impl LoginAction {
    pub const ALL: [Self; 2] = [Self::Login, Self::Register];

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "[ Login ]",
            Self::Register => "[ Register ]",
        }
    }
}

/// Login / register form.
///
/// The server URL field only exists when the session has no server yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginState {
    pub url: Option<Field>,
    pub email: Field,
    pub password: Field,
    pub focus: FocusRing,
    pub error: Option<String>,
}

impl LoginState {
    pub fn new(session: &Session) -> Self {
        let url = session
            .server_url()
            .is_none()
            .then(|| Field::new("Server", DEFAULT_SERVER_URL));
        let email = Field::new("Email", EMAIL_PLACEHOLDER).with_value(session.email());
        let password = Field::new("Password", "").masked();

        let field_count = 2 + usize::from(url.is_some());
        let password_index = field_count - 1;
        let start = if email.value().is_empty() {
            0
        } else {
            password_index
        };

        let mut state = Self {
            url,
            email,
            password,
            focus: FocusRing::new(field_count, LoginAction::ALL.len()).at(start),
            error: None,
        };
        state.sync_focus();
        state
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.url.iter().chain([&self.email, &self.password])
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.url
            .iter_mut()
            .chain([&mut self.email, &mut self.password])
    }

    pub fn sync_focus(&mut self) {
        let ring = self.focus;
        ring.sync(self.fields_mut());
    }

    /// The button under the cursor, if any
    pub fn focused_action(&self) -> Option<LoginAction> {
        self.focus
            .button()
            .and_then(|i| LoginAction::ALL.get(i).copied())
    }

    pub fn clear_errors(&mut self) {
        self.error = None;
        for field in self.fields_mut() {
            field.clear_errors();
        }
    }

    /// Spread server validation messages over the fields they name
    pub fn apply_errors(&mut self, mut errors: FieldErrors) {
        take_field_errors(&mut errors, "email", &mut self.email);
        take_field_errors(&mut errors, "password", &mut self.password);
        self.error = leftover_message(errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(url: Option<&str>, email: &str) -> Session {
        let Ok(session) = Session::new(url.map(str::to_string), email) else {
            panic!("session should build");
        };
        session
    }

    #[test]
    fn url_field_only_without_server() {
        assert!(LoginState::new(&session(None, "")).url.is_some());
        assert!(LoginState::new(&session(Some("http://x"), "")).url.is_none());
    }

    #[test]
    fn remembered_email_prefills_and_focuses_password() {
        let state = LoginState::new(&session(Some("http://x"), "me@example.com"));
        assert_eq!(state.email.value(), "me@example.com");
        assert!(state.password.is_focused());
        assert!(!state.email.is_focused());
    }

    #[test]
    fn empty_session_focuses_first_field() {
        let state = LoginState::new(&session(None, ""));
        assert!(state.url.as_ref().is_some_and(Field::is_focused));
        assert_eq!(state.fields().filter(|f| f.is_focused()).count(), 1);
    }

    #[test]
    fn buttons_follow_fields() {
        let mut state = LoginState::new(&session(Some("http://x"), ""));
        state.focus.next();
        state.focus.next();
        assert_eq!(state.focused_action(), Some(LoginAction::Login));
        state.focus.next();
        assert_eq!(state.focused_action(), Some(LoginAction::Register));
    }

    #[test]
    fn errors_are_spread_over_fields() {
        let mut state = LoginState::new(&session(Some("http://x"), ""));
        let mut errors = FieldErrors::new();
        errors.insert("email".into(), vec!["required".into()]);
        errors.insert("error".into(), vec!["bad input".into()]);
        state.apply_errors(errors);
        assert_eq!(state.email.errors(), ["required".to_string()]);
        assert_eq!(state.error.as_deref(), Some("bad input"));

        state.clear_errors();
        assert!(state.email.errors().is_empty());
        assert_eq!(state.error, None);
    }
}
