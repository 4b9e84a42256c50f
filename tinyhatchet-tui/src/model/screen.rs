//! 屏幕状态机
//!
//! Exactly one screen is active at a time. Each variant owns its own state;
//! moving to another screen replaces the whole value.

use super::state::{
    AccountState, ApiTokenState, ChangeEmailState, ConfirmState, HomeState, LoginState,
    ResultsState, SearchState,
};
use crate::backend::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    HomeMenu(HomeState),
    LoginForm(LoginState),
    ConfirmForm(ConfirmState),
    AccountMenu(AccountState),
    ChangeEmailForm(ChangeEmailState),
    ApiTokenMenu(ApiTokenState),
    SearchForm(SearchState),
    SearchResults(ResultsState),
}

/// How key presses should be read on the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// ↑↓ / Enter choices
    Menu,
    /// A text field has focus; printable keys are typed
    Text,
    /// A form button has focus
    Buttons,
    /// Scrolling a result list
    List,
    /// Typing a list filter
    Filter,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::HomeMenu(_) => "Home",
            Self::LoginForm(_) => "Login",
            Self::ConfirmForm(_) => "Confirm Account",
            Self::AccountMenu(_) => "Account Management",
            Self::ChangeEmailForm(_) => "Change Email",
            Self::ApiTokenMenu(_) => "API Tokens",
            Self::SearchForm(_) => "Search Log Entries",
            Self::SearchResults(_) => "Found Log Entries",
        }
    }

    pub fn input_mode(&self) -> InputMode {
        let text_or_buttons = |on_field: bool| {
            if on_field {
                InputMode::Text
            } else {
                InputMode::Buttons
            }
        };
        match self {
            Self::HomeMenu(_) | Self::AccountMenu(_) | Self::ApiTokenMenu(_) => InputMode::Menu,
            Self::LoginForm(s) => text_or_buttons(s.focus.field().is_some()),
            Self::ConfirmForm(_) => InputMode::Text,
            Self::ChangeEmailForm(s) => text_or_buttons(s.focus.field().is_some()),
            Self::SearchForm(s) => text_or_buttons(s.focus.field().is_some()),
            Self::SearchResults(s) => {
                if s.list.is_filtering() {
                    InputMode::Filter
                } else {
                    InputMode::List
                }
            }
        }
    }

    /// Commands to start when the screen is entered
    pub fn init(&self) -> Vec<Command> {
        match self {
            Self::ApiTokenMenu(_) => vec![Command::ListTokens],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_token_menu_loads_on_entry() {
        assert_eq!(
            Screen::ApiTokenMenu(ApiTokenState::new()).init(),
            vec![Command::ListTokens]
        );
        assert!(Screen::HomeMenu(HomeState::new()).init().is_empty());
        assert!(Screen::SearchForm(SearchState::new()).init().is_empty());
    }

    #[test]
    fn search_form_starts_in_text_mode() {
        assert_eq!(Screen::SearchForm(SearchState::new()).input_mode(), InputMode::Text);
        assert_eq!(
            Screen::ConfirmForm(ConfirmState::new()).input_mode(),
            InputMode::Text
        );
        assert_eq!(Screen::HomeMenu(HomeState::new()).input_mode(), InputMode::Menu);
    }
}
