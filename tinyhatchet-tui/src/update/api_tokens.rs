//! API Token 菜单更新逻辑

use super::{ignored, Transition};
use crate::backend::Command;
use crate::message::{AppMessage, MenuMessage, Outcome};
use crate::model::state::{AccountState, ApiTokenState, TokenMenuItem};
use crate::model::Screen;

pub fn update(state: &mut ApiTokenState, msg: AppMessage) -> Transition {
    match msg {
        AppMessage::Menu(menu) => handle_menu(state, menu),
        AppMessage::Outcome(outcome) => handle_outcome(state, outcome),
        AppMessage::GoBack => Transition::goto(Screen::AccountMenu(AccountState::new())),
        _ => Transition::stay(),
    }
}

fn handle_menu(state: &mut ApiTokenState, msg: MenuMessage) -> Transition {
    match msg {
        MenuMessage::SelectPrevious => state.select_previous(),
        MenuMessage::SelectNext => state.select_next(),
        MenuMessage::Confirm => {
            if state.selected_item() == TokenMenuItem::CreateNew {
                state.error = None;
                return Transition::run(Command::CreateToken);
            }
        }
        MenuMessage::DeleteSelected => {
            if let TokenMenuItem::Token(token) = state.selected_item() {
                let id = token.id.clone();
                state.error = None;
                return Transition::run(Command::DeleteToken { id });
            }
        }
    }
    Transition::stay()
}

fn handle_outcome(state: &mut ApiTokenState, outcome: Outcome) -> Transition {
    match outcome {
        Outcome::TokenCreated(token) => {
            let status = format!("Created token {}", token.id);
            state.add_token(token);
            Transition::stay().with_status(status)
        }
        Outcome::TokenList(tokens) => {
            state.set_tokens(tokens);
            Transition::stay()
        }
        Outcome::TokenDeleted(id) => {
            state.remove_token(&id);
            Transition::stay().with_status(format!("Deleted token {id}"))
        }
        Outcome::Failure(message) => {
            state.error = Some(message);
            Transition::stay()
        }
        other => ignored("api_tokens", &other),
    }
}
