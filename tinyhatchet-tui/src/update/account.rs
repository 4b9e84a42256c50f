//! 账号管理菜单更新逻辑

use super::{ignored, Transition};
use crate::message::{AppMessage, MenuMessage};
use crate::model::state::{AccountItemId, AccountState, ApiTokenState, ChangeEmailState, HomeState};
use crate::model::Screen;

pub fn update(state: &mut AccountState, msg: AppMessage) -> Transition {
    match msg {
        AppMessage::Menu(MenuMessage::SelectPrevious) => {
            state.menu.select_previous();
            Transition::stay()
        }
        AppMessage::Menu(MenuMessage::SelectNext) => {
            state.menu.select_next();
            Transition::stay()
        }
        AppMessage::Menu(MenuMessage::Confirm) => match state.menu.current_id() {
            Some(AccountItemId::ChangeEmail) => {
                Transition::goto(Screen::ChangeEmailForm(ChangeEmailState::new()))
            }
            // 进入时由 Screen::init 发出 ListTokens
            Some(AccountItemId::ApiTokens) => {
                Transition::goto(Screen::ApiTokenMenu(ApiTokenState::new()))
            }
            None => Transition::stay(),
        },
        AppMessage::GoBack => Transition::goto(Screen::HomeMenu(HomeState::new())),
        AppMessage::Outcome(outcome) => ignored("account", &outcome),
        _ => Transition::stay(),
    }
}
