//! 首页菜单更新逻辑

use super::{ignored, Transition};
use crate::message::{AppMessage, MenuMessage};
use crate::model::state::{AccountState, HomeItemId, HomeState, SearchState};
use crate::model::Screen;

pub fn update(state: &mut HomeState, msg: AppMessage) -> Transition {
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
            Some(HomeItemId::SearchLogs) => Transition::goto(Screen::SearchForm(SearchState::new())),
            Some(HomeItemId::AccountManagement) => {
                Transition::goto(Screen::AccountMenu(AccountState::new()))
            }
            None => Transition::stay(),
        },
        // 首页是根页面，Esc 直接退出
        AppMessage::GoBack => Transition::quit(),
        AppMessage::Outcome(outcome) => ignored("home", &outcome),
        _ => Transition::stay(),
    }
}
