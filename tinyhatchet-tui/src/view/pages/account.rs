//! 账号管理菜单视图

use ratatui::{layout::Rect, Frame};

use crate::model::state::AccountState;
use crate::view::components::menu;

pub fn render(state: &AccountState, frame: &mut Frame, area: Rect) {
    menu::render(&state.menu, frame, area);
}
