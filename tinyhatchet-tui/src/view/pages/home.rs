//! 首页视图

use ratatui::{layout::Rect, Frame};

use crate::model::state::HomeState;
use crate::view::components::menu;

pub fn render(state: &HomeState, frame: &mut Frame, area: Rect) {
    menu::render(&state.menu, frame, area);
}
