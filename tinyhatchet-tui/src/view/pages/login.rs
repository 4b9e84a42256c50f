//! 登录页面视图

use ratatui::{layout::Rect, Frame};

use crate::model::state::{LoginAction, LoginState};
use crate::view::components::form::FormView;

/// Width of the longest label, "Password"
const LABEL_WIDTH: usize = 8;

pub fn render(state: &LoginState, frame: &mut Frame, area: Rect) {
    let mut form = FormView::new(LABEL_WIDTH).blank();
    for field in state.fields() {
        form = form.field(field);
    }

    let labels = LoginAction::ALL.map(LoginAction::label);
    form.blank()
        .buttons(&labels, state.focus.button())
        .error(state.error.as_deref())
        .render(frame, area);
}
