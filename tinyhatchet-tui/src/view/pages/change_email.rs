//! 修改邮箱页面视图

use ratatui::{layout::Rect, Frame};

use crate::model::state::{ChangeEmailState, SUBMIT_LABEL};
use crate::view::components::form::FormView;

pub fn render(state: &ChangeEmailState, frame: &mut Frame, area: Rect) {
    FormView::new(state.email.label().len())
        .blank()
        .field(&state.email)
        .blank()
        .buttons(&[SUBMIT_LABEL], state.focus.button())
        .error(state.error.as_deref())
        .render(frame, area);
}
