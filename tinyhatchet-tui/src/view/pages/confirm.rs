//! 账号确认页面视图

use ratatui::{layout::Rect, Frame};

use crate::model::state::{ConfirmState, CONFIRM_INTRO};
use crate::view::components::form::FormView;
use crate::view::theme::Styles;

pub fn render(state: &ConfirmState, frame: &mut Frame, area: Rect) {
    FormView::new(state.code.label().len())
        .blank()
        .text(CONFIRM_INTRO, Styles::text())
        .blank()
        .field(&state.code)
        .error(state.error.as_deref())
        .render(frame, area);
}
