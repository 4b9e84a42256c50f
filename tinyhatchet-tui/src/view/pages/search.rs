//! 日志检索表单视图

use ratatui::{layout::Rect, Frame};

use crate::model::state::{SearchState, SUBMIT_LABEL};
use crate::view::components::form::FormView;

const LABEL_WIDTH: usize = 5;

pub fn render(state: &SearchState, frame: &mut Frame, area: Rect) {
    let mut form = FormView::new(LABEL_WIDTH).blank();
    for field in state.fields() {
        form = form.field(field);
    }
    form.blank()
        .buttons(&[SUBMIT_LABEL], state.focus.button())
        .error(state.error.as_deref())
        .render(frame, area);
}
