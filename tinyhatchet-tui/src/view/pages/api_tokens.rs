//! API Token 菜单视图

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::{ApiTokenState, TokenMenuItem};
use crate::view::components::form::capitalize;
use crate::view::theme::Styles;

pub fn render(state: &ApiTokenState, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::default()];

    for (i, item) in state.items().into_iter().enumerate() {
        let is_selected = i == state.selected;
        let (marker, style) = if is_selected {
            ("> ", Styles::selected())
        } else {
            ("  ", Styles::text())
        };

        let mut spans = vec![Span::styled(format!("  {marker}"), style)];
        match item {
            TokenMenuItem::Token(token) => {
                spans.push(Span::styled(format!("ID: {}", token.id), style));
                // 密钥只在创建时返回一次
                if token.has_secret() {
                    spans.push(Span::styled(
                        format!("    Secret: {}", token.secret),
                        Styles::prompt_focused(),
                    ));
                }
            }
            TokenMenuItem::CreateNew => {
                spans.push(Span::styled(ApiTokenState::CREATE_LABEL, style));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "  Press ctrl+d to delete a token. Secrets are only shown once.",
        Styles::muted(),
    ));

    if let Some(error) = &state.error {
        lines.push(Line::default());
        lines.push(Line::styled(format!("  {}", capitalize(error)), Styles::error()));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
