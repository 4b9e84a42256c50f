//! 菜单渲染

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::Menu;
use crate::view::theme::Styles;

/// 渲染一个固定选项菜单
pub fn render<Id: Copy>(menu: &Menu<Id>, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::default()];
    for (i, item) in menu.items.iter().enumerate() {
        let is_selected = i == menu.selected;
        let (marker, style) = if is_selected {
            ("> ", Styles::selected())
        } else {
            ("  ", Styles::text())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {marker}{} ", item.icon), style),
            Span::styled(item.label, style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
