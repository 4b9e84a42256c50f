//! 检索结果列表视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tinyhatchet_client::{datetime, LogEntry};

use crate::model::state::{EntryList, ResultsState};
use crate::view::theme::Styles;

pub fn render(state: &ResultsState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题
            Constraint::Length(1), // 过滤条件
            Constraint::Min(1),    // 列表
            Constraint::Length(1), // 统计
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled("Found Log Entries:", Styles::title())),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(filter_line(&state.list)), chunks[1]);

    if state.list.is_empty() {
        let message = if state.list.total() == 0 {
            "No log entries found."
        } else {
            "No entries match the filter."
        };
        frame.render_widget(
            Paragraph::new(Line::styled(format!("  {message}"), Styles::muted())),
            chunks[2],
        );
    } else {
        frame.render_widget(Paragraph::new(entry_lines(&state.list)), chunks[2]);
    }

    frame.render_widget(Paragraph::new(footer_line(&state.list)), chunks[3]);
}

fn filter_line(list: &EntryList) -> Line<'static> {
    if list.is_filtering() {
        Line::from(vec![
            Span::styled("Filter: ", Styles::prompt_focused()),
            Span::styled(format!("{}█", list.filter()), Styles::text()),
        ])
    } else if list.has_filter() {
        Line::from(vec![
            Span::styled("Filter: ", Styles::muted()),
            Span::styled(list.filter().to_string(), Styles::text()),
        ])
    } else {
        Line::default()
    }
}

fn entry_lines(list: &EntryList) -> Vec<Line<'static>> {
    let selected = list.selected();
    let mut lines = Vec::new();
    for (pos, entry) in list.page() {
        let is_selected = selected == Some(pos);
        let (bar, title_style) = if is_selected {
            ("│ ", Styles::selected())
        } else {
            ("  ", Styles::text())
        };
        lines.push(Line::from(vec![
            Span::styled(bar, Styles::prompt_focused()),
            Span::styled(entry_title(entry), title_style),
        ]));
        lines.push(Line::from(vec![
            Span::styled(bar, Styles::prompt_focused()),
            Span::styled(entry.tags.join(", "), Styles::muted()),
        ]));
        lines.push(Line::default());
    }
    lines
}

/// `2021-06-01T11:22:33Z: text`
pub fn entry_title(entry: &LogEntry) -> String {
    format!("{}: {}", datetime::format_rfc3339(&entry.timestamp), entry.text)
}

fn footer_line(list: &EntryList) -> Line<'static> {
    let text = if list.len() == list.total() {
        format!("{} entries", list.total())
    } else {
        format!("{} of {} entries", list.len(), list.total())
    };
    Line::styled(text, Styles::muted())
}
