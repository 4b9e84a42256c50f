//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, InputMode, Screen};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前屏幕生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 后台请求进行中
    if app.in_flight > 0 {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("⟳ {} pending", app.in_flight),
            Style::default().fg(colors().warning),
        ));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().success)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    match app.screen.input_mode() {
        InputMode::Menu => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Open"));
            if matches!(app.screen, Screen::ApiTokenMenu(_)) {
                hints.push(("Ctrl+D", "Delete"));
            }
        }
        InputMode::Text | InputMode::Buttons => {
            hints.push(("Tab", "Next"));
            hints.push(("Enter", "Submit"));
        }
        InputMode::List => {
            hints.push(("↑↓", "Scroll"));
            hints.push(("PgUp/PgDn", "Page"));
            hints.push(("/", "Filter"));
        }
        InputMode::Filter => {
            hints.push(("Enter", "Apply"));
        }
    }

    let esc = match &app.screen {
        Screen::LoginForm(_) | Screen::HomeMenu(_) => "Quit",
        Screen::SearchResults(state) if state.list.has_filter() => "Clear Filter",
        _ => "Back",
    };
    hints.push(("Esc", esc));
    hints.push(("Ctrl+C", "Quit"));

    hints
}
