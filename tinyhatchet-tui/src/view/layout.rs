//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Screen};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_screen(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let server = app.session.server_url().unwrap_or("no server selected");
    let title = Paragraph::new(format!(" tinyhatchet · {server}"))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前屏幕渲染内容
fn render_screen(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.screen.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.screen {
        Screen::HomeMenu(state) => pages::home::render(state, frame, inner_area),
        Screen::LoginForm(state) => pages::login::render(state, frame, inner_area),
        Screen::ConfirmForm(state) => pages::confirm::render(state, frame, inner_area),
        Screen::AccountMenu(state) => pages::account::render(state, frame, inner_area),
        Screen::ChangeEmailForm(state) => pages::change_email::render(state, frame, inner_area),
        Screen::ApiTokenMenu(state) => pages::api_tokens::render(state, frame, inner_area),
        Screen::SearchForm(state) => pages::search::render(state, frame, inner_area),
        Screen::SearchResults(state) => pages::results::render(state, frame, inner_area),
    }
}
