//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ListMessage, MenuMessage};
use crate::model::{App, InputMode};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, height) => AppMessage::Resize { width, height },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    match app.screen.input_mode() {
        InputMode::Menu => handle_menu_keys(key),
        InputMode::Text => handle_form_keys(key, true),
        InputMode::Buttons => handle_form_keys(key, false),
        InputMode::List => handle_list_keys(key),
        InputMode::Filter => handle_filter_keys(key),
    }
}

/// 处理菜单的按键
fn handle_menu_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::DELETE_TOKEN.matches(&key) {
        return AppMessage::Menu(MenuMessage::DeleteSelected);
    }

    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Menu(MenuMessage::SelectPrevious),
        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Menu(MenuMessage::SelectNext),
        // Enter 或空格: 确认选择
        KeyCode::Enter | KeyCode::Char(' ') => AppMessage::Menu(MenuMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理表单的按键
///
/// `capturing` 为 true 时焦点在输入框上，可打印字符都作为输入，`q` 不退出。
fn handle_form_keys(key: KeyEvent, capturing: bool) -> AppMessage {
    if !capturing && DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => FormMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => FormMessage::PrevField,
        KeyCode::Enter => FormMessage::Submit,
        KeyCode::Backspace => FormMessage::Backspace,
        KeyCode::Delete => FormMessage::Delete,
        KeyCode::Left => FormMessage::CursorLeft,
        KeyCode::Right => FormMessage::CursorRight,
        KeyCode::Home => FormMessage::CursorHome,
        KeyCode::End => FormMessage::CursorEnd,
        KeyCode::Char(c)
            if capturing
                && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT) =>
        {
            FormMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Form(msg)
}

/// 处理结果列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::FILTER.matches(&key) {
        return AppMessage::List(ListMessage::StartFilter);
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ListMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ListMessage::SelectNext,
        KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h') => ListMessage::PageUp,
        KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l') => ListMessage::PageDown,
        KeyCode::Home | KeyCode::Char('g') => ListMessage::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => ListMessage::SelectLast,
        _ => return AppMessage::Noop,
    };
    AppMessage::List(msg)
}

/// 处理过滤条件输入（Esc 由全局 BACK 处理）
fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Enter => ListMessage::ApplyFilter,
        KeyCode::Backspace => ListMessage::FilterBackspace,
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            ListMessage::FilterInput(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::List(msg)
}
