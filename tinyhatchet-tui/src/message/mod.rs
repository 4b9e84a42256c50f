//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! Messages are the only way state changes. They come from two places:
//!
//!     crossterm Event ── event/handler.rs ──▶ AppMessage::{Form, Menu, List, GoBack, Quit, Resize}
//!     finished Command ── backend/executor.rs ──▶ AppMessage::Outcome(Outcome)
//!
//! and are consumed by `update::update`, which may answer with new commands.
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 子消息
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     FormMessage     Login / Confirm / Change Email / Search forms
//!                     Tab, Shift+Tab, ↑↓, Enter, typed chars, cursor keys
//!
//!     MenuMessage     Home / Account / API Token menus
//!                     ↑↓, Enter, Ctrl+D
//!
//!     ListMessage     Search results
//!                     ↑↓, PgUp/PgDn, Home/End, `/` filtering
//!
//!     Outcome         The result of one background request. Screens only
//!                     react to the outcomes they expect; anything else is a
//!                     stale result for a screen the user already left.
//!

mod app;
mod form;
mod list;
mod menu;
mod outcome;

pub use app::AppMessage;
pub use form::FormMessage;
pub use list::ListMessage;
pub use menu::MenuMessage;
pub use outcome::Outcome;
