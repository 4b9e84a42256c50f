//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 层只保存数据，不做 I/O。Update 层修改它，View 层读取它。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 主状态、Viewport
//!         mod field;          // 单行文本输入框
//!         mod focus;          // 表单焦点环
//!         mod menu;           // 固定选项菜单
//!         mod screen;         // 屏幕状态机
//!         mod session;        // 会话上下文
//!         pub mod state;      // 各屏幕的状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 屏幕状态机
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     LoginForm ──Success──▶ HomeMenu ──▶ SearchForm ──LogEntries──▶ SearchResults
//!        │                     │  ▲            ▲                          │
//!        │ VerificationRequired│  │ Esc        └────────── Esc ───────────┘
//!        ▼                     ▼  │
//!     ConfirmForm ─Success─▶ AccountMenu ──▶ ChangeEmailForm ──Success──┐
//!                              │  ▲                                    │
//!                              │  └────────────────────────────────────┘
//!                              ▼
//!                         ApiTokenMenu（进入时自动 ListTokens）
//!
//!     Esc 总是返回上一级；在 HomeMenu 上 Esc 退出程序。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单焦点
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每个表单有 n 个输入框，后面跟着若干按钮。FocusRing 在这些槽位之间
//!     循环，`sync()` 让焦点所在的输入框获得焦点、其余失焦。
//!     Field 在失焦时忽略所有编辑消息，因此一条按键消息只会改变一个输入框。
//!

mod app;
mod field;
mod focus;
mod menu;
mod screen;
mod session;
pub mod state;

pub use app::{App, Viewport};
pub use field::Field;
pub use focus::FocusRing;
pub use menu::{Menu, MenuItem};
pub use screen::{InputMode, Screen};
pub use session::Session;
