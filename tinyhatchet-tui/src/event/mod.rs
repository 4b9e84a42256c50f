//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width, height)        // 终端窗口大小变化 → AppMessage::Resize
//!             其他                                 // 忽略
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     全局：
//!         Ctrl+C      → Quit（任何时候）
//!         Esc         → GoBack（各屏幕自己决定返回到哪里）
//!
//!     之后按 Screen::input_mode() 分发：
//!
//!         Menu        ↑↓/jk 选择，Enter/空格 确认，Ctrl+D 删除，q 退出
//!         Text        焦点在输入框上：可打印字符全部作为输入（包括 q）
//!                     Tab/↓ 下一项，Shift+Tab/↑ 上一项，Enter 前进或提交
//!         Buttons     焦点在按钮上：同 Text，但 q 退出
//!         List        ↑↓/jk，PgUp/PgDn，Home/End，/ 开始过滤，q 退出
//!         Filter      字符输入过滤条件，Enter 应用
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
