//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，从不修改它。每一帧都从头渲染。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 内容区 + 状态栏
//!         mod components;     // 表单、菜单、状态栏组件
//!         mod pages;          // 每个 Screen 一个页面
//!         mod theme;          // 颜色与样式
//!
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ tinyhatchet · https://tinyhatchet.com        │  标题栏
//!     ├─ Login ──────────────────────────────────────┤
//!     │                                              │
//!     │ Email    > me@example.com                    │  pages::login
//!     │ Password > ******                            │
//!     │                                              │
//!     │ [ Login ]  [ Register ]                      │
//!     ├──────────────────────────────────────────────┤
//!     │ Tab Next │ Enter Submit │ Esc Quit           │  状态栏
//!     └──────────────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
mod theme;

pub use layout::render;
