//! 可复用的界面组件

pub mod form;
pub mod menu;
pub mod statusbar;
