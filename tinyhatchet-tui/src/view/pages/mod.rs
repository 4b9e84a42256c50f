//! 各屏幕的页面视图

pub mod account;
pub mod api_tokens;
pub mod change_email;
pub mod confirm;
pub mod home;
pub mod login;
pub mod results;
pub mod search;
