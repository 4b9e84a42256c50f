//! 应用状态
//!
//! App {
//!     should_quit: bool,          // 决定应用是否应该退出
//!     screen: Screen,             // 当前屏幕及其状态（启动时为登录页）
//!     session: Session,           // 服务器地址、邮箱、HTTP 客户端
//!     viewport: Viewport,         // 终端尺寸
//!     status_message: Option<String>,
//!     in_flight: usize,           // 后台请求数量
//! }

use super::screen::Screen;
use super::session::Session;
use super::state::LoginState;

/// 终端尺寸
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前屏幕
    pub screen: Screen,

    /// 会话上下文
    pub session: Session,

    pub viewport: Viewport,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 正在执行的后台请求数量
    pub in_flight: usize,
}

impl App {
    /// 创建新的应用实例，从登录页开始
    pub fn new(session: Session, viewport: Viewport) -> Self {
        Self {
            should_quit: false,
            screen: Screen::LoginForm(LoginState::new(&session)),
            session,
            viewport,
            status_message: None,
            in_flight: 0,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
