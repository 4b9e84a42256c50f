//! 应用主消息枚举

use super::{FormMessage, ListMessage, MenuMessage, Outcome};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 返回上一页（Esc）
    GoBack,

    /// 终端窗口大小改变
    Resize { width: u16, height: u16 },

    /// 表单相关消息
    Form(FormMessage),

    /// 菜单相关消息
    Menu(MenuMessage),

    /// 日志列表相关消息
    List(ListMessage),

    /// 后台请求完成
    Outcome(Outcome),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
