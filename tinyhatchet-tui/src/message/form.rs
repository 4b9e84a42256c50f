//! 表单消息类型

/// Form editing and focus messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// Enter：在输入框上前进，在按钮上提交
    Submit,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 删除光标后的字符（Delete）
    Delete,

    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}
