//! 日志列表消息类型

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    SelectPrevious,
    SelectNext,
    PageUp,
    PageDown,
    SelectFirst,
    SelectLast,

    /// `/`：开始输入过滤条件
    StartFilter,
    /// 过滤条件输入字符
    FilterInput(char),
    FilterBackspace,
    /// Enter：结束输入，保留过滤结果
    ApplyFilter,
}
