//! 菜单消息类型

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMessage {
    /// 选择上一项
    SelectPrevious,

    /// 选择下一项
    SelectNext,

    /// 确认选择
    Confirm,

    /// 删除选中的 API Token（Ctrl+D）
    DeleteSelected,
}
