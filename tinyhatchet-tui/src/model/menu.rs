//! 菜单状态定义

/// A menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<Id> {
    pub id: Id,
    pub label: &'static str,
    pub icon: &'static str,
}

impl<Id> MenuItem<Id> {
    pub const fn new(id: Id, label: &'static str, icon: &'static str) -> Self {
        Self { id, label, icon }
    }
}

/// A fixed list of choices with one selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<Id> {
    pub items: Vec<MenuItem<Id>>,
    /// 当前选中的索引
    pub selected: usize,
}

impl<Id: Copy> Menu<Id> {
    pub fn new(items: Vec<MenuItem<Id>>) -> Self {
        Self { items, selected: 0 }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 获取当前选中项的 ID
    pub fn current_id(&self) -> Option<Id> {
        self.items.get(self.selected).map(|item| item.id)
    }
}
