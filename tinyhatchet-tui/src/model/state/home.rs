//! 首页菜单状态

use crate::model::{Menu, MenuItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeItemId {
    SearchLogs,
    AccountManagement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub menu: Menu<HomeItemId>,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            menu: Menu::new(vec![
                MenuItem::new(HomeItemId::SearchLogs, "Search log entries", "⌕"),
                MenuItem::new(HomeItemId::AccountManagement, "Account Management", "@"),
            ]),
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}
