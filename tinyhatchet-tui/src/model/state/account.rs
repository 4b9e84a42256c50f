//! 账号管理菜单状态

use crate::model::{Menu, MenuItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountItemId {
    ChangeEmail,
    ApiTokens,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountState {
    pub menu: Menu<AccountItemId>,
}

impl AccountState {
    pub fn new() -> Self {
        Self {
            menu: Menu::new(vec![
                MenuItem::new(AccountItemId::ChangeEmail, "Change Email", "✉"),
                MenuItem::new(AccountItemId::ApiTokens, "API Tokens", "#"),
            ]),
        }
    }
}

impl Default for AccountState {
    fn default() -> Self {
        Self::new()
    }
}
