//! API Token 菜单状态

use tinyhatchet_client::ApiToken;

/// One row of the token menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMenuItem<'a> {
    Token(&'a ApiToken),
    CreateNew,
}

/// Known tokens plus a trailing "Create New Token" row.
///
/// The create row is not stored, so it is always last and always exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiTokenState {
    pub tokens: Vec<ApiToken>,
    pub selected: usize,
    pub error: Option<String>,
}

impl ApiTokenState {
    pub const CREATE_LABEL: &'static str = "Create New Token";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> Vec<TokenMenuItem<'_>> {
        self.tokens
            .iter()
            .map(TokenMenuItem::Token)
            .chain(std::iter::once(TokenMenuItem::CreateNew))
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.tokens.len() + 1
    }

    pub fn selected_item(&self) -> TokenMenuItem<'_> {
        self.tokens
            .get(self.selected)
            .map_or(TokenMenuItem::CreateNew, TokenMenuItem::Token)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.item_count() {
            self.selected += 1;
        }
    }

    /// A freshly created token goes right before the create row
    pub fn add_token(&mut self, token: ApiToken) {
        self.tokens.push(token);
    }

    /// Replace the list with what the server reported.
    ///
    /// An empty list leaves the menu untouched.
    pub fn set_tokens(&mut self, tokens: Vec<ApiToken>) {
        if tokens.is_empty() {
            return;
        }
        self.tokens = tokens;
        self.clamp_selection();
    }

    pub fn remove_token(&mut self, id: &str) {
        self.tokens.retain(|t| t.id != id);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.item_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_menu_has_only_create_row() {
        let state = ApiTokenState::new();
        assert_eq!(state.items(), vec![TokenMenuItem::CreateNew]);
        assert_eq!(state.selected_item(), TokenMenuItem::CreateNew);
    }

    #[test]
    fn created_token_goes_before_create_row() {
        let mut state = ApiTokenState::new();
        let token = ApiToken::new("t1", "s1");
        state.add_token(token.clone());
        assert_eq!(
            state.items(),
            vec![TokenMenuItem::Token(&token), TokenMenuItem::CreateNew]
        );
    }

    #[test]
    fn empty_list_is_ignored() {
        let mut state = ApiTokenState::new();
        state.add_token(ApiToken::new("t1", ""));
        state.set_tokens(Vec::new());
        assert_eq!(state.tokens.len(), 1);
    }

    #[test]
    fn removing_last_token_clamps_selection() {
        let mut state = ApiTokenState::new();
        state.set_tokens(vec![ApiToken::new("a", ""), ApiToken::new("b", "")]);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_item(), TokenMenuItem::CreateNew);

        state.remove_token("b");
        assert_eq!(state.selected, 1);
        assert_eq!(state.items().len(), 2);
        assert_eq!(
            state.items().iter().filter(|i| **i == TokenMenuItem::CreateNew).count(),
            1
        );
    }

    #[test]
    fn selection_stays_in_range() {
        let mut state = ApiTokenState::new();
        state.select_next();
        assert_eq!(state.selected, 0);
        state.select_previous();
        assert_eq!(state.selected, 0);
    }
}
