//! 单行文本输入框
//!
//! A [`Field`] only reacts to editing messages while it is focused, so a form
//! can forward every key to all of its fields and exactly one of them changes.

use unicode_width::UnicodeWidthStr;

use crate::message::FormMessage;

/// Character used in place of each character of a masked value.
pub const MASK_CHAR: char = '*';

/// A single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    label: &'static str,
    placeholder: &'static str,
    value: String,
    /// Cursor position, counted in chars
    cursor: usize,
    focused: bool,
    masked: bool,
    char_limit: Option<usize>,
    /// Validation messages shown under the field
    errors: Vec<String>,
}

impl Field {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            ..Self::default()
        }
    }

    /// Echo `*` instead of the typed characters
    #[must_use]
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    #[must_use]
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and move the cursor to its end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if let Some(limit) = self.char_limit {
            if let Some((idx, _)) = self.value.char_indices().nth(limit) {
                self.value.truncate(idx);
            }
        }
        self.cursor = self.value.chars().count();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Apply an editing message. Returns `true` when the value or cursor changed.
    ///
    /// Navigation messages (`NextField`, `PrevField`, `Submit`) belong to the
    /// form and are ignored here.
    pub fn handle(&mut self, msg: &FormMessage) -> bool {
        if !self.focused {
            return false;
        }

        match msg {
            FormMessage::Input(c) => self.insert(*c),
            FormMessage::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                self.remove_at(self.cursor);
                true
            }
            FormMessage::Delete => {
                if self.cursor >= self.len() {
                    return false;
                }
                self.remove_at(self.cursor);
                true
            }
            FormMessage::CursorLeft => self.move_cursor(self.cursor.saturating_sub(1)),
            FormMessage::CursorRight => self.move_cursor((self.cursor + 1).min(self.len())),
            FormMessage::CursorHome => self.move_cursor(0),
            FormMessage::CursorEnd => self.move_cursor(self.len()),
            FormMessage::NextField | FormMessage::PrevField | FormMessage::Submit => false,
        }
    }

    /// Text to render: the placeholder when empty and unfocused, `*`s when masked
    pub fn display_text(&self) -> String {
        if self.value.is_empty() && !self.focused {
            return self.placeholder.to_string();
        }
        if self.masked {
            return MASK_CHAR.to_string().repeat(self.len());
        }
        self.value.clone()
    }

    /// Whether [`Self::display_text`] is showing the placeholder
    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty() && !self.focused
    }

    /// Terminal column of the cursor, relative to the start of the text
    pub fn cursor_column(&self) -> usize {
        if self.masked {
            return self.cursor;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.value[..byte_idx].width()
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn insert(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        if self.char_limit.is_some_and(|limit| self.len() >= limit) {
            return false;
        }
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
        true
    }

    fn remove_at(&mut self, char_pos: usize) {
        let idx = self.byte_index(char_pos);
        self.value.remove(idx);
    }

    fn move_cursor(&mut self, to: usize) -> bool {
        let moved = to != self.cursor;
        self.cursor = to;
        moved
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map_or(self.value.len(), |(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused(label: &'static str) -> Field {
        let mut field = Field::new(label, "placeholder");
        field.focus();
        field
    }

    fn type_str(field: &mut Field, s: &str) {
        for c in s.chars() {
            field.handle(&FormMessage::Input(c));
        }
    }

    #[test]
    fn unfocused_field_ignores_input() {
        let mut field = Field::new("Email", "you@example.com");
        assert!(!field.handle(&FormMessage::Input('a')));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn typing_and_backspace() {
        let mut field = focused("Email");
        type_str(&mut field, "abc");
        assert_eq!(field.value(), "abc");
        field.handle(&FormMessage::Backspace);
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn insert_in_the_middle() {
        let mut field = focused("Email");
        type_str(&mut field, "ac");
        field.handle(&FormMessage::CursorLeft);
        field.handle(&FormMessage::Input('b'));
        assert_eq!(field.value(), "abc");
        field.handle(&FormMessage::CursorHome);
        field.handle(&FormMessage::Delete);
        assert_eq!(field.value(), "bc");
    }

    #[test]
    fn multibyte_chars_are_edited_whole() {
        let mut field = focused("Tags");
        type_str(&mut field, "é日x");
        field.handle(&FormMessage::CursorLeft);
        field.handle(&FormMessage::Backspace);
        assert_eq!(field.value(), "éx");
        assert_eq!(field.cursor_column(), 1);
    }

    #[test]
    fn placeholder_only_when_empty_and_unfocused() {
        let mut field = Field::new("Email", "you@example.com");
        assert_eq!(field.display_text(), "you@example.com");
        assert!(field.shows_placeholder());
        field.focus();
        assert_eq!(field.display_text(), "");
    }

    #[test]
    fn masked_field_echoes_stars() {
        let mut field = focused("Password").masked();
        type_str(&mut field, "hunter2");
        assert_eq!(field.display_text(), "*******");
        assert_eq!(field.value(), "hunter2");
    }

    #[test]
    fn char_limit_is_enforced() {
        let mut field = focused("Start").with_char_limit(3);
        type_str(&mut field, "abcdef");
        assert_eq!(field.value(), "abc");

        let field = Field::new("Start", "").with_char_limit(2).with_value("xyz");
        assert_eq!(field.value(), "xy");
    }

    #[test]
    fn control_chars_are_rejected() {
        let mut field = focused("Email");
        assert!(!field.handle(&FormMessage::Input('\t')));
        assert_eq!(field.value(), "");
    }
}
