//! 表单渲染
//!
//! Builds the lines of a form top to bottom and remembers where the terminal
//! cursor belongs, so every form page renders the same way.

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::Field;
use crate::view::theme::Styles;

pub struct FormView {
    lines: Vec<Line<'static>>,
    /// (column, row) of the cursor inside the form area
    cursor: Option<(usize, usize)>,
    label_width: usize,
}

impl FormView {
    /// `label_width` pads every prompt so the inputs line up
    pub fn new(label_width: usize) -> Self {
        Self {
            lines: Vec::new(),
            cursor: None,
            label_width,
        }
    }

    /// Plain text, one line per `\n`
    #[must_use]
    pub fn text(mut self, text: &str, style: Style) -> Self {
        for line in text.lines() {
            self.lines.push(Line::styled(line.to_string(), style));
        }
        self
    }

    #[must_use]
    pub fn blank(mut self) -> Self {
        self.lines.push(Line::default());
        self
    }

    #[must_use]
    pub fn field(mut self, field: &Field) -> Self {
        let prompt = format!("{:<width$} > ", field.label(), width = self.label_width);
        let prompt_style = if field.is_focused() {
            Styles::prompt_focused()
        } else {
            Styles::muted()
        };
        let text_style = if field.shows_placeholder() {
            Styles::muted()
        } else {
            Styles::text()
        };

        if field.is_focused() {
            self.cursor = Some((prompt.width() + field.cursor_column(), self.lines.len()));
        }

        let indent = " ".repeat(prompt.width());
        self.lines.push(Line::from(vec![
            Span::styled(prompt, prompt_style),
            Span::styled(field.display_text(), text_style),
        ]));
        for error in field.errors() {
            self.lines
                .push(Line::styled(format!("{indent}{}", capitalize(error)), Styles::error()));
        }
        self
    }

    /// A row of buttons; `focused` is the index of the highlighted one
    #[must_use]
    pub fn buttons(mut self, labels: &[&'static str], focused: Option<usize>) -> Self {
        let mut spans = Vec::new();
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if focused == Some(i) {
                Styles::selected()
            } else {
                Styles::muted()
            };
            spans.push(Span::styled(*label, style));
        }
        self.lines.push(Line::from(spans));
        self
    }

    /// The form-level error, if any
    #[must_use]
    pub fn error(mut self, error: Option<&str>) -> Self {
        if let Some(error) = error {
            self.lines.push(Line::default());
            self.lines
                .push(Line::styled(capitalize(error), Styles::error()));
        }
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let cursor = self.cursor;
        frame.render_widget(Paragraph::new(self.lines).wrap(Wrap { trim: false }), area);

        if let Some((col, row)) = cursor {
            let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
                return;
            };
            if col < area.width && row < area.height {
                frame.set_cursor_position(Position::new(area.x + col, area.y + row));
            }
        }
    }
}

/// Upper-case the first letter of a server message
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
