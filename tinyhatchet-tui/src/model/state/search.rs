//! 日志检索表单与结果状态

use tinyhatchet_client::{datetime, LogEntry, SearchQuery};

use super::EntryList;
use crate::model::{Field, FocusRing};

/// Longest RFC 3339 timestamp the form accepts, e.g. `2021-06-01T11:22:33+02:00`
pub const TIMESTAMP_CHAR_LIMIT: usize = 25;

const TIMESTAMP_HINT: &str = "must be an RFC 3339 timestamp, e.g. 2021-06-01T11:22:33Z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub start: Field,
    pub end: Field,
    pub tags: Field,
    pub focus: FocusRing,
    pub error: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        let mut state = Self {
            start: Field::new("Start", "Start (2021-06-01T11:22:33Z)")
                .with_char_limit(TIMESTAMP_CHAR_LIMIT),
            end: Field::new("End", "End (2021-06-01T11:22:33Z)")
                .with_char_limit(TIMESTAMP_CHAR_LIMIT),
            tags: Field::new("Tags", "Tags (comma separated)"),
            focus: FocusRing::new(3, 1),
            error: None,
        };
        state.sync_focus();
        state
    }

    pub fn fields(&self) -> [&Field; 3] {
        [&self.start, &self.end, &self.tags]
    }

    pub fn fields_mut(&mut self) -> [&mut Field; 3] {
        [&mut self.start, &mut self.end, &mut self.tags]
    }

    pub fn sync_focus(&mut self) {
        let ring = self.focus;
        ring.sync(self.fields_mut());
    }

    pub fn on_submit_button(&self) -> bool {
        self.focus.button().is_some()
    }

    /// Check the timestamps and build the query.
    ///
    /// Blank inputs are fine (they are left out of the request). On failure the
    /// offending fields carry an error and `None` is returned.
    pub fn validated_query(&mut self) -> Option<SearchQuery> {
        self.error = None;
        let mut valid = true;
        for field in [&mut self.start, &mut self.end] {
            let value = field.value().trim();
            if value.is_empty() || datetime::is_rfc3339(value) {
                field.clear_errors();
            } else {
                field.set_errors(vec![TIMESTAMP_HINT.to_string()]);
                valid = false;
            }
        }
        valid.then(|| {
            SearchQuery::from_inputs(self.start.value(), self.end.value(), self.tags.value())
        })
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Results of one search, plus the form that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsState {
    pub form: SearchState,
    pub list: EntryList,
}

impl ResultsState {
    pub fn new(form: SearchState, entries: Vec<LogEntry>, page_size: usize) -> Self {
        Self {
            form,
            list: EntryList::new(entries, page_size),
        }
    }
}
