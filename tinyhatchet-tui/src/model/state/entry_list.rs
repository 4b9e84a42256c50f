//! 日志条目列表
//!
//! A scrollable, filterable list of search results. Each entry takes
//! [`ITEM_HEIGHT`] rows on screen, so the page size follows the terminal height.

use tinyhatchet_client::LogEntry;

use crate::message::ListMessage;
use crate::model::Viewport;

/// Rows per entry: the text line, the tag line and a gap
pub const ITEM_HEIGHT: u16 = 3;

/// Rows the results screen needs besides the entries themselves:
/// title bar, status bar, two borders, list header, filter line and footer
pub const LIST_CHROME_HEIGHT: u16 = 7;

/// How many entries fit on one page of `viewport`
pub fn page_size_for(viewport: Viewport) -> usize {
    usize::from((viewport.height.saturating_sub(LIST_CHROME_HEIGHT) / ITEM_HEIGHT).max(1))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<LogEntry>,
    /// Indices into `entries` that pass the filter
    visible: Vec<usize>,
    /// Position in `visible`
    selected: usize,
    /// First position in `visible` that is drawn
    offset: usize,
    page_size: usize,
    filter: String,
    filtering: bool,
}

impl EntryList {
    pub fn new(entries: Vec<LogEntry>, page_size: usize) -> Self {
        let visible = (0..entries.len()).collect();
        Self {
            entries,
            visible,
            selected: 0,
            offset: 0,
            page_size: page_size.max(1),
            filter: String::new(),
            filtering: false,
        }
    }

    /// Number of entries that pass the filter
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of entries before filtering
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn selected(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.selected)
    }

    /// Entries on the current page with their position in the filtered list
    pub fn page(&self) -> impl Iterator<Item = (usize, &LogEntry)> {
        self.visible
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.page_size)
            .map(move |(pos, &i)| (pos, &self.entries[i]))
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.scroll_to_selected();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether the filter is being typed
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Whether a filter is being typed or applied
    pub fn has_filter(&self) -> bool {
        self.filtering || !self.filter.is_empty()
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.filtering = false;
        self.refilter();
    }

    pub fn handle(&mut self, msg: ListMessage) {
        match msg {
            ListMessage::SelectPrevious => self.select(self.selected.saturating_sub(1)),
            ListMessage::SelectNext => self.select(self.selected + 1),
            ListMessage::PageUp => self.select(self.selected.saturating_sub(self.page_size)),
            ListMessage::PageDown => self.select(self.selected + self.page_size),
            ListMessage::SelectFirst => self.select(0),
            ListMessage::SelectLast => self.select(usize::MAX),
            ListMessage::StartFilter => self.filtering = true,
            ListMessage::FilterInput(c) => {
                if self.filtering && !c.is_control() {
                    self.filter.push(c);
                    self.refilter();
                }
            }
            ListMessage::FilterBackspace => {
                if self.filtering && self.filter.pop().is_some() {
                    self.refilter();
                }
            }
            ListMessage::ApplyFilter => self.filtering = false,
        }
    }

    fn select(&mut self, pos: usize) {
        self.selected = pos.min(self.len().saturating_sub(1));
        self.scroll_to_selected();
    }

    fn scroll_to_selected(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.page_size {
            self.offset = self.selected + 1 - self.page_size;
        }
    }

    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| needle.is_empty() || matches_filter(entry, &needle))
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
        self.offset = 0;
    }
}

fn matches_filter(entry: &LogEntry, needle: &str) -> bool {
    entry.text.to_lowercase().contains(needle)
        || entry.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn entries(n: usize) -> Vec<LogEntry> {
        (0..n)
            .map(|i| LogEntry {
                timestamp: Utc
                    .with_ymd_and_hms(2021, 6, 1, 0, 0, 0)
                    .single()
                    .unwrap_or_default(),
                text: format!("entry {i}"),
                tags: if i % 2 == 0 {
                    vec!["even".into()]
                } else {
                    vec!["odd".into()]
                },
            })
            .collect()
    }

    #[test]
    fn page_size_follows_viewport() {
        assert_eq!(page_size_for(Viewport::new(80, 24)), 5);
        assert_eq!(page_size_for(Viewport::new(80, 3)), 1);
    }

    #[test]
    fn selection_scrolls_the_page() {
        let mut list = EntryList::new(entries(10), 3);
        for _ in 0..4 {
            list.handle(ListMessage::SelectNext);
        }
        assert_eq!(list.selected(), Some(4));
        let shown: Vec<usize> = list.page().map(|(pos, _)| pos).collect();
        assert_eq!(shown, vec![2, 3, 4]);

        list.handle(ListMessage::SelectFirst);
        assert_eq!(list.page().next().map(|(pos, _)| pos), Some(0));
    }

    #[test]
    fn paging_is_clamped() {
        let mut list = EntryList::new(entries(7), 3);
        list.handle(ListMessage::PageDown);
        list.handle(ListMessage::PageDown);
        list.handle(ListMessage::PageDown);
        assert_eq!(list.selected(), Some(6));
        list.handle(ListMessage::PageUp);
        assert_eq!(list.selected(), Some(3));
        list.handle(ListMessage::SelectLast);
        assert_eq!(list.selected(), Some(6));
    }

    #[test]
    fn filter_matches_text_and_tags() {
        let mut list = EntryList::new(entries(6), 10);
        list.handle(ListMessage::StartFilter);
        for c in "ODD".chars() {
            list.handle(ListMessage::FilterInput(c));
        }
        assert_eq!(list.len(), 3);
        assert_eq!(list.total(), 6);

        list.handle(ListMessage::ApplyFilter);
        assert!(!list.is_filtering());
        assert!(list.has_filter());

        list.clear_filter();
        assert_eq!(list.len(), 6);
        assert!(!list.has_filter());
    }

    #[test]
    fn typing_without_filter_mode_does_nothing() {
        let mut list = EntryList::new(entries(3), 10);
        list.handle(ListMessage::FilterInput('x'));
        assert_eq!(list.filter(), "");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut list = EntryList::new(Vec::new(), 5);
        list.handle(ListMessage::SelectNext);
        assert_eq!(list.selected(), None);
        assert_eq!(list.page().count(), 0);
    }

    #[test]
    fn shrinking_page_keeps_selection_visible() {
        let mut list = EntryList::new(entries(10), 8);
        list.handle(ListMessage::SelectLast);
        list.set_page_size(2);
        let shown: Vec<usize> = list.page().map(|(pos, _)| pos).collect();
        assert_eq!(shown, vec![8, 9]);
    }
}
