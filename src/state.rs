//! View state for both tools.
//!
//! States are immutable values. Every transition borrows the current state
//! and returns a new one; record lists are shared behind an [`Arc`] so a
//! transition that does not reload a file never copies them. Whoever drives
//! the UI owns the mutable cell holding the current state.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::{
    events::{DictionaryAction, LogAction, WordToggle},
    filter::{self, Page, WordCounts, WordFilter},
    record::{LogEntry, WordRecord},
    window::{self, WindowGroup, WindowKey, WindowSelection},
};

pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryState {
    pub records: Arc<Vec<WordRecord>>,
    pub visible: Arc<Vec<WordRecord>>,
    pub filter: WordFilter,
    /// 0-based
    pub page: usize,
    pub page_size: usize,
    pub source: Option<String>,
}

impl Default for DictionaryState {
    fn default() -> Self {
        DictionaryState::new(DEFAULT_PAGE_SIZE)
    }
}

impl DictionaryState {
    pub fn new(page_size: usize) -> DictionaryState {
        DictionaryState {
            records: Arc::new(Vec::new()),
            visible: Arc::new(Vec::new()),
            filter: WordFilter::default(),
            page: 0,
            page_size: page_size.max(1),
            source: None,
        }
    }

    pub fn apply(&self, action: DictionaryAction) -> DictionaryState {
        match action {
            DictionaryAction::FileLoaded { records, source } => self.on_file_loaded(records, &source),
            DictionaryAction::QueryChanged(query) => self.on_query_changed(&query),
            DictionaryAction::FilterToggled(toggle) => self.on_filter_toggled(toggle),
            DictionaryAction::PageChanged(page) => self.on_page_changed(page),
        }
    }

    /// Replaces the records wholesale. The current filter is kept.
    pub fn on_file_loaded(&self, records: Vec<WordRecord>, source: &str) -> DictionaryState {
        let records = Arc::new(records);
        DictionaryState {
            visible: Arc::new(Self::compute_visible(&records, &self.filter)),
            records,
            filter: self.filter.clone(),
            page: 0,
            page_size: self.page_size,
            source: Some(source.to_string()),
        }
    }

    pub fn on_query_changed(&self, query: &str) -> DictionaryState {
        let filter = WordFilter::new(query, self.filter.definitions_only, self.filter.short_only);
        self.with_filter(filter)
    }

    pub fn on_filter_toggled(&self, toggle: WordToggle) -> DictionaryState {
        let mut filter = self.filter.clone();
        match toggle {
            WordToggle::DefinitionsOnly => filter.definitions_only = !filter.definitions_only,
            WordToggle::ShortOnly => filter.short_only = !filter.short_only,
        }
        self.with_filter(filter)
    }

    pub fn on_page_changed(&self, page: usize) -> DictionaryState {
        let (_, page) = filter::paginate(&self.visible, page, self.page_size);
        DictionaryState {
            page: page.index,
            ..self.clone()
        }
    }

    // Any filter change goes back to the first page.
    fn with_filter(&self, filter: WordFilter) -> DictionaryState {
        DictionaryState {
            visible: Arc::new(Self::compute_visible(&self.records, &filter)),
            records: Arc::clone(&self.records),
            filter,
            page: 0,
            page_size: self.page_size,
            source: self.source.clone(),
        }
    }

    fn compute_visible(records: &[WordRecord], filter: &WordFilter) -> Vec<WordRecord> {
        filter::apply_filters(
            records,
            filter.query(),
            filter.definitions_only,
            filter.short_only,
        )
    }

    pub fn counts(&self) -> WordCounts {
        filter::word_counts(&self.records, &self.visible)
    }

    pub fn current_page(&self) -> (&[WordRecord], Page) {
        filter::paginate(&self.visible, self.page, self.page_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogStats {
    pub total: usize,
    pub visible: usize,
    pub date_range_start: Option<NaiveDateTime>,
    pub date_range_end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogViewState {
    /// Sorted newest first.
    pub entries: Arc<Vec<LogEntry>>,
    pub windows: Vec<WindowKey>,
    pub selected_window: WindowSelection,
    pub level: Option<String>,
    pub source: Option<String>,
}

impl LogViewState {
    pub fn new() -> LogViewState {
        LogViewState::default()
    }

    pub fn apply(&self, action: LogAction) -> LogViewState {
        match action {
            LogAction::FileLoaded { entries, source } => self.on_file_loaded(entries, &source),
            LogAction::WindowSelected(selection) => self.on_window_selected(selection),
            LogAction::LevelSelected(level) => self.on_level_selected(level.as_deref()),
        }
    }

    /// Sorts the entries and replaces the previous ones. `Latest` and `All`
    /// survive the reload; a specific window the new file does not have
    /// falls back to `Latest`.
    pub fn on_file_loaded(&self, mut entries: Vec<LogEntry>, source: &str) -> LogViewState {
        window::sort_newest_first(&mut entries);
        let windows = window::distinct_windows(&entries);
        let selected_window = match self.selected_window {
            WindowSelection::Window(key) if !windows.contains(&key) => WindowSelection::Latest,
            other => other,
        };
        LogViewState {
            entries: Arc::new(entries),
            windows,
            selected_window,
            level: self.level.clone(),
            source: Some(source.to_string()),
        }
    }

    /// Stores the selection as given. `Latest` is resolved against the
    /// current windows by [`LogViewState::active_window`].
    pub fn on_window_selected(&self, selection: WindowSelection) -> LogViewState {
        LogViewState {
            selected_window: selection,
            ..self.clone()
        }
    }

    /// The window entries are filtered by, `None` when every window is shown.
    pub fn active_window(&self) -> Option<WindowKey> {
        match self.selected_window {
            WindowSelection::Window(key) => Some(key),
            WindowSelection::Latest => self.windows.first().copied(),
            WindowSelection::All => None,
        }
    }

    pub fn on_level_selected(&self, level: Option<&str>) -> LogViewState {
        LogViewState {
            level: level.map(|l| l.trim().to_lowercase()).filter(|l| !l.is_empty()),
            ..self.clone()
        }
    }

    fn is_visible(&self, entry: &LogEntry) -> bool {
        if let Some(level) = &self.level {
            if entry.level != *level {
                return false;
            }
        }
        match self.active_window() {
            Some(key) => entry.window() == Some(key),
            None => true,
        }
    }

    pub fn visible(&self) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| self.is_visible(e)).collect()
    }

    pub fn grouped(&self) -> Vec<WindowGroup<'_>> {
        window::group_by_window(self.visible())
    }

    /// Visible entries whose timestamp could not be parsed. They belong to no
    /// window, so they only show up when every window is selected.
    pub fn undated(&self) -> Vec<&LogEntry> {
        self.visible()
            .into_iter()
            .filter(|e| e.parsed.is_none())
            .collect()
    }

    pub fn stats(&self) -> LogStats {
        // Entries are sorted newest first, undated ones at the end.
        let dated: Vec<NaiveDateTime> = self.entries.iter().filter_map(|e| e.parsed).collect();
        LogStats {
            total: self.entries.len(),
            visible: self.visible().len(),
            date_range_start: dated.last().copied(),
            date_range_end: dated.first().copied(),
        }
    }
}
