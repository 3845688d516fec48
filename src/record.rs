use chrono::NaiveDateTime;

use crate::{filter::WordFilter, window};

/// One dictionary entry. Identity is positional, duplicates are allowed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub text: String,
    pub definition: String,
    pub part_of_speech: String,
}

impl WordRecord {
    pub fn new(text: &str) -> WordRecord {
        WordRecord {
            text: text.trim().to_string(),
            definition: String::new(),
            part_of_speech: String::new(),
        }
    }

    pub fn with_definition(mut self, definition: &str) -> WordRecord {
        self.definition = definition.trim().to_string();
        self
    }

    pub fn with_part_of_speech(mut self, part_of_speech: &str) -> WordRecord {
        self.part_of_speech = part_of_speech.trim().to_string();
        self
    }

    pub fn has_definition(&self) -> bool {
        !self.definition.trim().is_empty()
    }

    /// Length of the display text in characters, not bytes.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn matches(&self, filter: &WordFilter) -> bool {
        filter.matches(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Lowercased classifier, `progress` when the message looks like a
    /// download report.
    pub level: String,
    pub display_level: String,
    pub timestamp: String,
    pub message: String,
    pub original_line: String,
    /// 1-based
    pub line_number: usize,
    pub parsed: Option<NaiveDateTime>,
}

impl LogEntry {
    pub fn new(
        display_level: &str,
        timestamp: &str,
        message: &str,
        original_line: &str,
        line_number: usize,
    ) -> LogEntry {
        LogEntry {
            level: display_level.to_lowercase(),
            display_level: display_level.to_string(),
            timestamp: timestamp.to_string(),
            message: message.to_string(),
            original_line: original_line.to_string(),
            line_number,
            parsed: window::parse_timestamp(timestamp),
        }
    }

    pub fn set_level(mut self, level: &str, display_level: &str) -> LogEntry {
        self.level = level.to_string();
        self.display_level = display_level.to_string();
        self
    }

    pub fn window(&self) -> Option<window::WindowKey> {
        self.parsed.map(window::WindowKey::from_datetime)
    }
}
