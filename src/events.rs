use crate::{
    record::{LogEntry, WordRecord},
    window::WindowSelection,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordToggle {
    DefinitionsOnly,
    ShortOnly,
}

pub enum DictionaryAction {
    FileLoaded {
        records: Vec<WordRecord>,
        source: String,
    },
    QueryChanged(String),
    FilterToggled(WordToggle),
    PageChanged(usize),
}

pub enum LogAction {
    FileLoaded {
        entries: Vec<LogEntry>,
        source: String,
    },
    WindowSelected(WindowSelection),
    // None shows every level
    LevelSelected(Option<String>),
}
