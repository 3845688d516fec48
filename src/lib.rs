//! wordlog - dictionary entry viewer and pipe-delimited log reader
//!
//! This library provides the parsing, filtering and time window grouping
//! behind the `wl` binary. Rendering is plain text; the state types can be
//! driven by any front end.

pub mod args;
pub mod events;
pub mod filter;
pub mod loader;
pub mod parser;
pub mod record;
pub mod render;
pub mod settings;
pub mod state;
pub mod tags;
pub mod window;
pub mod wordparser;

// Re-export commonly used types for convenience
pub use filter::{apply_filters, WordCounts};
pub use parser::parse_log_line;
pub use record::{LogEntry, WordRecord};
pub use state::{DictionaryState, LogViewState};
pub use window::{distinct_windows, group_by_window, window_key, WindowKey};
pub use wordparser::parse_word_document;
