use log::debug;

use crate::record::LogEntry;

pub const FIELD_SEPARATOR: char = '|';
pub const PROGRESS_LEVEL: &str = "progress";
pub const PROGRESS_DISPLAY_LEVEL: &str = "PROGRESS";

/// Parses `LEVEL|timestamp|message` or
/// `WRAPPER|timestamp|LEVEL|message[|more]`. Returns `None` for lines with
/// fewer than three fields.
pub fn parse_log_line(line: &str, line_number: usize) -> Option<LogEntry> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < 3 {
        return None;
    }

    let timestamp = fields[1].trim();
    // With four or more fields the first one is the writer's own level and the
    // third is the level to display.
    let (level, message) = if fields.len() >= 4 {
        (fields[2].trim(), fields[3..].join("|"))
    } else {
        (fields[0].trim(), fields[2].to_string())
    };
    let message = message.trim();

    let entry = LogEntry::new(level, timestamp, message, line, line_number);
    if is_progress_message(message) {
        return Some(entry.set_level(PROGRESS_LEVEL, PROGRESS_DISPLAY_LEVEL));
    }
    Some(entry)
}

pub fn is_progress_message(message: &str) -> bool {
    message.contains('%') && message.contains("bytes")
}

/// Parses every non-blank line; unparseable lines are skipped.
pub fn parse_log_document(content: &str) -> Vec<LogEntry> {
    let mut skipped = 0;
    let entries: Vec<LogEntry> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| {
            let entry = parse_log_line(line, index + 1);
            if entry.is_none() {
                skipped += 1;
            }
            entry
        })
        .collect();
    debug!("parsed {} log entries, skipped {} lines", entries.len(), skipped);
    entries
}

/// Number of entries per level, in the order levels first appear.
pub fn level_counts(entries: &[LogEntry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(level, _)| *level == entry.level) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.level.clone(), 1)),
        }
    }
    counts
}
