//! Plain text rendering of the view states.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::{
    parser::level_counts,
    record::{LogEntry, WordRecord},
    state::{DictionaryState, LogViewState},
};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render_dictionary<W: Write>(out: &mut W, state: &DictionaryState) -> io::Result<()> {
    let counts = state.counts();
    let (records, page) = state.current_page();

    if let Some(source) = &state.source {
        writeln!(out, "Source: {}", source)?;
    }
    writeln!(
        out,
        "Total: {}  With definition: {}  Shown: {}",
        counts.total, counts.with_definition, counts.shown
    )?;
    if records.is_empty() {
        writeln!(out, "No words match the current filters.")?;
        return Ok(());
    }

    writeln!(out)?;
    for record in records {
        render_word(out, record)?;
    }
    writeln!(out)?;
    writeln!(out, "Page {} of {}", page.index + 1, page.total_pages)?;
    Ok(())
}

fn render_word<W: Write>(out: &mut W, record: &WordRecord) -> io::Result<()> {
    match (record.has_definition(), record.part_of_speech.is_empty()) {
        (true, false) => writeln!(
            out,
            "{} ({}): {}",
            record.text, record.part_of_speech, record.definition
        ),
        (true, true) => writeln!(out, "{}: {}", record.text, record.definition),
        (false, false) => writeln!(out, "{} ({})", record.text, record.part_of_speech),
        (false, true) => writeln!(out, "{}", record.text),
    }
}

fn format_date(date: Option<NaiveDateTime>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn render_log<W: Write>(out: &mut W, state: &LogViewState) -> io::Result<()> {
    let stats = state.stats();

    if let Some(source) = &state.source {
        writeln!(out, "Source: {}", source)?;
    }
    writeln!(
        out,
        "Total: {}  Visible: {}  Range: {} .. {}",
        stats.total,
        stats.visible,
        format_date(stats.date_range_start),
        format_date(stats.date_range_end)
    )?;

    let levels: Vec<String> = level_counts(&state.entries)
        .into_iter()
        .map(|(level, count)| format!("{}={}", level, count))
        .collect();
    writeln!(out, "Levels: {}", levels.join(" "))?;

    writeln!(out, "Windows:")?;
    for window in &state.windows {
        let marker = if state.active_window() == Some(*window) {
            '*'
        } else {
            ' '
        };
        writeln!(out, " {} {}", marker, window.label())?;
    }

    for (window, entries) in state.grouped() {
        writeln!(out)?;
        writeln!(out, "== {} ({} entries)", window.label(), entries.len())?;
        for entry in entries {
            render_entry(out, entry)?;
        }
    }

    let undated = state.undated();
    if !undated.is_empty() {
        writeln!(out)?;
        writeln!(out, "== undated ({} entries)", undated.len())?;
        for entry in undated {
            render_entry(out, entry)?;
        }
    }
    Ok(())
}

fn render_entry<W: Write>(out: &mut W, entry: &LogEntry) -> io::Result<()> {
    writeln!(
        out,
        "{:>6} {:<9} {} {}",
        entry.line_number, entry.display_level, entry.timestamp, entry.message
    )
}
