//! Five minute time windows used to group and filter log entries.
//!
//! A window is identified by its start instant: the timestamp with the minute
//! floored to a multiple of [`WINDOW_MINUTES`] and the seconds zeroed. Keys
//! compare structurally, so two timestamps share a window iff year, month,
//! day, hour and floored minute are all equal.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
    fmt,
    str::FromStr,
};

use chrono::{DateTime, Duration, NaiveDateTime, Timelike};

use crate::record::LogEntry;

pub const WINDOW_MINUTES: u32 = 5;

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S,%f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses the timestamp formats the log writers produce. Offsets are dropped
/// and the wall clock time is kept as written.
pub fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    let timestamp = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.naive_local());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowKey(NaiveDateTime);

impl WindowKey {
    pub fn from_datetime(dt: NaiveDateTime) -> WindowKey {
        let offset = Duration::minutes(i64::from(dt.minute() % WINDOW_MINUTES))
            + Duration::seconds(i64::from(dt.second()))
            + Duration::nanoseconds(i64::from(dt.nanosecond()));
        WindowKey(dt - offset)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.0
    }

    /// Exclusive end of the window.
    pub fn end(&self) -> NaiveDateTime {
        self.0 + Duration::minutes(i64::from(WINDOW_MINUTES))
    }

    pub fn contains(&self, dt: NaiveDateTime) -> bool {
        self.start() <= dt && dt < self.end()
    }

    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start().format("%Y-%m-%d %H:%M"),
            self.end().format("%H:%M")
        )
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub fn window_key(timestamp: &str) -> Option<WindowKey> {
    parse_timestamp(timestamp).map(WindowKey::from_datetime)
}

/// Stable sort, most recent first. Entries without a usable timestamp go
/// last and keep their file order.
pub fn sort_newest_first(entries: &mut [LogEntry]) {
    entries.sort_by(|a, b| match (a.parsed, b.parsed) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

pub type WindowGroup<'a> = (WindowKey, Vec<&'a LogEntry>);

/// Groups entries by window, newest window first. Entries keep the order in
/// which they are given; undated entries are left out.
pub fn group_by_window<'a, I>(entries: I) -> Vec<WindowGroup<'a>>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut groups: BTreeMap<WindowKey, Vec<&'a LogEntry>> = BTreeMap::new();
    for entry in entries {
        if let Some(key) = entry.window() {
            groups.entry(key).or_default().push(entry);
        }
    }
    groups.into_iter().rev().collect()
}

pub fn distinct_windows<'a, I>(entries: I) -> Vec<WindowKey>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let windows: BTreeSet<WindowKey> = entries.into_iter().filter_map(|e| e.window()).collect();
    windows.into_iter().rev().collect()
}

/// Which window the log view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowSelection {
    /// The most recent window, resolved when entries are loaded.
    #[default]
    Latest,
    All,
    Window(WindowKey),
}

impl FromStr for WindowSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Ok(WindowSelection::Latest),
            "all" => Ok(WindowSelection::All),
            _ => window_key(s)
                .map(WindowSelection::Window)
                .ok_or_else(|| format!("invalid window {:?}, expected latest, all or a date", s)),
        }
    }
}
