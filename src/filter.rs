use crate::record::WordRecord;

pub const SHORT_WORD_MIN: usize = 2;
pub const SHORT_WORD_MAX: usize = 5;

/// Query plus the two toggles. All conditions must hold for a record to be
/// shown.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordFilter {
    query: String,
    pub definitions_only: bool,
    pub short_only: bool,
}

impl WordFilter {
    pub fn new(query: &str, definitions_only: bool, short_only: bool) -> WordFilter {
        WordFilter {
            query: query.trim().to_lowercase(),
            definitions_only,
            short_only,
        }
    }

    /// The normalized (trimmed, lowercased) query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self, record: &WordRecord) -> bool {
        if self.definitions_only && !record.has_definition() {
            return false;
        }
        if self.short_only {
            let len = record.text_len();
            if !(SHORT_WORD_MIN..=SHORT_WORD_MAX).contains(&len) {
                return false;
            }
        }
        if self.query.is_empty() {
            return true;
        }
        record.text.to_lowercase().contains(&self.query)
            || record.definition.to_lowercase().contains(&self.query)
    }
}

pub fn apply_filters(
    records: &[WordRecord],
    query: &str,
    definitions_only: bool,
    short_only: bool,
) -> Vec<WordRecord> {
    let filter = WordFilter::new(query, definitions_only, short_only);
    records
        .iter()
        .filter(|record| record.matches(&filter))
        .cloned()
        .collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WordCounts {
    pub total: usize,
    pub with_definition: usize,
    pub shown: usize,
}

/// `with_definition` is counted over the full set, not the filtered one.
pub fn word_counts(all: &[WordRecord], shown: &[WordRecord]) -> WordCounts {
    WordCounts {
        total: all.len(),
        with_definition: all.iter().filter(|r| r.has_definition()).count(),
        shown: shown.len(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 0-based
    pub index: usize,
    pub size: usize,
    pub total_pages: usize,
}

impl Page {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total_pages
    }
}

/// Returns the records of page `index`, clamped to the last page. An empty
/// list still has one (empty) page.
pub fn paginate(records: &[WordRecord], index: usize, size: usize) -> (&[WordRecord], Page) {
    let size = size.max(1);
    let total_pages = records.len().div_ceil(size).max(1);
    let index = index.min(total_pages - 1);
    let start = (index * size).min(records.len());
    let end = (start + size).min(records.len());
    (
        &records[start..end],
        Page {
            index,
            size,
            total_pages,
        },
    )
}
