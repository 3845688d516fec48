//! Dictionary pipeline tests: document parsing, filtering and the view state.

use pretty_assertions::assert_eq;

use wordlog::events::{DictionaryAction, WordToggle};
use wordlog::filter::{SHORT_WORD_MAX, SHORT_WORD_MIN};
use wordlog::{apply_filters, parse_word_document, DictionaryState, WordRecord};

const DICTIONARY_XML: &str = r#"<?xml version="1.0" ?>
<dictionary>
    <word>aa</word>
    <word>
        <text>aah</text>
        <definition>to exclaim in amazement, joy, or surprise</definition>
        <pos>verb</pos>
    </word>
    <word>aahed</word>
    <word>   </word>
    <word>
        <text>abacus</text>
        <definition>a manual computing device</definition>
        <pos>noun</pos>
    </word>
    <word>abandon<pos>verb</pos></word>
    <word>unclosed
</dictionary>"#;

fn record(text: &str, definition: &str, pos: &str) -> WordRecord {
    WordRecord {
        text: text.to_string(),
        definition: definition.to_string(),
        part_of_speech: pos.to_string(),
    }
}

#[test]
fn test_parse_dictionary_xml() {
    let records = parse_word_document(DICTIONARY_XML);
    assert_eq!(
        records,
        vec![
            record("aa", "", ""),
            record("aah", "to exclaim in amazement, joy, or surprise", "verb"),
            record("aahed", "", ""),
            record("abacus", "a manual computing device", "noun"),
            record("abandon", "", "verb"),
        ]
    );
}

#[test]
fn test_plain_word_list() {
    let content = "zebra\nyak\n\n   \nxerus\n";
    let records = parse_word_document(content);
    assert_eq!(records.len(), 3);
    assert!(records
        .iter()
        .all(|r| r.definition.is_empty() && r.part_of_speech.is_empty()));
    assert_eq!(records[2].text, "xerus");
}

#[test]
fn test_filters_over_parsed_document() {
    let records = parse_word_document(DICTIONARY_XML);

    let with_definition = apply_filters(&records, "", true, false);
    assert_eq!(with_definition.len(), 2);

    let short = apply_filters(&records, "", false, true);
    let texts: Vec<&str> = short.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["aa", "aah", "aahed"]);
    assert!(short
        .iter()
        .all(|r| (SHORT_WORD_MIN..=SHORT_WORD_MAX).contains(&r.text.chars().count())));

    let by_definition = apply_filters(&records, "COMPUTING", false, false);
    assert_eq!(by_definition, vec![records[3].clone()]);
}

#[test]
fn test_dictionary_state_flow() {
    let records = parse_word_document(DICTIONARY_XML);
    let state = DictionaryState::new(2).apply(DictionaryAction::FileLoaded {
        records,
        source: "data/dictionary.xml".to_string(),
    });

    let counts = state.counts();
    assert_eq!((counts.total, counts.with_definition, counts.shown), (5, 2, 5));
    let (_, page) = state.current_page();
    assert_eq!(page.total_pages, 3);

    let state = state.apply(DictionaryAction::PageChanged(2));
    let (page_records, _) = state.current_page();
    assert_eq!(page_records, &[record("abandon", "", "verb")][..]);

    let state = state.apply(DictionaryAction::QueryChanged("aa".to_string()));
    assert_eq!(state.page, 0);
    assert_eq!(state.counts().shown, 3);

    let state = state.apply(DictionaryAction::FilterToggled(WordToggle::DefinitionsOnly));
    assert_eq!(state.counts().shown, 1);
    assert_eq!(state.counts().with_definition, 2);

    let state = state.apply(DictionaryAction::FilterToggled(WordToggle::DefinitionsOnly));
    assert_eq!(state.counts().shown, 3);
}
