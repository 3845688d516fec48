//! File loading tests: candidate probing, gzip logs and load failures.

use std::{fs, io::Write, path::PathBuf};

use flate2::{write::GzEncoder, Compression};
use tempfile::TempDir;

use wordlog::loader::{load_dictionary, load_log, LoadError};
use wordlog::settings::{Settings, Tool};

#[test]
fn test_dictionary_probes_candidates_in_order() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("data/dictionary.xml");
    let words = dir.path().join("words.txt");
    let later = dir.path().join("later.xml");
    fs::write(&words, "apple\nbanana\n").unwrap();
    fs::write(&later, "<word>never read</word>").unwrap();

    let loaded = load_dictionary(&[missing, words.clone(), later]).unwrap();
    assert_eq!(loaded.path, words);
    assert_eq!(loaded.records.len(), 2);
    assert_eq!(loaded.records[1].text, "banana");
}

#[test]
fn test_dictionary_not_found_lists_every_path() {
    let dir = TempDir::new().unwrap();
    let candidates = vec![dir.path().join("a.xml"), dir.path().join("b.txt")];

    let err = load_dictionary(&candidates).unwrap_err();
    match &err {
        LoadError::NotFound { tried } => assert_eq!(tried, &candidates),
        other => panic!("unexpected error {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("a.xml"));
    assert!(message.contains("b.txt"));
}

#[test]
fn test_dictionary_without_records_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.xml");
    fs::write(&path, "<dictionary><word> </word></dictionary>").unwrap();

    assert!(matches!(
        load_dictionary(&[path]),
        Err(LoadError::Empty { .. })
    ));
}

#[test]
fn test_log_read_failure_mentions_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs/log.txt");

    let err = load_log(&path).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().contains("log.txt"));
}

#[test]
fn test_log_without_valid_lines_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt");
    fs::write(&path, "just text\n\nmore|text\n").unwrap();

    let err = load_log(&path).unwrap_err();
    assert!(matches!(err, LoadError::Empty { .. }));
    assert!(err.to_string().contains("no valid entries"));
}

#[test]
fn test_gzipped_log() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(b"INFO|2024-01-01T10:02:00|hello\nERROR|2024-01-01T10:03:00|oops\n")
        .unwrap();
    fs::write(&path, encoder.finish().unwrap()).unwrap();

    let loaded = load_log(&path).unwrap();
    assert_eq!(loaded.records.len(), 2);
    assert_eq!(loaded.records[1].level, "error");
}

#[test]
fn test_settings_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.yaml");
    fs::write(
        &path,
        "default_tool: logs\ndictionary:\n  candidate_paths: [a.xml]\n  page_size: 10\n",
    )
    .unwrap();

    let settings = Settings::from_file(&path).unwrap();
    assert_eq!(settings.default_tool, Tool::Logs);
    assert_eq!(settings.dictionary.candidate_paths, vec![PathBuf::from("a.xml")]);
    assert_eq!(settings.dictionary.page_size, 10);
    assert_eq!(settings.logs.path, PathBuf::from("logs/log.txt"));
}

#[test]
fn test_settings_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(Settings::from_file(&dir.path().join("nope.yaml")).is_err());
}
