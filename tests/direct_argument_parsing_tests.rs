//! Direct Argument Parsing Tests
//!
//! These tests directly test the parse_args_with_clap function without
//! loading any file.

use wordlog::args::{parse_args_with_clap, ParsedArgs};
use wordlog::settings::Tool;

/// Helper function to test argument parsing directly
fn test_argument_parsing(args: Vec<&str>) -> ParsedArgs {
    let mut full_args = vec!["wl".to_string()];
    full_args.extend(args.iter().map(|s| s.to_string()));
    parse_args_with_clap(full_args)
}

#[test]
fn test_no_arguments() {
    let result = test_argument_parsing(vec![]);
    assert_eq!(result.tool, None);
    assert_eq!(result.file, None);
    assert_eq!(result.query, "");
    assert!(!result.definitions_only);
    assert!(!result.short_only);
    assert_eq!(result.page, 1);
    assert_eq!(result.window, None);
    assert_eq!(result.level, None);
    assert!(!result.init_settings);
}

#[test]
fn test_word_arguments() {
    let result = test_argument_parsing(vec![
        "--query",
        "cat",
        "-d",
        "--short-only",
        "--page",
        "3",
        "data/dictionary.xml",
    ]);
    assert_eq!(result.query, "cat");
    assert!(result.definitions_only);
    assert!(result.short_only);
    assert_eq!(result.page, 3);
    assert_eq!(result.file.as_deref(), Some("data/dictionary.xml"));
}

#[test]
fn test_log_arguments() {
    let result = test_argument_parsing(vec![
        "--tool",
        "logs",
        "--window",
        "all",
        "-l",
        "error",
        "logs/log.txt.gz",
    ]);
    assert_eq!(result.tool, Some(Tool::Logs));
    assert_eq!(result.window.as_deref(), Some("all"));
    assert_eq!(result.level.as_deref(), Some("error"));
    assert_eq!(result.file.as_deref(), Some("logs/log.txt.gz"));
}

#[test]
fn test_config_argument() {
    let result = test_argument_parsing(vec!["--config", "my.yaml", "--tool", "words"]);
    assert_eq!(result.config.as_deref(), Some("my.yaml"));
    assert_eq!(result.tool, Some(Tool::Words));
    assert_eq!(result.file, None);
}
