//! Command Line Argument Parsing
//!
//! This module handles parsing of command line arguments for wordlog.

use clap::{value_parser, Arg, ArgAction, Command};

use crate::settings::Tool;

#[derive(Debug)]
pub struct ParsedArgs {
    pub tool: Option<Tool>,
    pub config: Option<String>,
    pub file: Option<String>,
    pub query: String,
    pub definitions_only: bool,
    pub short_only: bool,
    /// 1-based, as typed by the user
    pub page: usize,
    pub window: Option<String>,
    pub level: Option<String>,
    pub init_settings: bool,
}

pub fn build_command() -> Command {
    Command::new("wl")
        .about("wordlog - dictionary viewer and pipe-delimited log reader")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("tool")
                .long("tool")
                .value_name("TOOL")
                .value_parser(["words", "logs"])
                .help("Force the tool (words, logs) instead of guessing it from the file name"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Read settings from FILE instead of ~/.config/wordlog/settings.yaml"),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .short('q')
                .value_name("TEXT")
                .help("Only show words whose text or definition contains TEXT"),
        )
        .arg(
            Arg::new("definitions-only")
                .long("definitions-only")
                .short('d')
                .action(ArgAction::SetTrue)
                .help("Only show words that have a definition"),
        )
        .arg(
            Arg::new("short-only")
                .long("short-only")
                .short('s')
                .action(ArgAction::SetTrue)
                .help("Only show words of 2 to 5 characters"),
        )
        .arg(
            Arg::new("page")
                .long("page")
                .short('p')
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("1")
                .help("Page of words to show"),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .short('w')
                .value_name("WINDOW")
                .help("Log window to show: latest (default), all, or a date like \"2024-01-01 10:05\""),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Only show log entries with this level"),
        )
        .arg(
            Arg::new("init-settings")
                .long("init-settings")
                .action(ArgAction::SetTrue)
                .help("Write the default settings to ~/.config/wordlog/settings.yaml and exit"),
        )
        .arg(
            Arg::new("file")
                .num_args(0..=1)
                .help("Dictionary or log file to read; .gz files are decompressed"),
        )
}

/// Parse command line arguments using clap
pub fn parse_args_with_clap(args: Vec<String>) -> ParsedArgs {
    let matches = match build_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => e.exit(),
    };

    ParsedArgs {
        tool: matches
            .get_one::<String>("tool")
            .and_then(|t| t.parse().ok()),
        config: matches.get_one::<String>("config").cloned(),
        file: matches.get_one::<String>("file").cloned(),
        query: matches
            .get_one::<String>("query")
            .cloned()
            .unwrap_or_default(),
        definitions_only: matches.get_flag("definitions-only"),
        short_only: matches.get_flag("short-only"),
        page: matches.get_one::<usize>("page").copied().unwrap_or(1),
        window: matches.get_one::<String>("window").cloned(),
        level: matches.get_one::<String>("level").cloned(),
        init_settings: matches.get_flag("init-settings"),
    }
}
