use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use wordlog::args::{parse_args_with_clap, ParsedArgs};
use wordlog::events::{DictionaryAction, LogAction, WordToggle};
use wordlog::loader;
use wordlog::render;
use wordlog::settings::{Settings, Tool};
use wordlog::state::{DictionaryState, LogViewState};
use wordlog::window::WindowSelection;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args_with_clap(std::env::args().collect());
    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: ParsedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match &args.config {
        Some(path) => Settings::from_file(Path::new(path))?,
        None => Settings::new()?,
    };

    if args.init_settings {
        let path = settings.save_default_settings()?;
        println!("Default settings written to {}", path.display());
        return Ok(());
    }

    let tool = guess_tool(&args, &settings);
    debug!("running {:?} for {:?}", tool, args.file);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match tool {
        Tool::Words => run_words(&args, &settings, &mut out)?,
        Tool::Logs => run_logs(&args, &settings, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// --tool wins, then the first rule matching the file name, then the
/// configured default.
fn guess_tool(args: &ParsedArgs, settings: &Settings) -> Tool {
    if let Some(tool) = args.tool {
        return tool;
    }
    args.file
        .as_deref()
        .and_then(|file| settings.rule_for_filename(file))
        .map(|rule| rule.tool)
        .unwrap_or(settings.default_tool)
}

fn run_words<W: Write>(
    args: &ParsedArgs,
    settings: &Settings,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let candidates: Vec<PathBuf> = match &args.file {
        Some(file) => vec![PathBuf::from(file)],
        None => settings.dictionary.candidate_paths.clone(),
    };
    let loaded = loader::load_dictionary(&candidates)?;

    let mut state = DictionaryState::new(settings.dictionary.page_size).apply(
        DictionaryAction::FileLoaded {
            records: loaded.records,
            source: loaded.path.display().to_string(),
        },
    );
    if !args.query.is_empty() {
        state = state.apply(DictionaryAction::QueryChanged(args.query.clone()));
    }
    if args.definitions_only {
        state = state.apply(DictionaryAction::FilterToggled(WordToggle::DefinitionsOnly));
    }
    if args.short_only {
        state = state.apply(DictionaryAction::FilterToggled(WordToggle::ShortOnly));
    }
    state = state.apply(DictionaryAction::PageChanged(args.page.saturating_sub(1)));

    render::render_dictionary(out, &state)?;
    Ok(())
}

fn run_logs<W: Write>(
    args: &ParsedArgs,
    settings: &Settings,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = match &args.file {
        Some(file) => PathBuf::from(file),
        None => settings.logs.path.clone(),
    };
    let selection = match &args.window {
        Some(window) => window.parse::<WindowSelection>()?,
        None => WindowSelection::Latest,
    };
    let loaded = loader::load_log(&path)?;

    let state = LogViewState::new()
        .apply(LogAction::WindowSelected(selection))
        .apply(LogAction::LevelSelected(args.level.clone()))
        .apply(LogAction::FileLoaded {
            entries: loaded.records,
            source: loaded.path.display().to_string(),
        });

    render::render_log(out, &state)?;
    Ok(())
}
