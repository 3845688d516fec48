use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

use crate::{
    parser::parse_log_document,
    record::{LogEntry, WordRecord},
    wordparser::parse_word_document,
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no dictionary file could be read (tried {})", display_paths(.tried))]
    NotFound { tried: Vec<PathBuf> },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no valid entries found in {}", .path.display())]
    Empty { path: PathBuf },
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidate paths".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug)]
pub struct Loaded<T> {
    pub path: PathBuf,
    pub records: Vec<T>,
}

/// Reads a whole file, transparently decompressing `.gz` files.
pub fn read_source(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = String::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        flate2::read::GzDecoder::new(reader).read_to_string(&mut buffer)?;
    } else {
        reader.read_to_string(&mut buffer)?;
    }
    Ok(buffer)
}

/// Tries each candidate in order and parses the first one that can be read.
/// Unreadable candidates are skipped silently.
pub fn load_dictionary<P: AsRef<Path>>(candidates: &[P]) -> Result<Loaded<WordRecord>, LoadError> {
    for candidate in candidates {
        let path = candidate.as_ref();
        let content = match read_source(path) {
            Ok(content) => content,
            Err(err) => {
                debug!("skipping dictionary candidate {}: {}", path.display(), err);
                continue;
            }
        };

        let records = parse_word_document(&content);
        if records.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }
        info!("loaded {} words from {}", records.len(), path.display());
        return Ok(Loaded {
            path: path.to_path_buf(),
            records,
        });
    }

    Err(LoadError::NotFound {
        tried: candidates.iter().map(|c| c.as_ref().to_path_buf()).collect(),
    })
}

pub fn load_log(path: &Path) -> Result<Loaded<LogEntry>, LoadError> {
    let content = read_source(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_log_document(&content);
    if entries.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    info!("loaded {} log entries from {}", entries.len(), path.display());
    Ok(Loaded {
        path: path.to_path_buf(),
        records: entries,
    })
}
