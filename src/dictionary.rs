use std::fs;
use std::path::Path;

use log::info;

use crate::error::DictionaryError;
use crate::key::fold_case;

pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Read a word-per-line file, trimming and upper-casing every entry.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_words(&contents);
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Same as [`load_words`] over text already in memory. Blank lines are skipped.
pub fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(fold_case)
        .collect()
}
