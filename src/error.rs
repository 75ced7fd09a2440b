use std::path::PathBuf;

use thiserror::Error;

/// Validation failures raised at the solver boundary.
///
/// None of these abort a batch: the orchestrator stores them in the report
/// next to the jumble or final phrase they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("number of circles ({expected}) does not match number of letters ({actual})")]
    PatternMismatch { expected: usize, actual: usize },
    #[error("circle mask has {mask_len} positions but the word has {word_len} letters")]
    MaskLengthMismatch { word_len: usize, mask_len: usize },
    #[error("final pattern has {groups} groups, at most {max} are supported")]
    UnsupportedPatternArity { groups: usize, max: usize },
    #[error("{words} scrambled words but {masks} circle masks")]
    JumbleCountMismatch { words: usize, masks: usize },
    #[error("invalid circle mask symbol {0:?} (expected 'O' or '_')")]
    InvalidMaskSymbol(char),
    #[error("invalid final pattern: {0}")]
    InvalidPattern(&'static str),
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
