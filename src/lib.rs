//! Word jumble solver: unscramble the clue words through an anagram index,
//! collect their circled letters, then split those letters into the final
//! phrase.

pub mod combinations;
pub mod demo;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod index;
pub mod key;
pub mod puzzle;
pub mod solver;
pub mod summary;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::combinations::{combinations, index_combinations};
pub use crate::demo::demo_puzzles;
pub use crate::dictionary::{load_words, parse_words, DEFAULT_DICTIONARY};
pub use crate::error::{DictionaryError, SolveError};
pub use crate::format::format_report;
pub use crate::index::AnagramIndex;
pub use crate::key::{canonical_key, fold_case, CanonicalKey};
pub use crate::puzzle::{
    solve_puzzle, solve_puzzles, CircleMask, FinalReport, Jumble, JumbleReport, Puzzle,
    PuzzleReport,
};
pub use crate::solver::{
    solve_final, solve_word, FinalPattern, FinalSolver, Phrase, SolutionSet, DEFAULT_MAX_GROUPS,
};
pub use crate::summary::PuzzleSummary;
