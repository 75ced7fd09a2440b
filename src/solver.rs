use hashbrown::HashSet;
use log::{debug, trace};
use smallvec::SmallVec;

use crate::combinations::combinations;
use crate::error::SolveError;
use crate::index::AnagramIndex;
use crate::key::canonical_key;

/// Words of the final answer, one per pattern group.
pub type Phrase = SmallVec<[String; 2]>;

/// Group counts handled by [`solve_final`].
pub const DEFAULT_MAX_GROUPS: usize = 2;

/// Required letter count of each word of the final phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalPattern {
    groups: SmallVec<[usize; 2]>,
    total: usize,
}

impl FinalPattern {
    pub fn from_lengths(lengths: &[usize]) -> Result<Self, SolveError> {
        if lengths.is_empty() {
            return Err(SolveError::InvalidPattern("pattern has no groups"));
        }
        if lengths.contains(&0) {
            return Err(SolveError::InvalidPattern("pattern has an empty group"));
        }
        let total = lengths
            .iter()
            .try_fold(0usize, |acc, &len| acc.checked_add(len))
            .ok_or(SolveError::InvalidPattern("pattern letter count overflows"))?;
        Ok(FinalPattern {
            groups: SmallVec::from_slice(lengths),
            total,
        })
    }

    /// Build from blank strings as printed under a cartoon, e.g.
    /// `["OOOO", "OOO"]` for a four-letter word followed by a three-letter one.
    pub fn from_blanks<S: AsRef<str>>(blanks: &[S]) -> Result<Self, SolveError> {
        let lengths: Vec<usize> = blanks.iter().map(|b| b.as_ref().chars().count()).collect();
        Self::from_lengths(&lengths)
    }

    pub fn groups(&self) -> &[usize] {
        &self.groups
    }

    pub fn total_letters(&self) -> usize {
        self.total
    }
}

/// Distinct phrases in the order they were found.
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    phrases: Vec<Phrase>,
    seen: HashSet<Phrase>,
}

impl SolutionSet {
    /// Record `phrase`; returns false when it was already present.
    pub fn insert(&mut self, phrase: Phrase) -> bool {
        if self.seen.contains(&phrase) {
            return false;
        }
        self.seen.insert(phrase.clone());
        self.phrases.push(phrase);
        true
    }

    pub fn contains(&self, phrase: &[String]) -> bool {
        self.seen.contains(phrase)
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl PartialEq for SolutionSet {
    fn eq(&self, other: &Self) -> bool {
        self.phrases == other.phrases
    }
}

impl Eq for SolutionSet {}

/// Every dictionary word that uses exactly the given letters.
pub fn solve_word<'a>(letters: &str, index: &'a AnagramIndex) -> &'a [String] {
    index.lookup_key(&canonical_key(letters))
}

/// Unscramble `letters` into phrases following `pattern`, with at most
/// [`DEFAULT_MAX_GROUPS`] groups.
pub fn solve_final(
    letters: &str,
    pattern: &FinalPattern,
    index: &AnagramIndex,
) -> Result<SolutionSet, SolveError> {
    FinalSolver::new(index).solve(letters, pattern)
}

/// Final-phrase search over a borrowed index.
#[derive(Debug, Clone, Copy)]
pub struct FinalSolver<'a> {
    index: &'a AnagramIndex,
    max_groups: usize,
}

impl<'a> FinalSolver<'a> {
    pub fn new(index: &'a AnagramIndex) -> Self {
        FinalSolver {
            index,
            max_groups: DEFAULT_MAX_GROUPS,
        }
    }

    /// Allow patterns with up to `max_groups` words.
    pub fn with_max_groups(self, max_groups: usize) -> Self {
        FinalSolver { max_groups, ..self }
    }

    pub fn solve(&self, letters: &str, pattern: &FinalPattern) -> Result<SolutionSet, SolveError> {
        let letters: Vec<char> = letters.chars().collect();
        if pattern.total_letters() != letters.len() {
            return Err(SolveError::PatternMismatch {
                expected: pattern.total_letters(),
                actual: letters.len(),
            });
        }
        let groups = pattern.groups();
        if groups.len() > self.max_groups {
            return Err(SolveError::UnsupportedPatternArity {
                groups: groups.len(),
                max: self.max_groups,
            });
        }

        let mut solutions = SolutionSet::default();
        let mut prefix = Phrase::new();
        self.partition(&letters, groups, &mut prefix, &mut solutions);
        debug!(
            "final jumble {:?} with groups {:?}: {} phrase(s)",
            letters.iter().collect::<String>(),
            groups,
            solutions.len()
        );
        Ok(solutions)
    }

    /// Assign letters to `groups[0]`, then recurse on what is left.
    fn partition(
        &self,
        letters: &[char],
        groups: &[usize],
        prefix: &mut Phrase,
        out: &mut SolutionSet,
    ) {
        let Some((&size, rest)) = groups.split_first() else {
            return;
        };
        if rest.is_empty() {
            let candidate: String = letters.iter().collect();
            for word in solve_word(&candidate, self.index) {
                let mut phrase = prefix.clone();
                phrase.push(word.clone());
                out.insert(phrase);
            }
            return;
        }

        let mut tried: HashSet<String> = HashSet::new();
        for chosen in combinations(letters, size) {
            let candidate: String = chosen.iter().collect();
            if !tried.insert(canonical_key(&candidate)) {
                continue;
            }
            let words = solve_word(&candidate, self.index);
            if words.is_empty() {
                continue;
            }
            trace!("group {:?} matches {:?}", candidate, words);
            let remaining = remove_letters(letters, &chosen);
            for word in words {
                prefix.push(word.clone());
                self.partition(&remaining, rest, prefix, out);
                prefix.pop();
            }
        }
    }
}

/// `pool` with each letter of `used` removed once.
fn remove_letters(pool: &[char], used: &[char]) -> Vec<char> {
    let mut remaining = pool.to_vec();
    for letter in used {
        if let Some(pos) = remaining.iter().position(|c| c == letter) {
            remaining.remove(pos);
        }
    }
    remaining
}
