use log::{debug, info};

use crate::error::SolveError;
use crate::index::AnagramIndex;
use crate::solver::{solve_final, solve_word, FinalPattern, SolutionSet};

pub const CIRCLED: char = 'O';
pub const PLAIN: char = '_';

/// Which letters of a solved word are circled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleMask {
    circled: Vec<bool>,
}

impl CircleMask {
    /// Parse a mask such as `"__OO_"`.
    pub fn parse(mask: &str) -> Result<Self, SolveError> {
        let circled = mask
            .chars()
            .map(|c| match c {
                CIRCLED => Ok(true),
                PLAIN => Ok(false),
                other => Err(SolveError::InvalidMaskSymbol(other)),
            })
            .collect::<Result<Vec<bool>, SolveError>>()?;
        Ok(CircleMask { circled })
    }

    pub fn len(&self) -> usize {
        self.circled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circled.is_empty()
    }

    /// Circled letters of `word`, in order.
    pub fn extract(&self, word: &str) -> Result<String, SolveError> {
        let word_len = word.chars().count();
        if word_len != self.circled.len() {
            return Err(SolveError::MaskLengthMismatch {
                word_len,
                mask_len: self.circled.len(),
            });
        }
        Ok(word
            .chars()
            .zip(&self.circled)
            .filter(|&(_, &circled)| circled)
            .map(|(c, _)| c)
            .collect())
    }
}

impl std::fmt::Display for CircleMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &circled in &self.circled {
            write!(f, "{}", if circled { CIRCLED } else { PLAIN })?;
        }
        Ok(())
    }
}

/// One scrambled word and its circles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jumble {
    pub scrambled: String,
    pub circles: CircleMask,
}

impl Jumble {
    pub fn new(scrambled: &str, circles: &str) -> Result<Self, SolveError> {
        let circles = CircleMask::parse(circles)?;
        let word_len = scrambled.chars().count();
        if word_len != circles.len() {
            return Err(SolveError::MaskLengthMismatch {
                word_len,
                mask_len: circles.len(),
            });
        }
        Ok(Jumble {
            scrambled: scrambled.to_string(),
            circles,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Cartoon prompt, if any.
    pub caption: Option<String>,
    pub jumbles: Vec<Jumble>,
    pub pattern: FinalPattern,
}

impl Puzzle {
    pub fn new(jumbles: Vec<Jumble>, pattern: FinalPattern) -> Self {
        Puzzle {
            caption: None,
            jumbles,
            pattern,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Build from parallel lists of scrambled words and masks plus the blank
    /// strings of the final answer.
    pub fn from_parts<S: AsRef<str>>(
        letters: &[S],
        circles: &[S],
        blanks: &[S],
    ) -> Result<Self, SolveError> {
        if letters.len() != circles.len() {
            return Err(SolveError::JumbleCountMismatch {
                words: letters.len(),
                masks: circles.len(),
            });
        }
        let jumbles = letters
            .iter()
            .zip(circles)
            .map(|(l, c)| Jumble::new(l.as_ref(), c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Puzzle::new(jumbles, FinalPattern::from_blanks(blanks)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumbleReport {
    pub scrambled: String,
    /// All anagrams found, in dictionary order. Empty means no solution.
    pub matches: Vec<String>,
    /// Letters contributed to the final jumble.
    pub circled: Result<String, SolveError>,
}

impl JumbleReport {
    /// The word whose letters were circled.
    pub fn chosen(&self) -> Option<&str> {
        self.matches.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    pub letters: String,
    pub outcome: Result<SolutionSet, SolveError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleReport {
    pub caption: Option<String>,
    pub jumbles: Vec<JumbleReport>,
    /// `None` when no jumble produced circled letters.
    pub final_jumble: Option<FinalReport>,
}

/// Solve every jumble of `puzzle`, then the final phrase from the circled
/// letters of the first match of each.
pub fn solve_puzzle(puzzle: &Puzzle, index: &AnagramIndex) -> PuzzleReport {
    let mut final_letters = String::new();
    let mut jumbles = Vec::with_capacity(puzzle.jumbles.len());

    for jumble in &puzzle.jumbles {
        let matches = solve_word(&jumble.scrambled, index).to_vec();
        let circled = match matches.first() {
            None => Ok(String::new()),
            Some(word) => jumble.circles.extract(word),
        };
        match &circled {
            Ok(letters) => final_letters.push_str(letters),
            Err(err) => debug!("skipping circles of {}: {}", jumble.scrambled, err),
        }
        jumbles.push(JumbleReport {
            scrambled: jumble.scrambled.clone(),
            matches,
            circled,
        });
    }

    let final_jumble = if final_letters.is_empty() {
        info!("no jumble solved, skipping the final jumble");
        None
    } else {
        let outcome = solve_final(&final_letters, &puzzle.pattern, index);
        Some(FinalReport {
            letters: final_letters,
            outcome,
        })
    };

    PuzzleReport {
        caption: puzzle.caption.clone(),
        jumbles,
        final_jumble,
    }
}

/// Solve puzzles one after the other against the same index.
pub fn solve_puzzles(puzzles: &[Puzzle], index: &AnagramIndex) -> Vec<PuzzleReport> {
    puzzles.iter().map(|p| solve_puzzle(p, index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn dog_house_index() -> AnagramIndex {
        AnagramIndex::build(words(&[
            "DRAFT", "JUMBO", "JUNKET", "HELMET", "MUTT", "HUT", "TUTH", "TUM",
        ]))
    }

    fn dog_house() -> Puzzle {
        Puzzle::from_parts(
            &["TARFD", "JOBUM", "TENJUK", "LETHEM"],
            &["____O", "_OO__", "_O___O", "O____O"],
            &["OOOO", "OOO"],
        )
        .unwrap()
    }

    #[test]
    fn extract_keeps_circled_positions() {
        let mask = CircleMask::parse("_O___O").unwrap();
        assert_eq!(mask.extract("JUNKET").unwrap(), "UT");
        assert_eq!(CircleMask::parse("_____").unwrap().extract("DRAFT").unwrap(), "");
        assert_eq!(mask.to_string(), "_O___O");
    }

    #[test]
    fn extract_rejects_length_mismatch() {
        let mask = CircleMask::parse("O_O").unwrap();
        assert_eq!(
            mask.extract("DRAFT"),
            Err(SolveError::MaskLengthMismatch {
                word_len: 5,
                mask_len: 3
            })
        );
    }

    #[test]
    fn mask_rejects_unknown_symbols() {
        assert_eq!(
            CircleMask::parse("O_x"),
            Err(SolveError::InvalidMaskSymbol('x'))
        );
        assert!(Jumble::new("DRAFT", "O_").is_err());
    }

    #[test]
    fn parts_need_one_mask_per_word() {
        assert_eq!(
            Puzzle::from_parts(&["TARFD", "JOBUM"], &["____O"], &["OOO"]),
            Err(SolveError::JumbleCountMismatch { words: 2, masks: 1 })
        );
    }

    #[test]
    fn dog_house_puzzle_solves() {
        let report = solve_puzzle(&dog_house(), &dog_house_index());
        let chosen: Vec<_> = report.jumbles.iter().map(|j| j.chosen()).collect();
        assert_eq!(
            chosen,
            vec![Some("DRAFT"), Some("JUMBO"), Some("JUNKET"), Some("HELMET")]
        );
        let final_jumble = report.final_jumble.expect("final jumble attempted");
        assert_eq!(final_jumble.letters, "TUMUTHT");
        let solutions = final_jumble.outcome.unwrap();
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions.phrases()[0].as_slice(), ["MUTT", "HUT"]);
    }

    #[test]
    fn unsolved_jumble_contributes_nothing() {
        let index = AnagramIndex::build(words(&["JUMBO", "HELMET", "MOTHUM"]));
        let report = solve_puzzle(&dog_house(), &index);
        assert!(report.jumbles[0].matches.is_empty());
        assert_eq!(report.jumbles[0].circled, Ok(String::new()));
        assert_eq!(report.jumbles[1].chosen(), Some("JUMBO"));
        assert!(report.jumbles[2].matches.is_empty());
        assert_eq!(report.jumbles[3].chosen(), Some("HELMET"));
        let final_jumble = report.final_jumble.unwrap();
        assert_eq!(final_jumble.letters, "UMHT");
        assert_eq!(
            final_jumble.outcome,
            Err(SolveError::PatternMismatch {
                expected: 7,
                actual: 4
            })
        );
    }

    #[test]
    fn nothing_solved_skips_final() {
        let report = solve_puzzle(&dog_house(), &AnagramIndex::default());
        assert_eq!(report.jumbles.len(), 4);
        assert!(report.final_jumble.is_none());
    }

    #[test]
    fn first_match_is_circled() {
        let index = AnagramIndex::build(words(&["SLIT", "LIST"]));
        let puzzle = Puzzle::new(
            vec![Jumble::new("ILST", "O___").unwrap()],
            FinalPattern::from_lengths(&[1]).unwrap(),
        );
        let report = solve_puzzle(&puzzle, &index);
        assert_eq!(report.jumbles[0].circled, Ok("S".to_string()));
    }

    #[test]
    fn batch_continues_after_failure() {
        let index = dog_house_index();
        let broken = Puzzle::from_parts(&["TARFD"], &["OOOOO"], &["OOO"]).unwrap();
        let reports = solve_puzzles(&[broken, dog_house()], &index);
        assert!(reports[0].final_jumble.as_ref().unwrap().outcome.is_err());
        assert!(reports[1].final_jumble.as_ref().unwrap().outcome.is_ok());
    }
}
