use crate::index::AnagramIndex;
use crate::puzzle::{FinalReport, JumbleReport, PuzzleReport};

/// Render a solved puzzle as console text.
pub fn format_report(report: &PuzzleReport) -> String {
    // One line per scrambled word, listing every anagram found.
    fn render_jumble(number: usize, jumble: &JumbleReport, out: &mut String) {
        out.push_str(&format!("Jumble {number}: {} => ", jumble.scrambled));
        if jumble.matches.is_empty() {
            out.push_str("(no solution)\n");
            return;
        }
        out.push_str(&format!(
            "unscrambled into {} words: {}",
            jumble.matches.len(),
            jumble.matches.join(" or ")
        ));
        if let Err(err) = &jumble.circled {
            out.push_str(&format!(" (circles skipped: {err})"));
        }
        out.push('\n');
    }

    fn render_final(final_jumble: &FinalReport, out: &mut String) {
        out.push_str(&format!("Final Jumble: {} => ", final_jumble.letters));
        match &final_jumble.outcome {
            Err(err) => out.push_str(&format!("(no solution: {err})\n")),
            Ok(solutions) if solutions.is_empty() => out.push_str("(no solution)\n"),
            Ok(solutions) => {
                out.push_str(&format!(
                    "unscrambled into {} possible phrases:\n",
                    solutions.len()
                ));
                for (idx, phrase) in solutions.phrases().iter().enumerate() {
                    out.push_str(&format!("    Option {}: {}\n", idx + 1, phrase.join(" ")));
                }
            }
        }
    }

    let mut out = String::new();
    for (idx, jumble) in report.jumbles.iter().enumerate() {
        render_jumble(idx + 1, jumble, &mut out);
    }
    match &report.final_jumble {
        Some(final_jumble) => render_final(final_jumble, &mut out),
        None => out.push_str("Did not solve any jumbles, so could not solve final jumble.\n"),
    }
    out
}

/// Banner printed above each demonstration puzzle.
pub fn format_banner(number: usize) -> String {
    let bar = "=".repeat(20);
    format!("{bar} WORD JUMBLE TEST CASE {number} {bar}")
}

/// Show the bucket stored under each of `keys`.
pub fn format_probes(index: &AnagramIndex, keys: &[&str]) -> String {
    let mut out = String::new();
    for key in keys {
        out.push_str(&format!("words_dict['{key}'] = {:?}\n", index.lookup_key(key)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{solve_puzzle, Jumble, Puzzle};
    use crate::solver::FinalPattern;

    fn dog_house() -> Puzzle {
        Puzzle::from_parts(
            &["TARFD", "JOBUM", "TENJUK", "LETHEM"],
            &["____O", "_OO__", "_O___O", "O____O"],
            &["OOOO", "OOO"],
        )
        .unwrap()
        .with_caption("What a dog house is: ____ ___.")
    }

    #[test]
    fn solved_puzzle_lists_options() {
        let index = AnagramIndex::build([
            "DRAFT", "JUMBO", "JUNKET", "HELMET", "MUTT", "HUT", "TUTH", "TUM",
        ]);
        let text = format_report(&solve_puzzle(&dog_house(), &index));
        let expected = "Jumble 1: TARFD => unscrambled into 1 words: DRAFT\n\
                        Jumble 2: JOBUM => unscrambled into 1 words: JUMBO\n\
                        Jumble 3: TENJUK => unscrambled into 1 words: JUNKET\n\
                        Jumble 4: LETHEM => unscrambled into 1 words: HELMET\n\
                        Final Jumble: TUMUTHT => unscrambled into 2 possible phrases:\n    \
                        Option 1: MUTT HUT\n    \
                        Option 2: TUTH TUM\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn unsolved_puzzle_says_so() {
        let text = format_report(&solve_puzzle(&dog_house(), &AnagramIndex::default()));
        assert!(text.contains("Jumble 1: TARFD => (no solution)\n"));
        assert!(text.ends_with("Did not solve any jumbles, so could not solve final jumble.\n"));
    }

    #[test]
    fn several_matches_are_joined() {
        let index = AnagramIndex::build(["LIST", "SILT", "SLIT"]);
        let puzzle = Puzzle::new(
            vec![Jumble::new("ILST", "OOOO").unwrap()],
            FinalPattern::from_lengths(&[2, 2]).unwrap(),
        );
        let text = format_report(&solve_puzzle(&puzzle, &index));
        assert!(text.starts_with("Jumble 1: ILST => unscrambled into 3 words: LIST or SILT or SLIT\n"));
        assert!(text.ends_with("Final Jumble: LIST => (no solution)\n"));
    }

    #[test]
    fn banner_and_probes() {
        assert_eq!(
            format_banner(2),
            "==================== WORD JUMBLE TEST CASE 2 ===================="
        );
        let index = AnagramIndex::build(["DOG", "GOD"]);
        assert_eq!(
            format_probes(&index, &["DGO", "CDEO"]),
            "words_dict['DGO'] = [\"DOG\", \"GOD\"]\nwords_dict['CDEO'] = []\n"
        );
    }
}
