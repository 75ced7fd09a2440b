use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::demo::demo_puzzles;
use crate::index::AnagramIndex;
use crate::key::fold_case;
use crate::puzzle::{solve_puzzle as solve, Jumble, Puzzle};
use crate::solver::FinalPattern;
use crate::summary::PuzzleSummary;

#[derive(Serialize, Deserialize)]
struct WasmJumble {
    scrambled: String,
    circles: String,
}

#[derive(Serialize, Deserialize)]
struct WasmPuzzle {
    #[serde(default)]
    caption: Option<String>,
    jumbles: Vec<WasmJumble>,
    pattern: Vec<usize>,
}

impl WasmPuzzle {
    fn into_puzzle(self) -> Result<Puzzle, JsValue> {
        let jumbles = self
            .jumbles
            .iter()
            .map(|j| Jumble::new(&j.scrambled, &j.circles))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let pattern =
            FinalPattern::from_lengths(&self.pattern).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut puzzle = Puzzle::new(jumbles, pattern);
        puzzle.caption = self.caption;
        Ok(puzzle)
    }

    fn from_puzzle(puzzle: &Puzzle) -> Self {
        WasmPuzzle {
            caption: puzzle.caption.clone(),
            jumbles: puzzle
                .jumbles
                .iter()
                .map(|j| WasmJumble {
                    scrambled: j.scrambled.clone(),
                    circles: j.circles.to_string(),
                })
                .collect(),
            pattern: puzzle.pattern.groups().to_vec(),
        }
    }
}

fn words_from_js(value: JsValue) -> Result<Vec<String>, JsValue> {
    let words: Vec<String> = from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Words must be an array of strings: {e}")))?;
    Ok(words.iter().map(|w| fold_case(w.trim())).collect())
}

/// WebAssembly entry point: index the provided words and solve one puzzle.
#[wasm_bindgen]
pub fn solve_puzzle(words: JsValue, puzzle: JsValue) -> Result<JsValue, JsValue> {
    let words_vec = words_from_js(words)?;
    if words_vec.is_empty() {
        return Err(JsValue::from_str("Please supply at least one word."));
    }
    let puzzle: WasmPuzzle = from_value(puzzle)
        .map_err(|e| JsValue::from_str(&format!("Malformed puzzle: {e}")))?;
    let puzzle = puzzle.into_puzzle()?;

    let index = AnagramIndex::build(words_vec);
    let report = solve(&puzzle, &index);
    to_value(&PuzzleSummary::from(&report))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Convenience helper exposed to JS: the four demonstration puzzles.
#[wasm_bindgen(js_name = demo_puzzles)]
pub fn demo_puzzles_js() -> Result<JsValue, JsValue> {
    let puzzles = demo_puzzles().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let puzzles: Vec<WasmPuzzle> = puzzles.iter().map(WasmPuzzle::from_puzzle).collect();
    to_value(&puzzles).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}
