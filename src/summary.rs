use serde::Serialize;

use crate::puzzle::{FinalReport, JumbleReport, PuzzleReport};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JumbleSummary {
    pub scrambled: String,
    pub matches: Vec<String>,
    pub circled: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalSummary {
    pub letters: String,
    pub phrases: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Serializable view of a [`PuzzleReport`], with errors flattened to messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub jumbles: Vec<JumbleSummary>,
    pub final_jumble: Option<FinalSummary>,
}

impl From<&JumbleReport> for JumbleSummary {
    fn from(report: &JumbleReport) -> Self {
        let (circled, error) = match &report.circled {
            Ok(letters) => (letters.clone(), None),
            Err(err) => (String::new(), Some(err.to_string())),
        };
        JumbleSummary {
            scrambled: report.scrambled.clone(),
            matches: report.matches.clone(),
            circled,
            error,
        }
    }
}

impl From<&FinalReport> for FinalSummary {
    fn from(report: &FinalReport) -> Self {
        let (phrases, error) = match &report.outcome {
            Ok(solutions) => (
                solutions.phrases().iter().map(|p| p.to_vec()).collect(),
                None,
            ),
            Err(err) => (Vec::new(), Some(err.to_string())),
        };
        FinalSummary {
            letters: report.letters.clone(),
            phrases,
            error,
        }
    }
}

impl From<&PuzzleReport> for PuzzleSummary {
    fn from(report: &PuzzleReport) -> Self {
        PuzzleSummary {
            caption: report.caption.clone(),
            jumbles: report.jumbles.iter().map(JumbleSummary::from).collect(),
            final_jumble: report.final_jumble.as_ref().map(FinalSummary::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::AnagramIndex;
    use crate::puzzle::{solve_puzzle, Puzzle};

    #[test]
    fn summary_serializes_phrases_and_errors() {
        let index = AnagramIndex::build(["DRAFT", "JUMBO", "MUTT", "HUT"]);
        let puzzle = Puzzle::from_parts(
            &["TARFD", "JOBUM", "TENJUK"],
            &["____O", "_OO__", "_O___O"],
            &["OOOO", "OOO"],
        )
        .unwrap();
        let summary = PuzzleSummary::from(&solve_puzzle(&puzzle, &index));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["jumbles"][0]["circled"], "T");
        assert_eq!(json["jumbles"][2]["matches"], serde_json::json!([]));
        assert_eq!(json["finalJumble"]["letters"], "TUM");
        assert_eq!(json["finalJumble"]["phrases"], serde_json::json!([]));
        assert_eq!(
            json["finalJumble"]["error"],
            "number of circles (7) does not match number of letters (3)"
        );
        assert!(json.get("caption").is_none());
    }
}
