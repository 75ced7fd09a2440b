use crate::error::SolveError;
use crate::puzzle::Puzzle;

/// Letter combinations probed before the demonstration puzzles.
pub const PROBE_KEYS: [&str; 4] = ["DGO", "CDEO", "ILST", "EILNST"];

/// The four built-in demonstration puzzles.
pub fn demo_puzzles() -> Result<Vec<Puzzle>, SolveError> {
    Ok(vec![
        Puzzle::from_parts(
            &["ACOME", "FEROC", "REDDEG", "YURFIP"],
            &["___O_", "__OO_", "O_O___", "O__O__"],
            &["OOOOOOO"],
        )?
        .with_caption("What her ears felt like at the rock concert: _______."),
        Puzzle::from_parts(
            &["TARFD", "JOBUM", "TENJUK", "LETHEM"],
            &["____O", "_OO__", "_O___O", "O____O"],
            &["OOOO", "OOO"],
        )?
        .with_caption("What a dog house is: ____ ___."),
        Puzzle::from_parts(
            &["LAISA", "LAURR", "BUREEK", "PROUOT"],
            &["_OOO_", "O_O__", "OO____", "__O_OO"],
            &["OOOOO", "OOOOO"],
        )?
        .with_caption("A bad way for a lawyer to learn: _____ and _____."),
        Puzzle::from_parts(
            &["TEFON", "SOKIK", "NIUMEM", "SICONU"],
            &["__O_O", "OO_O_", "____O_", "___OO_"],
            &["OO", "OOOOOO"],
        )?
        .with_caption("Farley rolled on the barn floor: __-______."),
    ])
}
