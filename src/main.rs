use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};

use word_jumble::demo::PROBE_KEYS;
use word_jumble::format::{format_banner, format_probes};
use word_jumble::{
    demo_puzzles, fold_case, format_report, load_words, solve_puzzle, solve_word, AnagramIndex,
    FinalPattern, Jumble, Puzzle, PuzzleSummary, DEFAULT_DICTIONARY,
};

/// Solve newspaper word jumble puzzles.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Word list, one word per line.
    #[arg(short = 'd', long, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Print results as JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Probe the index and solve the four built-in puzzles (the default).
    Demo,

    /// List every anagram of one scrambled word.
    Word { letters: String },

    /// Solve a custom puzzle.
    Solve {
        /// Scrambled word and its circles, e.g. `TARFD:____O`. Repeat per word.
        #[arg(short = 'j', long = "jumble", required = true, value_parser = parse_jumble)]
        jumbles: Vec<Jumble>,

        /// Letter count of each final word, e.g. `4,3`.
        #[arg(short = 'p', long, required = true, value_delimiter = ',')]
        pattern: Vec<usize>,

        /// Cartoon prompt shown above the results.
        #[arg(short = 'c', long)]
        caption: Option<String>,
    },
}

fn parse_jumble(arg: &str) -> Result<Jumble, String> {
    let (letters, circles) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected LETTERS:MASK, got {arg:?}"))?;
    Jumble::new(&fold_case(letters), circles).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();
    debug!("Command line options: {:?}", opts);

    info!("Loading dictionary...");
    let words = load_words(&opts.dictionary)?;
    let index = AnagramIndex::build(words);
    info!(
        "Created dictionary with {} unique letter combinations",
        index.key_count()
    );

    match opts.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&index, opts.json)?,
        Command::Word { letters } => {
            let matches = solve_word(&letters, &index);
            if opts.json {
                println!("{}", serde_json::to_string_pretty(matches)?);
            } else if matches.is_empty() {
                println!("{letters} => (no solution)");
            } else {
                println!("{letters} => {}", matches.join(" or "));
            }
        }
        Command::Solve {
            jumbles,
            pattern,
            caption,
        } => {
            let mut puzzle = Puzzle::new(jumbles, FinalPattern::from_lengths(&pattern)?);
            puzzle.caption = caption;
            print_puzzle(&puzzle, &index, opts.json)?;
        }
    }
    Ok(())
}

fn run_demo(index: &AnagramIndex, json: bool) -> Result<(), Box<dyn Error>> {
    if !json {
        println!("{}", "=".repeat(60));
        println!("Testing words_dict lookups:");
        print!("{}", format_probes(index, &PROBE_KEYS));
        println!("{}\n", "=".repeat(60));
    }
    for (idx, puzzle) in demo_puzzles()?.iter().enumerate() {
        if !json {
            if idx > 0 {
                println!();
            }
            println!("{}", format_banner(idx + 1));
        }
        print_puzzle(puzzle, index, json)?;
    }
    Ok(())
}

fn print_puzzle(puzzle: &Puzzle, index: &AnagramIndex, json: bool) -> Result<(), Box<dyn Error>> {
    let report = solve_puzzle(puzzle, index);
    if json {
        println!("{}", serde_json::to_string_pretty(&PuzzleSummary::from(&report))?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}
