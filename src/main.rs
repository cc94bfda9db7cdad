//! Ladderlab - CLI
//!
//! Word-ladder search and scoring from the terminal: find ladders with any of
//! the three strategies, compare them side by side, ask for hints, score
//! finished rounds, and suggest playable word pairs.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ladderlab::{
    commands::{DEFAULT_HINT_CAP, run_compare, run_hint, run_score, run_search, run_suggest},
    core::{Lexicon, Word},
    output::{
        print_compare_report, print_hint_report, print_score_report, print_search_report,
        print_suggested_pair,
    },
    scoring::{Difficulty, HintPenalty},
    search::Strategy,
    wordlists::{
        WORDS,
        loader::{lexicon_for_length, load_from_file, words_from_slice},
    },
};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(
    name = "ladderlab",
    about = "Word-ladder pathfinding with uniform-cost, greedy, and A* search plus round scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or a path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a ladder between two words
    Search {
        start: String,
        goal: String,

        /// Strategy: astar (default), uniform/ucs, greedy
        #[arg(short, long, default_value = "astar")]
        strategy: String,

        /// Give up after this many word expansions
        #[arg(long)]
        cap: Option<usize>,
    },

    /// Run all three strategies on the same word pair
    Compare {
        start: String,
        goal: String,

        /// Give up after this many word expansions (per strategy)
        #[arg(long)]
        cap: Option<usize>,
    },

    /// Suggest the next word toward the goal
    Hint {
        current: String,
        goal: String,

        /// Strategy: astar (default), uniform/ucs, greedy
        #[arg(short, long, default_value = "astar")]
        strategy: String,

        /// Expansion budget for the hint query
        #[arg(long, default_value_t = DEFAULT_HINT_CAP)]
        cap: usize,
    },

    /// Score a finished round from its full ladder
    Score {
        /// The ladder taken, start to goal, in order
        #[arg(required = true, num_args = 2..)]
        ladder: Vec<String>,

        /// Difficulty: beginner (default), advanced, challenge
        #[arg(short, long, default_value = "beginner")]
        difficulty: String,

        /// Seconds the round took
        #[arg(short, long, default_value_t = 0)]
        elapsed: u64,

        /// Hints spent during the round
        #[arg(long, default_value_t = 0)]
        hints: u32,

        /// Charge every hint the same instead of progressively
        #[arg(long)]
        flat_hints: bool,
    },

    /// Suggest a playable word pair for a difficulty
    Suggest {
        /// Difficulty: beginner (default), advanced, challenge
        #[arg(short, long, default_value = "beginner")]
        difficulty: String,

        /// RNG seed for reproducible suggestions
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let words = load_words(&cli.wordlist)?;

    match cli.command {
        Commands::Search {
            start,
            goal,
            strategy,
            cap,
        } => {
            let lexicon = lexicon_for(&words, &start)?;
            let report = run_search(&lexicon, &start, &goal, Strategy::from_name(&strategy), cap)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_search_report(&report);
            Ok(())
        }
        Commands::Compare { start, goal, cap } => {
            let lexicon = lexicon_for(&words, &start)?;
            let report =
                run_compare(&lexicon, &start, &goal, cap).map_err(|e| anyhow::anyhow!(e))?;
            print_compare_report(&report);
            Ok(())
        }
        Commands::Hint {
            current,
            goal,
            strategy,
            cap,
        } => {
            let lexicon = lexicon_for(&words, &current)?;
            let report = run_hint(&lexicon, &current, &goal, Strategy::from_name(&strategy), cap)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_hint_report(&report);
            Ok(())
        }
        Commands::Score {
            ladder,
            difficulty,
            elapsed,
            hints,
            flat_hints,
        } => {
            let lexicon = lexicon_for(&words, &ladder[0])?;
            let policy = if flat_hints {
                HintPenalty::Flat
            } else {
                HintPenalty::Progressive
            };
            let report = run_score(
                &lexicon,
                &ladder,
                Difficulty::from_name(&difficulty),
                Duration::from_secs(elapsed),
                hints,
                policy,
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
        Commands::Suggest { difficulty, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let pair = run_suggest(&words, Difficulty::from_name(&difficulty), &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_suggested_pair(&pair);
            Ok(())
        }
    }
}

/// Load the dictionary named by the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

/// Build the lexicon for the word length the caller is playing at
fn lexicon_for(words: &[Word], sample: &str) -> Result<Lexicon> {
    let length = sample.trim().len();
    lexicon_for_length(words, length)
        .map_err(|e| anyhow::anyhow!("No usable dictionary for length {length}: {e}"))
}
