//! Single-strategy search command

use crate::core::{Lexicon, Word};
use crate::search::{PathResult, Strategy, search};

/// Result of a single search invocation, ready for display
#[derive(Debug)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub start: Word,
    pub goal: Word,
    pub result: PathResult,
}

/// Search for a ladder and package the outcome for display
///
/// # Errors
///
/// Returns an error if:
/// - Start or goal fails word validation
/// - Start or goal is not in the lexicon
/// - No path exists (or the expansion cap ran out)
pub fn run_search(
    lexicon: &Lexicon,
    start: &str,
    goal: &str,
    strategy: Strategy,
    cap: Option<usize>,
) -> Result<SearchReport, String> {
    let start = Word::new(start).map_err(|e| format!("Invalid start word: {e}"))?;
    let goal = Word::new(goal).map_err(|e| format!("Invalid goal word: {e}"))?;

    let result = search(lexicon, &start, &goal, strategy, cap).map_err(|e| e.to_string())?;

    Ok(SearchReport {
        strategy,
        start,
        goal,
        result,
    })
}
