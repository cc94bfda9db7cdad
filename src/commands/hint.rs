//! Hint command
//!
//! A hint is the first step of a fresh search from the player's current word.
//! Hint queries always run with an expansion cap so a pathological pair
//! cannot stall an interactive caller; a capped-out search simply means no
//! hint is available, the same as a genuinely disconnected pair.

use crate::core::{Lexicon, Word};
use crate::search::{SearchError, Strategy, search};

/// Default expansion budget for interactive hint queries
pub const DEFAULT_HINT_CAP: usize = 10_000;

/// Outcome of a hint query
#[derive(Debug)]
pub struct HintReport {
    pub strategy: Strategy,
    pub current: Word,
    pub goal: Word,
    /// The suggested next word; `None` when already at the goal or when no
    /// path was found within the budget
    pub suggestion: Option<Word>,
    pub nodes_expanded: usize,
}

/// Suggest the next word toward the goal
///
/// # Errors
///
/// Returns an error if the current or goal word is malformed or not in the
/// lexicon. An unreachable goal is NOT an error: it reports as no suggestion.
pub fn run_hint(
    lexicon: &Lexicon,
    current: &str,
    goal: &str,
    strategy: Strategy,
    cap: usize,
) -> Result<HintReport, String> {
    let current = Word::new(current).map_err(|e| format!("Invalid current word: {e}"))?;
    let goal = Word::new(goal).map_err(|e| format!("Invalid goal word: {e}"))?;

    match search(lexicon, &current, &goal, strategy, Some(cap)) {
        Ok(result) => Ok(HintReport {
            strategy,
            current,
            goal,
            suggestion: result.next_step().cloned(),
            nodes_expanded: result.nodes_expanded,
        }),
        Err(SearchError::NoPathFound { nodes_expanded }) => Ok(HintReport {
            strategy,
            current,
            goal,
            suggestion: None,
            nodes_expanded,
        }),
        Err(err @ SearchError::InvalidWordPair { .. }) => Err(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Lexicon {
        let words = ["cat", "cot", "cog", "dog", "dot", "cod"]
            .map(|t| Word::new(t).unwrap());
        Lexicon::new(words).unwrap()
    }

    #[test]
    fn hint_suggests_the_next_word() {
        let lexicon = fixture();
        let report = run_hint(&lexicon, "cat", "dog", Strategy::AStar, DEFAULT_HINT_CAP).unwrap();
        assert_eq!(report.suggestion.map(|w| w.text().to_string()), Some("COT".to_string()));
    }

    #[test]
    fn hint_at_goal_has_no_suggestion() {
        let lexicon = fixture();
        let report = run_hint(&lexicon, "dog", "dog", Strategy::AStar, DEFAULT_HINT_CAP).unwrap();
        assert!(report.suggestion.is_none());
    }

    #[test]
    fn exhausted_cap_means_no_hint_not_an_error() {
        let lexicon = fixture();
        let report = run_hint(&lexicon, "cat", "dog", Strategy::UniformCost, 1).unwrap();
        assert!(report.suggestion.is_none());
        assert_eq!(report.nodes_expanded, 1);
    }

    #[test]
    fn invalid_words_are_errors() {
        let lexicon = fixture();
        assert!(run_hint(&lexicon, "cow", "dog", Strategy::AStar, DEFAULT_HINT_CAP).is_err());
        assert!(run_hint(&lexicon, "c4t", "dog", Strategy::AStar, DEFAULT_HINT_CAP).is_err());
    }
}
