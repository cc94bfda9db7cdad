//! Strategy comparison command
//!
//! Runs all three strategies on the same word pair so their behavior
//! differences (path quality vs. expansion count) are visible side by side.

use crate::core::{Lexicon, Word};
use crate::search::{PathResult, SearchError, Strategy, search};

/// One strategy's outcome in a comparison run
#[derive(Debug)]
pub struct CompareRow {
    pub strategy: Strategy,
    pub outcome: Result<PathResult, SearchError>,
}

/// All strategies' outcomes for one word pair
#[derive(Debug)]
pub struct CompareReport {
    pub start: Word,
    pub goal: Word,
    pub rows: Vec<CompareRow>,
}

/// Run every strategy on the same pair
///
/// Per-strategy failures land in the row outcomes; only malformed input
/// words fail the command itself.
///
/// # Errors
///
/// Returns an error if start or goal fails word validation.
pub fn run_compare(
    lexicon: &Lexicon,
    start: &str,
    goal: &str,
    cap: Option<usize>,
) -> Result<CompareReport, String> {
    let start = Word::new(start).map_err(|e| format!("Invalid start word: {e}"))?;
    let goal = Word::new(goal).map_err(|e| format!("Invalid goal word: {e}"))?;

    let rows = Strategy::all()
        .into_iter()
        .map(|strategy| CompareRow {
            strategy,
            outcome: search(lexicon, &start, &goal, strategy, cap),
        })
        .collect();

    Ok(CompareReport { start, goal, rows })
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
    fn compare_runs_every_strategy() {
        let lexicon = fixture();
        let report = run_compare(&lexicon, "cat", "dog", None).unwrap();

        assert_eq!(report.rows.len(), 3);
        for row in &report.rows {
            let result = row.outcome.as_ref().unwrap();
            assert_eq!(result.cost, 3, "{}", row.strategy);
        }
    }

    #[test]
    fn uniform_cost_row_is_the_lower_bound() {
        let lexicon = fixture();
        let report = run_compare(&lexicon, "cat", "dog", None).unwrap();

        let ucs_cost = report
            .rows
            .iter()
            .find(|r| r.strategy == Strategy::UniformCost)
            .and_then(|r| r.outcome.as_ref().ok())
            .map(|r| r.cost)
            .unwrap();

        for row in &report.rows {
            if let Ok(result) = &row.outcome {
                assert!(result.cost >= ucs_cost);
            }
        }
    }

    #[test]
    fn compare_surfaces_per_strategy_failures() {
        let lexicon = fixture();
        // COW is not a member: every row carries the same structured failure
        let report = run_compare(&lexicon, "cow", "dog", None).unwrap();
        for row in &report.rows {
            assert!(matches!(
                row.outcome,
                Err(SearchError::InvalidWordPair { .. })
            ));
        }
    }
}
