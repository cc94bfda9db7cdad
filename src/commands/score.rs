//! Round scoring command
//!
//! Validates a player-submitted ladder, establishes the optimal length with
//! one uniform-cost search, and produces the score breakdown.

use std::time::Duration;

use crate::core::{Lexicon, Word};
use crate::scoring::{Difficulty, HintPenalty, ScoreBreakdown, score};
use crate::search::{PathResult, Strategy, search};

/// A scored round, ready for display
#[derive(Debug)]
pub struct ScoreReport {
    pub difficulty: Difficulty,
    pub ladder: Vec<Word>,
    pub player_steps: u32,
    pub optimal_length: u32,
    pub hints_used: u32,
    pub elapsed: Duration,
    pub breakdown: ScoreBreakdown,
}

/// Score a submitted ladder
///
/// # Errors
///
/// Returns an error if:
/// - The ladder has fewer than two words, a malformed word, or a non-member
/// - Any consecutive pair differs in anything other than exactly one letter
/// - No optimal path exists between the ladder's endpoints (cannot happen
///   for a ladder that itself validates, but reported rather than assumed)
pub fn run_score(
    lexicon: &Lexicon,
    ladder: &[String],
    difficulty: Difficulty,
    elapsed: Duration,
    hints_used: u32,
    hint_penalty_policy: HintPenalty,
) -> Result<ScoreReport, String> {
    let ladder = parse_ladder(ladder)?;
    validate_ladder(lexicon, &ladder)?;

    let start = &ladder[0];
    let goal = &ladder[ladder.len() - 1];

    // Ground truth for the optimality bonus: one uniform-cost search
    let optimal = search(lexicon, start, goal, Strategy::UniformCost, None)
        .map_err(|e| e.to_string())?;

    let player_steps = (ladder.len() - 1) as u32;
    let result = PathResult {
        words: ladder.clone(),
        cost: player_steps,
        nodes_expanded: 0,
        elapsed,
    };

    let breakdown = score(
        &result,
        difficulty,
        optimal.cost,
        elapsed,
        hints_used,
        hint_penalty_policy,
    );

    Ok(ScoreReport {
        difficulty,
        ladder,
        player_steps,
        optimal_length: optimal.cost,
        hints_used,
        elapsed,
        breakdown,
    })
}

fn parse_ladder(ladder: &[String]) -> Result<Vec<Word>, String> {
    if ladder.len() < 2 {
        return Err("A ladder needs at least a start and a goal word".to_string());
    }
    ladder
        .iter()
        .map(|text| Word::new(text).map_err(|e| format!("Invalid word '{text}': {e}")))
        .collect()
}

/// Every word must be a member and every step must change exactly one letter
fn validate_ladder(lexicon: &Lexicon, ladder: &[Word]) -> Result<(), String> {
    for word in ladder {
        if !lexicon.contains(word) {
            return Err(format!("'{word}' is not in the lexicon for this round"));
        }
    }
    for pair in ladder.windows(2) {
        let changed = pair[0].diff_count(&pair[1]);
        if changed != 1 {
            return Err(format!(
                "'{}' -> '{}' changes {changed} letters; each step must change exactly one",
                pair[0], pair[1]
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Lexicon {
        let words = ["cat", "cot", "cog", "dog", "dot", "cod"]
            .map(|t| Word::new(t).unwrap());
        Lexicon::new(words).unwrap()
    }

    fn ladder(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn optimal_ladder_earns_full_bonus() {
        let lexicon = fixture();
        let report = run_score(
            &lexicon,
            &ladder(&["cat", "cot", "dot", "dog"]),
            Difficulty::Beginner,
            Duration::from_secs(30),
            0,
            HintPenalty::Progressive,
        )
        .unwrap();

        assert_eq!(report.player_steps, 3);
        assert_eq!(report.optimal_length, 3);
        assert_eq!(report.breakdown.optimality_bonus, 300);
        // 30s x factor 2 untimed drain
        assert_eq!(report.breakdown.time_adjustment, -60);
        assert_eq!(report.breakdown.total, 1000 + 300 - 60);
    }

    #[test]
    fn detour_costs_bonus_and_moves() {
        let lexicon = fixture();
        let report = run_score(
            &lexicon,
            &ladder(&["cat", "cot", "cod", "cot", "dot", "dog"]),
            Difficulty::Beginner,
            Duration::ZERO,
            0,
            HintPenalty::Progressive,
        )
        .unwrap();

        assert_eq!(report.player_steps, 5);
        assert_eq!(report.optimal_length, 3);
        assert_eq!(report.breakdown.optimality_bonus, 300 * 3 / 5);
        assert_eq!(report.breakdown.move_penalty, 2 * 25);
    }

    #[test]
    fn rejects_non_member_words() {
        let lexicon = fixture();
        let result = run_score(
            &lexicon,
            &ladder(&["cat", "cow", "dog"]),
            Difficulty::Beginner,
            Duration::ZERO,
            0,
            HintPenalty::Progressive,
        );
        assert!(result.unwrap_err().contains("COW"));
    }

    #[test]
    fn rejects_steps_changing_more_than_one_letter() {
        let lexicon = fixture();
        let result = run_score(
            &lexicon,
            &ladder(&["cat", "dot", "dog"]),
            Difficulty::Beginner,
            Duration::ZERO,
            0,
            HintPenalty::Progressive,
        );
        assert!(result.unwrap_err().contains("exactly one"));
    }

    #[test]
    fn rejects_single_word_ladders() {
        let lexicon = fixture();
        let result = run_score(
            &lexicon,
            &ladder(&["cat"]),
            Difficulty::Beginner,
            Duration::ZERO,
            0,
            HintPenalty::Progressive,
        );
        assert!(result.is_err());
    }

    #[test]
    fn hints_are_charged_by_policy() {
        let lexicon = fixture();
        let report = run_score(
            &lexicon,
            &ladder(&["cat", "cot", "dot", "dog"]),
            Difficulty::Beginner,
            Duration::ZERO,
            2,
            HintPenalty::Progressive,
        )
        .unwrap();

        // 50 x (1 + 2)
        assert_eq!(report.breakdown.hint_penalty, 150);
    }
}
