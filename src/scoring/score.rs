//! Round scoring
//!
//! Turns a finished ladder plus round context into a score breakdown. The
//! scorer is a pure function: it reads the search result and never mutates
//! it, and the same inputs always produce the same breakdown.

use std::time::Duration;

use crate::search::PathResult;

use super::difficulty::Difficulty;

/// How hint usage is charged
///
/// The exact weighting is a product decision that has shifted over time, so
/// it is a policy value rather than a hard-coded formula. `Progressive` is
/// the shipped behavior: each successive hint costs more than the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintPenalty {
    /// The i-th hint costs `i x hint_factor` (so n hints cost
    /// `hint_factor x n(n+1)/2`)
    #[default]
    Progressive,
    /// Every hint costs `hint_factor` flat
    Flat,
}

impl HintPenalty {
    /// Total points charged for `hints_used` hints at the given factor
    #[must_use]
    pub const fn charge(self, hints_used: u32, hint_factor: u32) -> u32 {
        match self {
            Self::Progressive => hint_factor * (hints_used * (hints_used + 1) / 2),
            Self::Flat => hint_factor * hints_used,
        }
    }
}

/// Itemized score for one round; derived once, never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Tier base score
    pub base: u32,
    /// Bonus for an optimal or near-optimal ladder
    pub optimality_bonus: u32,
    /// Signed time component: positive for a fast finish, negative for a
    /// slow one
    pub time_adjustment: i64,
    /// Penalty for steps beyond the optimal ladder
    pub move_penalty: u32,
    /// Penalty for hints spent
    pub hint_penalty: u32,
    /// Sum of all components, clamped at zero
    pub total: u32,
}

/// Score a finished round
///
/// `optimal_length` is the ground-truth shortest step count for the round's
/// word pair; callers obtain it by running one uniform-cost search, not by
/// re-deriving it here.
#[must_use]
pub fn score(
    result: &PathResult,
    difficulty: Difficulty,
    optimal_length: u32,
    elapsed: Duration,
    hints_used: u32,
    hint_penalty_policy: HintPenalty,
) -> ScoreBreakdown {
    let settings = difficulty.settings();
    let base = settings.base_score;

    let extra_moves = result.cost.saturating_sub(optimal_length);

    // Full bonus for a perfect ladder, partial credit up to two extra steps
    let optimality_bonus = match extra_moves {
        0 => settings.optimal_path_bonus,
        1 | 2 => settings.optimal_path_bonus * (5 - extra_moves) / 5,
        _ => 0,
    };

    let time_adjustment = match settings.time_limit {
        Some(limit) => {
            let used = elapsed.as_secs_f64() / limit.as_secs_f64();
            if used < 0.5 {
                // Finished in under half the budget
                ((0.5 - used) * f64::from(base) * 0.5) as i64
            } else if used > 0.8 {
                -(((used - 0.8) * f64::from(base) * 0.5) as i64)
            } else {
                0
            }
        }
        None => {
            // Untimed: mild drain, capped at 30% of the base score
            let drain = (elapsed.as_secs() * u64::from(settings.time_factor))
                .min(u64::from(base) * 3 / 10);
            -(drain as i64)
        }
    };

    let move_penalty = extra_moves * settings.move_factor;
    let hint_penalty = hint_penalty_policy.charge(hints_used, settings.hint_factor);

    let signed_total = i64::from(base) + i64::from(optimality_bonus) + time_adjustment
        - i64::from(move_penalty)
        - i64::from(hint_penalty);
    let total = signed_total.max(0) as u32;

    ScoreBreakdown {
        base,
        optimality_bonus,
        time_adjustment,
        move_penalty,
        hint_penalty,
        total,
    }
}
