//! Round scoring
//!
//! Difficulty tiers and the pure scoring function that converts a finished
//! ladder plus round context into an itemized breakdown.

mod difficulty;
mod score;

pub use difficulty::{Difficulty, DifficultySettings};
pub use score::{HintPenalty, ScoreBreakdown, score};
