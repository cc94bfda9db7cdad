//! Letter-rank distance heuristic
//!
//! Estimates how "far" a word is from the goal by summing, per position, the
//! absolute difference of alphabetical ranks (A=1 ... Z=26). The estimate for
//! CAT against COT is |15-1| = 14: only the middle letters differ, O is rank
//! 15 and A is rank 1.
//!
//! This is a rank distance, not a graph distance, and it routinely
//! overestimates the true remaining step count (any single position is fixable
//! in one step regardless of rank gap). It is therefore NOT admissible in the
//! A* sense, and the strategies that consult it inherit that: A* here is
//! heuristic-guided, not provably optimal. That behavior is intentional and
//! relied upon by the strategy-comparison surface.

use crate::core::Word;

/// Rank distance between `word` and `goal`
///
/// Both words are assumed equal length; trailing positions of a longer word
/// are ignored (the search engine only ever compares lexicon members, which
/// share one length).
///
/// `rank_distance(w, w) == 0` for every word `w`.
#[must_use]
pub fn rank_distance(word: &Word, goal: &Word) -> u32 {
    word.bytes()
        .iter()
        .zip(goal.bytes())
        .map(|(&a, &b)| u32::from(a.abs_diff(b)))
        .sum()
}
