//! Word-pair suggestion command
//!
//! Picks a playable (start, goal) pair for a difficulty tier: choose a random
//! start of a tier-appropriate length, walk breadth-first out to a random
//! target distance, pick a goal from that ring, and confirm the optimal
//! distance with a uniform-cost search before handing the pair out.

use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

use crate::core::Word;
use crate::scoring::Difficulty;
use crate::search::{Strategy, search};
use crate::wordlists::loader::lexicon_for_length;

/// Attempts before giving up on a tier (sparse dictionaries can make some
/// tiers unreachable)
const MAX_ATTEMPTS: usize = 50;

/// A playable word pair with its ground-truth optimal distance
#[derive(Debug)]
pub struct SuggestedPair {
    pub start: Word,
    pub goal: Word,
    pub optimal_length: u32,
}

/// Suggest a word pair for the given difficulty
///
/// Deterministic for a given dictionary and RNG state, which makes seeded
/// suggestions reproducible.
///
/// # Errors
///
/// Returns an error when no suitable pair turns up within the attempt
/// budget; the dictionary may simply not support the tier's word lengths
/// or ladder distances.
pub fn run_suggest<R: Rng>(
    words: &[Word],
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<SuggestedPair, String> {
    let settings = difficulty.settings();
    let (min_len, max_len) = settings.word_length_range;
    let (min_steps, tier_max_steps) = settings.path_length_range;
    // Aim inside a narrow band; the tier's upper bound only caps verification
    let max_target = tier_max_steps.min(min_steps + 3);

    for _ in 0..MAX_ATTEMPTS {
        let word_length = rng.random_range(min_len..=max_len);
        let Ok(lexicon) = lexicon_for_length(words, word_length) else {
            continue;
        };

        // Sorted so a seeded RNG picks the same word every run
        let mut members: Vec<Word> = lexicon.iter().cloned().collect();
        members.sort();
        let Some(start) = members.choose(rng).cloned() else {
            continue;
        };

        let target_distance = rng.random_range(min_steps..=max_target);

        // Level-synchronous BFS: after k rounds, `level` holds exactly the
        // words at distance k from the start
        let mut visited: FxHashSet<Word> = FxHashSet::default();
        visited.insert(start.clone());
        let mut level = vec![start.clone()];
        for _ in 0..target_distance {
            let mut next = Vec::new();
            for word in &level {
                for neighbor in lexicon.neighbors(word) {
                    if visited.insert(neighbor.clone()) {
                        next.push(neighbor);
                    }
                }
            }
            level = next;
            if level.is_empty() {
                break;
            }
        }
        if level.is_empty() {
            continue;
        }

        level.sort();
        let Some(goal) = level.choose(rng).cloned() else {
            continue;
        };

        // Confirm with ground truth before handing the pair out
        if let Ok(optimal) = search(&lexicon, &start, &goal, Strategy::UniformCost, None)
            && optimal.cost >= min_steps
            && optimal.cost <= tier_max_steps
        {
            return Ok(SuggestedPair {
                start,
                goal,
                optimal_length: optimal.cost,
            });
        }
    }

    Err(format!(
        "Could not find a {difficulty} word pair after {MAX_ATTEMPTS} attempts"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn suggested_beginner_pair_is_playable() {
        let words = words_from_slice(WORDS);
        let mut rng = StdRng::seed_from_u64(7);

        let pair = run_suggest(&words, Difficulty::Beginner, &mut rng).unwrap();

        assert_eq!(pair.start.len(), pair.goal.len());
        assert!((3..=4).contains(&pair.start.len()));
        assert!((2..=4).contains(&pair.optimal_length));
        assert_ne!(pair.start, pair.goal);
    }

    #[test]
    fn suggestion_is_reproducible_under_a_seed() {
        let words = words_from_slice(WORDS);

        let mut first_rng = StdRng::seed_from_u64(42);
        let first = run_suggest(&words, Difficulty::Beginner, &mut first_rng).unwrap();

        let mut second_rng = StdRng::seed_from_u64(42);
        let second = run_suggest(&words, Difficulty::Beginner, &mut second_rng).unwrap();

        assert_eq!(first.start, second.start);
        assert_eq!(first.goal, second.goal);
        assert_eq!(first.optimal_length, second.optimal_length);
    }

    #[test]
    fn sparse_dictionary_reports_failure() {
        // Two isolated words: no ladder of length >= 2 exists
        let words = words_from_slice(&["cat", "dog"]);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(run_suggest(&words, Difficulty::Beginner, &mut rng).is_err());
    }
}
