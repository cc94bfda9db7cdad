//! Best-first path search over the lexicon's implicit graph
//!
//! One engine serves all three strategies: the strategy only supplies the
//! frontier ordering key (see [`Strategy::priority`]). The shared machinery
//! guarantees the invariants the strategies must agree on: deterministic
//! tie-breaking, discovery semantics, and failure/cap handling.
//!
//! Nodes live in an arena `Vec` and refer to their predecessor by index, so
//! path reconstruction is a backward index walk with no ownership cycles.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::core::{Lexicon, Word};

use super::heuristic::rank_distance;
use super::strategy::Strategy;

/// A completed search: the ladder plus the statistics that drove it
///
/// For identical inputs the engine reproduces `words`, `cost`, and
/// `nodes_expanded` exactly; `elapsed` is measured wall time and will vary.
#[derive(Debug, Clone)]
pub struct PathResult {
    /// The ladder from start to goal, both inclusive
    pub words: Vec<Word>,
    /// Number of steps taken (edges all cost 1, so cost = `words.len() - 1`)
    pub cost: u32,
    /// Nodes expanded before the goal was popped
    pub nodes_expanded: usize,
    /// Wall time spent inside the search call
    pub elapsed: Duration,
}

impl PathResult {
    /// The first move along the ladder, if any
    ///
    /// This is what a hint shows the player: the word right after the start.
    /// `None` when start and goal coincide.
    #[must_use]
    pub fn next_step(&self) -> Option<&Word> {
        self.words.get(1)
    }
}

/// Error type for a failed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal is not a member of the lexicon; reported before any
    /// expansion happens
    InvalidWordPair { word: Word },
    /// The frontier emptied, or the expansion cap ran out, before the goal
    /// was reached. A normal outcome for disconnected word pairs.
    NoPathFound { nodes_expanded: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordPair { word } => {
                write!(f, "'{word}' is not in the lexicon for this round")
            }
            Self::NoPathFound { nodes_expanded } => {
                write!(f, "No path found after expanding {nodes_expanded} words")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Transient per-search record; the arena owns these for one call only
struct SearchNode {
    word: Word,
    cost: u32,
    parent: Option<usize>,
}

/// Search for a ladder from `start` to `goal`
///
/// The frontier is keyed by `(strategy priority, insertion sequence)`, so
/// equal-priority entries expand first-seen-first and repeated runs are
/// reproducible. A word is (re)discovered only when the new route to it is
/// strictly cheaper than the best recorded one; stale frontier entries are
/// skipped on pop. Greedy shares this discovery rule, keeping it a complete
/// best-first search (it backtracks through the frontier) even though its
/// ordering ignores cost.
///
/// `max_expansions` bounds latency for hint-style queries: once the budget is
/// spent the search fails exactly like an exhausted frontier.
///
/// # Errors
/// - `SearchError::InvalidWordPair` if start or goal is not a lexicon member
///   (checked before any expansion)
/// - `SearchError::NoPathFound` if the frontier empties or the expansion cap
///   is exceeded before the goal is popped
pub fn search(
    lexicon: &Lexicon,
    start: &Word,
    goal: &Word,
    strategy: Strategy,
    max_expansions: Option<usize>,
) -> Result<PathResult, SearchError> {
    let started = Instant::now();

    for word in [start, goal] {
        if !lexicon.contains(word) {
            return Err(SearchError::InvalidWordPair { word: word.clone() });
        }
    }

    let mut nodes = vec![SearchNode {
        word: start.clone(),
        cost: 0,
        parent: None,
    }];
    let mut best_cost: FxHashMap<Word, u32> = FxHashMap::default();
    best_cost.insert(start.clone(), 0);

    // Reverse-ordered min-heap; `seq` makes the tie-break insertion order
    let mut frontier: BinaryHeap<Reverse<(u32, u64, usize)>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    frontier.push(Reverse((
        strategy.priority(0, rank_distance(start, goal)),
        seq,
        0,
    )));

    let mut expanded: usize = 0;

    while let Some(Reverse((_, _, index))) = frontier.pop() {
        let current = nodes[index].word.clone();
        let cost = nodes[index].cost;

        // A cheaper route to this word superseded this entry
        if best_cost.get(&current) != Some(&cost) {
            continue;
        }

        if current == *goal {
            let words = reconstruct(&nodes, index);
            return Ok(PathResult {
                words,
                cost,
                nodes_expanded: expanded,
                elapsed: started.elapsed(),
            });
        }

        if let Some(cap) = max_expansions
            && expanded >= cap
        {
            return Err(SearchError::NoPathFound {
                nodes_expanded: expanded,
            });
        }
        expanded += 1;

        for neighbor in lexicon.neighbors(&current) {
            let next_cost = cost + 1;
            if best_cost
                .get(&neighbor)
                .is_none_or(|&recorded| next_cost < recorded)
            {
                best_cost.insert(neighbor.clone(), next_cost);
                let estimate = rank_distance(&neighbor, goal);
                nodes.push(SearchNode {
                    word: neighbor,
                    cost: next_cost,
                    parent: Some(index),
                });
                seq += 1;
                frontier.push(Reverse((
                    strategy.priority(next_cost, estimate),
                    seq,
                    nodes.len() - 1,
                )));
            }
        }
    }

    Err(SearchError::NoPathFound {
        nodes_expanded: expanded,
    })
}

/// Walk parent indices back to the start, then flip
fn reconstruct(nodes: &[SearchNode], goal_index: usize) -> Vec<Word> {
    let mut path = Vec::new();
    let mut index = Some(goal_index);
    while let Some(i) = index {
        path.push(nodes[i].word.clone());
        index = nodes[i].parent;
    }
    path.reverse();
    path
}
