//! Ladder path search
//!
//! One frontier-based engine parameterized by strategy, the letter-rank
//! heuristic that guides two of the three strategies, and the result types.

mod engine;
mod heuristic;
mod strategy;

pub use engine::{PathResult, SearchError, search};
pub use heuristic::rank_distance;
pub use strategy::Strategy;
