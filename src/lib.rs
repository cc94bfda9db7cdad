//! Ladderlab
//!
//! Word-ladder pathfinding over an implicit graph: every dictionary word of a
//! given length is a node, and two words are adjacent when they differ in
//! exactly one letter. Three interchangeable best-first strategies
//! (uniform-cost, greedy, A*) share one search engine, and finished rounds
//! are scored against the uniform-cost ground truth.
//!
//! # Quick Start
//!
//! ```rust
//! use ladderlab::core::{Lexicon, Word};
//! use ladderlab::search::{Strategy, search};
//!
//! let words = ["cat", "cot", "dot", "dog"].map(|w| Word::new(w).unwrap());
//! let lexicon = Lexicon::new(words).unwrap();
//!
//! let start = Word::new("cat").unwrap();
//! let goal = Word::new("dog").unwrap();
//! let result = search(&lexicon, &start, &goal, Strategy::UniformCost, None).unwrap();
//!
//! assert_eq!(result.cost, 3);
//! ```

// Core domain types
pub mod core;

// Path search engine and strategies
pub mod search;

// Difficulty tiers and round scoring
pub mod scoring;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
