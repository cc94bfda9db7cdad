//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are pure, testable, and have
//! clear mathematical properties.

mod lexicon;
mod word;

pub use lexicon::{Lexicon, LexiconError};
pub use word::{Word, WordError};
