//! Word lists for ladder rounds
//!
//! Provides the embedded dictionary compiled into the binary plus loading
//! helpers for user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(
                (3..=6).contains(&word.len()),
                "Word '{word}' has unexpected length"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn classic_ladder_words_are_bundled() {
        for word in ["cat", "cot", "dot", "dog", "cold", "warm"] {
            assert!(WORDS.contains(&word), "'{word}' missing from dictionary");
        }
    }
}
