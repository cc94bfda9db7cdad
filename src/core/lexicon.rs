//! The dictionary for one round: an immutable set of equal-length words
//!
//! Adjacency ("differs in exactly one letter") is computed on demand against
//! the membership set rather than materialized as a graph, so building a
//! lexicon over a large dictionary stays linear in the word count.

use std::fmt;

use rustc_hash::FxHashSet;

use super::word::Word;

/// Error type for lexicon construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// A supplied word's length disagrees with the first word's length
    LengthMismatch { expected: usize, actual: usize },
    /// Fewer than two distinct words were supplied
    TooFewWords(usize),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Expected words of length {expected}, got length {actual}")
            }
            Self::TooFewWords(count) => {
                write!(f, "A lexicon needs at least 2 distinct words, got {count}")
            }
        }
    }
}

impl std::error::Error for LexiconError {}

/// An immutable set of valid words, all of the same length
///
/// Built once per round (rebuilt only when the word length changes) and then
/// read-only, so it can be shared by reference across any number of searches.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: FxHashSet<Word>,
    word_length: usize,
}

impl Lexicon {
    /// Build a lexicon from an iterator of words
    ///
    /// Duplicates collapse silently; the word length is fixed by the first
    /// word seen.
    ///
    /// # Errors
    /// Returns `LexiconError::LengthMismatch` if the words are not all the
    /// same length, or `LexiconError::TooFewWords` if fewer than two distinct
    /// words were supplied. Construction never partially succeeds.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, LexiconError> {
        let mut set = FxHashSet::default();
        let mut word_length = None;

        for word in words {
            let expected = *word_length.get_or_insert(word.len());
            if word.len() != expected {
                return Err(LexiconError::LengthMismatch {
                    expected,
                    actual: word.len(),
                });
            }
            set.insert(word);
        }

        if set.len() < 2 {
            return Err(LexiconError::TooFewWords(set.len()));
        }

        Ok(Self {
            words: set,
            word_length: word_length.unwrap_or(0),
        })
    }

    /// The fixed length of every member word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of member words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction requires at least two words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a word is a member
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Iterate over the member words (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// All member words differing from `word` in exactly one position
    ///
    /// The query word itself is never included. Computed by trying every
    /// single-letter substitution (`length x 25` membership probes) in
    /// position-ascending, letter-ascending order; the returned order is
    /// therefore deterministic, which the search engine relies on for its
    /// insertion-order tie-break.
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<Word> {
        let mut found = Vec::new();
        let mut buf = word.bytes().to_vec();

        for position in 0..buf.len() {
            let original = buf[position];
            for letter in b'A'..=b'Z' {
                if letter == original {
                    continue;
                }
                buf[position] = letter;
                // buf stays uppercase ASCII throughout
                let candidate =
                    std::str::from_utf8(&buf).expect("single-letter swap keeps buf ASCII");
                if let Some(member) = self.words.get(candidate) {
                    found.push(member.clone());
                }
            }
            buf[position] = original;
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn construction_valid() {
        let lexicon = Lexicon::new(words(&["cat", "cot", "dog"])).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.word_length(), 3);
    }

    #[test]
    fn construction_collapses_duplicates() {
        let lexicon = Lexicon::new(words(&["cat", "CAT", "dog"])).unwrap();
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn construction_rejects_mixed_lengths() {
        let result = Lexicon::new(words(&["cat", "cart"]));
        assert_eq!(
            result.unwrap_err(),
            LexiconError::LengthMismatch {
                expected: 3,
                actual: 4
            }
        );
    }

    #[test]
    fn construction_rejects_too_few_words() {
        assert_eq!(
            Lexicon::new(words(&["cat"])).unwrap_err(),
            LexiconError::TooFewWords(1)
        );
        assert_eq!(Lexicon::new([]).unwrap_err(), LexiconError::TooFewWords(0));
        // Duplicates collapse before the size check
        assert_eq!(
            Lexicon::new(words(&["cat", "cat"])).unwrap_err(),
            LexiconError::TooFewWords(1)
        );
    }

    #[test]
    fn contains_is_membership() {
        let lexicon = Lexicon::new(words(&["cat", "cot", "dog"])).unwrap();
        assert!(lexicon.contains(&Word::new("cat").unwrap()));
        assert!(!lexicon.contains(&Word::new("cow").unwrap()));
    }

    #[test]
    fn neighbors_differ_in_exactly_one_position() {
        let lexicon = Lexicon::new(words(&[
            "cat", "cot", "cog", "dog", "dot", "cod", "bat", "bag",
        ]))
        .unwrap();

        for word in lexicon.iter() {
            for neighbor in lexicon.neighbors(word) {
                assert_ne!(&neighbor, word, "neighbors must not include the word itself");
                assert_eq!(
                    word.diff_count(&neighbor),
                    1,
                    "{word} -> {neighbor} differs in more than one position"
                );
                assert!(lexicon.contains(&neighbor));
            }
        }
    }

    #[test]
    fn neighbors_of_cat() {
        let lexicon = Lexicon::new(words(&["cat", "cot", "bat", "can", "dog"])).unwrap();
        let neighbors = lexicon.neighbors(&Word::new("cat").unwrap());
        let texts: Vec<&str> = neighbors.iter().map(Word::text).collect();

        // Position-ascending, letter-ascending enumeration order
        assert_eq!(texts, vec!["BAT", "COT", "CAN"]);
    }

    #[test]
    fn neighbors_for_isolated_word_is_empty() {
        let lexicon = Lexicon::new(words(&["cat", "dog"])).unwrap();
        assert!(lexicon.neighbors(&Word::new("cat").unwrap()).is_empty());
    }

    #[test]
    fn neighbors_excludes_non_members() {
        let lexicon = Lexicon::new(words(&["cat", "cot"])).unwrap();
        let neighbors = lexicon.neighbors(&Word::new("cat").unwrap());
        assert_eq!(neighbors, words(&["cot"]));
    }
}
