//! Word list loading utilities
//!
//! Turns raw word sources (the embedded dictionary or a user-supplied file)
//! into `Word` values and per-length lexicons. The search core only ever
//! sees a finished `Lexicon`; where the words came from is this module's
//! business.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::{Lexicon, LexiconError, Word};

/// Load words from a file, one word per line
///
/// Blank lines and entries that fail word validation are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use ladderlab::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use ladderlab::wordlists::loader::words_from_slice;
/// use ladderlab::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build the lexicon for one word length out of a mixed-length dictionary
///
/// # Errors
///
/// Returns `LexiconError::TooFewWords` when the dictionary has fewer than two
/// words of the requested length.
pub fn lexicon_for_length(words: &[Word], length: usize) -> Result<Lexicon, LexiconError> {
    Lexicon::new(words.iter().filter(|w| w.len() == length).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cat", "dog", "cot"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CAT");
    }

    #[test]
    fn words_from_slice_skips_invalid_entries() {
        let input = &["cat", "d0g", "", "cot"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
    }

    #[test]
    fn lexicon_for_length_filters() {
        let words = words_from_slice(&["cat", "dog", "cold", "warm", "cot"]);

        let three = lexicon_for_length(&words, 3).unwrap();
        assert_eq!(three.len(), 3);
        assert_eq!(three.word_length(), 3);

        let four = lexicon_for_length(&words, 4).unwrap();
        assert_eq!(four.len(), 2);
    }

    #[test]
    fn lexicon_for_length_rejects_sparse_lengths() {
        let words = words_from_slice(&["cat", "dog", "cold"]);
        assert_eq!(
            lexicon_for_length(&words, 4).unwrap_err(),
            LexiconError::TooFewWords(1)
        );
        assert_eq!(
            lexicon_for_length(&words, 9).unwrap_err(),
            LexiconError::TooFewWords(0)
        );
    }

    #[test]
    fn embedded_dictionary_builds_playable_lexicons() {
        let words = words_from_slice(WORDS);
        for length in 3..=6 {
            let lexicon = lexicon_for_length(&words, length).unwrap();
            assert!(lexicon.len() >= 2, "length {length} too sparse");
        }
    }
}
