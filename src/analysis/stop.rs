//! Stop word set implementation.
//!
//! Stop words are excluded from indexing and querying entirely: they never
//! reach the inverted index and never affect ranking.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::tokenizer::{WhitespaceTokenizer, is_valid_word};
use crate::error::{Result, XystonError};

/// An immutable set of words excluded from indexing and querying.
///
/// The set is validated once at construction and shared cheaply afterwards.
///
/// # Examples
///
/// ```
/// use xyston::analysis::stop::StopWordSet;
///
/// let stop_words = StopWordSet::parse("and in at").unwrap();
/// assert!(stop_words.contains("in"));
/// assert!(!stop_words.contains("cat"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StopWordSet {
    words: Arc<HashSet<String>>,
}

impl StopWordSet {
    /// Create a stop word set from a collection of words.
    ///
    /// Empty words are silently dropped. Fails with
    /// [`XystonError::InvalidWord`] if any word contains a control
    /// character.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.into();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(&word) {
                return Err(XystonError::invalid_word(format!(
                    "stop word {word:?} contains a control character"
                )));
            }
            set.insert(word);
        }
        Ok(StopWordSet {
            words: Arc::new(set),
        })
    }

    /// Create a stop word set from a whitespace-delimited string.
    ///
    /// Sugar over [`StopWordSet::from_words`] built on the tokenizer.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(WhitespaceTokenizer::new().tokenize(text))
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stop words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| word.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words() {
        let stop_words = StopWordSet::from_words(["the", "and", "or"]).unwrap();

        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("and"));
        assert!(!stop_words.contains("cat"));
    }

    #[test]
    fn test_parse_whitespace_delimited() {
        let stop_words = StopWordSet::parse("and in \t at").unwrap();

        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("at"));
    }

    #[test]
    fn test_empty_words_are_dropped() {
        let stop_words = StopWordSet::from_words(["", "the", ""]).unwrap();

        assert_eq!(stop_words.len(), 1);
    }

    #[test]
    fn test_duplicates_collapse() {
        let stop_words = StopWordSet::from_words(["the", "the"]).unwrap();

        assert_eq!(stop_words.len(), 1);
    }

    #[test]
    fn test_invalid_word_rejected() {
        let result = StopWordSet::from_words(["the", "a\u{2}b"]);

        assert!(matches!(result, Err(XystonError::InvalidWord(_))));
    }

    #[test]
    fn test_iter() {
        let stop_words = StopWordSet::from_words(["b", "a"]).unwrap();
        let mut words: Vec<_> = stop_words.iter().collect();
        words.sort_unstable();

        assert_eq!(words, vec!["a", "b"]);
    }
}
