//! Query parser for converting raw query text into term sets.

use std::collections::BTreeSet;

use crate::analysis::stop::StopWordSet;
use crate::analysis::tokenizer::{WhitespaceTokenizer, is_valid_word};
use crate::error::{Result, XystonError};

/// A parsed query: required terms and excluded minus-terms.
///
/// Both sets are deduplicated. A document containing any excluded term is
/// removed from results no matter how many required terms it matches.
/// Ordered sets keep scoring and matching deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    /// Terms a document is scored on.
    pub required: BTreeSet<String>,
    /// Terms that disqualify a document.
    pub excluded: BTreeSet<String>,
}

impl Query {
    /// Whether the query carries no terms at all.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.excluded.is_empty()
    }
}

/// Parses raw query text, dropping stop words and validating minus-terms.
///
/// # Examples
///
/// ```
/// use xyston::analysis::stop::StopWordSet;
/// use xyston::query::parser::QueryParser;
///
/// let parser = QueryParser::new(StopWordSet::parse("and").unwrap());
/// let query = parser.parse("curly and -dog").unwrap();
///
/// assert!(query.required.contains("curly"));
/// assert!(query.excluded.contains("dog"));
/// ```
#[derive(Clone, Debug)]
pub struct QueryParser {
    tokenizer: WhitespaceTokenizer,
    stop_words: StopWordSet,
}

impl QueryParser {
    /// Create a parser that drops the given stop words.
    pub fn new(stop_words: StopWordSet) -> Self {
        QueryParser {
            tokenizer: WhitespaceTokenizer::new(),
            stop_words,
        }
    }

    /// Parse query text into a [`Query`].
    ///
    /// A leading `-` marks a term as excluded, with the marker stripped.
    /// Fails with [`XystonError::InvalidQueryWord`] when a token is empty
    /// after stripping the marker, starts with a second `-`, or contains a
    /// control character. Stop words are silently dropped from both sets.
    pub fn parse(&self, text: &str) -> Result<Query> {
        let mut query = Query::default();
        for token in self.tokenizer.tokenize(text) {
            let (word, is_minus) = match token.strip_prefix('-') {
                Some(rest) => (rest, true),
                None => (token, false),
            };
            if word.is_empty() || word.starts_with('-') || !is_valid_word(word) {
                return Err(XystonError::invalid_query_word(format!(
                    "query word {token:?} is malformed"
                )));
            }
            if self.stop_words.contains(word) {
                continue;
            }
            if is_minus {
                query.excluded.insert(word.to_string());
            } else {
                query.required.insert(word.to_string());
            }
        }
        Ok(query)
    }
}
