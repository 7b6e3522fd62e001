//! The search engine: indexing, ranking, and document matching.

use std::cmp::Ordering;

use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;

use crate::analysis::stop::StopWordSet;
use crate::analysis::tokenizer::{WhitespaceTokenizer, is_valid_word};
use crate::error::{Result, XystonError};
use crate::index::inverted::InvertedIndex;
use crate::index::store::{DocumentId, DocumentInfo, DocumentStatus, DocumentStore};
use crate::query::parser::{Query, QueryParser};
use crate::search::config::SearchConfig;
use crate::search::results::ScoredDocument;

/// Filter over candidate documents during ranking.
///
/// Implemented for any `Fn(DocumentId, DocumentStatus, i32) -> bool`
/// closure; [`StatusPredicate`] wraps the common filter-by-status case.
pub trait DocumentPredicate {
    /// Whether the document should be scored.
    fn accept(&self, document_id: DocumentId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocumentId, DocumentStatus, i32) -> bool,
{
    fn accept(&self, document_id: DocumentId, status: DocumentStatus, rating: i32) -> bool {
        self(document_id, status, rating)
    }
}

/// Predicate accepting documents with one specific status.
#[derive(Clone, Copy, Debug)]
pub struct StatusPredicate(pub DocumentStatus);

impl DocumentPredicate for StatusPredicate {
    fn accept(&self, _document_id: DocumentId, status: DocumentStatus, _rating: i32) -> bool {
        status == self.0
    }
}

/// Index state guarded by the engine's writer lock.
#[derive(Debug, Default)]
struct EngineState {
    index: InvertedIndex,
    store: DocumentStore,
}

/// An in-memory search engine with TF-IDF ranking.
///
/// Document insertion is atomic: a document is either fully indexed or not
/// inserted at all. Mutable state sits behind a single writer lock, so
/// concurrent readers never observe a half-indexed document.
///
/// # Examples
///
/// ```
/// use xyston::analysis::stop::StopWordSet;
/// use xyston::index::store::DocumentStatus;
/// use xyston::search::engine::SearchEngine;
///
/// # fn main() -> xyston::error::Result<()> {
/// let engine = SearchEngine::new(StopWordSet::parse("and in at")?);
/// engine.add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7])?;
/// engine.add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[1, 2, 3])?;
///
/// // "dog" is the rarer term, so document 2 ranks first.
/// let results = engine.find_top_documents("curly dog")?;
/// assert_eq!(results[0].document_id, 2);
/// # Ok(())
/// # }
/// ```
pub struct SearchEngine {
    tokenizer: WhitespaceTokenizer,
    stop_words: StopWordSet,
    parser: QueryParser,
    config: SearchConfig,
    state: RwLock<EngineState>,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("SearchEngine")
            .field("documents", &state.store.len())
            .field("terms", &state.index.term_count())
            .field("stop_words", &self.stop_words.len())
            .finish()
    }
}

impl SearchEngine {
    /// Create an engine with the given stop words and default settings.
    pub fn new(stop_words: StopWordSet) -> Self {
        Self::with_config(stop_words, SearchConfig::default())
    }

    /// Create an engine with explicit ranking settings.
    pub fn with_config(stop_words: StopWordSet, config: SearchConfig) -> Self {
        SearchEngine {
            tokenizer: WhitespaceTokenizer::new(),
            parser: QueryParser::new(stop_words.clone()),
            stop_words,
            config,
            state: RwLock::new(EngineState::default()),
        }
    }

    /// The stop words this engine was built with.
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// The engine's ranking settings.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.state.read().store.len()
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.state.read().index.term_count()
    }

    /// The id of the nth inserted document.
    ///
    /// Fails with [`XystonError::IndexOutOfRange`] past the current count.
    pub fn document_id(&self, n: usize) -> Result<DocumentId> {
        self.state.read().store.id_at(n)
    }

    /// Index a document.
    ///
    /// The id must be non-negative and not yet present. Words are validated
    /// before anything is mutated, so a rejected document leaves the index
    /// untouched. A document with no words left after stop-word filtering
    /// is accepted: it occupies its id and counts toward the document
    /// total, but never matches a query.
    pub fn add_document(
        &self,
        document_id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id < 0 {
            return Err(XystonError::invalid_document(format!(
                "document id {document_id} is negative"
            )));
        }

        let mut words = Vec::new();
        for word in self.tokenizer.tokenize(text) {
            if !is_valid_word(word) {
                return Err(XystonError::invalid_word(format!(
                    "document word {word:?} contains a control character"
                )));
            }
            if !self.stop_words.contains(word) {
                words.push(word);
            }
        }
        let rating = DocumentStore::average_rating(ratings);

        let mut state = self.state.write();
        if state.store.contains(document_id) {
            return Err(XystonError::invalid_document(format!(
                "document id {document_id} already exists"
            )));
        }
        if !words.is_empty() {
            let tf = 1.0 / words.len() as f64;
            for word in &words {
                state.index.add_term(word, document_id, tf);
            }
        }
        state.store.insert(document_id, DocumentInfo { rating, status });
        debug!(
            "indexed document {document_id} with {} words, rating {rating}",
            words.len()
        );
        Ok(())
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, query: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with_status(query, DocumentStatus::Actual)
    }

    /// Top documents with the given status.
    pub fn find_top_documents_with_status(
        &self,
        query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_by(query, StatusPredicate(status))
    }

    /// Top documents accepted by `predicate`.
    ///
    /// Results are sorted by descending relevance; relevances closer than
    /// the configured epsilon count as tied and are ordered by descending
    /// rating. At most `max_results` documents are returned. A term absent
    /// from the index contributes nothing; an excluded term removes its
    /// documents unconditionally.
    pub fn find_top_documents_by<P: DocumentPredicate>(
        &self,
        query: &str,
        predicate: P,
    ) -> Result<Vec<ScoredDocument>> {
        let query = self.parser.parse(query)?;

        let mut results = {
            let state = self.state.read();
            Self::find_all_documents(&state, &query, &predicate)
        };

        let epsilon = self.config.epsilon;
        results.sort_by(|lhs, rhs| {
            if (lhs.relevance - rhs.relevance).abs() < epsilon {
                rhs.rating.cmp(&lhs.rating)
            } else {
                rhs.relevance
                    .partial_cmp(&lhs.relevance)
                    .unwrap_or(Ordering::Equal)
            }
        });
        results.truncate(self.config.max_results);
        Ok(results)
    }

    /// Score every candidate document for `query`, without ordering.
    fn find_all_documents<P: DocumentPredicate>(
        state: &EngineState,
        query: &Query,
        predicate: &P,
    ) -> Vec<ScoredDocument> {
        let total_documents = state.store.len();
        if total_documents == 0 {
            return Vec::new();
        }

        let mut relevance: AHashMap<DocumentId, f64> = AHashMap::new();
        for word in &query.required {
            let Some(postings) = state.index.postings(word) else {
                continue;
            };
            let idf = (total_documents as f64 / postings.len() as f64).ln();
            for (&document_id, &tf) in postings {
                let Some(info) = state.store.get(document_id) else {
                    continue;
                };
                if predicate.accept(document_id, info.status, info.rating) {
                    *relevance.entry(document_id).or_insert(0.0) += tf * idf;
                }
            }
        }

        // Exclusion is unconditional: it ignores the predicate entirely.
        for word in &query.excluded {
            let Some(postings) = state.index.postings(word) else {
                continue;
            };
            for &document_id in postings.keys() {
                relevance.remove(&document_id);
            }
        }

        relevance
            .into_iter()
            .filter_map(|(document_id, relevance)| {
                state
                    .store
                    .get(document_id)
                    .map(|info| ScoredDocument::new(document_id, relevance, info.rating))
            })
            .collect()
    }

    /// The required query terms present in the given document, sorted.
    ///
    /// If the document contains any excluded term, the word list is empty
    /// (not an error). Fails with [`XystonError::InvalidDocument`] for an
    /// unknown id.
    pub fn match_document(
        &self,
        query: &str,
        document_id: DocumentId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = self.parser.parse(query)?;
        let state = self.state.read();
        let Some(info) = state.store.get(document_id) else {
            return Err(XystonError::invalid_document(format!(
                "document id {document_id} does not exist"
            )));
        };

        let mut matched = Vec::new();
        for word in &query.required {
            if state.index.contains(word, document_id) {
                matched.push(word.clone());
            }
        }
        for word in &query.excluded {
            if state.index.contains(word, document_id) {
                matched.clear();
                break;
            }
        }
        Ok((matched, info.status))
    }
}
