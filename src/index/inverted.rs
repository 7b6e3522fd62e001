//! Inverted index mapping terms to per-document frequencies.

use ahash::AHashMap;

use crate::index::store::DocumentId;

/// Maps each indexed term to the documents containing it and the term's
/// frequency within each document.
///
/// Frequencies are fractions of the document's word count, so repeated
/// occurrences of a term accumulate and the frequencies of one document's
/// distinct terms sum to 1.
#[derive(Clone, Debug, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, AHashMap<DocumentId, f64>>,
}

impl InvertedIndex {
    /// Create an empty inverted index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `tf` for `term` in the given document.
    pub fn add_term(&mut self, term: &str, document_id: DocumentId, tf: f64) {
        *self
            .postings
            .entry(term.to_string())
            .or_default()
            .entry(document_id)
            .or_insert(0.0) += tf;
    }

    /// The documents containing `term`, with their term frequencies.
    pub fn postings(&self, term: &str) -> Option<&AHashMap<DocumentId, f64>> {
        self.postings.get(term)
    }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, |postings| postings.len())
    }

    /// Whether the given document contains `term`.
    pub fn contains(&self, term: &str, document_id: DocumentId) -> bool {
        self.postings
            .get(term)
            .is_some_and(|postings| postings.contains_key(&document_id))
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
