//! Search result types and pagination.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::index::store::DocumentId;

/// A single ranked search result.
///
/// `Display` renders the line format consumers of the console printer
/// expect: `{ document_id = 2, relevance = 0.173287, rating = 2 }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// The document id.
    pub document_id: DocumentId,
    /// Accumulated TF-IDF relevance.
    pub relevance: f64,
    /// Average rating of the document.
    pub rating: i32,
}

impl ScoredDocument {
    /// Create a new scored document.
    pub fn new(document_id: DocumentId, relevance: f64, rating: i32) -> Self {
        ScoredDocument {
            document_id,
            relevance,
            rating,
        }
    }
}

/// Six significant digits with trailing zeros removed, matching default
/// stream formatting of doubles.
fn format_relevance(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).max(0) as usize;
    let formatted = format!("{value:.decimals$}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

impl fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.document_id,
            format_relevance(self.relevance),
            self.rating
        )
    }
}

/// Fixed-size chunking of an already-sorted result list.
///
/// # Examples
///
/// ```
/// use xyston::search::results::{Paginator, ScoredDocument};
///
/// let hits: Vec<_> = (0..5)
///     .map(|id| ScoredDocument::new(id, 0.0, 0))
///     .collect();
/// let pages: Vec<_> = Paginator::new(&hits, 2).iter().collect();
///
/// assert_eq!(pages.len(), 3);
/// assert_eq!(pages[0].len(), 2);
/// assert_eq!(pages[2].len(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Paginator<'a> {
    documents: &'a [ScoredDocument],
    page_size: usize,
}

impl<'a> Paginator<'a> {
    /// Split `documents` into pages of at most `page_size` entries.
    ///
    /// A page size of 0 is treated as 1.
    pub fn new(documents: &'a [ScoredDocument], page_size: usize) -> Self {
        Paginator {
            documents,
            page_size: page_size.max(1),
        }
    }

    /// Iterate over the pages, in order.
    pub fn iter(&self) -> impl Iterator<Item = Page<'a>> {
        self.documents.chunks(self.page_size).map(Page)
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.documents.len().div_ceil(self.page_size)
    }

    /// Whether there are no pages at all.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// One page of search results.
#[derive(Clone, Copy, Debug)]
pub struct Page<'a>(&'a [ScoredDocument]);

impl<'a> Page<'a> {
    /// The documents on this page.
    pub fn documents(&self) -> &'a [ScoredDocument] {
        self.0
    }

    /// Number of documents on this page.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this page holds no documents.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for document in self.0 {
            write!(f, "{document}")?;
        }
        Ok(())
    }
}
