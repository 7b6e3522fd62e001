//! Document metadata storage.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, XystonError};

/// Document identifier.
///
/// Ids are non-negative; the signed representation lets the API reject
/// negative input instead of silently wrapping it.
pub type DocumentId = i64;

/// Moderation status of an indexed document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Actual => "actual",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        };
        write!(f, "{name}")
    }
}

/// Immutable per-document metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Average rating, computed once at insertion.
    pub rating: i32,
    /// Moderation status.
    pub status: DocumentStatus,
}

/// Maps document ids to their metadata and preserves insertion order.
#[derive(Clone, Debug, Default)]
pub struct DocumentStore {
    documents: AHashMap<DocumentId, DocumentInfo>,
    insertion_order: Vec<DocumentId>,
}

impl DocumentStore {
    /// Create an empty document store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a document with this id has been recorded.
    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Look up the metadata for a document.
    pub fn get(&self, id: DocumentId) -> Option<DocumentInfo> {
        self.documents.get(&id).copied()
    }

    /// Record a document. The caller has already validated the id.
    pub fn insert(&mut self, id: DocumentId, info: DocumentInfo) {
        self.documents.insert(id, info);
        self.insertion_order.push(id);
    }

    /// Number of recorded documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The id of the nth inserted document.
    pub fn id_at(&self, n: usize) -> Result<DocumentId> {
        self.insertion_order.get(n).copied().ok_or_else(|| {
            XystonError::index_out_of_range(format!(
                "document index {n} is out of range for {} documents",
                self.insertion_order.len()
            ))
        })
    }

    /// Integer division of the rating sum by the rating count, 0 if no
    /// ratings were supplied.
    pub fn average_rating(ratings: &[i32]) -> i32 {
        if ratings.is_empty() {
            return 0;
        }
        ratings.iter().sum::<i32>() / ratings.len() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut store = DocumentStore::new();
        let info = DocumentInfo {
            rating: 0,
            status: DocumentStatus::Actual,
        };
        store.insert(5, info);
        store.insert(1, info);
        store.insert(3, info);

        assert_eq!(store.len(), 3);
        assert_eq!(store.id_at(0).unwrap(), 5);
        assert_eq!(store.id_at(1).unwrap(), 1);
        assert_eq!(store.id_at(2).unwrap(), 3);
    }

    #[test]
    fn test_id_at_out_of_range() {
        let store = DocumentStore::new();

        assert!(matches!(
            store.id_at(0),
            Err(XystonError::IndexOutOfRange(_))
        ));
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(DocumentStore::average_rating(&[]), 0);
        assert_eq!(DocumentStore::average_rating(&[7, 2, 7]), 5);
        assert_eq!(DocumentStore::average_rating(&[1, 2, 3]), 2);
        // truncated, not rounded
        assert_eq!(DocumentStore::average_rating(&[1, 2]), 1);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(DocumentStatus::Actual.to_string(), "actual");
        assert_eq!(DocumentStatus::Banned.to_string(), "banned");
    }
}
