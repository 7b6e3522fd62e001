//! Sliding-window accounting of search requests.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::index::store::DocumentStatus;
use crate::search::engine::{DocumentPredicate, SearchEngine};
use crate::search::results::ScoredDocument;

/// Number of requests that make up one tracked "day".
pub const DEFAULT_WINDOW: usize = 1440;

/// One recorded request outcome.
#[derive(Clone, Debug)]
struct RequestRecord {
    query: String,
    was_empty: bool,
}

#[derive(Debug, Default)]
struct HistoryState {
    requests: VecDeque<RequestRecord>,
    no_result_count: usize,
}

/// Tracks how many recent requests returned no documents.
///
/// The window holds one "day" of requests; once it is full, each new
/// request evicts the oldest record. The no-result counter is maintained
/// incrementally alongside the window (they change together, under one
/// lock) and is read in O(1).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use xyston::analysis::stop::StopWordSet;
/// use xyston::search::engine::SearchEngine;
/// use xyston::search::history::RequestHistory;
///
/// # fn main() -> xyston::error::Result<()> {
/// let engine = Arc::new(SearchEngine::new(StopWordSet::default()));
/// let history = RequestHistory::new(Arc::clone(&engine));
///
/// history.add_find_request("empty request")?;
/// assert_eq!(history.no_result_requests(), 1);
/// # Ok(())
/// # }
/// ```
pub struct RequestHistory {
    engine: Arc<SearchEngine>,
    window: usize,
    state: Mutex<HistoryState>,
}

impl std::fmt::Debug for RequestHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("RequestHistory")
            .field("window", &self.window)
            .field("requests", &state.requests.len())
            .field("no_result_count", &state.no_result_count)
            .finish()
    }
}

impl RequestHistory {
    /// Track requests against `engine` with the default one-day window.
    pub fn new(engine: Arc<SearchEngine>) -> Self {
        Self::with_window(engine, DEFAULT_WINDOW)
    }

    /// Track requests with a custom window size (clamped to at least 1).
    pub fn with_window(engine: Arc<SearchEngine>, window: usize) -> Self {
        RequestHistory {
            engine,
            window: window.max(1),
            state: Mutex::new(HistoryState::default()),
        }
    }

    /// Run a query with status `Actual`, record its outcome, and return
    /// the results unchanged.
    pub fn add_find_request(&self, query: &str) -> Result<Vec<ScoredDocument>> {
        let results = self.engine.find_top_documents(query)?;
        self.record(query, &results);
        Ok(results)
    }

    /// Run a query with the given status, recording its outcome.
    pub fn add_find_request_with_status(
        &self,
        query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        let results = self.engine.find_top_documents_with_status(query, status)?;
        self.record(query, &results);
        Ok(results)
    }

    /// Run a query with an arbitrary predicate, recording its outcome.
    ///
    /// A query that fails to parse propagates the error and records
    /// nothing.
    pub fn add_find_request_by<P: DocumentPredicate>(
        &self,
        query: &str,
        predicate: P,
    ) -> Result<Vec<ScoredDocument>> {
        let results = self.engine.find_top_documents_by(query, predicate)?;
        self.record(query, &results);
        Ok(results)
    }

    /// How many requests in the current window returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.state.lock().no_result_count
    }

    /// Number of requests currently in the window.
    pub fn len(&self) -> usize {
        self.state.lock().requests.len()
    }

    /// Whether no requests have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.state.lock().requests.is_empty()
    }

    /// Snapshot of the query texts currently in the window, oldest first.
    pub fn recent_queries(&self) -> Vec<String> {
        self.state
            .lock()
            .requests
            .iter()
            .map(|record| record.query.clone())
            .collect()
    }

    fn record(&self, query: &str, results: &[ScoredDocument]) {
        let mut state = self.state.lock();
        if state.requests.len() == self.window {
            if let Some(evicted) = state.requests.pop_front() {
                if evicted.was_empty {
                    state.no_result_count -= 1;
                }
            }
        }
        let was_empty = results.is_empty();
        state.requests.push_back(RequestRecord {
            query: query.to_string(),
            was_empty,
        });
        if was_empty {
            state.no_result_count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stop::StopWordSet;
    use crate::error::XystonError;
    use crate::index::store::DocumentStatus;

    fn engine() -> Arc<SearchEngine> {
        let engine = SearchEngine::new(StopWordSet::parse("and in at").unwrap());
        engine
            .add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7])
            .unwrap();
        Arc::new(engine)
    }

    #[test]
    fn test_counts_empty_requests() {
        let history = RequestHistory::new(engine());

        history.add_find_request("sparrow").unwrap();
        history.add_find_request("cat").unwrap();
        history.add_find_request("pigeon").unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history.no_result_requests(), 2);
    }

    #[test]
    fn test_window_eviction_updates_counter() {
        let history = RequestHistory::with_window(engine(), 3);

        history.add_find_request("sparrow").unwrap();
        history.add_find_request("pigeon").unwrap();
        history.add_find_request("cat").unwrap();
        assert_eq!(history.no_result_requests(), 2);

        // Window is full; "sparrow" (empty) is evicted.
        history.add_find_request("cat").unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.no_result_requests(), 1);

        // "pigeon" (empty) is evicted next.
        history.add_find_request("cat").unwrap();
        assert_eq!(history.no_result_requests(), 0);
    }

    #[test]
    fn test_results_are_returned_unchanged() {
        let history = RequestHistory::new(engine());
        let results = history.add_find_request("cat").unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].document_id, 1);
    }

    #[test]
    fn test_parse_failure_records_nothing() {
        let history = RequestHistory::new(engine());

        assert!(matches!(
            history.add_find_request("--bad"),
            Err(XystonError::InvalidQueryWord(_))
        ));
        assert!(history.is_empty());
        assert_eq!(history.no_result_requests(), 0);
    }

    #[test]
    fn test_recent_queries_snapshot() {
        let history = RequestHistory::with_window(engine(), 2);

        history.add_find_request("one").unwrap();
        history.add_find_request("two").unwrap();
        history.add_find_request("three").unwrap();

        assert_eq!(history.recent_queries(), vec!["two", "three"]);
    }

    #[test]
    fn test_predicate_and_status_variants_record() {
        let history = RequestHistory::new(engine());

        history
            .add_find_request_with_status("cat", DocumentStatus::Banned)
            .unwrap();
        history
            .add_find_request_by(
                "cat",
                |_id: i64, _status: DocumentStatus, rating: i32| rating > 10,
            )
            .unwrap();

        // Both found nothing under their filters.
        assert_eq!(history.no_result_requests(), 2);
    }
}
