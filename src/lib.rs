//! # Xyston
//!
//! A small in-memory text search engine: documents with ratings and a
//! moderation status go in, ranked top-K results come out.
//!
//! ## Features
//!
//! - Whitespace tokenization with control-character validation
//! - Stop word filtering at both index and query time
//! - Required and excluded ("minus") query terms
//! - TF-IDF relevance with rating tie-breaks
//! - Pluggable document predicates for filtering
//! - Sliding-window accounting of no-result requests

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod query;
pub mod search;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::analysis::stop::StopWordSet;
    pub use crate::analysis::tokenizer::WhitespaceTokenizer;
    pub use crate::error::{Result, XystonError};
    pub use crate::index::store::{DocumentId, DocumentStatus};
    pub use crate::query::parser::{Query, QueryParser};
    pub use crate::search::config::SearchConfig;
    pub use crate::search::engine::{DocumentPredicate, SearchEngine, StatusPredicate};
    pub use crate::search::history::RequestHistory;
    pub use crate::search::results::{Page, Paginator, ScoredDocument};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
