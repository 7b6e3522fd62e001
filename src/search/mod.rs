//! Ranked search: engine, configuration, results, and request history.

pub mod config;
pub mod engine;
pub mod history;
pub mod results;

pub use config::SearchConfig;
pub use engine::{DocumentPredicate, SearchEngine, StatusPredicate};
pub use history::RequestHistory;
pub use results::{Page, Paginator, ScoredDocument};
