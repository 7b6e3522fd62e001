//! Configuration for the search engine.

use serde::{Deserialize, Serialize};

/// Default cap on the number of documents returned by a query.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default tolerance below which two relevance values count as tied.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Tunables for ranking and truncation.
///
/// Relevance values are sums of floating-point products, so comparing them
/// exactly is unsafe; `epsilon` absorbs the accumulation error, with ties
/// broken by rating.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of documents returned by a single query.
    pub max_results: usize,
    /// Relevance difference below which two documents count as tied.
    pub epsilon: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_results: DEFAULT_MAX_RESULTS,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl SearchConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of returned documents.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the relevance tie tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();

        assert_eq!(config.max_results, 5);
        assert_eq!(config.epsilon, 1e-6);
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::new().with_max_results(10).with_epsilon(1e-9);

        assert_eq!(config.max_results, 10);
        assert_eq!(config.epsilon, 1e-9);
    }
}
