//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, XystonArgs};
use crate::error::Result;
use crate::index::store::DocumentStatus;
use crate::search::results::ScoredDocument;

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutput {
    pub hits: Vec<ScoredDocument>,
    pub total_hits: usize,
    pub duration_ms: u64,
}

impl fmt::Display for SearchOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hit in &self.hits {
            writeln!(f, "{hit}")?;
        }
        write!(f, "{} documents in {} ms", self.total_hits, self.duration_ms)
    }
}

/// Result structure for match operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchOutput {
    pub document_id: i64,
    pub matched_words: Vec<String>,
    pub status: DocumentStatus,
    pub duration_ms: u64,
}

impl fmt::Display for MatchOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "document {}: status = {}, matched words: {}",
            self.document_id,
            self.status,
            if self.matched_words.is_empty() {
                "(none)".to_string()
            } else {
                self.matched_words.join(" ")
            }
        )
    }
}

/// Index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsOutput {
    pub total_documents: usize,
    pub total_terms: usize,
    pub duration_ms: u64,
}

impl fmt::Display for StatsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "documents: {}", self.total_documents)?;
        writeln!(f, "terms: {}", self.total_terms)?;
        write!(f, "loaded in {} ms", self.duration_ms)
    }
}

/// Print a result in the format selected on the command line.
pub fn output_result<T: Serialize + fmt::Display>(
    message: &str,
    data: &T,
    args: &XystonArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(data)?
            } else {
                serde_json::to_string(data)?
            };
            println!("{json}");
        }
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
            }
            println!("{data}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_output_display() {
        let output = SearchOutput {
            hits: vec![ScoredDocument::new(1, 0.0, 5)],
            total_hits: 1,
            duration_ms: 3,
        };

        assert_eq!(
            output.to_string(),
            "{ document_id = 1, relevance = 0, rating = 5 }\n1 documents in 3 ms"
        );
    }

    #[test]
    fn test_match_output_display() {
        let output = MatchOutput {
            document_id: 2,
            matched_words: vec!["curly".to_string(), "fancy".to_string()],
            status: DocumentStatus::Actual,
            duration_ms: 1,
        };

        assert_eq!(
            output.to_string(),
            "document 2: status = actual, matched words: curly fancy"
        );
    }

    #[test]
    fn test_match_output_display_no_words() {
        let output = MatchOutput {
            document_id: 2,
            matched_words: Vec::new(),
            status: DocumentStatus::Banned,
            duration_ms: 0,
        };

        assert_eq!(
            output.to_string(),
            "document 2: status = banned, matched words: (none)"
        );
    }
}
