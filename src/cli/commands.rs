//! Command implementations for the xyston CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::stop::StopWordSet;
use crate::cli::args::{Command, MatchArgs, OutputFormat, SearchArgs, StatsArgs, XystonArgs};
use crate::cli::output::{MatchOutput, SearchOutput, StatsOutput, output_result};
use crate::error::Result;
use crate::index::store::DocumentStatus;
use crate::search::config::SearchConfig;
use crate::search::engine::SearchEngine;
use crate::search::results::Paginator;

/// One document line in a JSONL input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: i64,
    pub text: String,
    #[serde(default = "DocumentRecord::default_status")]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

impl DocumentRecord {
    fn default_status() -> DocumentStatus {
        DocumentStatus::Actual
    }
}

/// Execute a CLI command.
pub fn execute_command(args: XystonArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_documents(search_args.clone(), &args),
        Command::Match(match_args) => match_one_document(match_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Build an engine from stop words and a JSONL document file.
fn load_engine(stop_words: &str, document_file: &Path, config: SearchConfig) -> Result<SearchEngine> {
    let stop_words = StopWordSet::parse(stop_words)?;
    let engine = SearchEngine::with_config(stop_words, config);

    let file = File::open(document_file)?;
    let reader = BufReader::new(file);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: DocumentRecord = serde_json::from_str(&line)?;
        engine.add_document(record.id, &record.text, record.status, &record.ratings)?;
    }
    debug!(
        "loaded {} documents from {}",
        engine.document_count(),
        document_file.display()
    );
    Ok(engine)
}

/// Run a ranked query over a document file.
fn search_documents(args: SearchArgs, cli_args: &XystonArgs) -> Result<()> {
    let config = SearchConfig::default().with_max_results(args.max_results);

    let start = Instant::now();
    let engine = load_engine(&args.stop_words, &args.document_file, config)?;
    let hits = engine.find_top_documents_with_status(&args.query, args.status.into())?;
    let duration_ms = start.elapsed().as_millis() as u64;
    info!("query {:?} matched {} documents", args.query, hits.len());

    if cli_args.output_format == OutputFormat::Human {
        if let Some(page_size) = args.page_size {
            for (number, page) in Paginator::new(&hits, page_size).iter().enumerate() {
                println!("Page {}:", number + 1);
                println!("{page}");
            }
            return Ok(());
        }
    }

    output_result(
        "Search finished",
        &SearchOutput {
            total_hits: hits.len(),
            hits,
            duration_ms,
        },
        cli_args,
    )
}

/// Report which query words match one document.
fn match_one_document(args: MatchArgs, cli_args: &XystonArgs) -> Result<()> {
    let start = Instant::now();
    let engine = load_engine(&args.stop_words, &args.document_file, SearchConfig::default())?;
    let (matched_words, status) = engine.match_document(&args.query, args.document_id)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        "Match finished",
        &MatchOutput {
            document_id: args.document_id,
            matched_words,
            status,
            duration_ms,
        },
        cli_args,
    )
}

/// Load a document file and report index statistics.
fn show_stats(args: StatsArgs, cli_args: &XystonArgs) -> Result<()> {
    let start = Instant::now();
    let engine = load_engine(&args.stop_words, &args.document_file, SearchConfig::default())?;
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        "Stats finished",
        &StatsOutput {
            total_documents: engine.document_count(),
            total_terms: engine.term_count(),
            duration_ms,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_record_defaults() {
        let record: DocumentRecord =
            serde_json::from_str(r#"{"id": 1, "text": "curly cat"}"#).unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.status, DocumentStatus::Actual);
        assert!(record.ratings.is_empty());
    }

    #[test]
    fn test_document_record_full() {
        let record: DocumentRecord = serde_json::from_str(
            r#"{"id": 2, "text": "curly dog", "status": "banned", "ratings": [1, 2, 3]}"#,
        )
        .unwrap();

        assert_eq!(record.status, DocumentStatus::Banned);
        assert_eq!(record.ratings, vec![1, 2, 3]);
    }
}
