//! Criterion benchmarks for the xyston search engine.
//!
//! Covers the two hot paths: document indexing and ranked queries.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use xyston::prelude::*;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "search", "engine", "full", "text", "index", "query", "document", "term", "relevance",
        "score", "rating", "status", "tokenize", "filter", "stop", "word", "ranking", "curly",
        "dog", "cat", "sparrow", "collar", "tail", "fancy", "big", "small", "grey", "brown",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 10 + (i % 30);
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }
        documents.push(doc_words.join(" "));
    }

    documents
}

fn populated_engine(documents: &[String]) -> SearchEngine {
    let engine = SearchEngine::new(StopWordSet::parse("the a of and").unwrap());
    for (i, text) in documents.iter().enumerate() {
        engine
            .add_document(i as i64, text, DocumentStatus::Actual, &[1, 2, 3])
            .unwrap();
    }
    engine
}

fn bench_indexing(c: &mut Criterion) {
    let documents = generate_test_documents(1000);

    let mut group = c.benchmark_group("indexing");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("add_document_1000", |b| {
        b.iter(|| {
            let engine = populated_engine(&documents);
            black_box(engine.document_count())
        })
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let documents = generate_test_documents(1000);
    let engine = populated_engine(&documents);

    let mut group = c.benchmark_group("search");
    group.bench_function("find_top_documents", |b| {
        b.iter(|| black_box(engine.find_top_documents("curly dog sparrow").unwrap()))
    });
    group.bench_function("find_top_documents_with_minus_term", |b| {
        b.iter(|| black_box(engine.find_top_documents("search engine -ranking").unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_indexing, bench_search);
criterion_main!(benches);
