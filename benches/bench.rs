//! Criterion benchmarks for the Javelin search engine.
//!
//! Covers the two hot paths: building the inverted index from a corpus, and
//! evaluating queries under each strategy against an already-built engine.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use javelin::engine::SearchEngine;
use javelin::query::Strategy;
use std::hint::black_box;

/// Generate test records for benchmarking.
fn generate_test_records(count: usize) -> Vec<String> {
    let words = vec![
        "alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi", "ivan", "judy",
        "smith", "jones", "brown", "taylor", "walker", "wright", "green", "hall", "wood", "clark",
        "engineer", "nurse", "doctor", "artist", "writer", "pilot", "farmer", "lawyer",
    ];

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let record_length = 4 + (i % 8);
        let mut record_words = Vec::with_capacity(record_length);

        for j in 0..record_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            record_words.push(words[word_idx]);
        }

        records.push(record_words.join(" "));
    }

    records
}

fn bench_index_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_construction");

    for count in [100, 1_000, 10_000] {
        let records = generate_test_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("build_{count}"), |b| {
            b.iter(|| {
                let engine = SearchEngine::from_lines(black_box(records.clone())).unwrap();
                black_box(engine.len())
            })
        });
    }

    group.finish();
}

fn bench_query_evaluation(c: &mut Criterion) {
    let records = generate_test_records(10_000);
    let engine = SearchEngine::from_lines(records).unwrap();

    let mut group = c.benchmark_group("query_evaluation");

    for strategy in Strategy::ALL_STRATEGIES {
        group.bench_function(format!("search_{strategy}"), |b| {
            b.iter(|| {
                let hits = engine
                    .search(black_box("alice smith engineer"), strategy)
                    .unwrap();
                black_box(hits.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_index_construction, bench_query_evaluation);
criterion_main!(benches);
