//! Benchmarks for tokenizing and grouping throughput

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;
use wordy_core::{Accumulator, GroupingProcessor, Input, WordScanner};

/// Generate test text of specified size
fn generate_test_text(size_kb: usize) -> String {
    let base_text =
        "It was the best of times, it was the worst of times; it was the age of wisdom. ";
    let repetitions = size_kb * 1024 / base_text.len();

    base_text.repeat(repetitions)
}

fn benchmark_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");
    let text = generate_test_text(1024);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("1MB", |b| {
        b.iter(|| {
            let scanner = WordScanner::new(Cursor::new(black_box(text.as_bytes())));
            scanner.filter_map(Result::ok).count()
        });
    });

    group.finish();
}

fn benchmark_accumulator(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulator");
    let text = generate_test_text(256);
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphabetic()).to_lowercase())
        .collect();

    group.throughput(Throughput::Elements(tokens.len() as u64));
    for group_size in [1, 3, 5] {
        group.bench_function(format!("group_size_{group_size}"), |b| {
            b.iter(|| {
                let mut acc = Accumulator::new(group_size);
                for token in &tokens {
                    acc.add(black_box(token));
                }
                acc.report()
            });
        });
    }

    group.finish();
}

fn benchmark_processor(c: &mut Criterion) {
    let mut group = c.benchmark_group("processor");
    let text = generate_test_text(1024);
    let processor = GroupingProcessor::new();

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("1MB", |b| {
        b.iter(|| {
            processor
                .process(Input::from_text(black_box(text.clone())))
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scanner,
    benchmark_accumulator,
    benchmark_processor
);
criterion_main!(benches);
