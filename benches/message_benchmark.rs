//! Benchmarks for hancut message processing.
//!
//! Run with: cargo bench
//!
//! These benchmarks test the normalizers and the segmentation pipeline at
//! various message sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Creates a synthetic chat message with the given number of sentences.
fn create_test_message(sentence_count: usize) -> String {
    let mut message = String::new();

    for i in 0..sentence_count {
        message.push_str(&format!(
            "第{}句：我今天在北京吃了<noun{}>，味道“很好”！Really, it's great (no kidding). ",
            i, i
        ));
    }

    message
}

/// Benchmark full-width conversion.
fn bench_full_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_width");

    for count in [1, 10, 100].iter() {
        let message = create_test_message(*count);
        group.throughput(Throughput::Bytes(message.len() as u64));
        group.bench_with_input(BenchmarkId::new("sentences", count), &message, |b, msg| {
            b.iter(|| hancut::convert_full_width_char(black_box(msg)));
        });
    }

    group.finish();
}

/// Benchmark the cleaner rule table.
fn bench_clean_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean_message");

    for count in [1, 10, 100].iter() {
        let message = hancut::convert_full_width_char(&create_test_message(*count));
        group.throughput(Throughput::Bytes(message.len() as u64));
        group.bench_with_input(BenchmarkId::new("sentences", count), &message, |b, msg| {
            b.iter(|| hancut::clean_message(black_box(msg)));
        });
    }

    group.finish();
}

/// Benchmark boundary-aware segmentation with the default engine.
fn bench_cut(c: &mut Criterion) {
    let mut group = c.benchmark_group("cut");

    // Load the dictionary outside the measurement
    let _ = hancut::cut("预热");

    for count in [1, 10, 100].iter() {
        let message = create_test_message(*count);
        group.throughput(Throughput::Bytes(message.len() as u64));
        group.bench_with_input(BenchmarkId::new("sentences", count), &message, |b, msg| {
            b.iter(|| hancut::cut(black_box(msg)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the fast path for messages without Chinese characters.
fn bench_cut_fast_path(c: &mut Criterion) {
    let message = "Really, it's great (no kidding). ".repeat(100);

    c.bench_function("cut_no_chinese", |b| {
        b.iter(|| hancut::cut(black_box(&message)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_full_width,
    bench_clean_message,
    bench_cut,
    bench_cut_fast_path,
);
criterion_main!(benches);
