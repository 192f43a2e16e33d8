//! Benchmarks for similarity algorithms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzmatch_similarity::{compare, rank, tokenize, Candidate, Mode, RankOptions};

fn create_test_candidates(count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| Candidate::new(i.to_string(), format!("IMG_{:05}_holiday-photo ({}).jpg", i, i % 7)))
        .collect()
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    let a = "QuarterlyReport_2023-final (copy).pdf";
    let b = "quarterly report 2023 final.pdf";

    for mode in Mode::ALL {
        group.bench_with_input(BenchmarkId::new("mode", mode), &mode, |bench, &mode| {
            bench.iter(|| compare(black_box(a), black_box(b), mode))
        });
    }

    group.finish();
}

fn bench_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance_length");

    for len in [8usize, 64, 256].iter() {
        let a: String = "abcdefgh".chars().cycle().take(*len).collect();
        let b: String = "badcfehg".chars().cycle().take(*len).collect();

        group.bench_with_input(BenchmarkId::new("levenshtein", len), len, |bench, _| {
            bench.iter(|| compare(black_box(&a), black_box(&b), Mode::Levenshtein))
        });
        group.bench_with_input(BenchmarkId::new("damerau", len), len, |bench, _| {
            bench.iter(|| compare(black_box(&a), black_box(&b), Mode::DamerauLevenshtein))
        });
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box("John's_BigHolidayTrip-2023 (final).v2.zip")))
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [10, 100, 1000].iter() {
        let candidates = create_test_candidates(*size);
        let options = RankOptions::default().with_limit(10);

        group.bench_with_input(BenchmarkId::new("levenshtein", size), size, |b, _| {
            b.iter(|| rank(black_box("holiday photo 00042.jpg"), black_box(&candidates), &options))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_modes, bench_lengths, bench_tokenize, bench_rank);
criterion_main!(benches);
