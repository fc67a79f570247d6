//! Validation and Query-Building Benchmarks
//!
//! Benchmarks for the per-request hot path that runs before the store is
//! touched:
//! - Limit parsing
//! - Exclusion grammar parsing (small and large filters)
//! - Bound query construction

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vocalis::{build_query, parse_excluded, parse_limit, validate};

fn bench_parse_limit(c: &mut Criterion) {
    c.bench_function("parse_limit_plain", |b| {
        b.iter(|| parse_limit(black_box(Some("42"))));
    });

    c.bench_function("parse_limit_decimal_suffix", |b| {
        b.iter(|| parse_limit(black_box(Some("50.5"))));
    });
}

fn bench_parse_excluded(c: &mut Criterion) {
    c.bench_function("parse_excluded_small", |b| {
        b.iter(|| parse_excluded(black_box(Some("p225=001,002;p226=003,004"))));
    });

    // 50 speakers x 10 sequences each
    let large: String = (0..50)
        .map(|i| {
            let seqs: Vec<String> = (0..10).map(|j| format!("{j:03}")).collect();
            format!("p{i:03}={}", seqs.join(","))
        })
        .collect::<Vec<_>>()
        .join(";");

    c.bench_function("parse_excluded_large", |b| {
        b.iter(|| parse_excluded(black_box(Some(large.as_str()))));
    });
}

fn bench_build_query(c: &mut Criterion) {
    let excluded = parse_excluded(Some("p225=001,002;p226=003,004;p227=005")).unwrap();

    c.bench_function("build_query_filtered", |b| {
        b.iter(|| build_query(black_box(10), black_box(&excluded)));
    });

    c.bench_function("validate_and_build_end_to_end", |b| {
        b.iter(|| {
            let (limit, excluded) =
                validate(black_box(Some("10")), black_box(Some("p225=001,002;p226=003"))).unwrap();
            build_query(limit, &excluded)
        });
    });
}

criterion_group!(benches, bench_parse_limit, bench_parse_excluded, bench_build_query);
criterion_main!(benches);
