// ============================================================================
// Decimal Matcher Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Valid inputs - parse plus both rule checks on the happy path
// 2. Invalid inputs - parse failure short-circuit
// 3. Violating inputs - rule checks that record violations
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_matcher::prelude::*;

fn benchmark_valid_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_inputs");
    let matcher = DecimalNumberMatcher::new(MatcherConfig::limits(15, 6));

    for input in ["7", "99.99", "123456789.123456", "-0.000001"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, input| {
            b.iter(|| black_box(matcher.match_value(Some(black_box(input)))));
        });
    }

    group.finish();
}

fn benchmark_invalid_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("invalid_inputs");
    let matcher = DecimalNumberMatcher::with_defaults();

    for input in ["", "abc", "1.2.3", "12,5"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, input| {
            b.iter(|| black_box(matcher.match_value(Some(black_box(input)))));
        });
    }

    group.finish();
}

fn benchmark_violating_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("violating_inputs");
    let matcher = DecimalNumberMatcher::new(MatcherConfig::limits(4, 2));

    // One violation and the double-violation worst case
    for input in ["99999", "999.999"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, input| {
            b.iter(|| black_box(matcher.match_value(Some(black_box(input)))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_valid_inputs,
    benchmark_invalid_inputs,
    benchmark_violating_inputs
);
criterion_main!(benches);
