//! Benchmarks for range normalization and calculation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tahfizh_range::{
    CalcOptions, LocationRegistry, RangeCalculator, RangeEndpoint, RangeNormalizer,
    ResultFormatter,
};

fn calculator() -> RangeCalculator<'static> {
    RangeCalculator::new(LocationRegistry::shared(), CalcOptions::default())
}

fn bench_same_page(c: &mut Criterion) {
    let calculator = calculator();
    let from = RangeEndpoint::quran("An-Naba", 1);
    let to = RangeEndpoint::quran("An-Naba", 10);
    c.bench_function("calculate_same_page", |b| {
        b.iter(|| calculator.calculate(black_box(&from), black_box(&to)));
    });
}

fn bench_whole_juz(c: &mut Criterion) {
    let calculator = calculator();
    let from = RangeEndpoint::quran("An-Nas", 6);
    let to = RangeEndpoint::quran("An-Naba", 1);
    c.bench_function("calculate_reversed_juz_30", |b| {
        b.iter(|| calculator.calculate(black_box(&from), black_box(&to)));
    });
}

fn bench_iqra(c: &mut Criterion) {
    let calculator = calculator();
    c.bench_function("calculate_iqra_str", |b| {
        b.iter(|| calculator.calculate_str(black_box("Iqra' 1: 10 - Iqra' 2: 5")));
    });
}

fn bench_normalize_str(c: &mut Criterion) {
    let normalizer = RangeNormalizer::new(LocationRegistry::shared());
    c.bench_function("normalize_str", |b| {
        b.iter(|| normalizer.normalize_str(black_box("an nazi'at: 5 - AN-NABA: 1")));
    });
}

fn bench_unknown_surah(c: &mut Criterion) {
    let calculator = calculator();
    c.bench_function("calculate_unknown_surah", |b| {
        b.iter(|| calculator.calculate_fields(black_box("Al-Nabaa"), "1", "An-Naba", "10"));
    });
}

fn bench_format(c: &mut Criterion) {
    let result = calculator().calculate_str("An-Naba: 1 - An-Nazi'at: 5");
    let formatter = ResultFormatter::default();
    c.bench_function("format_long", |b| {
        b.iter(|| formatter.format(black_box(&result)));
    });
}

criterion_group!(
    benches,
    bench_same_page,
    bench_whole_juz,
    bench_iqra,
    bench_normalize_str,
    bench_unknown_surah,
    bench_format,
);
criterion_main!(benches);
