//! Performance benchmarks for the country search and phone validation paths.
//!
//! These benchmarks cover the work done on every keystroke:
//! - Filtering the embedded country list by name
//! - Rendering the visible list with flag URLs
//! - Normalizing and validating typed phone numbers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phone_input::matching::filter_countries;
use phone_input::selector::{render_countries, FlagUrlBuilder};
use phone_input::{CountryCatalog, PhoneValidator};
use std::time::Duration;

/// Benchmark filtering with queries of different selectivity.
fn bench_filter_countries(c: &mut Criterion) {
    let catalog = CountryCatalog::embedded().unwrap();
    let mut group = c.benchmark_group("filter_countries");

    for query in ["", "a", "united", "ger", "xyz"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, &query| {
            b.iter(|| filter_countries(black_box(query), catalog.entries()));
        });
    }

    group.finish();
}

/// Benchmark rendering the full list, as shown when the search box is empty.
fn bench_render_full_list(c: &mut Criterion) {
    let catalog = CountryCatalog::embedded().unwrap();
    let flags = FlagUrlBuilder::default();

    c.bench_function("render_full_list", |b| {
        b.iter(|| render_countries(black_box(catalog.entries()), &flags));
    });
}

/// Benchmark validation of a valid number and of a number that fails.
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for (label, dial_code, input) in [
        ("valid_us", "+1", "(201) 555-0123"),
        ("valid_gb", "+44", "7400 123456"),
        ("invalid_gb", "+44", "999"),
    ]
    .iter()
    {
        let mut validator = PhoneValidator::new();
        group.bench_with_input(BenchmarkId::from_parameter(label), input, |b, &input| {
            b.iter(|| validator.validate_input(black_box(dial_code), black_box(input)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_filter_countries,
        bench_render_full_list,
        bench_validate
}

criterion_main!(benches);
