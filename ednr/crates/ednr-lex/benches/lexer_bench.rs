//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package ednr-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ednr_lex::Lexer;

fn token_count(source: &str) -> usize {
    let (tokens, _) = Lexer::new(source).lex().expect("benchmark input must lex");
    tokens.len()
}

fn bench_lexer_atoms(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_atoms");

    group.bench_function("keywords", |b| {
        b.iter(|| token_count(black_box(":a :b :c :ns/d :e :f")))
    });

    group.bench_function("symbols", |b| {
        b.iter(|| token_count(black_box("alpha beta my.ns/gamma delta-4")))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integers", |b| {
        b.iter(|| token_count(black_box("1 -2 300 4000 -50000 600000")))
    });

    group.bench_function("mixed_bases", |b| {
        b.iter(|| token_count(black_box("0xDEADBEEF 0777 2r101010 36rZZ 22/7 3.14159")))
    });

    group.finish();
}

fn bench_lexer_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_document");

    let source = r#"
        {:name "benchmark"
         :version 3
         :tags #{:reader :edn :tokens}
         :coords [1.5 -2.25 3.75]
         :meta ^:cached {:ratio 22/7, :mask 0xFF}
         :entries (#inst "2024-01-01" #_ ignored ##Inf)}
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("small_document", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_atoms,
    bench_lexer_numbers,
    bench_lexer_document
);
criterion_main!(benches);
