use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use primeval::cards::{parse_cards, Card};
use primeval::evaluator::{hash_five, HandEvaluator};

fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).expect("bench hand parses")
}

fn bench_evaluate_five(c: &mut Criterion) {
    let ev = HandEvaluator::global();
    let hi = cards("Ah Kd 7s 5c 2d");
    let flush = cards("7d Ad 5d 9d 3d");
    let sf = cards("As Ks Qs Js Ts");

    let mut g = c.benchmark_group("evaluate_five");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| ev.evaluate_five(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("flush", "A,9,7,5,3"), &flush, |b, input| {
        b.iter(|| ev.evaluate_five(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &sf, |b, input| {
        b.iter(|| ev.evaluate_five(black_box(input)))
    });
    g.finish();
}

fn bench_evaluate_seven(c: &mut Criterion) {
    let ev = HandEvaluator::global();
    let seven = cards("As Ah Ks Qs Js Ts 9s");
    c.bench_function("evaluate_seven", |b| b.iter(|| ev.evaluate(black_box(&seven))));
}

fn bench_hash(c: &mut Criterion) {
    let five = cards("6h 9s 4s 5h 3c");
    c.bench_function("hash_five", |b| b.iter(|| hash_five(black_box(&five))));
}

fn bench_build(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");
    g.sample_size(10);
    g.bench_function("tables", |b| b.iter(HandEvaluator::build));
    g.finish();
}

criterion_group!(benches, bench_evaluate_five, bench_evaluate_seven, bench_hash, bench_build);
criterion_main!(benches);
