//! Engine throughput: binomial coefficients and whole-game tier tables.
//!
//! Run with: `cargo bench --bench binomial`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lotto_odds::combinatorics::{binomial, prize_tiers, LotteryConfiguration};

fn bench_binomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial");
    group.bench_function("c_49_6", |b| b.iter(|| binomial(black_box(49), black_box(6))));
    group.bench_function("c_100_50", |b| {
        b.iter(|| binomial(black_box(100), black_box(50)))
    });
    group.finish();
}

fn bench_tier_table(c: &mut Criterion) {
    let config = LotteryConfiguration::with_bonus(49, 6).expect("6 of 49 is valid");
    c.bench_function("prize_tiers_6_of_49_bonus", |b| {
        b.iter(|| prize_tiers(black_box(&config)))
    });
}

criterion_group!(benches, bench_binomial, bench_tier_table);
criterion_main!(benches);
