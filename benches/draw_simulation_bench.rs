//! Compare single-worker vs all-core draw simulation.
//!
//! Run with: `cargo bench --bench draw_simulation`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lotto_odds::combinatorics::LotteryConfiguration;
use lotto_odds::parallel::WorkerPool;
use lotto_odds::simulation::{simulate, SimulationConfig};

fn bench_simulation_workers(c: &mut Criterion) {
    let config = LotteryConfiguration::with_bonus(49, 6).expect("6 of 49 is valid");
    let sim = SimulationConfig {
        draws: 100_000,
        seed: 42,
    };

    let mut group = c.benchmark_group("draw_simulation");
    group.sample_size(20);
    group.throughput(Throughput::Elements(sim.draws as u64));

    let single = WorkerPool::with_workers(1);
    group.bench_function("single_worker", |b| {
        b.iter(|| simulate(black_box(&config), black_box(sim), &single))
    });

    let all_cores = WorkerPool::default();
    group.bench_function("all_cores", |b| {
        b.iter(|| simulate(black_box(&config), black_box(sim), &all_cores))
    });

    group.finish();
}

criterion_group!(benches, bench_simulation_workers);
criterion_main!(benches);
