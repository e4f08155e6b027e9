use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::combinatorics::{prize_tiers, DomainError, Fraction, LotteryConfiguration, MatchQuery};
use crate::parallel::{batch_ranges, WorkerPool};
use crate::simulation::draw::DrawMachine;
use crate::simulation::rng::Rng;

/// Batch layout is fixed so results depend on the seed only, never on the worker count.
pub const SIMULATION_BATCHES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub draws: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierObservation {
    pub query: MatchQuery,
    pub hits: u64,
    pub observed: f64,
    pub expected: f64,
    pub exact: Fraction,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub game: LotteryConfiguration,
    pub draws: usize,
    pub seed: u64,
    pub tiers: Vec<TierObservation>,
}

impl SimulationReport {
    /// Largest absolute gap between observed and exact tier frequencies.
    pub fn max_abs_error(&self) -> f64 {
        self.tiers
            .iter()
            .map(|tier| (tier.observed - tier.expected).abs())
            .fold(0.0, f64::max)
    }
}

type Tally = HashMap<MatchQuery, u64>;

/// Draw `sim.draws` times against the fixed ticket `1..=draw_size` and tally tiers.
pub fn simulate(
    config: &LotteryConfiguration,
    sim: SimulationConfig,
    pool: &WorkerPool,
) -> Result<SimulationReport, DomainError> {
    let tiers = prize_tiers(config)?;
    let ranges = batch_ranges(sim.draws, SIMULATION_BATCHES);

    let run_batch = |(index, &(start, end)): (usize, &(usize, usize))| {
        let mut rng = Rng::for_batch(sim.seed, index);
        let mut machine = DrawMachine::new(*config);
        let mut tally = Tally::new();
        for _ in start..end {
            let draw = machine.draw(&mut rng);
            *tally.entry(machine.classify_fixed_ticket(&draw)).or_insert(0) += 1;
        }
        tally
    };
    let partials: Vec<Tally> =
        pool.install(|| ranges.par_iter().enumerate().map(run_batch).collect());

    let mut merged = Tally::new();
    for partial in partials {
        for (query, hits) in partial {
            *merged.entry(query).or_insert(0) += hits;
        }
    }

    let observations = tiers
        .into_iter()
        .map(|tier| {
            let hits = merged.get(&tier.query).copied().unwrap_or(0);
            let observed = if sim.draws == 0 {
                0.0
            } else {
                hits as f64 / sim.draws as f64
            };
            TierObservation {
                query: tier.query,
                hits,
                observed,
                expected: tier.probability.as_f64(),
                exact: tier.probability.exact,
            }
        })
        .collect();

    let report = SimulationReport {
        game: *config,
        draws: sim.draws,
        seed: sim.seed,
        tiers: observations,
    };
    tracing::info!(
        game = %config,
        draws = sim.draws,
        seed = sim.seed,
        max_abs_error = report.max_abs_error(),
        "simulation finished"
    );
    Ok(report)
}
