//! Cross-checks the Held-Karp solver against exhaustive search on seeded random instances.
//!
//! Every record answers three questions about one instance: does the DP cost
//! match the oracle, does the reported cost match the reconstructed route, and
//! is the route a Hamiltonian cycle from the requested start.

use std::time::Instant;

use held_karp_core::{CostMatrix, Error, Location, Result};
use held_karp_solver::HeldKarpSolver;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

pub const COST_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SweepConfig {
    pub seed: u64,
    pub min_size: usize,
    pub max_size: usize,
    pub instances_per_size: usize,
    pub symmetric: bool,
    /// Costs are drawn uniformly from `[1, max_cost)`.
    pub max_cost: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            min_size: 2,
            max_size: 8,
            instances_per_size: 10,
            symmetric: true,
            max_cost: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub instance: usize,
    pub size: usize,
    pub symmetric: bool,
    pub start: Location,
    pub dp_cost: f64,
    pub oracle_cost: f64,
    pub gap: f64,
    pub route_consistent: bool,
    pub is_cycle: bool,
    pub dp_ms: f64,
}

impl SweepRecord {
    pub fn passed(&self) -> bool {
        self.gap.abs() < COST_TOLERANCE && self.route_consistent && self.is_cycle
    }
}

pub fn random_matrix<R: Rng>(
    rng: &mut R,
    size: usize,
    symmetric: bool,
    max_cost: f64,
) -> Result<CostMatrix> {
    let mut costs = vec![0.0; size * size];
    for i in 0..size {
        for j in 0..size {
            if i == j || (symmetric && j < i) {
                continue;
            }
            let cost = rng.gen_range(1.0..max_cost);
            costs[i * size + j] = cost;
            if symmetric {
                costs[j * size + i] = cost;
            }
        }
    }
    CostMatrix::from_flat(size, costs)
}

pub fn sweep(solver: &HeldKarpSolver, config: &SweepConfig) -> Result<Vec<SweepRecord>> {
    if config.max_cost.is_nan() || config.max_cost <= 1.0 {
        return Err(Error::invalid_config(format!(
            "max_cost must exceed 1, got {}",
            config.max_cost
        )));
    }

    if config.max_size > held_karp_brute_force::MAX_LOCATIONS {
        return Err(Error::invalid_config(format!(
            "max_size must be at most {}, got {}",
            held_karp_brute_force::MAX_LOCATIONS,
            config.max_size
        )));
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
    let mut records = Vec::new();

    for size in config.min_size.max(1)..=config.max_size {
        for _ in 0..config.instances_per_size {
            let matrix = random_matrix(&mut rng, size, config.symmetric, config.max_cost)?;
            let start = Location::new(rng.gen_range(1..=size));

            let now = Instant::now();
            let tour = solver.solve(&matrix, start)?;
            let dp_ms = now.elapsed().as_secs_f64() * 1000.0;
            let oracle = held_karp_brute_force::solve(&matrix, start)?;

            let record = SweepRecord {
                instance: records.len(),
                size,
                symmetric: config.symmetric,
                start,
                dp_cost: tour.cost,
                oracle_cost: oracle.cost,
                gap: tour.cost - oracle.cost,
                route_consistent: (tour.route.cost(&matrix) - tour.cost).abs() < COST_TOLERANCE,
                is_cycle: tour.route.is_cycle_from(start, size),
                dp_ms,
            };

            if !record.passed() {
                log::warn!(
                    "sweep: instance={} n={size} start={start} dp={} oracle={} route=[{}]",
                    record.instance,
                    tour.cost,
                    oracle.cost,
                    tour.route
                );
            }
            records.push(record);
        }
    }

    Ok(records)
}
