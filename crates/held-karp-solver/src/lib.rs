//! Exact TSP solving with the Held-Karp dynamic program.
//!
//! Time is `O(n^2 * 2^n)` and memory `O(n * 2^n)`, so inputs are capped by
//! [`SolverConfig::max_locations`] (20 by default).

pub mod config;
mod solver;
mod table;

use held_karp_core::{CostMatrix, Location, Problem, Result, Tour};

pub use config::SolverConfig;
pub use solver::HeldKarpSolver;
pub use table::UNREACHABLE;

/// Solves with the default configuration.
pub fn solve(matrix: &CostMatrix, start: Location) -> Result<Tour> {
    HeldKarpSolver::default().solve(matrix, start)
}

pub fn solve_problem(problem: &Problem) -> Result<Tour> {
    solve(&problem.matrix, problem.start)
}
