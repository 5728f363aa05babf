#![deny(clippy::all)]

use held_karp_core::{CostMatrix, Location};
use held_karp_solver::{HeldKarpSolver, SolverConfig};
use napi::{Error, Result};
use napi_derive::napi;

#[napi(object)]
#[derive(Clone, Debug)]
pub struct HeldKarpTour {
    pub cost: f64,
    /// 1-based, starts and ends at the requested start.
    pub route: Vec<u32>,
}

#[napi(object)]
#[derive(Clone, Debug, Default)]
pub struct HeldKarpOptions {
    pub max_locations: Option<u32>,
    pub parallel: Option<bool>,
}

impl HeldKarpOptions {
    fn into_config(self) -> SolverConfig {
        let defaults = SolverConfig::default();
        SolverConfig {
            max_locations: self
                .max_locations
                .map_or(defaults.max_locations, |n| n as usize),
            parallel: self.parallel.unwrap_or(defaults.parallel),
            ..defaults
        }
    }
}

fn to_napi(e: held_karp_core::Error) -> Error {
    Error::from_reason(e.to_string())
}

/// `matrix[i][j]` is the cost from location `i + 1` to `j + 1`; `start` is 1-based.
#[napi]
pub fn solve_held_karp(
    matrix: Vec<Vec<f64>>,
    start: u32,
    options: Option<HeldKarpOptions>,
) -> Result<HeldKarpTour> {
    let config = options.unwrap_or_default().into_config();
    let solver = HeldKarpSolver::new(config).map_err(to_napi)?;
    let matrix = CostMatrix::from_rows(matrix).map_err(to_napi)?;

    let tour = solver
        .solve(&matrix, Location::new(start as usize))
        .map_err(to_napi)?;

    Ok(HeldKarpTour {
        cost: tour.cost,
        route: tour
            .route
            .locations()
            .iter()
            .map(|location| location.get() as u32)
            .collect(),
    })
}
