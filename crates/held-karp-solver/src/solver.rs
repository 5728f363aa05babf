use std::time::Instant;

use held_karp_core::{CostMatrix, Error, Location, Result, Route, Tour};

use crate::config::SolverConfig;
use crate::table::{DpTable, UNREACHABLE};

/// Exact Held-Karp solver.
///
/// Builds the subset-indexed table, picks the cheapest closing edge back to
/// the start and follows the stored predecessors to recover the route.
#[derive(Clone, Debug, Default)]
pub struct HeldKarpSolver {
    config: SolverConfig,
}

impl HeldKarpSolver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, matrix: &CostMatrix, start: Location) -> Result<Tour> {
        let now = Instant::now();
        let size = matrix.size();
        let start = Location::checked(start.get(), size)?;

        if size == 1 {
            return Ok(Tour {
                cost: 0.0,
                route: Route::new(vec![start, start]),
            });
        }

        let cells = self.table_cells(size)?;
        let parallel = self.config.runs_parallel(size);
        log::debug!(
            "held-karp: n={size} start={start} subsets={} cells={cells} parallel={parallel}",
            1usize << size
        );

        let mut table = DpTable::new(size, start.index(), cells).map_err(|e| {
            log::warn!("held-karp: cannot allocate {cells} cells for n={size}: {e}");
            Error::TooManyLocations {
                size,
                limit: self.config.max_locations,
            }
        })?;
        table.fill(matrix, parallel);

        let (cost, last) = close_cycle(&table, matrix, start.index()).ok_or(Error::Infeasible)?;
        let route = reconstruct(&table, start.index(), last)?;

        log::info!(
            "held-karp: n={size} cost={cost:.3} route=[{route}] time={:.3}s",
            now.elapsed().as_secs_f32()
        );

        Ok(Tour { cost, route })
    }

    /// `2^size * size`, rejected before anything is allocated.
    fn table_cells(&self, size: usize) -> Result<usize> {
        let limit = self.config.max_locations;
        let too_many = Error::TooManyLocations { size, limit };
        if size > limit {
            return Err(too_many);
        }
        1usize
            .checked_shl(size as u32)
            .and_then(|subsets| subsets.checked_mul(size))
            .ok_or(too_many)
    }
}

/// Cheapest `table[full][i] + cost(i, start)` over `i != start`, first index on ties.
/// `None` when no finite cycle exists.
fn close_cycle(table: &DpTable, matrix: &CostMatrix, start: usize) -> Option<(f64, usize)> {
    let full = table.full_subset();
    let mut best = UNREACHABLE;
    let mut last = None;

    for i in (0..matrix.size()).filter(|&i| i != start) {
        let candidate = table.cost(full, i) + matrix.cost(i, start);
        if candidate < best {
            best = candidate;
            last = Some(i);
        }
    }

    last.filter(|_| best.is_finite()).map(|i| (best, i))
}

fn reconstruct(table: &DpTable, start: usize, last: usize) -> Result<Route> {
    let mut subset = table.full_subset();
    let mut current = last;
    let mut stops = vec![Location::from_index(start)];

    while current != start {
        stops.push(Location::from_index(current));
        let prev = table.predecessor(subset, current).ok_or(Error::Infeasible)?;
        log::trace!("held-karp: backtrack subset={subset:b} node={current} prev={prev}");
        subset ^= 1 << current;
        current = prev;
    }

    stops.push(Location::from_index(start));
    stops.reverse();
    Ok(Route::new(stops))
}
