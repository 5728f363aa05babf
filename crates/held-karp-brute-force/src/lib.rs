//! Exhaustive search over every visiting order. `(n-1)!` tours, so only for tiny inputs.

use held_karp_core::{CostMatrix, Error, Location, Result, Route, Tour};

pub const MAX_LOCATIONS: usize = 10;

/// Tries every permutation of the non-start locations in lexicographic order
/// and keeps the first strictly cheaper tour.
pub fn solve(matrix: &CostMatrix, start: Location) -> Result<Tour> {
    let size = matrix.size();
    let start = Location::checked(start.get(), size)?;
    if size > MAX_LOCATIONS {
        return Err(Error::TooManyLocations {
            size,
            limit: MAX_LOCATIONS,
        });
    }

    let s = start.index();
    let mut order: Vec<usize> = (0..size).filter(|&i| i != s).collect();
    let mut best: Option<(f64, Vec<usize>)> = None;

    loop {
        let cost = tour_cost(matrix, s, &order);
        if cost.is_finite() && best.as_ref().map_or(true, |(b, _)| cost < *b) {
            best = Some((cost, order.clone()));
        }
        if !next_permutation(&mut order) {
            break;
        }
    }

    let (cost, order) = best.ok_or(Error::Infeasible)?;
    let mut stops = Vec::with_capacity(size + 1);
    stops.push(start);
    stops.extend(order.into_iter().map(Location::from_index));
    stops.push(start);

    Ok(Tour {
        cost,
        route: Route::new(stops),
    })
}

fn tour_cost(matrix: &CostMatrix, start: usize, order: &[usize]) -> f64 {
    let mut cost = 0.0;
    let mut prev = start;
    for &next in order {
        cost += matrix.cost(prev, next);
        prev = next;
    }
    if prev != start {
        cost += matrix.cost(prev, start);
    }
    cost
}

/// Rearranges into the next lexicographic permutation; `false` once the last one is passed.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(swap) = items.iter().rposition(|&x| x > items[pivot]) else {
        return false;
    };
    items.swap(pivot, swap);
    items[pivot + 1..].reverse();
    true
}
