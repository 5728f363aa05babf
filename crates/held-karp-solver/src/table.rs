use std::collections::TryReserveError;

use held_karp_core::CostMatrix;
use rayon::prelude::*;

/// Cost of a (subset, last) state no path reaches. Larger than any finite sum of edges.
pub const UNREACHABLE: f64 = f64::INFINITY;

const NO_PREDECESSOR: u8 = u8::MAX;

/// Subset-indexed DP table, `2^n` rows of `n` cells, flattened as `subset * n + last`.
///
/// Each cell holds the cheapest cost of a path that leaves the start, visits
/// exactly `subset` and ends at `last`, plus the location visited right before
/// `last` on that path. Costs and predecessors live in separate buffers.
pub(crate) struct DpTable {
    size: usize,
    start: usize,
    costs: Vec<f64>,
    predecessors: Vec<u8>,
}

impl DpTable {
    /// Allocates a table for `cells = 2^size * size` entries, seeded with the base case.
    ///
    /// Fails instead of aborting when the allocator cannot provide the buffers.
    pub fn new(size: usize, start: usize, cells: usize) -> Result<Self, TryReserveError> {
        let mut costs = Vec::new();
        costs.try_reserve_exact(cells)?;
        costs.resize(cells, UNREACHABLE);

        let mut predecessors = Vec::new();
        predecessors.try_reserve_exact(cells)?;
        predecessors.resize(cells, NO_PREDECESSOR);

        let mut table = Self {
            size,
            start,
            costs,
            predecessors,
        };
        let base = table.cell(1 << start, start);
        table.costs[base] = 0.0;
        Ok(table)
    }

    pub fn full_subset(&self) -> usize {
        (1 << self.size) - 1
    }

    #[inline]
    fn cell(&self, subset: usize, last: usize) -> usize {
        subset * self.size + last
    }

    #[inline]
    pub fn cost(&self, subset: usize, last: usize) -> f64 {
        self.costs[self.cell(subset, last)]
    }

    pub fn predecessor(&self, subset: usize, last: usize) -> Option<usize> {
        match self.predecessors[self.cell(subset, last)] {
            NO_PREDECESSOR => None,
            j => Some(j as usize),
        }
    }

    /// Runs the forward pass over every subset in increasing numeric order.
    ///
    /// Row `subset` only reads rows `subset ^ (1 << i)`, which are numerically
    /// smaller and therefore already final.
    pub fn fill(&mut self, matrix: &CostMatrix, parallel: bool) {
        let size = self.size;
        let start = self.start;
        let start_bit = 1 << start;

        for subset in 1..=self.full_subset() {
            // Rows without the start stay unreachable; the base row is already set.
            if subset & start_bit == 0 || subset == start_bit {
                continue;
            }

            let (done, rest) = self.costs.split_at_mut(subset * size);
            let done: &[f64] = done;
            let row_costs = &mut rest[..size];
            let row_predecessors = &mut self.predecessors[subset * size..(subset + 1) * size];

            let relax = |last: usize, cost: &mut f64, predecessor: &mut u8| {
                if last == start || subset & (1 << last) == 0 {
                    return;
                }
                (*cost, *predecessor) = relax_cell(done, matrix, subset, last);
            };

            if parallel {
                row_costs
                    .par_iter_mut()
                    .zip(row_predecessors.par_iter_mut())
                    .enumerate()
                    .for_each(|(last, (cost, predecessor))| relax(last, cost, predecessor));
            } else {
                row_costs
                    .iter_mut()
                    .zip(row_predecessors.iter_mut())
                    .enumerate()
                    .for_each(|(last, (cost, predecessor))| relax(last, cost, predecessor));
            }
        }
    }
}

/// Cheapest way to end at `last` having visited `subset`, over all members `j != last`
/// of `subset` as the previous stop. Ties keep the lowest `j`.
#[inline]
fn relax_cell(done: &[f64], matrix: &CostMatrix, subset: usize, last: usize) -> (f64, u8) {
    let size = matrix.size();
    let prev = subset ^ (1 << last);
    let prev_row = &done[prev * size..(prev + 1) * size];

    let mut best = UNREACHABLE;
    let mut predecessor = NO_PREDECESSOR;
    for (j, &reach) in prev_row.iter().enumerate() {
        if j == last || prev & (1 << j) == 0 {
            continue;
        }
        let candidate = reach + matrix.cost(j, last);
        if candidate < best {
            best = candidate;
            predecessor = j as u8;
        }
    }
    (best, predecessor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> CostMatrix {
        CostMatrix::from_rows(rows).unwrap()
    }

    fn filled(matrix: &CostMatrix, start: usize, parallel: bool) -> DpTable {
        let size = matrix.size();
        let mut table = DpTable::new(size, start, (1 << size) * size).unwrap();
        table.fill(matrix, parallel);
        table
    }

    #[test]
    fn base_case_is_zero_and_everything_else_starts_unreachable() {
        let table = DpTable::new(3, 1, 8 * 3).unwrap();
        assert_eq!(table.cost(0b010, 1), 0.0);
        assert_eq!(table.cost(0b011, 0), UNREACHABLE);
        assert_eq!(table.predecessor(0b010, 1), None);
        assert_eq!(table.full_subset(), 0b111);
    }

    #[test]
    fn oversized_table_is_an_error_not_an_abort() {
        assert!(DpTable::new(4, 0, usize::MAX / 4).is_err());
    }

    #[test]
    fn entries_are_finite_only_for_members_of_subsets_containing_start() {
        let m = matrix(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ]);
        let table = filled(&m, 0, false);
        for subset in 0..8usize {
            for last in 0..3 {
                let finite = table.cost(subset, last).is_finite();
                let expected = subset & 1 != 0
                    && subset & (1 << last) != 0
                    && (last != 0 || subset == 1);
                assert_eq!(finite, expected, "subset={subset:03b} last={last}");
            }
        }
    }

    #[test]
    fn relaxation_keeps_cheapest_path_and_its_predecessor() {
        let m = matrix(vec![
            vec![0.0, 1.0, 10.0],
            vec![1.0, 0.0, 2.0],
            vec![10.0, 2.0, 0.0],
        ]);
        let table = filled(&m, 0, false);
        // Only 0 -> 1 -> 2 ends at 2 after visiting all three.
        assert_eq!(table.cost(0b111, 2), 3.0);
        assert_eq!(table.predecessor(0b111, 2), Some(1));
        assert_eq!(table.cost(0b111, 1), 12.0);
        assert_eq!(table.predecessor(0b111, 1), Some(2));
        assert_eq!(table.cost(0b101, 2), 10.0);
        assert_eq!(table.predecessor(0b101, 2), Some(0));
    }

    #[test]
    fn ties_keep_the_lowest_predecessor() {
        // 0 -> 2 -> 1 -> 3 and 0 -> 1 -> 2 -> 3 both cost 11.
        let m = matrix(vec![
            vec![0.0, 1.0, 1.0, 9.0],
            vec![1.0, 0.0, 9.0, 1.0],
            vec![1.0, 9.0, 0.0, 1.0],
            vec![9.0, 1.0, 1.0, 0.0],
        ]);
        let table = filled(&m, 0, false);
        assert_eq!(table.cost(0b0111, 1), 10.0);
        assert_eq!(table.cost(0b0111, 2), 10.0);
        assert_eq!(table.cost(0b1111, 3), 11.0);
        assert_eq!(table.predecessor(0b1111, 3), Some(1));
    }

    #[test]
    fn parallel_fill_matches_sequential_fill() {
        let size = 7;
        let rows = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| ((i * 31 + j * 17) % 23) as f64 + 0.5)
                    .collect()
            })
            .collect();
        let m = matrix(rows);
        let sequential = filled(&m, 3, false);
        let parallel = filled(&m, 3, true);
        assert_eq!(sequential.costs, parallel.costs);
        assert_eq!(sequential.predecessors, parallel.predecessors);
    }
}
