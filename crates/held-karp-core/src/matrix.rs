use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Square matrix of travel costs, stored row-major in one flat buffer.
///
/// `cost(i, j)` is the cost of going directly from `i` to `j` (0-based).
/// A missing edge is `f64::INFINITY`; in JSON it is written as `null`.
/// Diagonal entries are kept as given and never read by the solvers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<f64>>>", into = "Vec<Vec<Option<f64>>>")]
pub struct CostMatrix {
    size: usize,
    costs: Vec<f64>,
}

impl CostMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::invalid_dimension("cost matrix has no locations"));
        }

        let mut costs = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid_dimension(format!(
                    "row {} has {} entries, expected {size}",
                    i + 1,
                    row.len()
                )));
            }
            costs.extend(row);
        }

        Self::from_flat(size, costs)
    }

    pub fn from_flat(size: usize, costs: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid_dimension("cost matrix has no locations"));
        }
        if size.checked_mul(size) != Some(costs.len()) {
            return Err(Error::invalid_dimension(format!(
                "{} costs do not form a {size}x{size} matrix",
                costs.len()
            )));
        }

        for (k, &value) in costs.iter().enumerate() {
            let (from, to) = (k / size, k % size);
            if from != to && (value.is_nan() || value < 0.0) {
                return Err(Error::InvalidCost {
                    from: from + 1,
                    to: to + 1,
                    value,
                });
            }
        }

        Ok(Self { size, costs })
    }

    /// Number of locations.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[from * self.size + to]
    }

    pub fn row(&self, from: usize) -> &[f64] {
        &self.costs[from * self.size..(from + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.costs.chunks_exact(self.size)
    }

    /// Whether every off-diagonal edge has a finite cost.
    pub fn is_complete(&self) -> bool {
        self.costs
            .iter()
            .enumerate()
            .all(|(k, value)| k / self.size == k % self.size || value.is_finite())
    }
}

impl TryFrom<Vec<Vec<Option<f64>>>> for CostMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<Option<f64>>>) -> Result<Self> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|value| value.unwrap_or(f64::INFINITY))
                        .collect()
                })
                .collect(),
        )
    }
}

impl From<CostMatrix> for Vec<Vec<Option<f64>>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix
            .rows()
            .map(|row| {
                row.iter()
                    .map(|value| value.is_finite().then_some(*value))
                    .collect()
            })
            .collect()
    }
}
