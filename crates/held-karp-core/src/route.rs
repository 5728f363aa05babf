use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CostMatrix, Location};

/// Visiting order of a closed tour: starts and ends at the same location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Vec<Location>);

impl Route {
    pub fn new(locations: Vec<Location>) -> Self {
        Self(locations)
    }

    pub fn locations(&self) -> &[Location] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> Vec<usize> {
        self.0.iter().map(|location| location.get()).collect()
    }

    /// Sum of the edge costs between consecutive stops.
    ///
    /// A stop followed by itself contributes nothing, so the single-location
    /// cycle `[s, s]` costs zero regardless of the diagonal.
    pub fn cost(&self, matrix: &CostMatrix) -> f64 {
        self.0
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .map(|pair| matrix.cost(pair[0].index(), pair[1].index()))
            .sum()
    }

    /// Whether this is a Hamiltonian cycle over `size` locations anchored at `start`.
    pub fn is_cycle_from(&self, start: Location, size: usize) -> bool {
        if self.0.len() != size + 1 || self.0.first() != Some(&start) || self.0.last() != Some(&start) {
            return false;
        }

        let mut seen = vec![false; size];
        for location in &self.0[..size] {
            let label = location.get();
            if label == 0 || label > size || seen[label - 1] {
                return false;
            }
            seen[label - 1] = true;
        }
        true
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, location) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{location}")?;
        }
        Ok(())
    }
}

/// An optimal closed tour: its total cost and the route achieving it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub cost: f64,
    pub route: Route,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(labels: &[usize]) -> Route {
        Route::new(labels.iter().copied().map(Location::new).collect())
    }

    #[test]
    fn cost_sums_consecutive_edges() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 9.0],
            vec![9.0, 0.0, 2.0],
            vec![4.0, 9.0, 0.0],
        ])
        .unwrap();
        assert_eq!(route(&[1, 2, 3, 1]).cost(&matrix), 7.0);
        assert_eq!(route(&[1, 3, 2, 1]).cost(&matrix), 27.0);
    }

    #[test]
    fn single_location_cycle_costs_nothing() {
        let matrix = CostMatrix::from_rows(vec![vec![42.0]]).unwrap();
        assert_eq!(route(&[1, 1]).cost(&matrix), 0.0);
        assert!(route(&[1, 1]).is_cycle_from(Location::new(1), 1));
    }

    #[test]
    fn is_cycle_from_checks_shape_and_membership() {
        let start = Location::new(2);
        assert!(route(&[2, 3, 1, 2]).is_cycle_from(start, 3));
        assert!(!route(&[2, 3, 1]).is_cycle_from(start, 3));
        assert!(!route(&[2, 3, 3, 2]).is_cycle_from(start, 3));
        assert!(!route(&[1, 3, 2, 1]).is_cycle_from(start, 3));
        assert!(!route(&[2, 4, 1, 2]).is_cycle_from(start, 3));
    }

    #[test]
    fn displays_with_arrows() {
        assert_eq!(route(&[1, 3, 2, 1]).to_string(), "1 -> 3 -> 2 -> 1");
    }
}
