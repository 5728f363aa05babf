use std::{fs, path::Path};

use held_karp_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default ceiling on locations: a 20-location table is about 190 MB.
pub const DEFAULT_MAX_LOCATIONS: usize = 20;

/// Hard ceiling. Predecessors are stored as `u8` and subsets as `usize` bitmasks,
/// and anything past this is far beyond practical memory anyway. Limits the
/// machine cannot back still fail cleanly when the table is allocated.
pub const MAX_SUPPORTED_LOCATIONS: usize = 30;

pub const DEFAULT_PARALLEL_MIN_LOCATIONS: usize = 12;

/// Runtime options for [`HeldKarpSolver`](crate::HeldKarpSolver).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Largest matrix accepted; bigger inputs fail with `TooManyLocations`.
    pub max_locations: usize,
    /// Relax the cells of each subset row on the rayon pool.
    pub parallel: bool,
    /// Below this many locations rows are too short to be worth splitting.
    pub parallel_min_locations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_locations: DEFAULT_MAX_LOCATIONS,
            parallel: false,
            parallel_min_locations: DEFAULT_PARALLEL_MIN_LOCATIONS,
        }
    }
}

impl SolverConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_locations == 0 || self.max_locations > MAX_SUPPORTED_LOCATIONS {
            return Err(Error::invalid_config(format!(
                "max_locations must be in 1..={MAX_SUPPORTED_LOCATIONS}, got {}",
                self.max_locations
            )));
        }
        Ok(())
    }

    pub(crate) fn runs_parallel(&self, size: usize) -> bool {
        self.parallel && size >= self.parallel_min_locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = SolverConfig::from_json(r#"{ "parallel": true }"#).unwrap();
        assert!(config.parallel);
        assert_eq!(config.max_locations, DEFAULT_MAX_LOCATIONS);
        assert_eq!(config.parallel_min_locations, DEFAULT_PARALLEL_MIN_LOCATIONS);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            SolverConfig::from_json(r#"{ "threads": 4 }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn rejects_ceiling_outside_supported_range() {
        assert!(matches!(
            SolverConfig::from_json(r#"{ "max_locations": 31 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            SolverConfig::from_json(r#"{ "max_locations": 0 }"#),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn parallel_only_above_threshold() {
        let config = SolverConfig {
            parallel: true,
            parallel_min_locations: 8,
            ..SolverConfig::default()
        };
        assert!(!config.runs_parallel(7));
        assert!(config.runs_parallel(8));
        assert!(!SolverConfig::default().runs_parallel(20));
    }
}
