use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{CostMatrix, Location, Result};

/// A cost matrix together with the location the tour starts from.
///
/// ```json
/// { "matrix": [[0, 5], [5, 0]], "start": 1 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub matrix: CostMatrix,
    #[serde(default = "default_start")]
    pub start: Location,
}

fn default_start() -> Location {
    Location::new(1)
}

impl Problem {
    pub fn new(matrix: CostMatrix, start: Location) -> Self {
        Self { matrix, start }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
