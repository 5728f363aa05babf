use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A location as seen by callers: 1-based.
///
/// Solvers work on 0-based indices; [`Location::from_index`] and
/// [`Location::index`] are the only places the offset is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(usize);

impl Location {
    /// Wraps a 1-based label without checking it against any matrix.
    pub const fn new(label: usize) -> Self {
        Self(label)
    }

    /// Converts a 0-based internal index into a location.
    pub const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the 1-based label.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the 0-based internal index.
    ///
    /// Only meaningful once the location was validated with [`Location::checked`];
    /// label 0 saturates to index 0.
    pub const fn index(self) -> usize {
        self.0.saturating_sub(1)
    }

    /// Validates a 1-based label against a matrix of `size` locations.
    pub fn checked(label: usize, size: usize) -> Result<Self> {
        if label == 0 || label > size {
            return Err(Error::InvalidStart { start: label, size });
        }
        Ok(Self(label))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_label_are_offset_by_one() {
        let location = Location::from_index(0);
        assert_eq!(location.get(), 1);
        assert_eq!(location.index(), 0);
        assert_eq!(Location::new(4).index(), 3);
    }

    #[test]
    fn checked_rejects_zero_and_labels_past_the_end() {
        assert!(matches!(
            Location::checked(0, 3),
            Err(Error::InvalidStart { start: 0, size: 3 })
        ));
        assert!(matches!(
            Location::checked(4, 3),
            Err(Error::InvalidStart { start: 4, size: 3 })
        ));
        assert_eq!(Location::checked(3, 3).unwrap(), Location::new(3));
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&vec![Location::new(1), Location::new(2)]).unwrap();
        assert_eq!(json, "[1,2]");
    }
}
