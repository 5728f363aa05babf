use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("invalid start location {start}: expected a value in 1..={size}")]
    InvalidStart { start: usize, size: usize },
    #[error("invalid cost {value} for edge {from} -> {to}")]
    InvalidCost { from: usize, to: usize, value: f64 },
    #[error("{size} locations exceed the supported limit of {limit}")]
    TooManyLocations { size: usize, limit: usize },
    #[error("no Hamiltonian cycle with finite cost exists")]
    Infeasible,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_dimension(message: impl Into<String>) -> Self {
        Self::InvalidDimension(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
