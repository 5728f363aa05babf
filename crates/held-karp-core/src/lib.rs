//! Shared types for the exact TSP solvers in this workspace.
//!
//! Everything that crosses a crate boundary lives here: the cost matrix the
//! hosts build, the 1-based [`Location`] used in the external contract, and
//! the [`Tour`] handed back by the solvers.

mod error;
mod location;
mod matrix;
mod problem;
mod route;

pub use error::{Error, Result};
pub use location::Location;
pub use matrix::CostMatrix;
pub use problem::Problem;
pub use route::{Route, Tour};
