//! Host program around the Held-Karp solver: input, options, logging and the printed report.

pub mod input;
pub mod logging;
pub mod options;
pub mod report;

pub use options::{CliOptions, OutputFormat};
