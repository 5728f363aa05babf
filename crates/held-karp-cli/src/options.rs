use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use held_karp_core::Result;
use held_karp_solver::SolverConfig;
use log::LevelFilter;

/// Command line options for the `held-karp` binary.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "held-karp",
    about = "Exact minimum-cost delivery route over a full cost matrix"
)]
pub struct CliOptions {
    /// Problem file (`{"matrix": [[..]], "start": 1}`). Without it the matrix is read from stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Start location (1-based); overrides the one in the problem file.
    #[arg(long)]
    pub start: Option<usize>,
    /// Solver config file (JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Relax DP rows on the rayon pool.
    #[arg(long)]
    pub parallel: bool,
    /// Largest number of locations to accept.
    #[arg(long)]
    pub max_locations: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
    /// Include timestamps in log lines.
    #[arg(long)]
    pub log_timestamp: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliOptions {
    /// Config file values with command line flags layered on top.
    pub fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_path(path)?,
            None => SolverConfig::default(),
        };
        if self.parallel {
            config.parallel = true;
        }
        if let Some(max_locations) = self.max_locations {
            config.max_locations = max_locations;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use held_karp_core::Error;

    #[test]
    fn defaults_to_text_and_stdin() {
        let options = CliOptions::parse_from(["held-karp"]);
        assert_eq!(options.format, OutputFormat::Text);
        assert!(options.input.is_none());
        assert_eq!(options.log_level, LevelFilter::Warn);
        assert_eq!(options.solver_config().unwrap(), SolverConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let options = CliOptions::parse_from([
            "held-karp",
            "--parallel",
            "--max-locations",
            "12",
            "--format",
            "json",
            "--log-level",
            "debug",
        ]);
        let config = options.solver_config().unwrap();
        assert!(config.parallel);
        assert_eq!(config.max_locations, 12);
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.log_level, LevelFilter::Debug);
    }

    #[test]
    fn invalid_ceiling_is_rejected() {
        let options = CliOptions::parse_from(["held-karp", "--max-locations", "99"]);
        assert!(matches!(options.solver_config(), Err(Error::InvalidConfig(_))));
    }
}
