//! Runs the solver/oracle sweep and prints one JSON record per instance on stdout.

use std::process::ExitCode;

use clap::Parser;
use held_karp_solver::{HeldKarpSolver, SolverConfig};
use held_karp_validation::{sweep, SweepConfig};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "tour-sweep", about = "Cross-check Held-Karp against exhaustive search")]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 2)]
    min_size: usize,
    #[arg(long, default_value_t = 8)]
    max_size: usize,
    #[arg(long, default_value_t = 10)]
    instances: usize,
    /// Draw independent costs for both directions of every edge.
    #[arg(long)]
    asymmetric: bool,
    #[arg(long, default_value_t = 100.0)]
    max_cost: f64,
    /// Relax DP rows on the rayon pool.
    #[arg(long)]
    parallel: bool,
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .format_timestamp(None)
        .init();

    let solver = match HeldKarpSolver::new(SolverConfig {
        parallel: args.parallel,
        ..SolverConfig::default()
    }) {
        Ok(solver) => solver,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = SweepConfig {
        seed: args.seed,
        min_size: args.min_size,
        max_size: args.max_size,
        instances_per_size: args.instances,
        symmetric: !args.asymmetric,
        max_cost: args.max_cost,
    };

    let records = match sweep(&solver, &config) {
        Ok(records) => records,
        Err(e) => {
            log::error!("sweep failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    for record in &records {
        match serde_json::to_string(record) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                log::error!("failed to serialize record {}: {e}", record.instance);
                return ExitCode::FAILURE;
            }
        }
    }

    let failed = records.iter().filter(|r| !r.passed()).count();
    log::info!(
        "sweep: seed={} instances={} failed={failed}",
        config.seed,
        records.len()
    );

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
