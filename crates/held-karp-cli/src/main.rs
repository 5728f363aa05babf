use std::{
    io::{self, IsTerminal},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use held_karp_cli::{input, logging, report, CliOptions, OutputFormat};
use held_karp_core::{Location, Problem, Result};
use held_karp_solver::HeldKarpSolver;
use log::info;

fn main() -> ExitCode {
    let options = CliOptions::parse();
    if let Err(e) = logging::init_logger(&options) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CliOptions) -> Result<()> {
    let now = Instant::now();
    let solver = HeldKarpSolver::new(options.solver_config()?)?;
    let problem = load_problem(options)?;

    info!(
        "input: n={} start={} complete={}",
        problem.matrix.size(),
        problem.start,
        problem.matrix.is_complete()
    );
    info!("options: {:?}", solver.config());

    let tour = solver.solve(&problem.matrix, problem.start)?;

    match options.format {
        OutputFormat::Text => print!("{}", report::render(&problem.matrix, &tour)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tour)?),
    }

    info!(
        "output: cost={:.2} time={:.3}s",
        tour.cost,
        now.elapsed().as_secs_f32()
    );
    Ok(())
}

fn load_problem(options: &CliOptions) -> Result<Problem> {
    let mut problem = match &options.input {
        Some(path) => Problem::from_path(path)?,
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                input::read_problem(stdin.lock(), &mut io::stdout())?
            } else {
                input::read_problem(stdin.lock(), &mut io::sink())?
            }
        }
    };

    if let Some(start) = options.start {
        problem.start = Location::checked(start, problem.matrix.size())?;
    }
    Ok(problem)
}
