use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::{error, info};

use simplex_trace::algorithm::simplex::logic::{MAX_ITERATIONS, SimplexEngine, SolverConfig};
use simplex_trace::io::import;
use simplex_trace::io::report::render;

/// Solve a linear program with the simplex method, showing every tableau.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// File to write the report to, instead of the standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Maximum number of basis changes
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    max_iterations: usize,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    info!("Reading problem file: \"{}\"...", opts.problem_file.to_string_lossy());
    let problem = match import::<f64>(&opts.problem_file) {
        Ok(problem) => problem,
        Err(err) => {
            error!("Couldn't read the problem: {}", err);
            eprintln!("{}", err);
            exit(1);
        },
    };

    let config = SolverConfig { max_iterations: opts.max_iterations };
    let engine = SimplexEngine::from_problem(problem).with_config(config);
    let trace = engine.run();
    let report = render(&engine, &trace);

    match opts.output {
        Some(path) => {
            if let Err(err) = fs::write(&path, report) {
                eprintln!("Couldn't write the report to {:?}: {}", path, err);
                exit(1);
            }
            info!("Report written to \"{}\".", path.to_string_lossy());
        },
        None => print!("{}", report),
    }
}
