use std::process;
use std::time::Instant;

use env_logger::{Builder as LogBuilder, Target};
use tourtree::builder::KnightsTourBuilder;
use tourtree::parse::solve_text;
use tourtree::Builder;

use crate::options::SolverOptions;

mod options;

fn run_tour(options: &SolverOptions) -> Result<(), String> {
    let request = KnightsTourBuilder::with_size(options.size)
        .start_at(options.start)
        .tour_mode(options.mode)
        .build()
        .map_err(|reasons| format!("invalid tour request: {reasons:?}"))?;

    let started = Instant::now();
    let result = request.solve();
    let elapsed = started.elapsed().as_secs_f64();

    match result {
        Ok(board) => {
            println!("{} tour from {}: found in {elapsed:.3}s", options.mode, options.start);
            print!("{board}");
        }
        Err(failure) => println!("{failure} ({elapsed:.3}s)"),
    }

    Ok(())
}

fn run_lmis(options: &SolverOptions) -> Result<(), String> {
    let started = Instant::now();
    let tree = solve_text(&options.sequence).map_err(|err| err.to_string())?;
    let elapsed = started.elapsed().as_secs_f64();

    println!("sequence: {:?}", tree.sequence());
    println!("longest increasing subsequence: {:?} (length {}, {} nodes, {elapsed:.3}s)",
             tree.longest_path(), tree.longest_path().len(), tree.nodes().len());

    if options.print_tree {
        println!("(* marks nodes on the longest path)");
        print!("{tree}");
    }

    Ok(())
}

fn main() {
    let options = match SolverOptions::from_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    LogBuilder::new()
        .filter_level(options.log_level)
        .target(Target::Stderr)
        .init();
    log::debug!("solver: options {options:?}");

    if let Err(message) = run_tour(&options).and_then(|_| run_lmis(&options)) {
        log::error!("{message}");
        process::exit(1);
    }
}
