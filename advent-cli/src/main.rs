//! Advent CLI - run Advent of Code solvers against local puzzle inputs

mod cli;
mod error;
mod input;
mod output;
mod runner;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use input::InputStore;
use output::OutputFormatter;
use runner::Runner;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let registry = build_registry(&args.tags)?;
    let store = InputStore::new(args.input_dir.clone());
    let quiet = args.quiet;

    let runner = Runner::new(registry, store, &args);
    if runner.collect_work_items().is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let results = runner.run()?;

    let formatter = OutputFormatter::new(quiet);
    formatter.print_results(&results);
    formatter.print_summary(&results);
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_where(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
