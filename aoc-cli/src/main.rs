//! AOC CLI - runs Advent of Code solvers against local fixture files

mod cli;
mod config;
mod error;
mod executor;
mod fixtures;
mod logger;
mod output;
mod prepare;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::{OutputFormatter, Summary};

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(summary) if summary.has_failures() => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<Summary, error::CliError> {
    let config = Config::from_args(args)?;
    logger::init(config.log_level)?;
    log::debug!("fixtures at {}", config.fixtures_dir.display());

    if config.prepare {
        let prepared = prepare::prepare(&config)?;
        OutputFormatter::new(config.quiet).print_prepared(
            prepared.year,
            prepared.day,
            prepared.fixtures.path(),
        );
        return Ok(Summary::default());
    }

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    log::debug!("{} solver(s) registered", registry.storage().len());

    let executor = Executor::new(registry, &config);
    let work_items = executor.collect_work_items()?;
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(Summary::default());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut summary = Summary::default();
    for work in &work_items {
        let outcome = executor.execute(work, |result| {
            formatter.print_result(result);
            summary.record(result);
        });
        if let Err(e) = outcome {
            // with --all, one broken day should not hide the others
            if work_items.len() == 1 {
                return Err(e);
            }
            eprintln!("{}/{:02}: {}", work.year, work.day, e);
            summary.failed += 1;
        }
    }

    formatter.print_summary(&summary);
    Ok(summary)
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
