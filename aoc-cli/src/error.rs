//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fixture error
    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// No solver matches the requested year/day/tags
    #[error("No solver registered for {0}")]
    NoSolver(String),

    /// Logger installation failed
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Reading or writing a day's fixture directory failed
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The day has no fixture directory
    #[error("no fixtures at {}", .0.display())]
    MissingDir(PathBuf),

    /// A day being prepared already has a fixture directory
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// IO error on a fixture file
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `output.json` is not valid JSON or has the wrong shape
    #[error("{}: {message}", .path.display())]
    Json { path: PathBuf, message: String },
}
