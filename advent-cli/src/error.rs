//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Puzzle input file does not exist
    #[error("Input not found for {year}/day{day:02}: {}", .path.display())]
    MissingInput { year: u16, day: u8, path: PathBuf },

    /// Puzzle input file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    InputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver error (parse or solve failure)
    #[error("Solver error: {0}")]
    Solver(#[from] advent_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),
}
