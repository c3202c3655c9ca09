//! Advent of Code Solver Library
//!
//! A flexible and type-safe framework for solving Advent of Code problems across
//! multiple years and days. Each problem is implemented as a solver with custom
//! input parsing and can produce results for multiple parts.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based solver definitions with a clean parse/solve split
//! - Per-part impls via [`PartSolver`] with compile-time part numbers
//! - Typed parse, solve, and registration errors
//! - Timed solver instances behind the type-erased [`DynSolver`] interface
//! - A registry populated automatically through the plugin system
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{AdventParser, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! struct MyDay1;
//!
//! impl AdventParser for MyDay1 {
//!     type Shared<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! use advent_solver::{DynSolver, RegisterableSolver};
//!
//! let registry = MyDay1
//!     .register_with(RegistryBuilder::new(), 2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Plugin System and Derive Macros
//!
//! Solvers normally register themselves:
//!
//! ```ignore
//! #[derive(AdventSolver, AutoRegister)]
//! #[advent_solver(parts = 2)]
//! #[advent(year = 2023, day = 7, tags = ["cards"])]
//! pub struct Solver;
//! ```
//!
//! `AdventSolver` generates the [`Solver`] impl from the `PartSolver<1>` and
//! `PartSolver<2>` impls; `AutoRegister` submits a [`SolverPlugin`] so
//! [`RegistryBuilder::register_all_plugins`] picks the solver up at startup.

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS_PER_YEAR, FIRST_YEAR, RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo,
    SolverPlugin, SolverRegistry,
};
pub use solver::{AdventParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macros
pub use inventory;

// Re-export the derive macros
pub use advent_solver_macros::{AdventSolver, AutoRegister};
