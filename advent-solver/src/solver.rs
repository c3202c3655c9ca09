//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// Defines the shared data type and parsing logic for a solver, keeping
/// parsing separate from solving.
///
/// # Example
///
/// ```
/// use advent_solver::{AdventParser, ParseError};
///
/// struct Day1;
///
/// impl AdventParser for Day1 {
///     type Shared<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AdventParser {
    /// The shared data structure holding parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type Shared<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::Shared<'a>, ParseError>;
}

/// Trait for solving a single part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...). Implementing this
/// per part lets the derive macro generate the dispatching [`Solver`] impl.
///
/// # Example
///
/// ```
/// use advent_solver::{AdventParser, PartSolver, ParseError, SolveError};
///
/// struct Day1;
///
/// impl AdventParser for Day1 {
///     type Shared<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i32>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: AdventParser {
    /// Solve this part of the puzzle.
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError>;
}

/// Core trait that every registered solver must implement.
///
/// Extends [`AdventParser`] to inherit the shared data type and `parse()`.
/// Usually generated by `#[derive(AdventSolver)]` from the per-part
/// [`PartSolver`] impls, but can be written by hand:
///
/// ```
/// use advent_solver::{AdventParser, ParseError, SolveError, Solver};
///
/// struct Day1;
///
/// impl AdventParser for Day1 {
///     type Shared<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i32>().to_string()),
///             2 => Ok(shared.iter().product::<i32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AdventParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Solve a part after checking it against `1..=PARTS`.
    fn solve_part_bounded(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
