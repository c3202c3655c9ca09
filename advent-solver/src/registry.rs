//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use std::collections::BTreeMap;

/// First year of Advent of Code
pub const FIRST_YEAR: u16 = 2015;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Registry entry: factory plus metadata
struct RegistryEntry {
    factory: SolverFactory,
    parts: u8,
}

fn check_date(year: u16, day: u8) -> Result<(), RegistrationError> {
    if year < FIRST_YEAR || day == 0 || day > DAYS_PER_YEAR {
        return Err(RegistrationError::InvalidDate(year, day));
    }
    Ok(())
}

/// Builder for constructing a [`SolverRegistry`] with a fluent API
///
/// Registration detects duplicates and invalid dates; the registry is
/// immutable after `build()`.
///
/// # Example
///
/// ```no_run
/// # use advent_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: BTreeMap<(u16, u8), RegistryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a solver factory for a specific year and day
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    /// * `parts` - Number of parts the solver supports
    /// * `factory` - A function that parses input and returns a boxed [`DynSolver`]
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate registration or invalid date
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        check_date(year, day)?;
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries.insert(
            (year, day),
            RegistryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!`
    /// (usually by `#[derive(AutoRegister)]`) and registers each one.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins_where(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter returns `true`, allowing
    /// selective registration based on tags, year, day, or any other criteria.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// // Register only 2023 solvers tagged "cards"
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins_where(|plugin| {
    ///         plugin.year == 2023 && plugin.tags.contains(&"cards")
    ///     })
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin> {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Maps (year, day) pairs to factory functions. Iteration is ordered by
/// year then day, so runners produce output in calendar order.
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), RegistryEntry>,
}

impl SolverRegistry {
    /// Iterate over metadata for all registered solvers, in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().map(|(&(year, day), e)| SolverInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Get metadata for a specific solver
    pub fn info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.entries.get(&(year, day)).map(|e| SolverInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Check if a solver is registered for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a solver instance by parsing input with the registered factory
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// A type-erased interface with no associated types, so different solver
/// types can be collected behind `&'static dyn RegisterableSolver` in the
/// plugin system. Implemented for every [`Solver`] via a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Submitted to `inventory` by `#[derive(AutoRegister)]`; collected by
/// [`RegistryBuilder::register_all_plugins`].
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "cards", "parsing")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);
