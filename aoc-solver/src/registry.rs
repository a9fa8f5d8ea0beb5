//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Flat index for year/day, `None` when out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Year/day for a flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory that parses an input and returns a ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for a [`SolverRegistry`].
///
/// Registration is fallible: a second solver for the same year-day, or a
/// year-day outside 2015-2034 / 1-25, is rejected.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Rows;
///
/// impl AocParser for Rows {
///     type SharedData<'a> = usize;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().count())
///     }
/// }
///
/// impl Solver for Rows {
///     const PARTS: u8 = 1;
///
///     fn solve_part(rows: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(rows.to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Rows>(2024, 16)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2024, 16, "#.#\n...\n#.#").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "3");
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistryBuilder {
    /// Create a new empty builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory function with an explicit parts count
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
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type for a year-day
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, |input| {
            let instance = SolverInstance::<S>::new(input)?;
            Ok(Box::new(instance))
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`.
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// // Only the grid puzzles from 2024
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2024 && plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Storage and Registry
// ============================================================================

/// Read-only view over registered factories, ordered by year then day
pub struct SolverFactoryStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverFactoryStorage {
    /// Iterate over metadata for all registered factories
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Metadata for a specific year/day
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    /// Most recent registered year/day
    pub fn latest(&self) -> Option<FactoryInfo> {
        self.iter_info().last()
    }

    /// Check if a factory exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Immutable registry mapping (year, day) to solver factories
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    /// Readonly access to the factory storage for iteration/lookup
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the solver registered for year/day
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Object-safe registration hook, implemented for every [`Solver`]
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration.
///
/// Usually produced by `#[derive(AutoRegisterSolver)]`; can be submitted by hand:
///
/// ```no_run
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day10;
///
/// impl AocParser for Day10 {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day10 {
///     const PARTS: u8 = 2;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2024,
///         day: 10,
///         solver: &Day10,
///         tags: &["grid"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "grid", "dijkstra")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a solver type on a `mut` builder binding, panicking on conflicts.
///
/// ```
/// use aoc_solver::{AocParser, register_solver, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Day18;
///
/// impl AocParser for Day18 {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day18 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
///         Ok("22".into())
///     }
/// }
///
/// let mut builder = SolverRegistryBuilder::new();
/// register_solver!(builder, Day18, 2024, 18);
/// let registry = builder.build();
/// assert!(registry.storage().contains(2024, 18));
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register_solver::<$solver>($year, $day)
            .expect("Failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_bounds() {
        assert_eq!(calc_index(2015, 1), Some(0));
        assert_eq!(calc_index(2034, 25), Some(CAPACITY - 1));
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2024, 0), None);
        assert_eq!(calc_index(2024, 26), None);

        for index in [0, 24, 25, 237, CAPACITY - 1] {
            let (year, day) = from_index(index);
            assert_eq!(calc_index(year, day), Some(index));
        }
    }
}
