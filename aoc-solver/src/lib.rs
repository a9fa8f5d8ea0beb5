//! Advent of Code Solver Library
//!
//! The contract every puzzle day implements, plus the registry the runner uses
//! to find and execute them.
//!
//! # Overview
//!
//! - [`AocParser`] turns the raw input into shared data
//! - [`PartSolver<N>`] solves one part; [`Solver`] dispatches parts
//! - [`SolverInstance`] / [`DynSolver`] erase the solver type and time each step
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`] map `(year, day)` to factories
//! - [`SolverPlugin`] + `#[derive(AutoRegisterSolver)]` register days automatically
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Heights;
//!
//! impl AocParser for Heights {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .chars()
//!             .filter(|c| !c.is_whitespace())
//!             .map(|c| c.to_digit(10).ok_or_else(|| ParseError::InvalidFormat(format!("not a digit: {c}"))))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Heights {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().filter(|&&h| h == 0).count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Heights {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Heights>(2024, 10)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2024, 10, "0123\n1098").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "2");
//! assert_eq!(solver.solve(2).unwrap().answer, "9");
//! ```
//!
//! # Plugins
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2024, day = 16, tags = ["grid", "dijkstra"])]
//! pub struct Solver;
//! ```
//!
//! Linking the crate that holds such types is enough for
//! [`SolverRegistryBuilder::register_all_plugins`] to find them.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-exported for the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
