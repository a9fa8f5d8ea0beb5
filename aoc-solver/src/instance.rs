//! Type-erased solver instances with timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{TimeDelta, Utc};

/// Answer for one part and the wall-clock time spent finding it
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub duration: TimeDelta,
}

fn timed<R>(run: impl FnOnce() -> R) -> (R, TimeDelta) {
    let start = Utc::now();
    let out = run();
    (out, Utc::now() - start)
}

/// A parsed puzzle bound to its solver type.
///
/// Owns the shared data for one input, so every fixture file gets a fresh
/// instance and parts of the same file see each other's cached work.
pub struct SolverInstance<'a, S: Solver> {
    shared: S::SharedData<'a>,
    parse_duration: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long it took
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_duration) = timed(|| S::parse(input));
        Ok(Self {
            shared: shared?,
            parse_duration,
        })
    }
}

/// Uniform interface over every registered solver.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver + '_>) -> Result<(), Box<dyn std::error::Error>> {
///     println!("parse took {}", solver.parse_duration());
///     for part in 1..=2 {
///         let result = solver.solve(part)?;
///         println!("part {}: {} ({})", part, result.answer, result.duration);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve one part; out-of-range parts are [`SolveError::PartOutOfRange`]
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_duration(&self) -> TimeDelta;
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, duration) = timed(|| S::solve_part_checked_range(shared, part));
        Ok(SolveResult {
            answer: answer?,
            duration,
        })
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_duration
    }
}
