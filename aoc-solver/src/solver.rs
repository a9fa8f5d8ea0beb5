//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by every part of a day.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Walls;
///
/// impl AocParser for Walls {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let rows: Vec<&str> = input.lines().collect();
///         if rows.is_empty() {
///             return Err(ParseError::MissingData("empty maze".into()));
///         }
///         Ok(rows)
///     }
/// }
///
/// assert_eq!(Walls::parse("#.#\n...").unwrap().len(), 2);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts want to share.
    ///
    /// Owned structures are the common case; borrow from the input (`&'a str`)
    /// when no transformation is needed.
    type SharedData<'a>;

    /// Parse the raw input.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement one of these per part and let `#[derive(AocSolver)]` generate the
/// [`Solver`] dispatch.
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Walls;
///
/// impl AocParser for Walls {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for Walls {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.chars().filter(|&c| c == '#').count().to_string())
///     }
/// }
///
/// let mut maze = Walls::parse("#.#\n.#.").unwrap();
/// assert_eq!(<Walls as PartSolver<1>>::solve(&mut maze).unwrap(), "3");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part using the shared data
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver for one year-day puzzle.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Walls;
///
/// impl AocParser for Walls {
///     type SharedData<'a> = Vec<Vec<bool>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input
///             .lines()
///             .map(|line| line.chars().map(|c| c == '#').collect())
///             .collect())
///     }
/// }
///
/// impl Solver for Walls {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().flatten().filter(|&&w| w).count().to_string()),
///             2 => Ok(shared.iter().filter(|row| row.iter().all(|&w| !w)).count().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut maze = Walls::parse("##.\n...\n#..").unwrap();
/// assert_eq!(Walls::solve_part(&mut maze, 1).unwrap(), "3");
/// assert_eq!(Walls::solve_part(&mut maze, 2).unwrap(), "1");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part (1-based)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` / `Err(SolveError::NoSolution)` - Solving failed
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`]
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects `0` and parts above `PARTS`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
