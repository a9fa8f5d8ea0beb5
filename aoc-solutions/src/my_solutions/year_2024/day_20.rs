use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::board::{Board, NodeId};
use crate::utils::progress::Progress;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 20, tags = ["board", "dijkstra"])]
pub struct Solver;

/// Picoseconds a cheat must save to be counted
const MIN_SAVING: usize = 100;

#[derive(Debug)]
pub struct Racetrack {
    board: Board<bool>,
    /// Every track tile from start to end
    track: Vec<NodeId>,
}

impl AocParser for Solver {
    type SharedData<'a> = Racetrack;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let board = Board::parse(input, |cell| cell.ch == '#')?;
        let locate = |target: char| {
            board
                .find(|node| node.ch() == target)
                .map(|node| node.id())
                .ok_or_else(|| ParseError::MissingData(format!("no {target:?} tile")))
        };
        let start = locate('S')?;
        let end = locate('E')?;

        let walk = board.walk_from_where(start, |node| !node.value);
        let track = walk
            .first_path_to(end)
            .map_err(|_| ParseError::InvalidFormat("the end is not on the track".to_string()))?;

        Ok(Racetrack { board, track })
    }
}

impl Racetrack {
    /// Cheats of at most `radius` wall-ignoring steps saving at least
    /// `threshold` picoseconds.
    ///
    /// Position on the track is the distance from the start, so a cheat from
    /// track index `i` to `j` saves `j - i - manhattan`.
    fn count_cheats(&self, radius: usize, threshold: usize) -> usize {
        let threshold = threshold.max(1);
        let mut progress = Progress::new(format!("cheats within {radius}"), self.track.len());
        let mut count = 0;
        for (i, &from) in self.track.iter().enumerate() {
            let from = self.board.node(from);
            for (j, &to) in self.track.iter().enumerate().skip(i + threshold) {
                let skipped = self.board.node(to).manhattan(from);
                if skipped <= radius && j - i >= threshold + skipped {
                    count += 1;
                }
            }
            progress.tick();
        }
        progress.finish();
        count
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_cheats(2, MIN_SAVING).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_cheats(20, MIN_SAVING).to_string())
    }
}
