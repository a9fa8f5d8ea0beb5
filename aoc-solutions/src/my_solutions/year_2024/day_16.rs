use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::board::{Board, Direction, NodeId, Walk};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["board", "dijkstra", "layers"])]
pub struct Solver;

const STEP: u64 = 1;
const TURN: u64 = 1000;

/// Reindeer facing east or west
const EAST_WEST: usize = 0;
/// Reindeer facing north or south
const NORTH_SOUTH: usize = 1;

#[derive(Debug)]
pub struct Maze {
    board: Board<bool>,
    start: NodeId,
    end: (isize, isize),
    best: Option<Best>,
}

#[derive(Debug)]
struct Best {
    walk: Walk,
    score: u64,
    /// End nodes (one per layer at most) reached with `score`
    ends: Vec<NodeId>,
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let flat = Board::parse(input, |cell| cell.ch == '#')?;
        let locate = |target: char| {
            flat.find(|node| node.ch() == target)
                .map(|node| (node.row() as isize, node.col() as isize))
                .ok_or_else(|| ParseError::MissingData(format!("no {target:?} tile")))
        };
        let start = locate('S')?;
        let end = locate('E')?;

        let mut board = Board::stack([flat.clone(), flat])?;
        board.cross_link(EAST_WEST, &[Direction::Up, Direction::Down], NORTH_SOUTH, TURN + STEP)?;
        board.cross_link(NORTH_SOUTH, &[Direction::Left, Direction::Right], EAST_WEST, TURN + STEP)?;

        let start = board
            .id_in(EAST_WEST, start.0, start.1)
            .ok_or_else(|| ParseError::Other("start fell outside the maze".to_string()))?;

        Ok(Maze {
            board,
            start,
            end,
            best: None,
        })
    }
}

impl Maze {
    fn best(&mut self) -> Result<&Best, SolveError> {
        if self.best.is_none() {
            let walk = self.board.walk_from_where(self.start, |node| !node.value);
            let (row, col) = self.end;
            let candidates: Vec<(NodeId, u64)> = [EAST_WEST, NORTH_SOUTH]
                .into_iter()
                .filter_map(|layer| self.board.id_in(layer, row, col))
                .filter_map(|id| walk.distance(id).map(|distance| (id, distance)))
                .collect();
            let score = candidates
                .iter()
                .map(|&(_, distance)| distance)
                .min()
                .ok_or_else(|| SolveError::NoSolution("the end tile is walled off".to_string()))?;
            let ends: Vec<NodeId> = candidates
                .into_iter()
                .filter(|&(_, distance)| distance == score)
                .map(|(id, _)| id)
                .collect();
            log::debug!("best score {score} reached in {} facing(s)", ends.len());
            self.best = Some(Best { walk, score, ends });
        }
        self.best
            .as_ref()
            .ok_or_else(|| SolveError::NoSolution("no walk".to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.best()?.score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared.best()?;
        let mut nodes = HashSet::new();
        for &end in &best.ends {
            nodes.extend(best.walk.nodes_on_paths_to(end).map_err(SolveError::failed)?);
        }
        let board = &shared.board;
        let tiles: HashSet<_> = nodes.into_iter().map(|id| board.node(id).position()).collect();
        Ok(tiles.len().to_string())
    }
}
