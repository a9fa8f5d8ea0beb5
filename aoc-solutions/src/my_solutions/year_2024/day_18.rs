use std::collections::HashSet;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::board::{Board, NodeId};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["board", "dijkstra"])]
pub struct Solver;

/// Inputs with fewer bytes than this are the 7x7 example
const EXAMPLE_BYTES: usize = 100;

#[derive(Debug)]
pub struct MemorySpace {
    /// `(x, y)` in falling order
    bytes: Vec<(usize, usize)>,
    size: usize,
    fallen: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = MemorySpace;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let bytes = input
            .trim()
            .lines()
            .enumerate()
            .map(|(index, line)| -> anyhow::Result<(usize, usize)> {
                let (x, y) = line
                    .trim()
                    .split_once(',')
                    .ok_or_else(|| anyhow!("(line {}) expected `x,y`", index + 1))?;
                Ok((
                    x.parse().with_context(|| format!("(line {}) bad x", index + 1))?,
                    y.parse().with_context(|| format!("(line {}) bad y", index + 1))?,
                ))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        let (size, fallen) = if bytes.len() < EXAMPLE_BYTES {
            (7, 12)
        } else {
            (71, 1024)
        };
        if let Some(&(x, y)) = bytes.iter().find(|&&(x, y)| x >= size || y >= size) {
            return Err(ParseError::InvalidFormat(format!(
                "byte {x},{y} is outside the {size}x{size} memory space"
            )));
        }

        Ok(MemorySpace {
            fallen: fallen.min(bytes.len()),
            bytes,
            size,
        })
    }
}

impl MemorySpace {
    /// Empty space with the first `fallen` bytes corrupted
    fn board(&self, fallen: usize) -> Result<Board<bool>, SolveError> {
        let row = ".".repeat(self.size);
        let text = vec![row; self.size].join("\n");
        let mut board = Board::parse(&text, |_| false).map_err(SolveError::failed)?;
        for &(x, y) in &self.bytes[..fallen] {
            if let Some(node) = board.get_mut(y as isize, x as isize) {
                node.value = true;
            }
        }
        Ok(board)
    }

    fn corners(&self, board: &Board<bool>) -> Result<(NodeId, NodeId), SolveError> {
        let last = self.size as isize - 1;
        match (board.get(0, 0), board.get(last, last)) {
            (Some(start), Some(exit)) => Ok((start.id(), exit.id())),
            _ => Err(SolveError::NoSolution("memory space has no corners".to_string())),
        }
    }
}

fn shortest_path(board: &Board<bool>, start: NodeId, exit: NodeId) -> Option<Vec<NodeId>> {
    board
        .walk_from_where(start, |node| !node.value)
        .first_path_to(exit)
        .ok()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let board = shared.board(shared.fallen)?;
        let (start, exit) = shared.corners(&board)?;
        board
            .walk_from_where(start, |node| !node.value)
            .distance(exit)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::NoSolution("the exit is cut off".to_string()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut board = shared.board(shared.fallen)?;
        let (start, exit) = shared.corners(&board)?;
        let mut path: HashSet<NodeId> = shortest_path(&board, start, exit)
            .ok_or_else(|| SolveError::NoSolution("the exit is cut off already".to_string()))?
            .into_iter()
            .collect();

        for &(x, y) in &shared.bytes[shared.fallen..] {
            let Some(node) = board.get_mut(y as isize, x as isize) else {
                continue;
            };
            node.value = true;
            // only a byte landing on the current route can cut it
            if !path.contains(&node.id()) {
                continue;
            }
            match shortest_path(&board, start, exit) {
                Some(detour) => path = detour.into_iter().collect(),
                None => {
                    board.print(|&corrupted| if corrupted { '#' } else { '.' });
                    return Ok(format!("{x},{y}"));
                }
            }
        }
        Err(SolveError::NoSolution("the exit stays reachable".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    fn solve(input: &str, part: u8) -> Result<String, SolveError> {
        let mut shared = <Solver as AocParser>::parse(input).unwrap();
        <Solver as aoc_solver::Solver>::solve_part(&mut shared, part)
    }

    #[test]
    fn steps_after_twelve_bytes() {
        assert_eq!(solve(EXAMPLE, 1).unwrap(), "22");
    }

    #[test]
    fn first_blocking_byte() {
        assert_eq!(solve(EXAMPLE, 2).unwrap(), "6,1");
    }

    #[test]
    fn falling_bytes_only_change_later_boards() {
        let space = <Solver as AocParser>::parse(EXAMPLE).unwrap();
        let before = space.board(0).unwrap();
        let after = space.board(space.fallen).unwrap();
        assert_eq!(before.count(|node| node.value), 0);
        assert_eq!(after.count(|node| node.value), 12);
        assert!(after.get(4, 5).unwrap().value);
    }

    #[test]
    fn rejects_bytes_outside_the_space() {
        assert!(<Solver as AocParser>::parse("7,0").is_err());
        assert!(<Solver as AocParser>::parse("1;2").is_err());
    }
}
