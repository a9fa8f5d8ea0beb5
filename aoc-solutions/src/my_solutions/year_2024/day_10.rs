use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::board::{Board, NodeId};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["board"])]
pub struct Solver;

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

/// Impassable tiles (`.` in the smaller examples)
const NO_HEIGHT: u8 = u8::MAX;

impl AocParser for Solver {
    type SharedData<'a> = Board<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Board::try_parse(input, |cell| match cell.ch {
            '.' => Ok(NO_HEIGHT),
            ch => ch
                .to_digit(10)
                .map(|height| height as u8)
                .ok_or_else(|| ParseError::InvalidFormat(format!("unexpected tile {ch:?}"))),
        })
    }
}

/// Neighbours exactly one step higher
fn uphill(map: &Board<u8>, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    let height = map.node(id).value;
    map.node(id)
        .links()
        .map(|(_, link)| link.to)
        .filter(move |&to| height != NO_HEIGHT && map.node(to).value == height + 1)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map: &Board<u8> = shared;
        let score: usize = map
            .filter(|node| node.value == TRAILHEAD)
            .map(|trailhead| {
                let mut seen = HashSet::from([trailhead.id()]);
                let mut stack = vec![trailhead.id()];
                let mut summits = 0;
                while let Some(current) = stack.pop() {
                    if map.node(current).value == SUMMIT {
                        summits += 1;
                        continue;
                    }
                    stack.extend(uphill(map, current).filter(|&next| seen.insert(next)));
                }
                summits
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map: &Board<u8> = shared;
        // trails[n] = number of distinct climbs from n to any summit
        let mut trails = vec![0u64; map.len()];
        for height in (TRAILHEAD..=SUMMIT).rev() {
            for node in map.filter(|node| node.value == height) {
                let count = if height == SUMMIT {
                    1
                } else {
                    uphill(map, node.id()).map(|next| trails[next.index()]).sum()
                };
                trails[node.id().index()] = count;
            }
        }

        let rating: u64 = map
            .filter(|node| node.value == TRAILHEAD)
            .map(|node| trails[node.id().index()])
            .sum();
        Ok(rating.to_string())
    }
}
