use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::board::{Board, BoardNode, Direction, Link};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 17, tags = ["board", "dijkstra", "layers"])]
pub struct Solver;

/// Layer the crucible is in after a run of straight moves.
const HORIZONTAL: usize = 0;
const VERTICAL: usize = 1;

impl AocParser for Solver {
    /// Heat loss per block, stacked as [`HORIZONTAL`] and [`VERTICAL`] layers
    type SharedData<'a> = Board<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let city = Board::try_parse(input, |cell| {
            cell.ch.to_digit(10).map(u64::from).ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "(row {}, col {}) expected a digit, found {:?}",
                    cell.row + 1,
                    cell.col + 1,
                    cell.ch
                ))
            })
        })?;
        Ok(Board::stack([city.clone(), city])?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_heat_loss(shared, 1, 3).map(|loss| loss.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_heat_loss(shared, 4, 10).map(|loss| loss.to_string())
    }
}

/// Every stop the crucible can make from `node`: a turn followed by
/// `min..=max` straight blocks, landing in the layer of the new heading.
fn runs<'a>(
    city: &'a Board<u64>,
    min: isize,
    max: isize,
) -> impl FnMut(&BoardNode<u64>, &mut Vec<Link>) + 'a {
    move |node: &BoardNode<u64>, out: &mut Vec<Link>| {
        let (headings, target_layer) = if node.layer() == HORIZONTAL {
            ([Direction::Up, Direction::Down], VERTICAL)
        } else {
            ([Direction::Left, Direction::Right], HORIZONTAL)
        };
        for heading in headings {
            let (dr, dc) = heading.offset();
            let (row, col) = (node.row() as isize, node.col() as isize);
            let mut cost = 0;
            for blocks in 1..=max {
                let (row, col) = (row + dr * blocks, col + dc * blocks);
                let Some(block) = city.get_in(HORIZONTAL, row, col) else {
                    break;
                };
                cost += block.value;
                if blocks < min {
                    continue;
                }
                if let Some(to) = city.id_in(target_layer, row, col) {
                    out.push(Link { to, cost });
                }
            }
        }
    }
}

fn min_heat_loss(city: &Board<u64>, min: isize, max: isize) -> Result<u64, SolveError> {
    let (last_row, last_col) = (city.height() as isize - 1, city.width() as isize - 1);
    let factory = [HORIZONTAL, VERTICAL]
        .into_iter()
        .filter_map(|layer| city.id_in(layer, last_row, last_col))
        .collect::<Vec<_>>();

    // the first move may go either way, so try both starting headings
    [HORIZONTAL, VERTICAL]
        .into_iter()
        .filter_map(|layer| city.id_in(layer, 0, 0))
        .filter_map(|start| {
            city.walk_with(start, runs(city, min, max))
                .closest(factory.iter().copied())
                .map(|(_, loss)| loss)
        })
        .min()
        .ok_or_else(|| SolveError::NoSolution("the factory cannot be reached".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    fn solve(input: &str, part: u8) -> Result<String, SolveError> {
        let mut shared = <Solver as AocParser>::parse(input).unwrap();
        <Solver as aoc_solver::Solver>::solve_part(&mut shared, part)
    }

    #[test]
    fn crucible_on_example() {
        assert_eq!(solve(EXAMPLE, 1).unwrap(), "102");
    }

    #[test]
    fn ultra_crucible_on_example() {
        assert_eq!(solve(EXAMPLE, 2).unwrap(), "94");
    }

    #[test]
    fn ultra_crucible_must_roll_four_blocks_before_stopping() {
        let input = "111111111111
999999999991
999999999991
999999999991
999999999991
";
        assert_eq!(solve(input, 2).unwrap(), "71");
    }

    #[test]
    fn single_block_costs_nothing_to_leave() {
        let input = "19\n11";
        assert_eq!(solve(input, 1).unwrap(), "2");
    }

    #[test]
    fn rejects_non_digits() {
        assert!(<Solver as AocParser>::parse("12\n3.").is_err());
    }
}
