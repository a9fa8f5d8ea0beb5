use std::collections::VecDeque;

use proptest::prelude::*;

use super::*;

fn open(input: &str) -> Board<bool> {
    Board::parse(input, |cell| cell.ch == '#').unwrap()
}

fn id(board: &Board<bool>, row: isize, col: isize) -> NodeId {
    board.get(row, col).unwrap().id()
}

fn path_cost<T>(board: &Board<T>, path: &[NodeId]) -> u64 {
    path.windows(2)
        .map(|pair| board.link_cost(pair[0], pair[1]).unwrap())
        .sum()
}

/// Plain breadth-first distances on a unit-cost board, for cross-checking.
fn bfs(board: &Board<bool>, start: NodeId) -> Vec<Option<u64>> {
    let mut distances = vec![None; board.len()];
    distances[start.index()] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let distance = distances[current.index()].unwrap();
        for (_, link) in board.node(current).links() {
            if !board.node(link.to).value && distances[link.to.index()].is_none() {
                distances[link.to.index()] = Some(distance + 1);
                queue.push_back(link.to);
            }
        }
    }
    distances
}

#[test]
fn parse_builds_one_node_per_cell() {
    let board = open("....\n.#..\n....\n");
    assert_eq!((board.width(), board.height(), board.layers()), (4, 3, 1));
    assert_eq!(board.len(), 12);
    assert_eq!(board.count(|node| node.value), 1);
    assert_eq!(board.find(|node| node.value).unwrap().position(), (1, 1));
    assert!(
        board
            .filter(|_| true)
            .all(|node| node.row() < 3 && node.col() < 4)
    );
}

#[test]
fn parse_rejects_empty_and_ragged_input() {
    assert_eq!(Board::parse("", |_| ()).unwrap_err(), BoardError::Empty);
    assert_eq!(Board::parse("\n\n", |_| ()).unwrap_err(), BoardError::Empty);
    assert_eq!(
        Board::parse("...\n..\n...", |_| ()).unwrap_err(),
        BoardError::Ragged {
            row: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn leading_blank_row_is_ragged() {
    assert_eq!(
        Board::parse("\n...\n...", |_| ()).unwrap_err(),
        BoardError::Ragged {
            row: 0,
            expected: 3,
            found: 0
        }
    );
    assert_eq!(
        Board::parse("..\n\n..", |_| ()).unwrap_err(),
        BoardError::Ragged {
            row: 1,
            expected: 2,
            found: 0
        }
    );
}

#[test]
fn try_parse_propagates_mapper_errors() {
    let result = Board::try_parse("12\n3x", |cell| {
        cell.ch
            .to_digit(10)
            .ok_or_else(|| aoc_solver::ParseError::InvalidFormat(format!("bad digit {}", cell.ch)))
    });
    assert!(matches!(result, Err(aoc_solver::ParseError::InvalidFormat(message)) if message.contains('x')));
}

#[test]
fn links_point_one_step_away_and_stop_at_edges() {
    let board = open("...\n...");
    for node in board.nodes() {
        for direction in Direction::ALL {
            let (row, col) = node.step(direction);
            match node.link(direction) {
                Some(link) => {
                    let target = board.node(link.to);
                    assert_eq!((target.row() as isize, target.col() as isize), (row, col));
                    assert_eq!(link.cost, DEFAULT_COST);
                }
                None => assert!(board.get(row, col).is_none()),
            }
        }
    }
    let corner = board.get(0, 0).unwrap();
    assert!(corner.link(Direction::Up).is_none());
    assert!(corner.link(Direction::Left).is_none());
    assert_eq!(corner.links().count(), 2);
}

#[test]
fn lookups_outside_the_board_are_none() {
    let board = open("..\n..");
    assert!(board.get(-1, 0).is_none());
    assert!(board.get(0, -1).is_none());
    assert!(board.get(2, 0).is_none());
    assert!(board.get(0, 2).is_none());
    assert!(board.get_in(1, 0, 0).is_none());
    assert!(board.neighbour(id(&board, 0, 0), Direction::Up).is_none());
    assert_eq!(
        board.neighbour(id(&board, 0, 0), Direction::Right).unwrap().position(),
        (0, 1)
    );
}

#[test]
fn open_three_by_three_has_six_shortest_paths() {
    let board = open("...\n...\n...");
    let start = id(&board, 0, 0);
    let end = id(&board, 2, 2);
    let walk = board.walk_from(start);

    assert_eq!(walk.source(), start);
    assert_eq!(walk.distance(start), Some(0));
    assert!(walk.predecessors(start).is_empty());
    assert_eq!(walk.distance(end), Some(4));

    let paths = walk.paths_to(end).unwrap();
    assert_eq!(paths.len(), 6);
    for path in &paths {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert_eq!(path_cost(&board, path), 4);
    }

    assert_eq!(walk.nodes_on_paths_to(end).unwrap().len(), 9);
    assert_eq!(walk.first_path_to(end).unwrap().len(), 5);
}

#[test]
fn path_to_source_is_the_source_alone() {
    let board = open("..");
    let start = id(&board, 0, 0);
    let walk = board.walk_from(start);
    assert_eq!(walk.paths_to(start).unwrap(), vec![vec![start]]);
    assert_eq!(walk.first_path_to(start).unwrap(), vec![start]);
}

#[test]
fn wall_forces_a_detour() {
    let before = open("...\n...\n...");
    let after = open(".#.\n...\n...");
    let distance = |board: &Board<bool>| {
        board
            .walk_from_where(id(board, 0, 0), |node| !node.value)
            .distance(id(board, 0, 2))
    };

    assert_eq!(distance(&before), Some(2));
    assert_eq!(distance(&after), Some(4));
}

#[test]
fn unreachable_nodes_have_no_distance_and_no_paths() {
    let board = open(".#.\n##.\n...");
    let walk = board.walk_from_where(id(&board, 0, 0), |node| !node.value);
    let far = id(&board, 2, 2);

    assert_eq!(walk.distance(far), None);
    assert!(walk.predecessors(far).is_empty());
    assert_eq!(walk.paths_to(far), Err(PathError::Unreachable(far)));
    assert_eq!(walk.first_path_to(far), Err(PathError::Unreachable(far)));
    assert!(walk.nodes_on_paths_to(far).is_err());
    assert_eq!(walk.reachable().count(), 1);
}

#[test]
fn mutating_values_changes_later_walks_only() {
    let mut board = open("...\n...");
    let start = id(&board, 0, 0);
    let target = id(&board, 0, 2);

    let first = board.walk_from_where(start, |node| !node.value);
    board.get_mut(0, 1).unwrap().value = true;
    let second = board.walk_from_where(start, |node| !node.value);

    assert_eq!(first.distance(target), Some(2));
    assert_eq!(second.distance(target), Some(4));
}

#[test]
fn set_cost_reweights_a_single_link() {
    let mut board = open("...\n...\n...");
    let start = id(&board, 0, 0);
    let right = id(&board, 0, 1);

    assert!(board.set_cost(start, Direction::Right, 5));
    assert!(!board.set_cost(start, Direction::Up, 5));
    assert_eq!(board.link_cost(start, right), Some(5));

    let walk = board.walk_from(start);
    assert_eq!(walk.distance(right), Some(3));
    assert_eq!(walk.predecessors(right), &[id(&board, 1, 1)]);
}

#[test]
fn tied_predecessors_all_satisfy_the_distance() {
    let board = open("....\n....\n....");
    let walk = board.walk_from(id(&board, 1, 1));
    for (node, distance) in walk.reachable() {
        for &previous in walk.predecessors(node) {
            let via = walk.distance(previous).unwrap() + board.link_cost(previous, node).unwrap();
            assert_eq!(via, distance);
        }
    }
    assert_eq!(walk.predecessors(id(&board, 0, 0)).len(), 2);
}

#[test]
fn walk_with_follows_custom_edges() {
    let board = open(".....");
    let start = id(&board, 0, 0);
    let walk = board.walk_with(start, |node, out| {
        let (row, col) = (node.row() as isize, node.col() as isize);
        if let Some(to) = board.id_in(0, row, col + 2) {
            out.push(Link { to, cost: 1 });
        }
    });

    assert_eq!(walk.distance(id(&board, 0, 4)), Some(2));
    assert_eq!(walk.distance(id(&board, 0, 1)), None);
    assert_eq!(
        walk.closest([id(&board, 0, 1), id(&board, 0, 2), id(&board, 0, 4)]),
        Some((id(&board, 0, 2), 1))
    );
}

#[test]
fn zero_cost_cycles_terminate() {
    let mut board = open("...");
    for index in 0..board.len() {
        for direction in Direction::ALL {
            board.set_cost(NodeId(index), direction, 0);
        }
    }
    let start = id(&board, 0, 0);
    let end = id(&board, 0, 2);
    let walk = board.walk_from(start);

    assert_eq!(walk.distance(end), Some(0));
    let paths = walk.paths_to(end).unwrap();
    assert!(!paths.is_empty());
    assert!(paths.iter().all(|path| path.first() == Some(&start)));
    assert_eq!(walk.first_path_to(end).unwrap().last(), Some(&end));
}

#[test]
fn stacked_layers_price_the_crossing() {
    let flat = open("...\n...\n...");
    let mut board = Board::stack([flat.clone(), flat]).unwrap();
    assert_eq!((board.layers(), board.len()), (2, 18));

    // layer 0 moves horizontally, layer 1 vertically; a turn costs 1000 extra
    board
        .cross_link(0, &[Direction::Up, Direction::Down], 1, 1001)
        .unwrap();
    board
        .cross_link(1, &[Direction::Left, Direction::Right], 0, 1001)
        .unwrap();

    let node = |layer, row, col| board.get_in(layer, row, col).unwrap().id();
    assert_eq!(board.node(node(1, 2, 1)).layer(), 1);
    assert_eq!(
        board.node(node(0, 1, 1)).link(Direction::Down).unwrap(),
        Link {
            to: node(1, 2, 1),
            cost: 1001
        }
    );

    let walk = board.walk_from(node(0, 0, 0));
    // right, right, turn down, down
    assert_eq!(walk.distance(node(1, 2, 2)), Some(1004));
    // any route ending horizontally needs two turns
    assert_eq!(walk.distance(node(0, 2, 2)), Some(2004));
    assert_eq!(
        walk.closest([node(0, 2, 2), node(1, 2, 2)]),
        Some((node(1, 2, 2), 1004))
    );

    let paths = walk.paths_to(node(1, 2, 2)).unwrap();
    assert_eq!(paths.len(), 1);
    let positions: Vec<_> = paths[0]
        .iter()
        .map(|&id| board.node(id).position())
        .collect();
    assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
    assert_eq!(path_cost(&board, &paths[0]), 1004);
}

#[test]
fn stacking_checks_shapes_and_layers() {
    let empty: Vec<Board<bool>> = Vec::new();
    assert_eq!(Board::stack(empty).unwrap_err(), BoardError::NoLayers);
    assert_eq!(
        Board::stack([open("..\n.."), open("...\n...")]).unwrap_err(),
        BoardError::LayerShape {
            width: 2,
            height: 2,
            found_width: 3,
            found_height: 2
        }
    );

    let mut board = Board::stack([open(".."), open("..")]).unwrap();
    assert_eq!(
        board.cross_link(0, &[Direction::Right], 2, 1),
        Err(BoardError::NoSuchLayer(2))
    );
    assert_eq!(
        board.cross_link(5, &[Direction::Right], 0, 1),
        Err(BoardError::NoSuchLayer(5))
    );
    // edge directions stay unlinked
    board.cross_link(0, &[Direction::Up], 1, 7).unwrap();
    assert!(board.get_in(0, 0, 0).unwrap().link(Direction::Up).is_none());
}

#[test]
fn render_round_trips_the_input() {
    let input = "#..\n.#.\n..#";
    let board = Board::parse(input, |cell| cell.ch).unwrap();
    assert_eq!(board.render(|&ch| ch), input);

    let stacked = Board::stack([board.clone(), board]).unwrap();
    assert_eq!(stacked.render_layer(1, |&ch| ch), input);
    assert_eq!(stacked.render_layer(2, |&ch| ch), "");
}

fn grid() -> impl Strategy<Value = String> {
    (1usize..7, 1usize..7).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::bool::weighted(0.25), width * height).prop_map(move |walls| {
            walls
                .chunks(width)
                .map(|row| {
                    row.iter()
                        .map(|&wall| if wall { '#' } else { '.' })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
    })
}

proptest! {
    #[test]
    fn walk_agrees_with_breadth_first_search(input in grid()) {
        let board = open(&input);
        let start = NodeId(0);
        let walk = board.walk_from_where(start, |node| !node.value);
        let expected = bfs(&board, start);

        for node in board.nodes() {
            prop_assert_eq!(walk.distance(node.id()), expected[node.id().index()]);
        }
    }

    #[test]
    fn every_reconstructed_path_costs_the_distance(input in grid()) {
        let board = open(&input);
        let start = NodeId(0);
        let walk = board.walk_from_where(start, |node| !node.value);

        prop_assert!(walk.predecessors(start).is_empty());
        for (node, distance) in walk.reachable() {
            prop_assert_eq!(node == start, walk.predecessors(node).is_empty());
            let first = walk.first_path_to(node).unwrap();
            prop_assert_eq!(path_cost(&board, &first), distance);
            let on_paths = walk.nodes_on_paths_to(node).unwrap();
            prop_assert!(on_paths.contains(&start));
            prop_assert!(first.iter().all(|id| on_paths.contains(id)));
        }
    }
}
