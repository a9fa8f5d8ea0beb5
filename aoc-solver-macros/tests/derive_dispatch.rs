use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, Solver,
    SolverRegistryBuilder,
};

/// Counts open cells; part 2 reuses the count computed by part 1.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, tags = ["macro-test", "grid"])]
struct OpenCells;

struct Maze {
    cells: Vec<Vec<char>>,
    open: Option<usize>,
}

impl AocParser for OpenCells {
    type SharedData<'a> = Maze;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let cells: Vec<Vec<char>> = input.lines().map(|l| l.chars().collect()).collect();
        if cells.is_empty() {
            return Err(ParseError::MissingData("no rows".into()));
        }
        Ok(Maze { cells, open: None })
    }
}

fn open_count(maze: &mut Maze) -> usize {
    let cells = &maze.cells;
    *maze
        .open
        .get_or_insert_with(|| cells.iter().flatten().filter(|&&c| c == '.').count())
}

impl PartSolver<1> for OpenCells {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(open_count(shared).to_string())
    }
}

impl PartSolver<2> for OpenCells {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: usize = shared.cells.iter().map(Vec::len).sum();
        Ok((total - open_count(shared)).to_string())
    }
}

#[test]
fn test_derived_parts_constant() {
    assert_eq!(<OpenCells as Solver>::PARTS, 2);
}

#[test]
fn test_derived_dispatch_matches_part_solvers() {
    let mut shared = OpenCells::parse("#.#\n...\n##.").unwrap();
    assert_eq!(OpenCells::solve_part(&mut shared, 1).unwrap(), "5");
    assert_eq!(OpenCells::solve_part(&mut shared, 2).unwrap(), "4");
}

#[test]
fn test_derived_dispatch_rejects_unknown_part() {
    let mut shared = OpenCells::parse(".").unwrap();
    assert!(matches!(
        OpenCells::solve_part(&mut shared, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
    assert!(matches!(
        OpenCells::solve_part(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}

#[test]
fn test_auto_registered_plugin_is_found_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    let info = registry.storage().get_info(2015, 3).expect("plugin registered");
    assert_eq!(info.parts, 2);
    assert_eq!(registry.storage().len(), 1);

    let mut solver = registry.create_solver(2015, 3, "..\n#.").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "1");
}

#[test]
fn test_auto_registered_plugin_parse_error_propagates() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2015 && plugin.day == 3)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2015, 3, ""),
        Err(aoc_solver::SolverError::ParseError(ParseError::MissingData(_)))
    ));
}
