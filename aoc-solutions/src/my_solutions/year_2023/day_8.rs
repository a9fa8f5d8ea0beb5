use std::collections::HashMap;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::math::lcm_of;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["graph", "lcm"])]
pub struct Solver;

#[derive(Debug)]
pub struct Network<'a> {
    /// `true` for `R`
    turns: Vec<bool>,
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_network(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let mut lines = input.trim().lines();
    let turns = lines
        .next()
        .context("missing instruction line")?
        .chars()
        .map(|ch| match ch {
            'L' => Ok(false),
            'R' => Ok(true),
            other => Err(anyhow!("unknown instruction {other:?}")),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if turns.is_empty() {
        return Err(anyhow!("instruction line is empty"));
    }

    let nodes = lines
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| {
            let (name, targets) = line
                .split_once(" = ")
                .with_context(|| format!("(line {}) expected `NAME = (LEFT, RIGHT)`", index + 3))?;
            let (left, right) = targets
                .trim()
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(|rest| rest.split_once(", "))
                .with_context(|| format!("(line {}) malformed targets {targets:?}", index + 3))?;
            Ok((name.trim(), (left, right)))
        })
        .collect::<anyhow::Result<HashMap<_, _>>>()?;

    Ok(Network { turns, nodes })
}

impl Network<'_> {
    /// Steps from `start` until a node satisfying `done` is entered
    fn steps(&self, start: &str, done: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        // a path that has not finished after visiting every (node, turn) state loops forever
        let limit = self.turns.len() * self.nodes.len();
        let mut current = start;
        for (step, &right) in self.turns.iter().cycle().take(limit).enumerate() {
            let &(left_to, right_to) = self
                .nodes
                .get(current)
                .ok_or_else(|| SolveError::NoSolution(format!("node {current} is not defined")))?;
            current = if right { right_to } else { left_to };
            if done(current) {
                return Ok(step as u64 + 1);
            }
        }
        Err(SolveError::NoSolution(format!("{start} never reaches its goal")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if !shared.nodes.contains_key("AAA") {
            return Err(SolveError::NoSolution("no AAA node".to_string()));
        }
        Ok(shared.steps("AAA", |node| node == "ZZZ")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cycles = shared
            .nodes
            .keys()
            .filter(|name| name.ends_with('A'))
            .map(|name| shared.steps(name, |node| node.ends_with('Z')))
            .collect::<Result<Vec<_>, _>>()?;
        if cycles.is_empty() {
            return Err(SolveError::NoSolution("no node ends with A".to_string()));
        }
        Ok(lcm_of(cycles).to_string())
    }
}
