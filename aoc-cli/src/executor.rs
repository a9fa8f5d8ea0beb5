//! Sequential executor running solvers over fixture files

use crate::config::{Config, Target};
use crate::error::CliError;
use crate::fixtures::{Fixture, FixtureDir};
use aoc_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;

/// Result of one part on one fixture file
pub struct RunResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// 1-based position of the fixture among the files run for this part
    pub file_number: usize,
    pub fixture: Fixture,
    /// Answer recorded in `output.json`, if any
    pub expected: Option<String>,
    pub answer: Result<String, SolverError>,
    /// Reported once per fixture, with its first part
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: Vec<u8>,
}

/// Runs the selected solvers against their fixtures, one after another
pub struct Executor<'a> {
    registry: SolverRegistry,
    config: &'a Config,
}

impl<'a> Executor<'a> {
    pub fn new(registry: SolverRegistry, config: &'a Config) -> Self {
        Self { registry, config }
    }

    /// Resolve the configured target against the registry
    pub fn collect_work_items(&self) -> Result<Vec<WorkItem>, CliError> {
        let storage = self.registry.storage();
        let infos = match self.config.target {
            Target::All => storage
                .iter_info()
                .filter(|info| {
                    let fixtures = FixtureDir::new(&self.config.fixtures_dir, info.year, info.day);
                    if !fixtures.exists() {
                        log::debug!("skipping {}/{:02}: no fixture directory", info.year, info.day);
                    }
                    fixtures.exists()
                })
                .collect_vec(),
            Target::Single { year, day } => {
                let info = storage
                    .iter_info()
                    .filter(|info| year.is_none_or(|y| info.year == y))
                    .filter(|info| day.is_none_or(|d| info.day == d))
                    .last()
                    .ok_or_else(|| CliError::NoSolver(describe(year, day)))?;
                vec![info]
            }
        };

        Ok(infos
            .into_iter()
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|work| {
                if work.parts.is_empty() {
                    log::warn!(
                        "{}/{:02} has none of the requested parts",
                        work.year,
                        work.day
                    );
                }
                !work.parts.is_empty()
            })
            .collect())
    }

    /// Requested parts the solver has, or all of its parts
    fn filter_parts(&self, max_parts: u8) -> Vec<u8> {
        if self.config.parts.is_empty() {
            (1..=max_parts).collect()
        } else {
            self.config
                .parts
                .iter()
                .copied()
                .filter(|&part| (1..=max_parts).contains(&part))
                .collect()
        }
    }

    /// Run every part of `work` over every selected fixture, part by part,
    /// handing each result to `on_result` as soon as it is known
    pub fn execute(
        &self,
        work: &WorkItem,
        mut on_result: impl FnMut(&RunResult),
    ) -> Result<(), CliError> {
        let fixture_dir = FixtureDir::new(&self.config.fixtures_dir, work.year, work.day);
        let fixtures = fixture_dir.inputs(self.config.files)?;
        if fixtures.is_empty() {
            log::warn!("no input files in {}", fixture_dir.path().display());
            return Ok(());
        }
        let expectations = fixture_dir.expectations()?;
        let inputs = fixtures
            .iter()
            .map(Fixture::read)
            .collect::<Result<Vec<_>, _>>()?;

        // Each file is parsed once; its parts share the parsed data
        let mut solvers: Vec<Result<Box<dyn DynSolver + '_>, ParseError>> =
            Vec::with_capacity(inputs.len());
        for (fixture, input) in fixtures.iter().zip(&inputs) {
            match self.registry.create_solver(work.year, work.day, input) {
                Ok(solver) => solvers.push(Ok(solver)),
                Err(SolverError::ParseError(e)) => {
                    log::debug!("{} failed to parse: {}", fixture.file_name, e);
                    solvers.push(Err(e));
                }
                Err(e) => return Err(e.into()),
            }
        }

        let mut answers = expectations.clone();
        for (part_index, &part) in work.parts.iter().enumerate() {
            for (index, (fixture, solver)) in fixtures.iter().zip(solvers.iter_mut()).enumerate() {
                let parse_duration = match &*solver {
                    Ok(solver) if part_index == 0 => Some(solver.parse_duration()),
                    _ => None,
                };
                let (answer, solve_duration) = match solver {
                    Ok(solver) => match solver.solve(part) {
                        Ok(solved) => (Ok(solved.answer), solved.duration),
                        Err(e) => (Err(SolverError::from(e)), TimeDelta::zero()),
                    },
                    Err(e) => (Err(SolverError::ParseError(e.clone())), TimeDelta::zero()),
                };

                if let Ok(answer) = &answer {
                    answers.set(&fixture.name, part, answer);
                }
                on_result(&RunResult {
                    year: work.year,
                    day: work.day,
                    part,
                    file_number: index + 1,
                    fixture: fixture.clone(),
                    expected: expectations.get(&fixture.name, part),
                    answer,
                    parse_duration,
                    solve_duration,
                });
            }
        }

        if self.config.save && answers != expectations {
            fixture_dir.save(&answers)?;
            log::info!("saved answers to {}", fixture_dir.path().display());
        }
        Ok(())
    }
}

fn describe(year: Option<u16>, day: Option<u8>) -> String {
    match (year, day) {
        (Some(year), Some(day)) => format!("{}/{:02}", year, day),
        (Some(year), None) => format!("year {}", year),
        (None, Some(day)) => format!("day {:02}", day),
        (None, None) => "any day".to_string(),
    }
}
