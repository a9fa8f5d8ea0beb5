//! Fixture directories holding puzzle inputs and known answers

use crate::config::FileSelection;
use crate::error::FixtureError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const TEST_PREFIX: &str = "input-test";
const REAL_PREFIX: &str = "input-real";
const INPUT_PREFIX: &str = "input-";
const INPUT_SUFFIX: &str = ".txt";
const OUTPUT_FILE: &str = "output.json";
const EMPTY_TEST_INPUT: &str = "input-test.txt";
const EMPTY_REAL_INPUT: &str = "input-real.txt";

/// One input file of a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// File name, e.g. `input-test-2.txt`
    pub file_name: String,
    /// Key into `output.json`, e.g. `test-2`
    pub name: String,
    pub path: PathBuf,
}

impl Fixture {
    pub fn read(&self) -> Result<String, FixtureError> {
        fs::read_to_string(&self.path).map_err(|source| FixtureError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Fixtures of one puzzle day
///
/// Directory structure: `{base_dir}/{year}/day-{day:02}/`
pub struct FixtureDir {
    dir: PathBuf,
}

impl FixtureDir {
    pub fn new(base_dir: &Path, year: u16, day: u8) -> Self {
        Self {
            dir: base_dir.join(year.to_string()).join(format!("day-{:02}", day)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Create the directory with empty inputs and an `output.json` holding
    /// no answers; an existing directory is left untouched
    pub fn create(&self) -> Result<(), FixtureError> {
        if self.dir.exists() {
            return Err(FixtureError::AlreadyExists(self.dir.clone()));
        }
        fs::create_dir_all(&self.dir).map_err(|source| FixtureError::Io {
            path: self.dir.clone(),
            source,
        })?;
        for name in [EMPTY_TEST_INPUT, EMPTY_REAL_INPUT] {
            let path = self.dir.join(name);
            fs::write(&path, "").map_err(|source| FixtureError::Io { path, source })?;
        }

        let mut blank = Map::new();
        for fixture in ["test", "real"] {
            let parts = (1..=2).map(|part| (part_key(part), Value::Null)).collect();
            blank.insert(fixture.to_string(), Value::Object(parts));
        }
        self.save(&Expectations { answers: blank })
    }

    /// Input files to run, test fixtures before real ones, each group sorted
    /// by file name
    pub fn inputs(&self, selection: FileSelection) -> Result<Vec<Fixture>, FixtureError> {
        if !self.exists() {
            return Err(FixtureError::MissingDir(self.dir.clone()));
        }
        let io_error = |source| FixtureError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            if let Some(name) = entry.file_name().to_str()
                && name.ends_with(INPUT_SUFFIX)
            {
                names.push(name.to_string());
            }
        }
        names.sort();

        let group = |prefix: &str| {
            names
                .iter()
                .filter(|name| name.starts_with(prefix))
                .map(|file_name| self.fixture(file_name))
                .collect::<Vec<_>>()
        };
        Ok(match selection {
            FileSelection::TestOnly => group(TEST_PREFIX),
            FileSelection::RealOnly => group(REAL_PREFIX),
            FileSelection::All => {
                let mut all = group(TEST_PREFIX);
                all.extend(group(REAL_PREFIX));
                all
            }
        })
    }

    fn fixture(&self, file_name: &str) -> Fixture {
        let name = file_name
            .strip_prefix(INPUT_PREFIX)
            .and_then(|rest| rest.strip_suffix(INPUT_SUFFIX))
            .unwrap_or(file_name);
        Fixture {
            file_name: file_name.to_string(),
            name: name.to_string(),
            path: self.dir.join(file_name),
        }
    }

    fn output_path(&self) -> PathBuf {
        self.dir.join(OUTPUT_FILE)
    }

    /// Known answers from `output.json`; empty when the file does not exist
    pub fn expectations(&self) -> Result<Expectations, FixtureError> {
        let path = self.output_path();
        if !path.exists() {
            return Ok(Expectations::default());
        }
        let text = fs::read_to_string(&path).map_err(|source| FixtureError::Io {
            path: path.clone(),
            source,
        })?;
        match serde_json::from_str(&text) {
            Ok(Value::Object(answers)) => Ok(Expectations { answers }),
            Ok(_) => Err(FixtureError::Json {
                path,
                message: "expected an object of fixtures".to_string(),
            }),
            Err(e) => Err(FixtureError::Json {
                path,
                message: e.to_string(),
            }),
        }
    }

    /// Write `expectations` to `output.json`
    pub fn save(&self, expectations: &Expectations) -> Result<(), FixtureError> {
        let path = self.output_path();
        let text = serde_json::to_string_pretty(&Value::Object(expectations.answers.clone()))
            .map_err(|e| FixtureError::Json {
                path: path.clone(),
                message: e.to_string(),
            })?;
        fs::write(&path, text + "\n").map_err(|source| FixtureError::Io { path, source })
    }
}

/// Highest `{year}` directory under `base_dir`, if any
pub fn latest_year(base_dir: &Path) -> Result<Option<u16>, FixtureError> {
    let years = numbered_dirs(base_dir, |name| name.parse::<u16>().ok())?;
    Ok(years.into_iter().max())
}

/// Highest `day-{dd}` directory of `year`, if any
pub fn latest_day(base_dir: &Path, year: u16) -> Result<Option<u8>, FixtureError> {
    let year_dir = base_dir.join(year.to_string());
    let days = numbered_dirs(&year_dir, |name| name.strip_prefix("day-")?.parse::<u8>().ok())?;
    Ok(days.into_iter().max())
}

/// Subdirectory names of `dir` accepted by `number`; a missing `dir` has none
fn numbered_dirs<N>(
    dir: &Path,
    number: impl Fn(&str) -> Option<N>,
) -> Result<Vec<N>, FixtureError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let io_error = |source| FixtureError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut numbers = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let name = entry.file_name();
        if entry.path().is_dir()
            && let Some(n) = name.to_str().and_then(&number)
        {
            numbers.push(n);
        }
    }
    Ok(numbers)
}

/// Answers keyed by fixture name then `part{N}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expectations {
    answers: Map<String, Value>,
}

impl Expectations {
    /// Expected answer as text; JSON numbers and strings compare the same
    pub fn get(&self, fixture: &str, part: u8) -> Option<String> {
        let value = self.answers.get(fixture)?.get(part_key(part))?;
        match value {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Record an answer; integers that print back unchanged are stored as
    /// JSON numbers, anything else (`0123`, `+5`) as a string
    pub fn set(&mut self, fixture: &str, part: u8, answer: &str) {
        let value = if let Ok(number) = answer.parse::<i64>()
            && number.to_string() == answer
        {
            Value::from(number)
        } else if let Ok(number) = answer.parse::<u64>()
            && number.to_string() == answer
        {
            Value::from(number)
        } else {
            Value::from(answer)
        };
        let entry = self
            .answers
            .entry(fixture)
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(parts) = entry {
            parts.insert(part_key(part), value);
        }
    }
}

fn part_key(part: u8) -> String {
    format!("part{}", part)
}
