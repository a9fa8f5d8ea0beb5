//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--fixtures-dir` is not given
pub const FIXTURES_ENV: &str = "AOC_FIXTURES_DIR";
/// Environment variable holding a log level (`error`..`trace`)
pub const LOG_ENV: &str = "AOC_LOG";
const DEFAULT_FIXTURES_DIR: &str = "fixtures";

/// Which fixture files of a day to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSelection {
    /// Test fixtures first, then real inputs
    All,
    TestOnly,
    RealOnly,
}

/// Which solvers to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The latest registered solver, optionally pinned to a year and/or day
    Single { year: Option<u16>, day: Option<u8> },
    /// Every registered solver with a fixture directory
    All,
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    pub target: Target,
    /// Parts to run, in order, without duplicates (empty = every part)
    pub parts: Vec<u8>,
    pub files: FileSelection,
    /// Whether to write answers back to `output.json`
    pub save: bool,
    /// Scaffold the target day's fixtures instead of running solvers
    pub prepare: bool,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    pub fixtures_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
    pub log_level: log::LevelFilter,
}

impl Config {
    /// Build config from CLI args and the environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Like [`Config::from_args`] with an explicit environment lookup
    pub fn resolve(args: Args, env: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let fixtures_dir = args
            .fixtures_dir
            .or_else(|| env(FIXTURES_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURES_DIR));

        let files = match (args.test, args.no_test) {
            (true, false) => FileSelection::TestOnly,
            (false, true) => FileSelection::RealOnly,
            (false, false) => FileSelection::All,
            (true, true) => {
                return Err(CliError::Config(
                    "--test and --no-test cannot be combined".to_string(),
                ));
            }
        };

        let target = if args.all {
            Target::All
        } else {
            Target::Single {
                year: args.year,
                day: args.day,
            }
        };

        let mut parts = Vec::with_capacity(args.part.len());
        for part in args.part {
            if !parts.contains(&part) {
                parts.push(part);
            }
        }

        Ok(Config {
            target,
            parts,
            files,
            save: args.save,
            prepare: args.prepare,
            tags: args.tags,
            fixtures_dir: expand_tilde(&fixtures_dir),
            quiet: args.quiet,
            log_level: log_level(args.quiet, args.verbose, env(LOG_ENV).as_deref())?,
        })
    }
}

/// `--verbose` wins over `AOC_LOG`; `--quiet` only keeps errors
fn log_level(quiet: bool, verbose: u8, env: Option<&str>) -> Result<log::LevelFilter, CliError> {
    if quiet {
        return Ok(log::LevelFilter::Error);
    }
    match verbose {
        0 => match env {
            Some(level) => level
                .parse()
                .map_err(|_| CliError::Config(format!("invalid {LOG_ENV} level: {level}"))),
            None => Ok(log::LevelFilter::Warn),
        },
        1 => Ok(log::LevelFilter::Info),
        2 => Ok(log::LevelFilter::Debug),
        _ => Ok(log::LevelFilter::Trace),
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}
