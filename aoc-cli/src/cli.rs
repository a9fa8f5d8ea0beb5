//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code fixture runner
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    about = "Run Advent of Code solvers against local fixtures",
    version
)]
pub struct Args {
    /// Year to run (defaults to the latest registered solver)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (defaults to the latest registered day of the year)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run, repeatable (runs every part if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Vec<u8>,

    /// Only run `input-test*.txt` fixtures
    #[arg(long, conflicts_with = "no_test")]
    pub test: bool,

    /// Only run `input-real*.txt` fixtures
    #[arg(long)]
    pub no_test: bool,

    /// Write the answers to the day's `output.json`
    #[arg(long)]
    pub save: bool,

    /// Run every registered solver that has a fixture directory
    #[arg(short, long, conflicts_with_all = ["year", "day"])]
    pub all: bool,

    /// Create empty fixtures for a new day instead of running solvers
    /// (defaults to the latest fixture year and the day after its last one)
    #[arg(long, conflicts_with_all = ["all", "save", "test", "no_test", "part", "tags"])]
    pub prepare: bool,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Fixture root, laid out as `{year}/day-{dd}/`
    /// [env: AOC_FIXTURES_DIR, default: fixtures]
    #[arg(long)]
    pub fixtures_dir: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log verbosity, repeat for more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parts_repeat() {
        let args = Args::try_parse_from(["aoc", "-y", "2024", "-d", "16", "-p", "2", "-p", "1"])
            .unwrap();
        assert_eq!(args.year, Some(2024));
        assert_eq!(args.day, Some(16));
        assert_eq!(args.part, vec![2, 1]);
    }

    #[test]
    fn rejects_conflicting_filters() {
        assert!(Args::try_parse_from(["aoc", "--test", "--no-test"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--all", "--day", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
    }

    #[test]
    fn prepare_only_takes_a_day() {
        let args = Args::try_parse_from(["aoc", "--prepare", "-y", "2024", "-d", "21"]).unwrap();
        assert!(args.prepare);
        assert!(Args::try_parse_from(["aoc", "--prepare", "--all"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--prepare", "--save"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::try_parse_from(["aoc", "-vv", "--tags", "board,layers"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.tags, vec!["board", "layers"]);
    }
}
