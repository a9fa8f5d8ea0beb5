//! Scaffolding fixture directories for the next puzzle day

use crate::config::{Config, Target};
use crate::error::CliError;
use crate::fixtures::{self, FixtureDir};
use chrono::Datelike;
use std::path::Path;

const LAST_DAY: u8 = 25;

/// A freshly created day
pub struct PreparedDay {
    pub year: u16,
    pub day: u8,
    pub fixtures: FixtureDir,
}

/// Create the fixtures of the configured day, or of the day after the latest
/// one on disk
pub fn prepare(config: &Config) -> Result<PreparedDay, CliError> {
    let Target::Single { year, day } = config.target else {
        return Err(CliError::Config("--prepare works on a single day".to_string()));
    };
    let (year, day) = next_day(&config.fixtures_dir, year, day)?;
    let fixtures = FixtureDir::new(&config.fixtures_dir, year, day);
    fixtures.create()?;
    log::info!("created {}", fixtures.path().display());
    Ok(PreparedDay {
        year,
        day,
        fixtures,
    })
}

/// Fill in a missing year with the latest fixture year (this year when there
/// is none) and a missing day with the one after that year's last fixture
fn next_day(base_dir: &Path, year: Option<u16>, day: Option<u8>) -> Result<(u16, u8), CliError> {
    let year = match year {
        Some(year) => year,
        None => match fixtures::latest_year(base_dir)? {
            Some(year) => year,
            None => current_year()?,
        },
    };
    let day = match day {
        Some(day) => day,
        None => fixtures::latest_day(base_dir, year)?.map_or(1, |last| last.saturating_add(1)),
    };
    if !(1..=LAST_DAY).contains(&day) {
        return Err(CliError::Config(format!("{year} has no day {day} to prepare")));
    }
    Ok((year, day))
}

fn current_year() -> Result<u16, CliError> {
    let year = chrono::Local::now().year();
    u16::try_from(year).map_err(|_| CliError::Config(format!("{year} is not a puzzle year")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileSelection;
    use crate::error::FixtureError;
    use std::fs;
    use tempfile::TempDir;

    fn config(base: &Path, year: Option<u16>, day: Option<u8>) -> Config {
        Config {
            target: Target::Single { year, day },
            parts: Vec::new(),
            files: FileSelection::All,
            save: false,
            prepare: true,
            tags: Vec::new(),
            fixtures_dir: base.to_path_buf(),
            quiet: true,
            log_level: log::LevelFilter::Off,
        }
    }

    fn mkdirs(base: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(base.join(dir)).unwrap();
        }
    }

    #[test]
    fn follows_the_latest_day_of_the_latest_year() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["2023/day-25", "2024/day-16", "2024/day-20"]);

        let prepared = prepare(&config(temp.path(), None, None)).unwrap();
        assert_eq!((prepared.year, prepared.day), (2024, 21));
        assert_eq!(prepared.fixtures.path(), temp.path().join("2024/day-21"));
        assert!(prepared.fixtures.path().join("input-test.txt").is_file());
        assert!(prepared.fixtures.path().join("input-real.txt").is_file());
        assert!(prepared.fixtures.path().join("output.json").is_file());
    }

    #[test]
    fn a_new_year_starts_at_day_one() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["2023/day-08"]);
        let prepared = prepare(&config(temp.path(), Some(2024), None)).unwrap();
        assert_eq!((prepared.year, prepared.day), (2024, 1));
        assert!(temp.path().join("2024/day-01").is_dir());
    }

    #[test]
    fn refuses_an_existing_day() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["2024/day-18"]);
        assert!(matches!(
            prepare(&config(temp.path(), Some(2024), Some(18))),
            Err(CliError::Fixture(FixtureError::AlreadyExists(_)))
        ));
    }

    #[test]
    fn nothing_after_the_last_day() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["2023/day-25"]);
        assert!(matches!(
            prepare(&config(temp.path(), None, None)),
            Err(CliError::Config(_))
        ));
        assert!(!temp.path().join("2023/day-26").exists());
    }

    #[test]
    fn empty_root_uses_this_year() {
        let temp = TempDir::new().unwrap();
        let (year, day) = next_day(temp.path(), None, None).unwrap();
        assert_eq!(i32::from(year), chrono::Local::now().year());
        assert_eq!(day, 1);
    }
}
