//! Output formatting for solver results

use crate::executor::RunResult;
use chrono::TimeDelta;
use crossterm::style::Stylize;

/// How an answer compares with the recorded one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing recorded for this fixture and part
    Unchecked,
    Correct,
    /// Numeric answer below the expected one by `diff`
    TooLow { diff: u128 },
    /// Numeric answer above the expected one by `diff`
    TooHigh { diff: u128 },
    /// Non-numeric mismatch
    Wrong,
}

impl Verdict {
    pub fn judge(expected: Option<&str>, answer: &str) -> Self {
        let Some(expected) = expected else {
            return Verdict::Unchecked;
        };
        if expected == answer {
            return Verdict::Correct;
        }
        match (expected.trim().parse::<i128>(), answer.trim().parse::<i128>()) {
            (Ok(expected), Ok(answer)) if answer < expected => Verdict::TooLow {
                diff: expected.abs_diff(answer),
            },
            (Ok(expected), Ok(answer)) if answer > expected => Verdict::TooHigh {
                diff: expected.abs_diff(answer),
            },
            _ => Verdict::Wrong,
        }
    }
}

/// Tally of everything printed so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub correct: usize,
    pub wrong: usize,
    pub unchecked: usize,
    pub failed: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            correct: 0,
            wrong: 0,
            unchecked: 0,
            failed: 0,
            parse_time: TimeDelta::zero(),
            solve_time: TimeDelta::zero(),
        }
    }
}

impl Summary {
    pub fn record(&mut self, result: &RunResult) {
        if let Some(parse) = result.parse_duration {
            self.parse_time += parse;
        }
        match &result.answer {
            Ok(answer) => {
                self.solve_time += result.solve_duration;
                match Verdict::judge(result.expected.as_deref(), answer) {
                    Verdict::Correct => self.correct += 1,
                    Verdict::Unchecked => self.unchecked += 1,
                    _ => self.wrong += 1,
                }
            }
            Err(_) => self.failed += 1,
        }
    }

    /// Whether the run should exit with a failure status
    pub fn has_failures(&self) -> bool {
        self.wrong > 0 || self.failed > 0
    }
}

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Report a day created by `--prepare`
    pub fn print_prepared(&self, year: u16, day: u8, path: &std::path::Path) {
        if self.quiet {
            println!("{}", path.display());
            return;
        }
        println!(
            "{} {} {} {} {} {}",
            "aoc".dark_grey(),
            year.to_string().white().bold(),
            "day".dark_grey(),
            format!("{:02}", day).white().bold(),
            "ready at".dark_grey(),
            path.display().to_string().white().bold(),
        );
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &RunResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &RunResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Header line, then the answer checked against `output.json`
    fn print_full(&self, result: &RunResult) {
        println!(
            "{} {} {} {} {} {} {} {} {}",
            "aoc".dark_grey(),
            result.year.to_string().white().bold(),
            "day".dark_grey(),
            format!("{:02}", result.day).white().bold(),
            "part".dark_grey(),
            result.part.to_string().white().bold(),
            "file".dark_grey(),
            format!("#{}", result.file_number).white().bold(),
            format!("({})", result.fixture.file_name).dark_grey(),
        );

        let answer = match &result.answer {
            Ok(answer) => answer,
            Err(e) => {
                eprintln!("{} {}", "     error:".dark_grey(), e.to_string().red());
                return;
            }
        };

        let timing = self.timing(result);
        let expected = result.expected.as_deref();
        let width = answer.len().max(expected.map_or(0, str::len));
        let padded = format!("{:>width$}", answer);

        match Verdict::judge(expected, answer) {
            Verdict::Unchecked => {
                println!("{} {} {}", "    result:".dark_grey(), padded, timing);
            }
            Verdict::Correct => {
                println!(
                    "{} {} {}{}{} {}",
                    "    result:".dark_grey(),
                    padded.green(),
                    "(".dark_grey(),
                    "CORRECT".green().bold(),
                    ")".dark_grey(),
                    timing
                );
            }
            verdict => {
                println!(
                    "{} {:>width$}",
                    "  expected:".dark_grey(),
                    expected.unwrap_or_default()
                );
                let note = match verdict {
                    Verdict::TooLow { diff } => format!("(TOO_LOW diff={})", diff),
                    Verdict::TooHigh { diff } => format!("(TOO_HIGH diff={})", diff),
                    _ => String::new(),
                };
                println!(
                    "{} {} {} {}",
                    "    result:".dark_grey(),
                    padded.red(),
                    note.red(),
                    timing
                );
            }
        }
    }

    fn timing(&self, result: &RunResult) -> String {
        let parse_timing = result
            .parse_duration
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        format!("[{}solve: {}]", parse_timing, format_duration(result.solve_duration))
            .dark_grey()
            .to_string()
    }

    /// Print a summary after all results
    pub fn print_summary(&self, summary: &Summary) {
        if self.quiet {
            return;
        }

        println!();
        println!("--- Summary ---");
        println!(
            "Answers: {} correct, {} wrong, {} unchecked, {} failed",
            summary.correct.to_string().green(),
            summary.wrong.to_string().red(),
            summary.unchecked,
            summary.failed.to_string().red()
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
