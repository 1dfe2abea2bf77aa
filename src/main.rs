#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::needless_collect,
    clippy::option_if_let_else,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Error, Result, bail};
use aoc_framework::PartKind;
use aoc_framework::runner::{DayInfo, OutputHandler, Timing};
use clap::{ArgAction, Parser};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod maths;
mod solutions;

/// Advent of Code 2023 puzzle solver.
#[derive(Parser, Debug)]
struct Cli {
    /// The day's solution to run (e.g. 1, 2, etc).
    #[arg(
        value_parser = clap::value_parser!(u8).range(1..=25),
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    day: Option<u8>,

    /// Run every available day in order.
    #[arg(short, long, action = ArgAction::SetTrue)]
    all: bool,

    /// Sets an alternative input file to use over default input.
    #[arg(short, long, value_name = "FILE", conflicts_with = "all")]
    input: Option<PathBuf>,

    /// Directory holding default inputs, named `day<N>.txt`.
    #[arg(long, value_name = "DIR", default_value = "input")]
    input_dir: PathBuf,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,

    /// Log more detail to stderr; repeat for more. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Install a stderr subscriber so logs never mix with answers on stdout.
fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "aoc_2023=info,aoc_framework=info,warn",
        _ => "aoc_2023=debug,aoc_framework=debug,info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// The default input path for a day.
fn default_input_path(input_dir: &Path, day: u8) -> PathBuf {
    input_dir.join(format!("day{day}.txt"))
}

/// Read a puzzle input file to a string.
fn read_input(path: &Path) -> Result<String> {
    info!(path = %path.display(), "reading input");
    fs::read_to_string(path).with_context(|| {
        format!(
            "could not read input file: {}\n\n\
            please create the file or provide the input file argument",
            path.display()
        )
    })
}

struct CliOutputHandler {
    /// A minimum duration to filter any outputs of duration by.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    fn format_duration(duration: Duration) -> String {
        const DECIMAL_PLACES: usize = 3;

        let nanos = duration.as_nanos();
        if nanos >= 1_000_000_000 {
            format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f64())
        } else if nanos >= 1_000_000 {
            format!("{:.*} milliseconds", DECIMAL_PLACES, duration.as_secs_f64() * 1e3)
        } else if nanos >= 1_000 {
            format!("{:.*} microseconds", DECIMAL_PLACES, duration.as_secs_f64() * 1e6)
        } else {
            format!("{nanos} nanoseconds")
        }
    }

    /// Format a duration if one was measured and it reaches the minimum.
    fn shown_duration(&self, duration_opt: Option<Duration>) -> Option<String> {
        duration_opt
            .filter(|d| *d >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn day_start(&mut self, info: &DayInfo) {
        println!("= {info} =");
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(formatted) = self.shown_duration(duration_opt) {
            println!("Input parsed in {formatted}");
        }
    }

    fn part_output(
        &mut self,
        part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        if let Some(formatted) = self.shown_duration(duration_opt) {
            println!("{part}: {output} ({formatted})");
        } else {
            println!("{part}: {output}");
        }
    }
}

fn run_one(day: u8, input: &str, handler: &mut CliOutputHandler, timing: Timing) -> Result<()> {
    solutions::run_day(day, input, handler, timing).map_err(|dyn_error| {
        Error::from_boxed(dyn_error).context(format!("failed to run solution for day {day}"))
    })
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let timing = Timing::from(args.timed);
    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));

    if args.all {
        for day in solutions::available_days() {
            let path = default_input_path(&args.input_dir, day);
            if !path.exists() {
                warn!(day, path = %path.display(), "skipping day without input");
                continue;
            }
            let input = read_input(&path)?;
            run_one(day, &input, &mut handler, timing)?;
            println!();
        }
        return Ok(());
    }

    let Some(day) = args.day else {
        bail!("a day or --all is required");
    };
    let path = args
        .input
        .unwrap_or_else(|| default_input_path(&args.input_dir, day));
    let input = read_input(&path)?;
    run_one(day, &input, &mut handler, timing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_uses_unpadded_day() {
        let path = default_input_path(Path::new("input"), 7);
        assert_eq!(path, PathBuf::from("input").join("day7.txt"));
    }

    #[test]
    fn durations_pick_a_readable_unit() {
        let format = CliOutputHandler::format_duration;
        assert_eq!(format(Duration::from_nanos(250)), "250 nanoseconds");
        assert_eq!(format(Duration::from_micros(1500)), "1.500 milliseconds");
        assert_eq!(format(Duration::from_millis(2500)), "2.500 seconds");
    }

    #[test]
    fn durations_below_minimum_are_hidden() {
        let handler = CliOutputHandler::new(Duration::from_millis(5));
        assert_eq!(handler.shown_duration(Some(Duration::from_millis(1))), None);
        assert_eq!(handler.shown_duration(None), None);
        assert!(handler.shown_duration(Some(Duration::from_millis(5))).is_some());
    }

    #[test]
    fn missing_input_is_an_error_naming_the_path() {
        let path = Path::new("no-such-dir").join("day1.txt");
        let error = read_input(&path).expect_err("file should not exist");
        assert!(format!("{error}").contains("day1.txt"));
    }

    #[test]
    fn cli_requires_day_or_all() {
        assert!(Cli::try_parse_from(["aoc-2023"]).is_err());
        assert!(Cli::try_parse_from(["aoc-2023", "26"]).is_err());
        assert!(Cli::try_parse_from(["aoc-2023", "--all", "--input", "x.txt"]).is_err());

        let cli = Cli::try_parse_from(["aoc-2023", "3", "-t", "-vv"]).expect("valid arguments");
        assert_eq!(cli.day, Some(3));
        assert!(cli.timed);
        assert_eq!(cli.verbose, 2);
    }
}
