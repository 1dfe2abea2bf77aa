//! Solutions implemented for Advent of Code 2023.
//!
//! [`run_day`] runs a solution by its day. To add a day:
//! 1. Make a submodule holding the solution.
//! 2. Annotate [`AdventOfCode2023<DAY>`] in the submodule with
//!    [`#[day_runner]`][aoc_framework::runner::day_runner].
//! 3. Declare the submodule and add the day to [`solution_days!`] below.

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{DayRunner, OutputHandler, Timing};
use thiserror::Error;

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`DayRunner`] for the day:
///
/// ```ignore
/// #[day_runner(day = 1, title = "Trebuchet?!", part_one = Day01, part_two = Day01)]
/// impl super::AdventOfCode2023<1> {}
/// ```
struct AdventOfCode2023<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Generates [`available_days`] and [`run_day`] from one list of days.
macro_rules! solution_days {
    ($($day:literal),* $(,)?) => {
        /// Days with a solution, in ascending order.
        pub fn available_days() -> impl Iterator<Item = u8> {
            [$(<AdventOfCode2023<$day> as DayRunner>::INFO.day),*].into_iter()
        }

        /// Run a solution based on the day.
        ///
        /// # Errors
        ///
        /// If the solution for the given day is not available, a [`DayNotAvailable`] error is
        /// returned.
        ///
        /// Any dynamically dispatched error from running the solution is propagated.
        pub fn run_day(
            day: u8,
            input: &str,
            handler: &mut dyn OutputHandler,
            timing: Timing,
        ) -> DynamicResult<()> {
            match day {
                $($day => AdventOfCode2023::<$day>::run(input, handler, timing),)*
                _ => Err(DayNotAvailable(day).into()),
            }
        }
    };
}

solution_days!(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);

#[cfg(test)]
mod tests {
    use std::fmt::Display;
    use std::time::Duration;

    use aoc_framework::PartKind;
    use aoc_framework::runner::DayInfo;

    use super::*;

    #[derive(Default)]
    struct Answers {
        info: Option<DayInfo>,
        parts: Vec<(PartKind, String)>,
    }

    impl OutputHandler for Answers {
        fn day_start(&mut self, info: &DayInfo) {
            self.info = Some(*info);
        }

        fn parse_end(&mut self, _duration_opt: Option<Duration>) {}

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            _duration_opt: Option<Duration>,
        ) {
            self.parts.push((part, output.to_string()));
        }
    }

    #[test]
    fn available_days_match_their_runners() {
        let days: Vec<u8> = available_days().collect();
        assert_eq!(days, (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn run_day_dispatches_and_reports_both_parts() -> DynamicResult<()> {
        let mut answers = Answers::default();
        run_day(9, "0 3 6 9 12 15\n", &mut answers, Timing::Unmeasured)?;

        let info = answers.info.expect("day should have started");
        assert_eq!(info.day, 9);
        assert_eq!(info.to_string(), "Day 9: Mirage Maintenance");
        assert_eq!(
            answers.parts,
            [(PartKind::One, "18".to_string()), (PartKind::Two, "-3".to_string())]
        );
        Ok(())
    }

    #[test]
    fn unknown_day_is_not_available() {
        let mut answers = Answers::default();
        let error = run_day(12, "", &mut answers, Timing::Unmeasured).expect_err("no day 12");
        assert_eq!(error.to_string(), "no solution available for day 12");
        assert!(answers.info.is_none());
    }
}
