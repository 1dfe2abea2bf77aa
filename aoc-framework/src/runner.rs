//! Running a day's solutions and reporting their answers.
//!
//! Annotate a day with [`#[day_runner]`][day_runner] to implement [`DayRunner`]:
//!
//! ```
//! # use aoc_framework::runner::day_runner;
//! # use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
//! #
//! struct Floors;
//!
//! impl Solution<PartOne> for Floors {
//!     type Input = str;
//!     /* ... */
//! #    type Output = i32;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<i32> {
//! #        Ok(0)
//! #    }
//! }
//! # impl Solution<PartTwo> for Floors {
//! #    type Input = str;
//! #    type Output = i32;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<i32> {
//! #        Ok(0)
//! #    }
//! # }
//!
//! #[day_runner(day = 1, title = "Not Quite Lisp", part_one = Floors, part_two = Floors)]
//! struct FloorsRunner;
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use aoc_framework_macros::day_runner;

/// The identity of a day's puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInfo {
    /// Day of the month, from 1.
    pub day: u8,
    /// The puzzle title, without the "Day N:" prefix.
    pub title: &'static str,
}

impl Display for DayInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Day {}: {}", self.day, self.title)
    }
}

/// Whether the runner measures how long each step takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timing {
    Measured,
    #[default]
    Unmeasured,
}

impl Timing {
    /// Evaluate `step`, measuring its duration if timing is enabled.
    fn run<T>(self, step: impl FnOnce() -> T) -> (T, Option<Duration>) {
        match self {
            Self::Measured => {
                let start = Instant::now();
                let result = step();
                (result, Some(start.elapsed()))
            }
            Self::Unmeasured => (step(), None),
        }
    }
}

impl From<bool> for Timing {
    fn from(timed: bool) -> Self {
        if timed {
            Self::Measured
        } else {
            Self::Unmeasured
        }
    }
}

/// Receives the events of running a day.
pub trait OutputHandler {
    /// Called once before anything else runs.
    fn day_start(&mut self, info: &DayInfo);

    /// Called when the input has been parsed into the day's data type.
    ///
    /// Not called for days that solve straight from the input string.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// Called with each part's answer.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timing: Timing,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    let (result, duration_opt) = timing.run(|| S::solve(input));
    let output = result?;
    debug!(%part, %output, ?duration_opt, "part solved");
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timing: Timing,
) -> DynamicResult<D> {
    let (result, duration_opt) = timing.run(|| D::parse(input));
    let parsed = result?;
    debug!(?duration_opt, "input parsed");
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run both parts of a day whose solutions take the input string directly.
///
/// # Errors
///
/// The first error from either part is returned; part two doesn't run if part one failed.
pub fn solve_day<S1, S2>(
    info: DayInfo,
    input: &str,
    handler: &mut dyn OutputHandler,
    timing: Timing,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    debug!(%info, input_len = input.len(), "running day");
    handler.day_start(&info);
    run_part::<S1, PartOne>(input, handler, timing)?;
    run_part::<S2, PartTwo>(input, handler, timing)
}

/// Run both parts of a day, parsing the input into `D` once and sharing it between the parts.
///
/// # Errors
///
/// A parse error stops the run before either part; otherwise the first part error is returned.
pub fn solve_parsed_day<D, S1, S2>(
    info: DayInfo,
    input: &str,
    handler: &mut dyn OutputHandler,
    timing: Timing,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    debug!(%info, input_len = input.len(), "running day");
    handler.day_start(&info);
    let parsed = run_parse::<D>(input, handler, timing)?;
    run_part::<S1, PartOne>(&parsed, handler, timing)?;
    run_part::<S2, PartTwo>(&parsed, handler, timing)
}

/// A day that can be run end to end.
///
/// Implement with the [`day_runner`] attribute macro.
pub trait DayRunner {
    /// The day this runner solves.
    const INFO: DayInfo;

    /// Run the day against `input`, reporting through `handler`.
    ///
    /// # Errors
    ///
    /// Any parse or solve error is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timing: Timing) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynamicError;

    /// Records events as strings.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl OutputHandler for Recorder {
        fn day_start(&mut self, info: &DayInfo) {
            self.0.push(format!("start {info}"));
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.0.push(format!("parsed timed={}", duration_opt.is_some()));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.0
                .push(format!("{part}: {output} timed={}", duration_opt.is_some()));
        }
    }

    const INFO: DayInfo = DayInfo {
        day: 99,
        title: "Testing",
    };

    struct Words(Vec<String>);

    impl ParseData for Words {
        fn parse(input: &str) -> DynamicResult<Self> {
            if input.is_empty() {
                return Err("empty input".into());
            }
            Ok(Self(input.split_whitespace().map(String::from).collect()))
        }
    }

    struct WordStats;

    impl Solution<PartOne> for WordStats {
        type Input = Words;
        type Output = usize;

        fn solve(input: &Words) -> DynamicResult<usize> {
            Ok(input.0.len())
        }
    }

    impl Solution<PartTwo> for WordStats {
        type Input = Words;
        type Output = String;

        fn solve(input: &Words) -> DynamicResult<String> {
            input
                .0
                .iter()
                .max_by_key(|word| word.len())
                .cloned()
                .ok_or_else(|| "no words".into())
        }
    }

    struct Chars;

    impl Solution<PartOne> for Chars {
        type Input = str;
        type Output = usize;

        fn solve(input: &str) -> DynamicResult<usize> {
            Ok(input.chars().count())
        }
    }

    impl Solution<PartTwo> for Chars {
        type Input = str;
        type Output = usize;

        fn solve(_input: &str) -> DynamicResult<usize> {
            Err(DynamicError::from("part two always fails"))
        }
    }

    #[test]
    fn parsed_day_reports_events_in_order() -> DynamicResult<()> {
        let mut recorder = Recorder::default();
        solve_parsed_day::<Words, WordStats, WordStats>(
            INFO,
            "red green blue",
            &mut recorder,
            Timing::Unmeasured,
        )?;
        assert_eq!(
            recorder.0,
            [
                "start Day 99: Testing",
                "parsed timed=false",
                "Part 1: 3 timed=false",
                "Part 2: green timed=false",
            ]
        );
        Ok(())
    }

    #[test]
    fn measured_timing_passes_durations() -> DynamicResult<()> {
        let mut recorder = Recorder::default();
        solve_parsed_day::<Words, WordStats, WordStats>(
            INFO,
            "a bb",
            &mut recorder,
            Timing::Measured,
        )?;
        assert!(recorder.0[1..].iter().all(|event| event.ends_with("timed=true")));
        Ok(())
    }

    #[test]
    fn parse_failure_stops_before_parts() {
        let mut recorder = Recorder::default();
        let result =
            solve_parsed_day::<Words, WordStats, WordStats>(INFO, "", &mut recorder, false.into());
        assert!(result.is_err());
        assert_eq!(recorder.0, ["start Day 99: Testing"]);
    }

    #[test]
    fn part_error_is_propagated_after_earlier_output() {
        let mut recorder = Recorder::default();
        let result = solve_day::<Chars, Chars>(INFO, "abc", &mut recorder, Timing::Unmeasured);
        let Err(error) = result else {
            panic!("part two should fail");
        };
        assert_eq!(error.to_string(), "part two always fails");
        assert_eq!(recorder.0, ["start Day 99: Testing", "Part 1: 3 timed=false"]);
    }
}
