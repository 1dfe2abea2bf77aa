use std::num::ParseIntError;

use aoc_framework::parsing::{
    InputScanner, ParseContextError, parse_integer_line, parse_with_context,
};
use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

use crate::maths::CheckedProduct;

#[day_runner(
    day = 6,
    title = "Wait For It",
    parsed = RaceSheet,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2023<6> {}

/*
Input is a sheet of boat races: a `Time:` line of race durations and a `Distance:` line of record
distances, one column per race.

A boat held at the start for `h` milliseconds moves at `h` millimetres per millisecond for the rest
of the race, so it travels `h * (time - h)`.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Race {
    time: u64,
    record: u64,
}

impl Race {
    fn distance(&self, hold: u64) -> u128 {
        u128::from(hold) * u128::from(self.time - hold)
    }

    fn beats_record(&self, hold: u64) -> bool {
        self.distance(hold) > u128::from(self.record)
    }

    /// Count the hold times that beat the record.
    ///
    /// Distances rise up to `time / 2` then mirror back down, so the shortest winning hold `h` at
    /// or below the midpoint gives every winner: `h..=time - h`.
    fn ways_to_win(&self) -> u64 {
        let midpoint = self.time / 2;
        if !self.beats_record(midpoint) {
            return 0;
        }

        // binary search for the first winning hold in 0..=midpoint
        let (mut low, mut high) = (0, midpoint);
        while low < high {
            let middle = low + (high - low) / 2;
            if self.beats_record(middle) {
                high = middle;
            } else {
                low = middle + 1;
            }
        }

        self.time - 2 * low + 1
    }
}

#[derive(thiserror::Error, Debug)]
enum ParseRaceSheetError {
    #[error("expected a line starting with {0:?}")]
    ExpectedLabel(&'static str),

    #[error("found {times} times but {records} distances")]
    MismatchedColumns { times: usize, records: usize },

    #[error("invalid number")]
    Number(#[from] ParseContextError<ParseIntError>),
}

/// The races, plus the single long race read by ignoring the spaces between columns.
#[derive(Debug)]
struct RaceSheet {
    races: Vec<Race>,
    long_race: Race,
}

/// Read a labelled line as its separate numbers and as the number made of all its digits.
fn parse_labelled_line(
    line: &str,
    label: &'static str,
) -> Result<(Vec<u64>, u64), ParseRaceSheetError> {
    let values = line
        .strip_prefix(label)
        .ok_or(ParseRaceSheetError::ExpectedLabel(label))?;
    let separate = parse_integer_line::<u64>(values)?;
    let joined: String = values.split_whitespace().collect();
    Ok((separate, parse_with_context::<u64>(&joined)?))
}

impl ParseData for RaceSheet {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        let (times, long_time) = scanner
            .next_in_sequence(|_, line| parse_labelled_line(line, "Time:"))?
            .ok_or(ParseRaceSheetError::ExpectedLabel("Time:"))?;
        let (records, long_record) = scanner
            .next_in_sequence(|_, line| parse_labelled_line(line, "Distance:"))?
            .ok_or(ParseRaceSheetError::ExpectedLabel("Distance:"))?;

        if times.len() != records.len() {
            return Err(ParseRaceSheetError::MismatchedColumns {
                times: times.len(),
                records: records.len(),
            }
            .into());
        }

        let races = times
            .into_iter()
            .zip(records)
            .map(|(time, record)| Race { time, record })
            .collect();
        Ok(Self {
            races,
            long_race: Race {
                time: long_time,
                record: long_record,
            },
        })
    }
}

/*
For part 1, multiply together the number of ways to beat the record in each race.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = RaceSheet;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .races
            .iter()
            .map(Race::ways_to_win)
            .checked_product()
            .ok_or_else(|| "overflow multiplying ways to win".into())
    }
}

/*
For part 2, there is only one race: the spaces between the columns were bad kerning. Count the ways
to beat its record.
*/

impl Solution<PartTwo> for Day06 {
    type Input = RaceSheet;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.long_race.ways_to_win())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Time:      7  15   30
Distance:  9  40  200
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = RaceSheet::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 288);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = RaceSheet::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 71503);
        Ok(())
    }

    #[test]
    fn ways_to_win_matches_counting_every_hold() {
        for time in 0..40 {
            for record in 0..120 {
                let race = Race { time, record };
                let counted = (0..=time).filter(|hold| race.beats_record(*hold)).count();
                let counted = u64::try_from(counted).expect("count should fit");
                assert_eq!(race.ways_to_win(), counted, "{race:?}");
            }
        }
    }

    #[test]
    fn mismatched_columns_fail() {
        assert!(RaceSheet::parse("Time: 1 2\nDistance: 3\n").is_err());
        assert!(RaceSheet::parse("Time: 1 2\n").is_err());
    }
}
