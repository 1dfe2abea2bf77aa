use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[day_runner(day = 1, title = "Trebuchet?!", part_one = Day01, part_two = Day01)]
impl super::AdventOfCode2023<1> {}

#[derive(Error, Debug)]
enum Day01Error {
    #[error("sum of calibration values overflowed")]
    SumOverflow,
}

/*
Input is a calibration document, one calibration value per line.

A line's value is a two-digit number made of the first and last digit in the line. A line with a
single digit uses it for both. Lines without any digit add nothing.
*/

/// English names of the digits, indexed by value.
const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// What counts as a digit while scanning a line.
#[derive(Debug, Clone, Copy)]
enum Tokens {
    /// Only the characters `0` to `9`.
    Digits,
    /// Digit characters, plus digit names in any letter case.
    DigitsAndNames,
}

impl Tokens {
    /// The digit whose token starts at byte `index` of `line`, if any.
    fn digit_at(self, line: &str, index: usize) -> Option<u8> {
        let rest = &line[index..];
        let first = rest.chars().next()?;
        if let Some(digit) = first.to_digit(10) {
            return u8::try_from(digit).ok();
        }

        match self {
            Self::Digits => None,
            Self::DigitsAndNames => DIGIT_NAMES.iter().zip(0..).find_map(|(name, value)| {
                rest.get(..name.len())
                    .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
                    .then_some(value)
            }),
        }
    }
}

/// The calibration value of one line.
///
/// Every character position is tried as a token start, so overlapping names like `"eightwo"` yield
/// both digits.
fn calibration_value(line: &str, tokens: Tokens) -> u8 {
    let mut digits = line
        .char_indices()
        .filter_map(|(index, _)| tokens.digit_at(line, index));

    digits.next().map_or(0, |first| {
        let last = digits.next_back().unwrap_or(first);
        first * 10 + last
    })
}

fn sum_calibration_values(input: &str, tokens: Tokens) -> Result<u32, Day01Error> {
    input
        .lines()
        .map(|line| u32::from(calibration_value(line, tokens)))
        .checked_sum()
        .ok_or(Day01Error::SumOverflow)
}

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = str;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_calibration_values(input, Tokens::Digits)?)
    }
}

/*
For part 2, digits may also be spelled out ("one", "two", ...). The sum of calibration values is
still the answer.
*/

impl Solution<PartTwo> for Day01 {
    type Input = str;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_calibration_values(input, Tokens::DigitsAndNames)?)
    }
}
