use aoc_framework::parsing::{parse_input_lines, parse_integer_line};
use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[day_runner(
    day = 9,
    title = "Mirage Maintenance",
    parsed = Report,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2023<9> {}

/*
Input is an oasis report: one history of readings per line, as space-separated signed integers.
*/

struct Report(Vec<Vec<i64>>);

impl ParseData for Report {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let histories = parse_input_lines(input, |_, line| parse_integer_line::<i64>(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(histories))
    }
}

/// Predict the value after a history.
///
/// Take differences between neighbouring values until they are all zero. The prediction is the sum
/// of the last value of each layer of differences, the history included. `None` on overflow.
fn extrapolate(history: &[i64]) -> Option<i64> {
    let mut layer = history.to_vec();
    let mut prediction = 0i64;
    while layer.iter().any(|value| *value != 0) {
        prediction = prediction.checked_add(*layer.last()?)?;
        layer = layer
            .windows(2)
            .map(|pair| pair[1].checked_sub(pair[0]))
            .collect::<Option<_>>()?;
    }
    Some(prediction)
}

impl Report {
    fn sum_predictions(&self, predict: impl Fn(&[i64]) -> Option<i64>) -> Option<i64> {
        self.0
            .iter()
            .map(|history| predict(history))
            .collect::<Option<Vec<_>>>()
            .and_then(|predictions| predictions.into_iter().checked_sum())
    }
}

/*
For part 1, predict the next value of every history and sum the predictions.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = Report;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .sum_predictions(extrapolate)
            .ok_or_else(|| "overflow extrapolating forwards".into())
    }
}

/*
For part 2, predict the value before the start of every history instead. That is the value after
the history read backwards.
*/

impl Solution<PartTwo> for Day09 {
    type Input = Report;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .sum_predictions(|history| {
                let reversed: Vec<i64> = history.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .ok_or_else(|| "overflow extrapolating backwards".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Report::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 114);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Report::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn extrapolates_short_and_negative_histories() {
        assert_eq!(extrapolate(&[]), Some(0));
        assert_eq!(extrapolate(&[0, 0, 0]), Some(0));
        assert_eq!(extrapolate(&[7]), Some(7));
        assert_eq!(extrapolate(&[4, 4, 4]), Some(4));
        assert_eq!(extrapolate(&[5, 1, -3]), Some(-7));
        assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), Some(68));
    }

    #[test]
    fn reports_overflow() {
        assert_eq!(extrapolate(&[i64::MIN, i64::MAX]), None);
    }
}
