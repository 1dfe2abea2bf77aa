use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use nalgebra::Point2;

#[day_runner(
    day = 11,
    title = "Cosmic Expansion",
    parsed = Image,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2023<11> {}

/*
Input is an image of the sky: `.` for empty space and `#` for a galaxy.

The universe has expanded since the image was taken. Every row and every column with no galaxies is
really several rows or columns wide.
*/

#[derive(thiserror::Error, Debug)]
enum ParseImageError {
    #[error("unknown character {0:?}, expected '.' or '#'")]
    UnknownCharacter(char),
}

#[derive(Debug)]
struct Image {
    galaxies: Vec<Point2<usize>>,
}

impl ParseData for Image {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows = parse_input_lines(input, |y, line| {
            line.char_indices()
                .filter_map(|(x, character)| match character {
                    '.' => None,
                    '#' => Some(Ok(Point2::new(x, y))),
                    _ => Some(Err(ParseImageError::UnknownCharacter(character))),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            galaxies: rows.into_iter().flatten().collect(),
        })
    }
}

/// Sum of the distances between every pair of coordinates along one axis.
///
/// Each empty line before a coordinate, one with no coordinate on it, counts as `factor` lines.
/// `None` on overflow.
fn axis_distance_sum(coordinates: &[usize], factor: u64) -> Option<u64> {
    let mut occupied = coordinates.to_vec();
    occupied.sort_unstable();
    occupied.dedup();

    let mut expanded = coordinates
        .iter()
        .map(|coordinate| {
            let empty_before = coordinate - occupied.partition_point(|line| line < coordinate);
            let extra = u64::try_from(empty_before)
                .ok()?
                .checked_mul(factor.saturating_sub(1))?;
            u64::try_from(*coordinate).ok()?.checked_add(extra)
        })
        .collect::<Option<Vec<_>>>()?;
    expanded.sort_unstable();

    // with sorted values, each one is the far end of a pair with every value before it
    let mut total = 0u64;
    let mut preceding = 0u64;
    for (count, value) in (0u64..).zip(expanded) {
        total = total.checked_add(value.checked_mul(count)?.checked_sub(preceding)?)?;
        preceding = preceding.checked_add(value)?;
    }
    Some(total)
}

impl Image {
    /// Sum of the Manhattan distances between every pair of galaxies, with each empty row and
    /// column `factor` times as wide.
    fn distance_sum(&self, factor: u64) -> Option<u64> {
        let xs: Vec<usize> = self.galaxies.iter().map(|galaxy| galaxy.x).collect();
        let ys: Vec<usize> = self.galaxies.iter().map(|galaxy| galaxy.y).collect();
        [
            axis_distance_sum(&xs, factor)?,
            axis_distance_sum(&ys, factor)?,
        ]
        .into_iter()
        .checked_sum()
    }
}

/*
For part 1, every empty row and column is twice as big. Sum the shortest distances between every
pair of galaxies, moving only up, down, left and right.
*/

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Image;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .distance_sum(2)
            .ok_or_else(|| "overflow summing distances".into())
    }
}

/*
For part 2, every empty row and column is one million times as big.
*/

const OLDER_FACTOR: u64 = 1_000_000;

impl Solution<PartTwo> for Day11 {
    type Input = Image;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .distance_sum(OLDER_FACTOR)
            .ok_or_else(|| "overflow summing distances".into())
    }
}
