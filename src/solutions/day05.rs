use std::num::ParseIntError;
use std::ops::Range;
use std::str::FromStr;

use aoc_framework::parsing::{InputScanner, ParseContextError, parse_integer_line};
use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use tracing::debug;

#[day_runner(
    day = 5,
    title = "If You Give A Seed A Fertilizer",
    parsed = Almanac,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2023<5> {}

/*
Input is an almanac. The first line lists seed numbers after `seeds: `. Then, separated by blank
lines, come maps: a `<source>-to-<destination> map:` header and lines of
`<destination start> <source start> <length>`.

A number inside a line's source range maps to the same offset in its destination range. A number
outside every source range maps to itself.
*/

/// One line of a map: `length` numbers from `source` onward map to `destination` onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RangeMapping {
    destination: u64,
    source: u64,
    length: u64,
}

#[derive(thiserror::Error, Debug)]
enum ParseRangeMappingError {
    #[error("expected exactly three numbers, found {0}")]
    WrongCount(usize),

    #[error("range end overflows")]
    Overflow,

    #[error(transparent)]
    Number(#[from] ParseContextError<ParseIntError>),
}

impl FromStr for RangeMapping {
    type Err = ParseRangeMappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = parse_integer_line::<u64>(s)?;
        let [destination, source, length] = values[..] else {
            return Err(ParseRangeMappingError::WrongCount(values.len()));
        };
        if destination.checked_add(length).is_none() || source.checked_add(length).is_none() {
            return Err(ParseRangeMappingError::Overflow);
        }
        Ok(Self {
            destination,
            source,
            length,
        })
    }
}

impl RangeMapping {
    fn source_range(&self) -> Range<u64> {
        self.source..self.source + self.length
    }

    fn forward(&self, value: u64) -> Option<u64> {
        self.source_range()
            .contains(&value)
            .then(|| self.destination + (value - self.source))
    }

    /// Split `input` against the source range.
    ///
    /// Returns the mapped overlap, if any, and the parts of `input` left outside the source range.
    fn split(&self, input: Range<u64>) -> (Option<Range<u64>>, [Option<Range<u64>>; 2]) {
        let source = self.source_range();
        let start = input.start.max(source.start);
        let end = input.end.min(source.end);
        if start >= end {
            return (None, [Some(input), None]);
        }

        let offset = |value: u64| self.destination + (value - self.source);
        let mapped = offset(start)..offset(end);
        let before = (input.start < start).then_some(input.start..start);
        let after = (end < input.end).then_some(end..input.end);
        (Some(mapped), [before, after])
    }
}

/// A named map, like `seed-to-soil`.
#[derive(Debug)]
struct AlmanacMap {
    name: String,
    ranges: Vec<RangeMapping>,
}

impl AlmanacMap {
    /// Map a number through the first range containing it, or to itself.
    fn forward(&self, value: u64) -> u64 {
        self.ranges
            .iter()
            .find_map(|range| range.forward(value))
            .unwrap_or(value)
    }

    /// Map whole ranges of numbers, splitting them where map ranges begin and end.
    ///
    /// As with [`AlmanacMap::forward`], earlier map ranges take precedence and anything left over
    /// maps to itself.
    fn forward_ranges(&self, inputs: Vec<Range<u64>>) -> Vec<Range<u64>> {
        let mut pending = inputs;
        let mut mapped = Vec::new();
        for range in &self.ranges {
            let mut unmatched = Vec::with_capacity(pending.len());
            for input in pending {
                let (overlap, leftovers) = range.split(input);
                mapped.extend(overlap);
                unmatched.extend(leftovers.into_iter().flatten());
            }
            pending = unmatched;
        }
        mapped.extend(pending);
        mapped
    }
}

#[derive(Debug)]
struct Almanac {
    seeds: Vec<u64>,
    maps: Vec<AlmanacMap>,
}

#[derive(thiserror::Error, Debug)]
enum ParseAlmanacError {
    #[error("expected a first line of \"seeds: \" and numbers")]
    ExpectedSeeds,

    #[error("expected a map header ending with \" map:\", found {0:?}")]
    ExpectedMapHeader(String),

    #[error("map {0:?} has no ranges")]
    EmptyMap(String),
}

impl ParseData for Almanac {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);

        let seeds = scanner
            .next_in_sequence(|_, line| -> DynamicResult<Vec<u64>> {
                let numbers = line
                    .strip_prefix("seeds:")
                    .ok_or(ParseAlmanacError::ExpectedSeeds)?;
                Ok(parse_integer_line::<u64>(numbers)?)
            })?
            .ok_or(ParseAlmanacError::ExpectedSeeds)?;

        let mut maps = Vec::new();
        while scanner.skip_empty().is_some() {
            let name = scanner
                .next_in_sequence(|_, line| {
                    line.strip_suffix(" map:")
                        .map(str::to_string)
                        .ok_or_else(|| ParseAlmanacError::ExpectedMapHeader(line.to_string()))
                })?
                .ok_or_else(|| ParseAlmanacError::ExpectedMapHeader(String::new()))?;
            let ranges = scanner.collect_block(|_, line| line.parse::<RangeMapping>())?;
            if ranges.is_empty() {
                return Err(ParseAlmanacError::EmptyMap(name).into());
            }
            maps.push(AlmanacMap { name, ranges });
        }

        Ok(Self { seeds, maps })
    }
}

impl Almanac {
    /// Map a seed through every map in order to its location.
    fn location_of(&self, seed: u64) -> u64 {
        self.maps.iter().fold(seed, |value, map| map.forward(value))
    }
}

/*
For part 1, map every seed to its location and find the lowest location.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = Almanac;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .seeds
            .iter()
            .map(|seed| input.location_of(*seed))
            .min()
            .ok_or_else(|| "almanac lists no seeds".into())
    }
}

/*
For part 2, the seeds line is pairs of a range start and length. Find the lowest location of any
seed in those ranges.

Ranges are too large to map seed by seed, so whole ranges are mapped, split wherever a map's ranges
begin or end.
*/

impl Almanac {
    fn seed_ranges(&self) -> Result<Vec<Range<u64>>, &'static str> {
        let pairs = self.seeds.chunks_exact(2);
        if !pairs.remainder().is_empty() {
            return Err("seeds line has an odd count for start and length pairs");
        }
        pairs
            .map(|pair| {
                pair[0]
                    .checked_add(pair[1])
                    .map(|end| pair[0]..end)
                    .ok_or("seed range end overflows")
            })
            .collect()
    }
}

impl Solution<PartTwo> for Day05 {
    type Input = Almanac;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let seed_ranges = input.seed_ranges()?;

        let location_ranges = input.maps.iter().fold(seed_ranges, |ranges, map| {
            let mapped = map.forward_ranges(ranges);
            debug!(map = %map.name, ranges = mapped.len(), "mapped ranges");
            mapped
        });

        location_ranges
            .iter()
            .filter(|range| !range.is_empty())
            .map(|range| range.start)
            .min()
            .ok_or_else(|| "almanac lists no seed ranges".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Almanac::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 35);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Almanac::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 46);
        Ok(())
    }

    #[test]
    fn parses_every_map_in_order() -> DynamicResult<()> {
        let parsed = Almanac::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.seeds, [79, 14, 55, 13]);
        let names: Vec<_> = parsed.maps.iter().map(|map| map.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "seed-to-soil",
                "soil-to-fertilizer",
                "fertilizer-to-water",
                "water-to-light",
                "light-to-temperature",
                "temperature-to-humidity",
                "humidity-to-location",
            ]
        );
        Ok(())
    }

    #[test]
    fn map_follows_example_seed_to_soil() -> DynamicResult<()> {
        let parsed = Almanac::parse(EXAMPLE_INPUT)?;
        let seed_to_soil = &parsed.maps[0];
        assert_eq!(seed_to_soil.forward(79), 81);
        assert_eq!(seed_to_soil.forward(14), 14);
        assert_eq!(seed_to_soil.forward(99), 51);
        Ok(())
    }

    #[test]
    fn ranges_split_at_map_boundaries() {
        let map = AlmanacMap {
            name: "test".to_string(),
            ranges: vec![
                RangeMapping {
                    destination: 100,
                    source: 10,
                    length: 5,
                },
                RangeMapping {
                    destination: 0,
                    source: 12,
                    length: 10,
                },
            ],
        };
        let mut mapped = map.forward_ranges(Vec::from([8..20]));
        mapped.sort_unstable_by_key(|range| range.start);
        // 8..10 unmapped, 10..15 by the first range, 15..20 by the second
        assert_eq!(mapped, [3..8, 8..10, 100..105]);
    }

    #[test]
    fn ranges_agree_with_single_values() -> DynamicResult<()> {
        let parsed = Almanac::parse(EXAMPLE_INPUT)?;
        let lowest = (79..93).map(|seed| parsed.location_of(seed)).min();
        let by_ranges = parsed
            .maps
            .iter()
            .fold(Vec::from([79..93]), |ranges, map| map.forward_ranges(ranges))
            .into_iter()
            .map(|range| range.start)
            .min();
        assert_eq!(by_ranges, lowest);
        Ok(())
    }

    #[test]
    fn odd_seed_count_fails_part_two() -> DynamicResult<()> {
        let parsed = Almanac::parse("seeds: 1 2 3\n\na-to-b map:\n0 10 5\n")?;
        assert!(<Day05 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn empty_seed_list_fails_both_parts() -> DynamicResult<()> {
        let parsed = Almanac::parse("seeds:\n\na-to-b map:\n0 10 5\n")?;
        assert!(parsed.seeds.is_empty());
        assert!(<Day05 as Solution<PartOne>>::solve(&parsed).is_err());
        assert!(<Day05 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }
}
