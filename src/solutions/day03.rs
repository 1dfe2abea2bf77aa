use std::num::ParseIntError;

use aoc_framework::parsing::{ParseContextError, parse_input_lines, parse_with_context};
use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;
use tracing::trace;

#[day_runner(
    day = 3,
    title = "Gear Ratios",
    parsed = Schematic,
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2023<3> {}

/*
Input is an engine schematic: a grid of digits, `.` for blank space, and any other character as a
symbol. Runs of digits along a row are part numbers.
*/

/// A number in the schematic, spanning `length` cells of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PartNumber {
    value: u32,
    row: usize,
    column: usize,
    length: usize,
}

/// A symbol character at a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Symbol {
    character: char,
    row: usize,
    column: usize,
}

impl Symbol {
    /// Whether the symbol is in one of the cells surrounding the number, diagonals included.
    fn touches(&self, number: &PartNumber) -> bool {
        let last_column = number.column + number.length - 1;
        self.row.abs_diff(number.row) <= 1
            && self.column + 1 >= number.column
            && self.column <= last_column + 1
    }
}

#[derive(Debug)]
struct Schematic {
    numbers: Vec<PartNumber>,
    symbols: Vec<Symbol>,
}

impl ParseData for Schematic {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let number_pattern = Regex::new(r"[0-9]+")?;

        let rows: Vec<(Vec<PartNumber>, Vec<Symbol>)> = parse_input_lines(input, |row, line| {
            let row_numbers = number_pattern
                .find_iter(line)
                .map(|found| {
                    parse_with_context(found.as_str()).map(|value| PartNumber {
                        value,
                        row,
                        column: found.start(),
                        length: found.len(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let row_symbols = line
                .char_indices()
                .filter(|(_, c)| *c != '.' && !c.is_ascii_digit())
                .map(|(column, character)| Symbol {
                    character,
                    row,
                    column,
                })
                .collect::<Vec<_>>();
            Ok::<_, ParseContextError<ParseIntError>>((row_numbers, row_symbols))
        })
        .collect::<Result<_, _>>()?;

        let (numbers, symbols): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        let numbers = numbers.into_iter().flatten().collect();
        let symbols = symbols.into_iter().flatten().collect();

        Ok(Self { numbers, symbols })
    }
}

/*
For part 1, sum every number that touches at least one symbol.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = Schematic;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .numbers
            .iter()
            .filter(|number| input.symbols.iter().any(|symbol| symbol.touches(number)))
            .map(|number| number.value)
            .checked_sum()
            .ok_or_else(|| "overflow summing part numbers".into())
    }
}

/*
For part 2, a gear is a `*` symbol touching exactly two numbers. Its ratio is the product of those
numbers. Sum all gear ratios.
*/

impl Schematic {
    /// Gear ratios of every `*` that touches exactly two numbers.
    fn gear_ratios(&self) -> impl Iterator<Item = Option<u32>> + '_ {
        self.symbols
            .iter()
            .filter(|symbol| symbol.character == '*')
            .filter_map(|symbol| {
                let mut touching = self.numbers.iter().filter(|number| symbol.touches(number));
                match (touching.next(), touching.next(), touching.next()) {
                    (Some(first), Some(second), None) => {
                        trace!(?symbol, first = first.value, second = second.value, "gear");
                        Some(first.value.checked_mul(second.value))
                    }
                    _ => None,
                }
            })
    }
}

impl Solution<PartTwo> for Day03 {
    type Input = Schematic;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .gear_ratios()
            .collect::<Option<Vec<_>>>()
            .and_then(|ratios| ratios.into_iter().checked_sum())
            .ok_or_else(|| "overflow calculating gear ratios".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Schematic::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 4361);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Schematic::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 467_835);
        Ok(())
    }

    #[test]
    fn parses_numbers_and_symbols() -> DynamicResult<()> {
        let parsed = Schematic::parse("12.#\n..*7\n")?;
        assert_eq!(
            parsed.numbers,
            [
                PartNumber {
                    value: 12,
                    row: 0,
                    column: 0,
                    length: 2
                },
                PartNumber {
                    value: 7,
                    row: 1,
                    column: 3,
                    length: 1
                },
            ]
        );
        assert_eq!(parsed.symbols.len(), 2);
        Ok(())
    }

    #[test]
    fn touching_includes_diagonals_only_one_cell_away() {
        let number = PartNumber {
            value: 35,
            row: 2,
            column: 2,
            length: 2,
        };
        let at = |row, column| Symbol {
            character: '*',
            row,
            column,
        };
        assert!(at(1, 1).touches(&number));
        assert!(at(3, 4).touches(&number));
        assert!(at(2, 4).touches(&number));
        assert!(!at(1, 5).touches(&number));
        assert!(!at(0, 2).touches(&number));
        assert!(!at(2, 0).touches(&number));
    }

    #[test]
    fn number_touching_two_symbols_counts_once() -> DynamicResult<()> {
        let parsed = Schematic::parse("#..\n12.\n..*\n")?;
        let result = <Day03 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 12);
        Ok(())
    }

    #[test]
    fn non_ascii_digits_are_symbols() -> DynamicResult<()> {
        let parsed = Schematic::parse("7\u{663}\n")?;
        assert_eq!(parsed.numbers.len(), 1);
        assert_eq!(parsed.symbols.len(), 1);
        let result = <Day03 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 7);
        Ok(())
    }

    #[test]
    fn star_touching_three_numbers_is_not_a_gear() -> DynamicResult<()> {
        let parsed = Schematic::parse("1.2\n.*.\n..3\n")?;
        let result = <Day03 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 0);
        Ok(())
    }
}
