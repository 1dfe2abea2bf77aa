use std::collections::HashSet;
use std::num::ParseIntError;
use std::str::FromStr;

use aoc_framework::parsing::{ParseContextError, parse_input_lines, parse_integer_line};
use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[day_runner(
    day = 4,
    title = "Scratchcards",
    parsed = Scratchcards,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2023<4> {}

/*
Input is a pile of scratchcards, one per line: `Card <id>:`, the winning numbers, `|`, then the
numbers on the card. Numbers are space-separated and padded to line up.
*/

#[derive(Debug)]
struct Card {
    winning: HashSet<u8>,
    owned: Vec<u8>,
}

#[derive(thiserror::Error, Debug)]
enum ParseCardError {
    #[error("expected \"Card <id>:\" before the numbers")]
    ExpectedCardLabel,

    #[error("expected '|' between winning numbers and owned numbers")]
    ExpectedSeparator,

    #[error("invalid number on card")]
    Number(#[from] ParseContextError<ParseIntError>),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, numbers) = s.split_once(':').ok_or(ParseCardError::ExpectedCardLabel)?;
        if !label.starts_with("Card") {
            return Err(ParseCardError::ExpectedCardLabel);
        }
        let (winning, owned) = numbers
            .split_once('|')
            .ok_or(ParseCardError::ExpectedSeparator)?;

        Ok(Self {
            winning: parse_integer_line::<u8>(winning)?.into_iter().collect(),
            owned: parse_integer_line::<u8>(owned)?,
        })
    }
}

impl Card {
    /// How many owned numbers are winning numbers.
    fn matches(&self) -> usize {
        self.owned
            .iter()
            .filter(|number| self.winning.contains(*number))
            .count()
    }
}

/// Cards in input order; card `n` is at index `n - 1`.
struct Scratchcards(Vec<Card>);

impl ParseData for Scratchcards {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let cards = parse_input_lines(input, |_, line| line.parse()).collect::<Result<_, _>>()?;
        Ok(Self(cards))
    }
}

/*
For part 1, a card is worth 1 point for its first match and doubles for each match after. Sum the
points of all cards.
*/

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = Scratchcards;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .0
            .iter()
            .map(|card| match card.matches() {
                0 => Some(0),
                count => u32::try_from(count - 1)
                    .ok()
                    .and_then(|exponent| 1u32.checked_shl(exponent)),
            })
            .collect::<Option<Vec<_>>>()
            .and_then(|points| points.into_iter().checked_sum())
            .ok_or_else(|| "card points overflowed".into())
    }
}

/*
For part 2, there are no points. A card with `n` matches wins one copy of each of the next `n`
cards, and copies win copies in turn. Count every card held at the end, originals included.
*/

impl Solution<PartTwo> for Day04 {
    type Input = Scratchcards;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let cards = &input.0;
        let mut copies = vec![1u64; cards.len()];

        for (index, card) in cards.iter().enumerate() {
            let held = copies[index];
            // wins never go past the last card
            let won_end = (index + 1 + card.matches()).min(cards.len());
            for won in &mut copies[index + 1..won_end] {
                *won = won
                    .checked_add(held)
                    .ok_or("overflow counting card copies")?;
            }
        }

        copies
            .into_iter()
            .checked_sum()
            .ok_or_else(|| "overflow counting cards".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Scratchcards::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 13);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Scratchcards::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 30);
        Ok(())
    }

    #[test]
    fn counts_matches_per_card() -> DynamicResult<()> {
        let parsed = Scratchcards::parse(EXAMPLE_INPUT)?;
        let matches: Vec<_> = parsed.0.iter().map(Card::matches).collect();
        assert_eq!(matches, [4, 2, 2, 1, 0, 0]);
        Ok(())
    }

    #[test]
    fn wins_past_last_card_are_dropped() -> DynamicResult<()> {
        let parsed = Scratchcards::parse("Card 1: 1 2 | 1 2\nCard 2: 3 | 3\n")?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn rejects_missing_separator() {
        assert!("Card 1: 1 2 3".parse::<Card>().is_err());
        assert!("1 2 | 3".parse::<Card>().is_err());
    }
}
