use std::num::ParseIntError;
use std::str::FromStr;

use aoc_framework::parsing::{ParseContextError, parse_input_lines, parse_with_context};
use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::maths::CheckedProduct;

#[day_runner(
    day = 2,
    title = "Cube Conundrum",
    parsed = GameRecords,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2023<2> {}

/*
Input is a record of games, one per line: `Game <id>: ` then draws separated by `; `. Each draw is a
`, `-separated list of `<count> <colour>` for red, green and blue cubes. A colour left out of a draw
had zero cubes drawn.
*/

/// Counts of each colour of cube.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CubeSet {
    red: u32,
    green: u32,
    blue: u32,
}

#[derive(thiserror::Error, Debug)]
enum ParseCubeSetError {
    #[error("expected \"<count> <colour>\", found {0:?}")]
    ExpectedCountAndColour(String),

    #[error("unknown cube colour: {0:?}")]
    UnknownColour(String),

    #[error("colour {0:?} listed twice in one draw")]
    RepeatedColour(String),

    #[error("invalid cube count")]
    Count(#[from] ParseContextError<ParseIntError>),
}

impl FromStr for CubeSet {
    type Err = ParseCubeSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::default();
        let mut seen = [false; 3];

        for entry in s.split(',').map(str::trim) {
            let (count, colour) = entry
                .split_once(' ')
                .ok_or_else(|| ParseCubeSetError::ExpectedCountAndColour(entry.to_string()))?;
            let count: u32 = parse_with_context(count)?;

            let (slot, index) = match colour.to_ascii_lowercase().as_str() {
                "red" => (&mut set.red, 0),
                "green" => (&mut set.green, 1),
                "blue" => (&mut set.blue, 2),
                _ => return Err(ParseCubeSetError::UnknownColour(colour.to_string())),
            };
            if seen[index] {
                return Err(ParseCubeSetError::RepeatedColour(colour.to_string()));
            }
            seen[index] = true;
            *slot = count;
        }

        Ok(set)
    }
}

impl CubeSet {
    /// Whether every colour of `self` is within the amount in `bag`.
    fn fits_within(&self, bag: &Self) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// The colour-wise maximum of two sets.
    fn union(self, other: Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    /// The product of the three counts, or `None` on overflow.
    fn power(&self) -> Option<u32> {
        [self.red, self.green, self.blue].into_iter().checked_product()
    }
}

/// One game: its id and the cube sets drawn from the bag.
#[derive(Debug)]
struct Game {
    id: u32,
    draws: Vec<CubeSet>,
}

#[derive(thiserror::Error, Debug)]
enum ParseGameError {
    #[error("expected \"Game <id>: \" prefix")]
    ExpectedGamePrefix,

    #[error("invalid game id")]
    Id(#[source] ParseContextError<ParseIntError>),

    #[error("invalid draw {index} of game")]
    Draw {
        index: usize,
        source: ParseCubeSetError,
    },
}

impl FromStr for Game {
    type Err = ParseGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, draws) = s
            .split_once(": ")
            .ok_or(ParseGameError::ExpectedGamePrefix)?;
        let id = label
            .strip_prefix("Game ")
            .ok_or(ParseGameError::ExpectedGamePrefix)?;
        let id = parse_with_context(id.trim()).map_err(ParseGameError::Id)?;

        let draws = draws
            .split(';')
            .enumerate()
            .map(|(index, draw)| {
                draw.parse()
                    .map_err(|source| ParseGameError::Draw { index, source })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { id, draws })
    }
}

impl Game {
    /// The fewest cubes of each colour that make this game possible.
    fn minimum_bag(&self) -> CubeSet {
        self.draws
            .iter()
            .copied()
            .fold(CubeSet::default(), CubeSet::union)
    }
}

struct GameRecords(Vec<Game>);

impl ParseData for GameRecords {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let games = parse_input_lines(input, |_, line| line.parse::<Game>())
            .collect::<Result<_, _>>()?;
        Ok(Self(games))
    }
}

/*
For part 1, find the games that were possible if the bag held only 12 red, 13 green and 14 blue
cubes, and sum their ids.
*/

const PART_ONE_BAG: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = GameRecords;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .0
            .iter()
            .filter(|game| game.draws.iter().all(|draw| draw.fits_within(&PART_ONE_BAG)))
            .map(|game| game.id)
            .checked_sum()
            .ok_or_else(|| "overflow summing game ids".into())
    }
}

/*
For part 2, find the fewest cubes of each colour that could have played each game. The power of
that set is the product of its counts. Sum the powers of all games.
*/

impl Solution<PartTwo> for Day02 {
    type Input = GameRecords;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .0
            .iter()
            .map(|game| game.minimum_bag().power())
            .collect::<Option<Vec<_>>>()
            .and_then(|powers| powers.into_iter().checked_sum())
            .ok_or_else(|| "overflow calculating powers".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = GameRecords::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 8);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = GameRecords::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 2286);
        Ok(())
    }

    #[test]
    fn minimum_bag_of_first_game() -> DynamicResult<()> {
        let game: Game = EXAMPLE_INPUT.lines().next().ok_or("no lines")?.parse()?;
        assert_eq!(
            game.minimum_bag(),
            CubeSet {
                red: 4,
                green: 2,
                blue: 6
            }
        );
        Ok(())
    }

    #[test]
    fn rejects_unknown_colour() {
        assert!("Game 1: 3 purple".parse::<Game>().is_err());
        assert!("Game 1: 3 red, 4 red".parse::<Game>().is_err());
        assert!("1: 3 red".parse::<Game>().is_err());
    }
}
