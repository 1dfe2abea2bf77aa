use std::num::ParseIntError;
use std::str::FromStr;

use aoc_framework::parsing::{ParseContextError, parse_input_lines, parse_with_context};
use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[day_runner(
    day = 7,
    title = "Camel Cards",
    parsed = Bids,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2023<7> {}

/*
Input is a list of hands of five cards and their bids, one per line: `<cards> <bid>`.

Cards are `A`, `K`, `Q`, `J`, `T` and digits `9` down to `2`. Hands rank first by type, then by
comparing cards in order from the first.
*/

const CARD_LABELS: &str = "23456789TJQKA";

/// How `J` cards are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rules {
    /// `J` is a jack, between ten and queen.
    Jacks,
    /// `J` is a joker: the weakest card, but it counts as whatever makes the best type.
    Jokers,
}

impl Rules {
    /// Labels from weakest to strongest.
    const fn card_order(self) -> &'static str {
        match self {
            Self::Jacks => CARD_LABELS,
            Self::Jokers => "J23456789TQKA",
        }
    }

    fn strength(self, card: char) -> usize {
        // hands only hold validated labels
        self.card_order().find(card).unwrap_or_default()
    }
}

/// Hand types from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Hand([char; 5]);

#[derive(thiserror::Error, Debug)]
enum ParseHandError {
    #[error("unknown card label {0:?}")]
    UnknownCard(char),

    #[error("expected 5 cards, found {0}")]
    WrongSize(usize),
}

impl FromStr for Hand {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(unknown) = s.chars().find(|card| !CARD_LABELS.contains(*card)) {
            return Err(ParseHandError::UnknownCard(unknown));
        }
        let cards: Vec<char> = s.chars().collect();
        let count = cards.len();
        cards
            .try_into()
            .map(Self)
            .map_err(|_| ParseHandError::WrongSize(count))
    }
}

impl Hand {
    fn hand_type(&self, rules: Rules) -> HandType {
        let mut counts = [0u8; CARD_LABELS.len()];
        let mut jokers = 0;
        for card in self.0 {
            if rules == Rules::Jokers && card == 'J' {
                jokers += 1;
            } else {
                counts[Rules::Jacks.strength(card)] += 1;
            }
        }

        let mut groups: Vec<u8> = counts.into_iter().filter(|count| *count > 0).collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));
        // jokers always do best joining the largest group
        match groups.first_mut() {
            Some(largest) => *largest += jokers,
            None => groups.push(jokers),
        }

        match (groups[0], groups.get(1)) {
            (5, _) => HandType::FiveOfAKind,
            (4, _) => HandType::FourOfAKind,
            (3, Some(2)) => HandType::FullHouse,
            (3, _) => HandType::ThreeOfAKind,
            (2, Some(2)) => HandType::TwoPair,
            (2, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    /// A key ordering hands from weakest to strongest.
    fn rank_key(&self, rules: Rules) -> (HandType, [usize; 5]) {
        (self.hand_type(rules), self.0.map(|card| rules.strength(card)))
    }
}

#[derive(thiserror::Error, Debug)]
enum ParseBidError {
    #[error("expected \"<cards> <bid>\"")]
    ExpectedHandAndBid,

    #[error(transparent)]
    Hand(#[from] ParseHandError),

    #[error("invalid bid")]
    Bid(#[from] ParseContextError<ParseIntError>),
}

struct Bids(Vec<(Hand, u64)>);

impl ParseData for Bids {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let bids = parse_input_lines(input, |_, line| -> Result<_, ParseBidError> {
            let (hand, bid) = line
                .split_once(' ')
                .ok_or(ParseBidError::ExpectedHandAndBid)?;
            Ok((hand.parse::<Hand>()?, parse_with_context::<u64>(bid.trim())?))
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(bids))
    }
}

impl Bids {
    /// Sum of each bid multiplied by its hand's rank, where the weakest hand has rank 1.
    fn total_winnings(&self, rules: Rules) -> Option<u64> {
        let mut ranked: Vec<_> = self
            .0
            .iter()
            .map(|(hand, bid)| (hand.rank_key(rules), *bid))
            .collect();
        ranked.sort_unstable_by_key(|(key, _)| *key);

        ranked
            .into_iter()
            .zip(1u64..)
            .map(|((_, bid), rank)| bid.checked_mul(rank))
            .collect::<Option<Vec<_>>>()
            .and_then(|winnings| winnings.into_iter().checked_sum())
    }
}

/*
For part 1, rank every hand and find the total winnings.
*/

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Bids;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .total_winnings(Rules::Jacks)
            .ok_or_else(|| "overflow totalling winnings".into())
    }
}

/*
For part 2, `J` cards are jokers. Find the total winnings again.
*/

impl Solution<PartTwo> for Day07 {
    type Input = Bids;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .total_winnings(Rules::Jokers)
            .ok_or_else(|| "overflow totalling winnings".into())
    }
}
