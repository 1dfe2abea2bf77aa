use std::collections::HashMap;

use aoc_framework::parsing::InputScanner;
use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;
use tracing::debug;

use crate::maths::lcm_of;

#[day_runner(
    day = 8,
    title = "Haunted Wasteland",
    parsed = Network,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2023<8> {}

/*
Input is a map of a network. The first line is a sequence of `L` and `R` instructions. After a blank
line, each line is a node and the nodes to its left and right: `AAA = (BBB, CCC)`.

Instructions repeat from the start once they run out.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

#[derive(thiserror::Error, Debug)]
enum Day08Error {
    #[error("unknown instruction {0:?}, expected 'L' or 'R'")]
    UnknownInstruction(char),

    #[error("expected a line of instructions")]
    ExpectedInstructions,

    #[error("expected \"AAA = (BBB, CCC)\", found {0:?}")]
    ExpectedNode(String),

    #[error("node {0:?} is listed twice")]
    DuplicateNode(String),

    #[error("no node named {0:?}")]
    MissingNode(String),

    #[error("starting from {0:?} never reaches an end node")]
    NeverArrives(String),
}

#[derive(Debug)]
struct Network {
    instructions: Vec<Direction>,
    /// Left and right links of each node.
    nodes: HashMap<String, [String; 2]>,
}

impl ParseData for Network {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let node_pattern = Regex::new(r"^(\w+)\s*=\s*\((\w+),\s*(\w+)\)$")?;
        let mut scanner = InputScanner::new(input);

        let instructions = scanner
            .next_in_sequence(|_, line| {
                line.trim()
                    .chars()
                    .map(|instruction| match instruction {
                        'L' => Ok(Direction::Left),
                        'R' => Ok(Direction::Right),
                        _ => Err(Day08Error::UnknownInstruction(instruction)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })?
            .filter(|instructions| !instructions.is_empty())
            .ok_or(Day08Error::ExpectedInstructions)?;

        scanner.skip_empty();
        let mut nodes: HashMap<String, [String; 2]> = HashMap::new();
        let links = scanner.collect_block(|_, line| {
            node_pattern
                .captures(line.trim())
                .map(|captures| captures.extract::<3>().1.map(str::to_string))
                .ok_or_else(|| Day08Error::ExpectedNode(line.to_string()))
        })?;
        for [node, left, right] in links {
            if nodes.contains_key(&node) {
                return Err(Day08Error::DuplicateNode(node).into());
            }
            nodes.insert(node, [left, right]);
        }

        // every link must lead somewhere
        if let Some(missing) = nodes
            .values()
            .flatten()
            .find(|link| !nodes.contains_key(link.as_str()))
        {
            return Err(Day08Error::MissingNode(missing.clone()).into());
        }

        Ok(Self {
            instructions,
            nodes,
        })
    }
}

impl Network {
    /// Count steps from `start` until reaching a node accepted by `is_end`.
    ///
    /// The walk is a cycle once every pairing of node and instruction position has been seen, so
    /// it fails after that many steps.
    fn steps_until(&self, start: &str, is_end: impl Fn(&str) -> bool) -> Result<u64, Day08Error> {
        let mut current = self
            .nodes
            .get_key_value(start)
            .map(|(name, _)| name.as_str())
            .ok_or_else(|| Day08Error::MissingNode(start.to_string()))?;
        let limit = (self.instructions.len() * self.nodes.len()) as u64;

        for (steps, direction) in (0u64..).zip(self.instructions.iter().cycle()) {
            if is_end(current) {
                return Ok(steps);
            }
            if steps > limit {
                break;
            }
            let [left, right] = &self.nodes[current];
            current = match direction {
                Direction::Left => left.as_str(),
                Direction::Right => right.as_str(),
            };
        }

        Err(Day08Error::NeverArrives(start.to_string()))
    }
}

/*
For part 1, follow the instructions from `AAA`. Count the steps taken to reach `ZZZ`.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = Network;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.steps_until("AAA", |node| node == "ZZZ")?)
    }
}

/*
For part 2, start at every node ending in `A` at once, and step them all together until every one
is on a node ending in `Z`.

Each start reaches its end node on a cycle, so the steps for them all to line up are the least
common multiple of the steps for each.
*/

impl Solution<PartTwo> for Day08 {
    type Input = Network;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut starts: Vec<&str> = input
            .nodes
            .keys()
            .map(String::as_str)
            .filter(|node| node.ends_with('A'))
            .collect();
        starts.sort_unstable();
        if starts.is_empty() {
            return Err("no node ends in 'A'".into());
        }

        let cycles = starts
            .into_iter()
            .map(|start| -> Result<u64, Day08Error> {
                let steps = input.steps_until(start, |node| node.ends_with('Z'))?;
                debug!(start, steps, "reached end node");
                Ok(steps)
            })
            .collect::<Result<Vec<_>, _>>()?;

        lcm_of(cycles).ok_or_else(|| "overflow combining cycle lengths".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

    const REPEATING_INPUT: &str = r"LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

    const GHOST_INPUT: &str = r"LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Network::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_one_repeats_instructions() -> DynamicResult<()> {
        let parsed = Network::parse(REPEATING_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Network::parse(GHOST_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn unreachable_end_fails() -> DynamicResult<()> {
        let parsed = Network::parse("L\n\nAAA = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n")?;
        assert!(matches!(
            parsed.steps_until("AAA", |node| node == "ZZZ"),
            Err(Day08Error::NeverArrives(_))
        ));
        Ok(())
    }

    #[test]
    fn rejects_links_to_unknown_nodes() {
        assert!(Network::parse("L\n\nAAA = (BBB, ZZZ)\nZZZ = (ZZZ, ZZZ)\n").is_err());
        assert!(Network::parse("LX\n\nAAA = (AAA, AAA)\n").is_err());
        assert!(Network::parse("L\n\nAAA = (AAA, AAA)\nAAA = (AAA, AAA)\n").is_err());
    }
}
