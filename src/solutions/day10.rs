use std::collections::HashSet;

use aoc_framework::runner::day_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};
use tracing::debug;

#[day_runner(
    day = 10,
    title = "Pipe Maze",
    parsed = PipeLoop,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2023<10> {}

/*
Input is a grid of tiles. Pipes join two of the four neighbouring tiles:
- `|` north and south
- `-` east and west
- `L` north and east
- `J` north and west
- `7` south and west
- `F` south and east

`.` is ground, and `S` is the start: a pipe of unknown shape that is part of one continuous loop.
Pipes that are not on the loop may still be anywhere in the grid.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Offset to the neighbour in this direction, with `y` growing southwards.
    fn offset(self) -> Vector2<i32> {
        match self {
            Self::North => Vector2::new(0, -1),
            Self::East => Vector2::new(1, 0),
            Self::South => Vector2::new(0, 1),
            Self::West => Vector2::new(-1, 0),
        }
    }

    fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Ground,
    Start,
    Pipe([Direction; 2]),
}

impl TryFrom<char> for Tile {
    type Error = Day10Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        use Direction::{East, North, South, West};
        match value {
            '.' => Ok(Self::Ground),
            'S' => Ok(Self::Start),
            '|' => Ok(Self::Pipe([North, South])),
            '-' => Ok(Self::Pipe([East, West])),
            'L' => Ok(Self::Pipe([North, East])),
            'J' => Ok(Self::Pipe([North, West])),
            '7' => Ok(Self::Pipe([South, West])),
            'F' => Ok(Self::Pipe([South, East])),
            _ => Err(Day10Error::UnknownTile(value)),
        }
    }
}

impl Tile {
    fn connects(self, direction: Direction) -> bool {
        matches!(self, Self::Pipe(connections) if connections.contains(&direction))
    }
}

#[derive(thiserror::Error, Debug)]
enum Day10Error {
    #[error("unknown tile {0:?}")]
    UnknownTile(char),

    #[error("grid has no start tile")]
    NoStart,

    #[error("grid has more than one start tile")]
    MultipleStarts,

    #[error("grid is too large")]
    TooLarge,

    #[error("no loop of pipes passes through the start")]
    NoLoop,
}

struct Grid {
    rows: Vec<Vec<Tile>>,
    start: Point2<i32>,
}

impl Grid {
    fn parse(input: &str) -> Result<Self, Day10Error> {
        let rows = input
            .lines()
            .map(|line| line.chars().map(Tile::try_from).collect())
            .collect::<Result<Vec<Vec<_>>, _>>()?;

        let mut starts = rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, tile)| **tile == Tile::Start)
                .map(move |(x, _)| (x, y))
        });
        let (x, y) = starts.next().ok_or(Day10Error::NoStart)?;
        if starts.next().is_some() {
            return Err(Day10Error::MultipleStarts);
        }
        let start = Point2::new(
            i32::try_from(x).map_err(|_| Day10Error::TooLarge)?,
            i32::try_from(y).map_err(|_| Day10Error::TooLarge)?,
        );

        Ok(Self { rows, start })
    }

    /// The tile at a position, or `None` outside the grid.
    fn tile(&self, position: Point2<i32>) -> Option<Tile> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    fn tile_mut(&mut self, position: Point2<i32>) -> Option<&mut Tile> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        self.rows.get_mut(y)?.get_mut(x)
    }

    /// Follow pipes from the start, first heading in `heading`.
    ///
    /// Returns the tiles on the way, and the direction of the final step back into the start, or
    /// `None` if the pipes stop short of returning.
    fn follow(&self, heading: Direction) -> Option<(Vec<Point2<i32>>, Direction)> {
        let mut tiles = vec![self.start];
        let mut position = self.start;
        let mut heading = heading;
        loop {
            position += heading.offset();
            match self.tile(position)? {
                Tile::Start => return Some((tiles, heading)),
                Tile::Pipe(connections) if connections.contains(&heading.opposite()) => {
                    tiles.push(position);
                    heading = if connections[0] == heading.opposite() {
                        connections[1]
                    } else {
                        connections[0]
                    };
                }
                _ => return None,
            }
        }
    }
}

/// The loop through the start, with the shape of pipe under the start tile.
#[derive(Debug)]
struct PipeLoop {
    rows: Vec<Vec<Tile>>,
    tiles: HashSet<Point2<i32>>,
    length: usize,
}

impl ParseData for PipeLoop {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut grid = Grid::parse(input)?;

        // try leaving the start each way, keeping the first that comes back around
        let (tiles, first, last) = Direction::ALL
            .into_iter()
            .filter(|heading| {
                grid.tile(grid.start + heading.offset())
                    .is_some_and(|tile| tile.connects(heading.opposite()))
            })
            .find_map(|first| {
                grid.follow(first)
                    .map(|(tiles, last)| (tiles, first, last))
            })
            .ok_or(Day10Error::NoLoop)?;
        debug!(length = tiles.len(), ?first, ?last, "found loop");

        if let Some(start) = grid.tile_mut(grid.start) {
            *start = Tile::Pipe([first, last.opposite()]);
        }

        Ok(Self {
            rows: grid.rows,
            length: tiles.len(),
            tiles: tiles.into_iter().collect(),
        })
    }
}

/*
For part 1, find the tile on the loop farthest along the pipes from the start, and the number of
steps to it. Going both ways round the loop, that is half the loop's length.
*/

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = PipeLoop;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.length / 2)
    }
}

/*
For part 2, count the tiles enclosed by the loop. Squeezing between pipes is allowed, so a tile is
only enclosed if it is inside the loop's outline.

Scanning a row from the west, each loop pipe joining north crosses the outline. A tile not on the
loop is inside when it has been crossed an odd number of times.
*/

impl PipeLoop {
    fn enclosed_tiles(&self) -> usize {
        let mut enclosed = 0;
        for (y, row) in (0..).zip(&self.rows) {
            let mut inside = false;
            for (x, tile) in (0..).zip(row) {
                if self.tiles.contains(&Point2::new(x, y)) {
                    inside ^= tile.connects(Direction::North);
                } else if inside {
                    enclosed += 1;
                }
            }
        }
        enclosed
    }
}

impl Solution<PartTwo> for Day10 {
    type Input = PipeLoop;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.enclosed_tiles())
    }
}
