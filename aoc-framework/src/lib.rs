//! Traits and helpers shared by daily puzzle solutions.
//!
//! A day is made of up to three pieces:
//!
//! - an optional input type implementing [`ParseData`], built once from the puzzle text,
//! - a type implementing [`Solution<PartOne>`],
//! - a type implementing [`Solution<PartTwo>`] (often the same type as part one).
//!
//! The [`runner`] module wires these pieces together and reports answers through an
//! [`OutputHandler`][runner::OutputHandler].
//!
//! # Example
//!
//! ```
//! use aoc_framework::parsing::parse_integer_line;
//! use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
//!
//! struct Readings(Vec<i64>);
//!
//! impl ParseData for Readings {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         Ok(Self(parse_integer_line(input)?))
//!     }
//! }
//!
//! struct Sonar;
//!
//! impl Solution<PartOne> for Sonar {
//!     type Input = Readings;
//!     type Output = i64;
//!
//!     fn solve(input: &Readings) -> DynamicResult<i64> {
//!         Ok(input.0.iter().sum())
//!     }
//! }
//!
//! impl Solution<PartTwo> for Sonar {
//!     type Input = Readings;
//!     type Output = usize;
//!
//!     fn solve(input: &Readings) -> DynamicResult<usize> {
//!         Ok(input.0.windows(2).filter(|pair| pair[1] > pair[0]).count())
//!     }
//! }
//!
//! let readings = Readings::parse("199 200 208 210 200")?;
//! assert_eq!(<Sonar as Solution<PartOne>>::solve(&readings)?, 1017);
//! assert_eq!(<Sonar as Solution<PartTwo>>::solve(&readings)?, 3);
//! # Ok::<(), aoc_framework::DynamicError>(())
//! ```
//!
//! Solutions that work straight from the text set `Input = str`:
//!
//! ```
//! use aoc_framework::{DynamicResult, PartOne, Solution};
//!
//! struct LineCount;
//!
//! impl Solution<PartOne> for LineCount {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//!
//! assert_eq!(<LineCount as Solution<PartOne>>::solve("a\nb\n")?, 2);
//! # Ok::<(), aoc_framework::DynamicError>(())
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::needless_collect,
    clippy::option_if_let_else,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// Keeps [`Part`][super::Part] implementable only by this crate's markers.
    pub trait Sealed {}
}

/// A boxed error from any solution or parser.
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result carrying a [`DynamicError`].
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Which half of a day's puzzle is being solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartKind {
    One,
    Two,
}

impl PartKind {
    /// The part number as printed on puzzle pages.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Part {}", self.number())
    }
}

/// Marker trait for the generic parameter of [`Solution<P>`].
pub trait Part: private::Sealed {
    /// The [`PartKind`] this marker stands for.
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] for part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] for part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// Solves one part of a day's puzzle.
///
/// One type may implement both `Solution<PartOne>` and `Solution<PartTwo>` so both parts share
/// helper methods.
pub trait Solution<P: Part> {
    /// The data handed to [`Solution::solve`].
    ///
    /// Set to `str` to receive the puzzle text untouched, otherwise to a [`ParseData`] type.
    type Input: ?Sized;

    /// The answer type. Answers are printed through [`Display`].
    type Output: Display;

    /// Compute the answer for this part.
    ///
    /// # Errors
    ///
    /// Input that doesn't follow the puzzle's rules, or a search that finds nothing, is reported
    /// as a dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// Structured puzzle input built from the raw text.
pub trait ParseData {
    /// Parse the puzzle text.
    ///
    /// # Errors
    ///
    /// Malformed input is reported as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
