//! Helpers for turning puzzle text into values, with errors that point at the failing line.

use std::iter::{Enumerate, Peekable};
use std::str::{FromStr, Lines};

use thiserror::Error;

use crate::DynamicError;

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`] and maps errors to [`ParseContextError`].
///
/// # Errors
///
/// Will return a [`ParseContextError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the string into the desired
/// type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// Parse every whitespace-separated value on a line.
///
/// ```
/// # use aoc_framework::parsing::parse_integer_line;
/// let values: Vec<i32> = parse_integer_line(" 0 -3  6 ")?;
/// assert_eq!(values, [0, -3, 6]);
/// # Ok::<(), aoc_framework::DynamicError>(())
/// ```
///
/// # Errors
///
/// The first value that fails to parse is returned as a [`ParseContextError`].
pub fn parse_integer_line<F>(line: &str) -> Result<Vec<F>, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    line.split_whitespace().map(parse_with_context).collect()
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    fn new(line_index: usize, source: impl Into<DynamicError>) -> Self {
        Self {
            line_index,
            source: source.into(),
        }
    }

    /// The zero-based index of the line that failed.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.line_index
    }
}

/// Parse each line of input with a closure that also receives the zero-based line index.
///
/// # Errors
///
/// Each item is an [`InvalidLine`] error wrapping the closure's error when that line failed.
pub fn parse_input_lines<T, E, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &str) -> Result<T, E>,
{
    input
        .lines()
        .enumerate()
        .map(move |(index, line)| parser(index, line).map_err(|e| InvalidLine::new(index, e)))
}

/// A cursor over input lines, for inputs made of header lines and blank-separated blocks.
///
/// Line indices passed to parser closures always refer to the position in the whole input.
#[derive(Debug)]
pub struct InputScanner<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> InputScanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate().peekable(),
        }
    }

    /// Take the next line with its index.
    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        self.lines.next()
    }

    /// Whether every line has been consumed.
    pub fn is_finished(&mut self) -> bool {
        self.lines.peek().is_none()
    }

    /// Skip blank lines.
    ///
    /// Returns how many lines were skipped, or `None` if the input ended before a non-blank line.
    pub fn skip_empty(&mut self) -> Option<usize> {
        let mut skipped = 0;
        while let Some((_, line)) = self.lines.peek() {
            if !line.trim().is_empty() {
                return Some(skipped);
            }
            self.lines.next();
            skipped += 1;
        }
        None
    }

    /// Parse the next line, returning `Ok(None)` when no lines remain.
    ///
    /// # Errors
    ///
    /// The closure's error is wrapped in [`InvalidLine`].
    pub fn next_in_sequence<T, E, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnOnce(usize, &'a str) -> Result<T, E>,
    {
        self.lines
            .next()
            .map(|(index, line)| parser(index, line).map_err(|e| InvalidLine::new(index, e)))
            .transpose()
    }

    /// Parse consecutive non-blank lines, stopping before the next blank line or at the end.
    ///
    /// # Errors
    ///
    /// Stops at the first line the closure fails on, wrapping the error in [`InvalidLine`].
    pub fn collect_block<T, E, F>(&mut self, mut parser: F) -> Result<Vec<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnMut(usize, &'a str) -> Result<T, E>,
    {
        let mut block = Vec::new();
        while let Some((index, line)) = self.lines.next_if(|(_, line)| !line.trim().is_empty()) {
            block.push(parser(index, line).map_err(|e| InvalidLine::new(index, e))?);
        }
        Ok(block)
    }
}
