//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on methods in the
/// [root module](../index.html) and the [generator](crate::generator). This
/// does not include errors that occur when parsing a board, see
/// [ParseError](enum.ParseError.html) for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the 9x9 board. This is the case if either of them is greater than 8.
    OutOfBounds,

    /// Indicates that some number is invalid for the cell in question. This
    /// is the case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that a board was constructed from a cell list whose length
    /// is not exactly 81.
    WrongCellCount,

    /// An error that is raised whenever the generator is asked to complete a
    /// board for which no valid completion exists. For an empty board this is
    /// unreachable, but the fill routine accepts arbitrary partial boards, so
    /// it must be surfaced.
    Unsolvable
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                write!(f, "coordinates outside the 9x9 board"),
            SudokuError::InvalidNumber =>
                write!(f, "number outside the range [1, 9]"),
            SudokuError::WrongCellCount =>
                write!(f, "cell list does not contain exactly 81 entries"),
            SudokuError::Unsolvable =>
                write!(f, "board has no valid completion")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [Board](crate::Board) code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {

    /// Indicates that the number of cell entries (which are separated by
    /// commas) is not exactly 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell entry is filled with an invalid number (0 or
    /// more than 9).
    InvalidNumber
}

impl From<ParseIntError> for ParseError {
    fn from(_: ParseIntError) -> Self {
        ParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, ParseError>`.
pub type ParseResult<V> = Result<V, ParseError>;
