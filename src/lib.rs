// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate generates classic 9x9 Sudoku puzzles. Every generated puzzle
//! is guaranteed to have exactly one solution, its clues are symmetric under
//! a 180 degree rotation of the board, and the number of removed clues is
//! controlled by a [Difficulty] level.
//!
//! Generation happens in two steps: a [Generator](generator::Generator)
//! fills an empty [Board] with a randomized backtracking search, then a
//! [Reducer](generator::Reducer) removes symmetric pairs of clues, probing
//! each candidate removal with the bounded solution counter in the [solver]
//! module to ensure the puzzle never becomes ambiguous.
//!
//! # Generating puzzles
//!
//! The easiest entry point is [Puzzle::generate], which runs both steps and
//! returns the puzzle together with the solved grid it was derived from.
//!
//! ```
//! use sudoku_gen::{Difficulty, Puzzle};
//! use sudoku_gen::solver;
//!
//! let mut rng = rand::thread_rng();
//! let puzzle = Puzzle::generate(&mut rng, Difficulty::Easy).unwrap();
//!
//! // The puzzle is a sub-grid of its solution and uniquely solvable.
//! assert!(puzzle.board().is_subset(puzzle.solution()));
//! assert_eq!(1, solver::count_solutions(puzzle.board().clone(), 2));
//! ```
//!
//! The random number generator is passed in explicitly, so callers that need
//! reproducible output can supply a seeded generator (for example a
//! `rand_chacha::ChaCha8Rng`) instead of `rand::thread_rng()`.
//!
//! # Exchanging boards
//!
//! See [Board::parse] for the exact format of a board code. Codes can be
//! used to exchange boards, while the `Display` implementation renders a
//! board for human readers.
//!
//! ```
//! use sudoku_gen::Board;
//!
//! let empty_code = ",".repeat(80);
//! let board = Board::parse(&empty_code).unwrap();
//! assert!(board.is_empty());
//! println!("{}", board);
//! ```

pub mod error;
pub mod generator;
pub mod rules;
pub mod solver;

#[cfg(test)]
mod random_tests;

use crate::error::{ParseError, ParseResult, SudokuError, SudokuResult};
use crate::generator::{Generator, Reducer};

use rand::Rng;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a [Board].
pub const BOARD_SIZE: usize = 9;

/// The number of rows and columns of one of the nine non-overlapping boxes
/// of a [Board].
pub const BOX_SIZE: usize = 3;

/// The total number of cells of a [Board].
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub(crate) fn index(row: usize, column: usize) -> usize {
    row * BOARD_SIZE + column
}

/// Computes the 180-degree-rotational counterpart of the cell at
/// `(row, column)`, that is, the cell `(8 - row, 8 - column)`. The center
/// cell `(4, 4)` is its own partner.
///
/// # Errors
///
/// If `row` or `column` is not in the range `[0, 8]`. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn symmetric_partner(row: usize, column: usize)
        -> SudokuResult<(usize, usize)> {
    if row >= BOARD_SIZE || column >= BOARD_SIZE {
        Err(SudokuError::OutOfBounds)
    }
    else {
        Ok((BOARD_SIZE - row - 1, BOARD_SIZE - column - 1))
    }
}

/// Computes the domain-facing label of the cell at `(row, column)`. Rows are
/// labelled with the letters `A` to `I` from top to bottom and columns with
/// the numbers `1` to `9` from left to right, so the top-left cell is `A1`
/// and the bottom-right cell is `I9`.
///
/// ```
/// use sudoku_gen::cell_label;
///
/// assert_eq!("A1", cell_label(0, 0).unwrap());
/// assert_eq!("E5", cell_label(4, 4).unwrap());
/// assert_eq!("I9", cell_label(8, 8).unwrap());
/// ```
///
/// # Errors
///
/// If `row` or `column` is not in the range `[0, 8]`. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn cell_label(row: usize, column: usize) -> SudokuResult<String> {
    if row >= BOARD_SIZE || column >= BOARD_SIZE {
        Err(SudokuError::OutOfBounds)
    }
    else {
        let row_letter = (b'A' + row as u8) as char;
        Ok(format!("{}{}", row_letter, column + 1))
    }
}

/// A 9x9 Sudoku board. Each cell holds a number in the range `[0, 9]`, where
/// 0 represents an empty cell. Cells are addressed by `(row, column)` pairs
/// in the range `[0, 8]`, with the row counted from the top and the column
/// from the left.
///
/// A board makes no guarantee about being valid or solvable; it is plain
/// data. Use [Board::conflicting_cells] to find rule violations and the
/// [solver](crate::solver) module to classify solvability.
///
/// Boards serialize to and deserialize from a flat vector of 81 cell values
/// in row-major order. Deserialization validates the length and the value
/// range.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<u8>")]
#[serde(try_from = "Vec<u8>")]
pub struct Board {
    cells: Vec<u8>
}

impl From<Board> for Vec<u8> {
    fn from(board: Board) -> Vec<u8> {
        board.cells
    }
}

impl TryFrom<Vec<u8>> for Board {
    type Error = SudokuError;

    fn try_from(cells: Vec<u8>) -> SudokuResult<Board> {
        if cells.len() != CELL_COUNT {
            return Err(SudokuError::WrongCellCount);
        }

        if cells.iter().any(|&cell| cell > 9) {
            return Err(SudokuError::InvalidNumber);
        }

        Ok(Board {
            cells
        })
    }
}

fn to_char(cell: u8) -> char {
    if cell == 0 {
        ' '
    }
    else {
        (b'0' + cell) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for column in 0..BOARD_SIZE {
        if column == 0 {
            result.push(start);
        }
        else if column % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(column));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &Board, row: usize) -> String {
    line('║', '║', '│', |column| to_char(board.get(row, column).unwrap()),
        ' ', '║', true)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if row % BOX_SIZE == 0 {
                f.write_str(thick_separator_line().as_str())?;
            }
            else {
                f.write_str(thin_separator_line().as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Board {

    /// Creates a new, empty board.
    pub fn new() -> Board {
        Board {
            cells: vec![0; CELL_COUNT]
        }
    }

    /// Parses a code encoding a board. The code is a comma-separated list of
    /// exactly 81 entries, each either empty or a number in the range
    /// `[1, 9]`. The entries are assigned left-to-right, top-to-bottom, where
    /// each row is completed before the next one is started. Whitespace in
    /// the entries is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of [ParseError] (see that documentation).
    pub fn parse(code: &str) -> ParseResult<Board> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(ParseError::WrongNumberOfCells);
        }

        let mut board = Board::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<u8>()?;

            if number == 0 || number > 9 {
                return Err(ParseError::InvalidNumber);
            }

            board.cells[i] = number;
        }

        Ok(board)
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [Board::parse]. That is, a board that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_gen::Board;
    ///
    /// let mut board = Board::new();
    /// board.set(0, 0, 5).unwrap();
    /// board.set(8, 8, 1).unwrap();
    ///
    /// let code = board.to_parseable_string();
    /// assert_eq!(board, Board::parse(&code).unwrap());
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(|&cell| {
                if cell == 0 {
                    String::from("")
                }
                else {
                    cell.to_string()
                }
            })
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position. 0 represents
    /// an empty cell.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the desired cell. Must be in the range `[0, 8]`.
    /// * `column`: The column of the desired cell. Must be in the range
    /// `[0, 8]`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` is not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get(&self, row: usize, column: usize) -> SudokuResult<u8> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(row, column)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the assigned cell. Must be in the range `[0, 8]`.
    /// * `column`: The column of the assigned cell. Must be in the range
    /// `[0, 8]`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` is not in the
    /// specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set(&mut self, row: usize, column: usize, number: u8)
            -> SudokuResult<()> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > 9 {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(row, column)] = number;
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the cleared cell. Must be in the range `[0, 8]`.
    /// * `column`: The column of the cleared cell. Must be in the range
    /// `[0, 8]`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` is not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear(&mut self, row: usize, column: usize) -> SudokuResult<()> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(row, column)] = 0;
        Ok(())
    }

    /// Counts the number of givens on this board, that is, the number of
    /// non-empty cells. While on average puzzles with fewer givens are
    /// harder, this is *not* a reliable measure of difficulty.
    pub fn count_givens(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    /// Indicates whether this board is full, i.e. every cell is filled with
    /// a number. In this case, [Board::count_givens] returns [CELL_COUNT].
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != 0)
    }

    /// Indicates whether this board is empty, i.e. no cell is filled with a
    /// number. In this case, [Board::count_givens] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    /// Indicates whether this board configuration is a subset of another
    /// one. That is, all cells filled in this board with some number must be
    /// filled in `other` with the same number. Every puzzle is a subset of
    /// its solution.
    pub fn is_subset(&self, other: &Board) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(&self_cell, &other_cell)|
                self_cell == 0 || self_cell == other_cell)
    }

    /// Indicates whether this board configuration is a superset of another
    /// one. That is, all cells filled in the `other` board with some number
    /// must be filled in this one with the same number.
    pub fn is_superset(&self, other: &Board) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Computes the numbers which may currently be placed in the cell at the
    /// specified position without violating the classic Sudoku rules, in
    /// increasing order. The cell's own content is ignored, so for a filled
    /// cell of a valid board this returns precisely that cell's number.
    ///
    /// ```
    /// use sudoku_gen::Board;
    ///
    /// let board = Board::new();
    /// assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
    ///     board.available_numbers(3, 5).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// If either `row` or `column` is not in the range `[0, 8]`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn available_numbers(&self, row: usize, column: usize)
            -> SudokuResult<Vec<u8>> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        let mut probe = self.clone();
        probe.clear(row, column)?;

        Ok((1..=9)
            .filter(|&number|
                rules::placement_allowed(&probe, row, column, number))
            .collect())
    }

    /// Computes the positions of all filled cells whose number also occurs
    /// in another cell of the same row, column, or box. The positions are
    /// returned in row-major order. For a valid board, the result is empty.
    pub fn conflicting_cells(&self) -> Vec<(usize, usize)> {
        let mut conflicts = Vec::new();

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let number = self.get(row, column).unwrap();

                if number == 0 {
                    continue;
                }

                let mut probe = self.clone();
                probe.clear(row, column).unwrap();

                if !rules::placement_allowed(&probe, row, column, number) {
                    conflicts.push((row, column));
                }
            }
        }

        conflicts
    }
}

/// An enumeration of the difficulty levels at which puzzles can be
/// generated. Each level maps to a fixed number of cells the
/// [Reducer](generator::Reducer) tries to remove from the 81 cells of a
/// solved board. The mapping is a static table, not a computed heuristic.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {

    /// 30 of 81 cells are targeted for removal, leaving around 51 givens.
    Easy,

    /// 40 of 81 cells are targeted for removal, leaving around 41 givens.
    Medium,

    /// 50 of 81 cells are targeted for removal, leaving around 31 givens.
    Hard
}

impl Difficulty {

    /// Gets the number of cells that [Reducer](generator::Reducer) attempts
    /// to remove for this difficulty. Since removal must preserve uniqueness
    /// of the solution, this is a target, not a guarantee.
    ///
    /// ```
    /// use sudoku_gen::Difficulty;
    ///
    /// assert_eq!(30, Difficulty::Easy.removal_target());
    /// assert_eq!(40, Difficulty::Medium.removal_target());
    /// assert_eq!(50, Difficulty::Hard.removal_target());
    /// ```
    pub fn removal_target(self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 40,
            Difficulty::Hard => 50
        }
    }
}

/// A generated puzzle together with the solved board it was derived from.
/// Obtained from [Puzzle::generate].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {
    board: Board,
    solution: Board
}

impl Puzzle {

    /// Generates a new puzzle at the given difficulty. A full board is
    /// generated by a [Generator](generator::Generator) and then reduced by
    /// a [Reducer](generator::Reducer) using the difficulty's removal
    /// target.
    ///
    /// The resulting puzzle has exactly one solution, namely the board
    /// returned by [Puzzle::solution], and its empty cells are symmetric
    /// under a 180 degree rotation.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator that controls both the content
    /// of the solved board and the selection of removed cells. Pass a seeded
    /// generator for reproducible output.
    /// * `difficulty`: The [Difficulty] whose removal target is applied.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If no full board exists. This cannot
    /// happen when starting from an empty 9x9 board, but the error path is
    /// surfaced rather than silently ignored.
    pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty)
            -> SudokuResult<Puzzle> {
        let mut generator = Generator::new(&mut *rng);
        let solution = generator.generate()?;
        let mut reducer = Reducer::new(&mut *rng);
        let board = reducer.reduce(&solution, difficulty.removal_target());

        Ok(Puzzle {
            board,
            solution
        })
    }

    /// Gets a reference to the puzzle board, which contains only the givens.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets a reference to the solved board from which the puzzle was
    /// derived.
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// Destructures this puzzle into the puzzle board and the solved board,
    /// in that order.
    pub fn into_parts(self) -> (Board, Board) {
        (self.board, self.solution)
    }
}
