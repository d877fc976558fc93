//! This module contains the logic for generating random Sudoku puzzles.
//!
//! Generation of a puzzle is done by first producing a full [Board] with a
//! [Generator] and then removing symmetric pairs of clues with a [Reducer],
//! which uses the bounded solution counter from the
//! [solver](crate::solver) module to guarantee that the puzzle keeps exactly
//! one solution. [Puzzle::generate](crate::Puzzle::generate) composes the
//! two steps.

use crate::{BOARD_SIZE, Board, CELL_COUNT, index, symmetric_partner};
use crate::error::{SudokuError, SudokuResult};
use crate::rules;
use crate::solver;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly produces a full [Board], that is, a board with no
/// empty cells that satisfies the classic Sudoku rules. It uses a random
/// number generator to decide the content, so successive calls yield
/// different boards. For most cases, sensible defaults are provided by
/// [Generator::new_default]; pass a seeded random number generator to
/// [Generator::new] for reproducible output.
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

fn shuffled_numbers(rng: &mut impl Rng) -> [u8; BOARD_SIZE] {
    let mut numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9];

    for i in 0..(BOARD_SIZE - 1) {
        let j = rng.gen_range(i..BOARD_SIZE);
        numbers.swap(i, j);
    }

    numbers
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, board: &mut Board, row: usize, column: usize)
            -> bool {
        if row == BOARD_SIZE {
            return true;
        }

        let next_column = (column + 1) % BOARD_SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if board.get(row, column).unwrap() != 0 {
            return self.fill_rec(board, next_row, next_column);
        }

        for &number in shuffled_numbers(&mut self.rng).iter() {
            if rules::placement_allowed(board, row, column, number) {
                board.set(row, column, number).unwrap();

                if self.fill_rec(board, next_row, next_column) {
                    return true;
                }

                board.clear(row, column).unwrap();
            }
        }

        false
    }

    /// Fills the given [Board] with random digits that satisfy the classic
    /// Sudoku rules and match all already present digits. Cells are visited
    /// in row-major order and the candidates for each cell are tried in
    /// randomly shuffled order, which is what makes successive calls produce
    /// different boards.
    ///
    /// If no error is returned, it is guaranteed that `board` is full and
    /// valid after this operation. Otherwise, it remains unchanged.
    ///
    /// # Arguments
    ///
    /// * `board`: The board to fill with random digits. Its filled cells
    /// must not conflict with each other.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If there is no set of digits that can be
    /// entered into the empty cells without violating the rules. This cannot
    /// happen for an empty board.
    pub fn fill(&mut self, board: &mut Board) -> SudokuResult<()> {
        if self.fill_rec(board, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::Unsolvable)
        }
    }

    /// Generates a new random full [Board]. It is guaranteed that the result
    /// is full and satisfies the classic Sudoku rules.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If no full board exists. This is
    /// unreachable for the fixed 9x9 geometry, but surfaced as an error
    /// rather than a panic since [Generator::fill] is generic over arbitrary
    /// starting boards.
    pub fn generate(&mut self) -> SudokuResult<Board> {
        let mut board = Board::new();
        self.fill(&mut board)?;
        Ok(board)
    }
}

/// A reducer takes a full [Board] produced by a [Generator] and removes
/// clues from it, yielding a puzzle with exactly one solution. Clues are
/// always removed in 180-degree-rotationally symmetric pairs, so the puzzle
/// keeps the central symmetry familiar from published Sudoku.
///
/// The reducer draws candidate cells uniformly at random, so repeated
/// reductions of the same board yield different puzzles with high
/// probability. A candidate pair whose removal would make the puzzle
/// ambiguous is locked and never retried within the same run.
pub struct Reducer<R: Rng> {
    rng: R
}

impl Reducer<ThreadRng> {

    /// Creates a new reducer that uses a [ThreadRng] to decide which clues
    /// are removed.
    pub fn new_default() -> Reducer<ThreadRng> {
        Reducer::new(rand::thread_rng())
    }
}

impl<R: Rng> Reducer<R> {

    /// Creates a new reducer that uses the given random number generator to
    /// decide which clues are removed.
    pub fn new(rng: R) -> Reducer<R> {
        Reducer {
            rng
        }
    }

    /// Derives a puzzle from the given solved board by clearing up to
    /// `removal_target` cells while preserving central symmetry and
    /// uniqueness of the solution.
    ///
    /// Candidate cells are drawn uniformly at random and cleared together
    /// with their 180-degree-rotational partner. Each removal is probed with
    /// a limit-2 solution count on a disposable copy; if the puzzle stays
    /// uniquely solvable the removal is kept, otherwise both cells are
    /// restored and locked for the rest of the run. The center cell is its
    /// own partner and is treated as a pair of its own.
    ///
    /// The target is exactly that, a target: the removal loop ends early
    /// once no cell remains that is both filled and unlocked, so the
    /// returned puzzle may contain more givens than `81 - removal_target`.
    /// Since removal proceeds in pairs, an odd target may also be exceeded
    /// by one. The result is guaranteed to have exactly one solution, namely
    /// `solved`, in every case.
    ///
    /// # Arguments
    ///
    /// * `solved`: The full board to derive a puzzle from. It must be full
    /// and valid; [Generator::generate] provides suitable input.
    /// * `removal_target`: The number of cells the reducer attempts to
    /// clear. See [Difficulty](crate::Difficulty) for the standard targets.
    pub fn reduce(&mut self, solved: &Board, removal_target: usize) -> Board {
        let mut puzzle = solved.clone();
        let mut locked = [false; CELL_COUNT];

        // Number of cells that are still filled and unlocked. Once this
        // reaches zero, no further removal attempt can succeed.
        let mut open = solved.count_givens();
        let mut removed = 0;

        while removed < removal_target && open > 0 {
            let row = self.rng.gen_range(0..BOARD_SIZE);
            let column = self.rng.gen_range(0..BOARD_SIZE);
            let (partner_row, partner_column) =
                symmetric_partner(row, column).unwrap();
            let cell = index(row, column);
            let partner = index(partner_row, partner_column);

            if locked[cell] || locked[partner] {
                continue;
            }

            let number = puzzle.get(row, column).unwrap();
            let partner_number =
                puzzle.get(partner_row, partner_column).unwrap();

            if number == 0 || partner_number == 0 {
                continue;
            }

            puzzle.clear(row, column).unwrap();
            puzzle.clear(partner_row, partner_column).unwrap();

            if solver::count_solutions(puzzle.clone(), 2) == 1 {
                removed += 2;
            }
            else {
                puzzle.set(row, column, number).unwrap();
                puzzle.set(partner_row, partner_column, partner_number)
                    .unwrap();
                locked[cell] = true;
                locked[partner] = true;
            }

            open -= if cell == partner { 1 } else { 2 };
        }

        puzzle
    }
}
