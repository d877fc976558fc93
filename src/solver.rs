//! This module contains the bounded solution counter that is used as the
//! uniqueness oracle during puzzle generation.
//!
//! [count_solutions] performs an exhaustive backtracking search over the
//! empty cells of a board, but aborts as soon as a configurable number of
//! solutions has been found. Counting *all* solutions of a sparse board is
//! combinatorially explosive, while the generator only ever needs to
//! distinguish "exactly one solution" from "none or more than one", so a
//! limit of 2 suffices and keeps the worst case bounded.

use crate::{BOARD_SIZE, Board};
use crate::rules;

/// An enumeration of the different ways a board can be solvable, as
/// determined by [solvability].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Solvability {

    /// Indicates that the board has no valid completion at all.
    Impossible,

    /// Indicates that the board has exactly one valid completion. Only
    /// boards with this solvability are acceptable puzzles.
    Unique,

    /// Indicates that the board has more than one valid completion.
    Ambiguous
}

fn count_rec(board: &mut Board, row: usize, column: usize, limit: usize)
        -> usize {
    if row == BOARD_SIZE {
        return 1;
    }

    let next_column = (column + 1) % BOARD_SIZE;
    let next_row = if next_column == 0 { row + 1 } else { row };

    if board.get(row, column).unwrap() != 0 {
        return count_rec(board, next_row, next_column, limit);
    }

    let mut count = 0;

    for number in 1..=9 {
        if rules::placement_allowed(board, row, column, number) {
            board.set(row, column, number).unwrap();
            count += count_rec(board, next_row, next_column, limit - count);
            board.clear(row, column).unwrap();

            if count >= limit {
                break;
            }
        }
    }

    count
}

/// Counts the distinct valid completions of the given board, up to `limit`.
/// Cells are tried in row-major order with unshuffled candidates, so the
/// result is deterministic for a given board.
///
/// The board is taken by value and consumed as a disposable working copy;
/// callers that want to keep their board must pass a clone.
///
/// The search stops as soon as `limit` solutions have been found, so the
/// returned value is in the range `[0, limit]` and the cost of a call is
/// bounded even for boards with astronomically many completions. Callers
/// that only need to check uniqueness pass a limit of 2 and compare the
/// result against 1.
///
/// The given board must be valid, that is, free of duplicates in any row,
/// column, or box; filled cells are trusted and never re-checked.
pub fn count_solutions(mut board: Board, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }

    count_rec(&mut board, 0, 0, limit)
}

/// Classifies the solvability of the given board by counting its solutions
/// with a limit of 2. See [Solvability] for the possible results.
pub fn solvability(board: &Board) -> Solvability {
    match count_solutions(board.clone(), 2) {
        0 => Solvability::Impossible,
        1 => Solvability::Unique,
        _ => Solvability::Ambiguous
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    // Example from the World Puzzle Federation Sudoku GP 2020 Round 8
    // (Puzzle 2), which has a unique solution.

    fn unique_puzzle() -> Board {
        Board::parse("\
             , , , ,8,1, , , ,\
             , ,2, , ,7,8, , ,\
             ,5,3, , , ,1,7, ,\
            3,7, , , , , , , ,\
            6, , , , , , , ,3,\
             , , , , , , ,2,4,\
             ,6,9, , , ,2,3, ,\
             , ,5,9, , ,4, , ,\
             , , ,6,5, , , , ").unwrap()
    }

    fn unique_solution() -> Board {
        Board::parse("\
            7,4,6,2,8,1,3,5,9,\
            9,1,2,5,3,7,8,4,6,\
            8,5,3,4,9,6,1,7,2,\
            3,7,4,1,2,5,6,9,8,\
            6,2,8,7,4,9,5,1,3,\
            5,9,1,3,6,8,7,2,4,\
            1,6,9,8,7,4,2,3,5,\
            2,8,5,9,1,3,4,6,7,\
            4,3,7,6,5,2,9,8,1").unwrap()
    }

    /// A locally valid board without any completion: the first row forces 1
    /// into the top-left cell, which the first column already contains.
    fn impossible_board() -> Board {
        Board::parse("\
             ,2,3,4,5,6,7,8,9,\
            1, , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ").unwrap()
    }

    #[test]
    fn unique_puzzle_counted_once() {
        assert_eq!(1, count_solutions(unique_puzzle(), 2));
        assert_eq!(1, count_solutions(unique_puzzle(), 10));
    }

    #[test]
    fn full_board_counted_once() {
        assert_eq!(1, count_solutions(unique_solution(), 2));
    }

    #[test]
    fn board_with_one_empty_cell_counted_once() {
        let mut board = unique_solution();
        board.clear(4, 7).unwrap();

        assert_eq!(1, count_solutions(board, 2));
    }

    #[test]
    fn impossible_board_counted_zero() {
        assert_eq!(0, count_solutions(impossible_board(), 2));
    }

    #[test]
    fn empty_board_count_capped_at_limit() {
        assert_eq!(1, count_solutions(Board::new(), 1));
        assert_eq!(2, count_solutions(Board::new(), 2));
        assert_eq!(5, count_solutions(Board::new(), 5));
    }

    #[test]
    fn zero_limit_counts_nothing() {
        assert_eq!(0, count_solutions(unique_puzzle(), 0));
    }

    #[test]
    fn solvability_classification() {
        assert_eq!(Solvability::Unique, solvability(&unique_puzzle()));
        assert_eq!(Solvability::Impossible, solvability(&impossible_board()));
        assert_eq!(Solvability::Ambiguous, solvability(&Board::new()));
    }
}
