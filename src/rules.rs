//! This module implements the classic Sudoku placement rules: a number may
//! occur at most once in each row, each column, and each 3x3 box.
//!
//! The predicates in this module are pure and cheap (at most 27 cell
//! comparisons per call). They are the decision procedure shared by the
//! random filler and the solution counter in this crate, and they are also
//! exported for callers that want to offer input validation, for example via
//! [Board::available_numbers](crate::Board::available_numbers).
//!
//! All predicates expect the checked cell itself to be empty. Both
//! backtracking searches only ever probe empty cells, so no special handling
//! for the cell's own current value is required.

use crate::{BOARD_SIZE, BOX_SIZE, Board};

/// Indicates whether placing `number` in row `row` would not collide with a
/// number already present in that row.
pub fn row_allows(board: &Board, row: usize, number: u8) -> bool {
    for column in 0..BOARD_SIZE {
        if board.get(row, column).unwrap() == number {
            return false;
        }
    }

    true
}

/// Indicates whether placing `number` in column `column` would not collide
/// with a number already present in that column.
pub fn column_allows(board: &Board, column: usize, number: u8) -> bool {
    for row in 0..BOARD_SIZE {
        if board.get(row, column).unwrap() == number {
            return false;
        }
    }

    true
}

/// Indicates whether placing `number` in the 3x3 box containing the cell at
/// `(row, column)` would not collide with a number already present in that
/// box. The box origin is the cell `(row - row % 3, column - column % 3)`.
pub fn box_allows(board: &Board, row: usize, column: usize, number: u8)
        -> bool {
    let box_row = row - row % BOX_SIZE;
    let box_column = column - column % BOX_SIZE;

    for other_row in box_row..(box_row + BOX_SIZE) {
        for other_column in box_column..(box_column + BOX_SIZE) {
            if board.get(other_row, other_column).unwrap() == number {
                return false;
            }
        }
    }

    true
}

/// Indicates whether `number` may legally be placed in the empty cell at
/// `(row, column)`, that is, whether the row, the column, and the 3x3 box
/// containing that cell are all free of `number`. This is the conjunction of
/// [row_allows], [column_allows], and [box_allows].
pub fn placement_allowed(board: &Board, row: usize, column: usize, number: u8)
        -> bool {
    row_allows(board, row, number) &&
        column_allows(board, column, number) &&
        box_allows(board, row, column, number)
}

#[cfg(test)]
mod tests {

    use super::*;

    fn board_with(cells: &[(usize, usize, u8)]) -> Board {
        let mut board = Board::new();

        for &(row, column, number) in cells {
            board.set(row, column, number).unwrap();
        }

        board
    }

    #[test]
    fn empty_board_allows_everything() {
        let board = Board::new();

        for number in 1..=9 {
            assert!(placement_allowed(&board, 4, 4, number));
        }
    }

    #[test]
    fn row_duplicate_rejected() {
        let board = board_with(&[(2, 7, 5)]);

        assert!(!row_allows(&board, 2, 5));
        assert!(!placement_allowed(&board, 2, 0, 5));
        assert!(placement_allowed(&board, 3, 0, 5));
    }

    #[test]
    fn column_duplicate_rejected() {
        let board = board_with(&[(8, 3, 9)]);

        assert!(!column_allows(&board, 3, 9));
        assert!(!placement_allowed(&board, 0, 3, 9));
        assert!(placement_allowed(&board, 0, 4, 9));
    }

    #[test]
    fn box_duplicate_rejected() {
        // (4, 4) and (3, 5) share the center box.
        let board = board_with(&[(4, 4, 1)]);

        assert!(!box_allows(&board, 3, 5, 1));
        assert!(!placement_allowed(&board, 3, 5, 1));

        // (3, 6) lies in the neighboring box and shares neither row nor
        // column with (4, 4).
        assert!(placement_allowed(&board, 3, 6, 1));
    }

    #[test]
    fn different_number_allowed() {
        let board = board_with(&[(0, 0, 2)]);

        assert!(placement_allowed(&board, 0, 1, 3));
        assert!(placement_allowed(&board, 1, 0, 4));
        assert!(placement_allowed(&board, 1, 1, 5));
    }
}
