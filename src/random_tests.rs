//! Randomized consistency tests that drive the full generation pipeline
//! through the public API. These complement the unit tests of the individual
//! modules by checking the end-to-end guarantees over several runs.

use crate::{BOARD_SIZE, CELL_COUNT, Difficulty, Puzzle, symmetric_partner};
use crate::solver;

const ITERATIONS_PER_RUN: usize = 5;

/// The tolerance by which the mean given count of a difficulty may deviate
/// from `81 - removal_target`, to account for runs in which the lock set
/// saturates before the target is reached.
const GIVEN_COUNT_TOLERANCE: f64 = 5.0;

fn assert_consistent(puzzle: &Puzzle) {
    let board = puzzle.board();
    let solution = puzzle.solution();

    assert!(solution.is_full(), "Solution is not full.");
    assert!(solution.conflicting_cells().is_empty(),
        "Solution violates the rules.");
    assert!(board.is_subset(solution),
        "Puzzle is not a subset of its solution.");
    assert_eq!(1, solver::count_solutions(board.clone(), 2),
        "Puzzle is not uniquely solvable.");

    for row in 0..BOARD_SIZE {
        for column in 0..BOARD_SIZE {
            let (partner_row, partner_column) =
                symmetric_partner(row, column).unwrap();
            let cell_empty = board.get(row, column).unwrap() == 0;
            let partner_empty =
                board.get(partner_row, partner_column).unwrap() == 0;

            assert_eq!(cell_empty, partner_empty,
                "Puzzle is not centrally symmetric.");
        }
    }
}

fn mean_given_count(difficulty: Difficulty) -> f64 {
    let mut rng = rand::thread_rng();
    let mut total = 0;

    for _ in 0..ITERATIONS_PER_RUN {
        let puzzle = Puzzle::generate(&mut rng, difficulty).unwrap();
        assert_consistent(&puzzle);
        total += puzzle.board().count_givens();
    }

    total as f64 / ITERATIONS_PER_RUN as f64
}

#[test]
fn difficulties_consistent_and_monotonic() {
    let easy = mean_given_count(Difficulty::Easy);
    let medium = mean_given_count(Difficulty::Medium);
    let hard = mean_given_count(Difficulty::Hard);

    assert!(easy > medium && medium > hard,
        "Mean given counts are not monotonic: easy {}, medium {}, hard {}.",
        easy, medium, hard);

    for &(difficulty, mean) in [
        (Difficulty::Easy, easy),
        (Difficulty::Medium, medium),
        (Difficulty::Hard, hard)
    ].iter() {
        let expected = (CELL_COUNT - difficulty.removal_target()) as f64;

        assert!((mean - expected).abs() <= GIVEN_COUNT_TOLERANCE,
            "Mean given count {} too far from expected {}.", mean, expected);
    }
}

#[test]
fn successive_generations_differ() {
    let mut rng = rand::thread_rng();
    let first = Puzzle::generate(&mut rng, Difficulty::Medium).unwrap();
    let second = Puzzle::generate(&mut rng, Difficulty::Medium).unwrap();

    // Two independent draws agreeing on all 81 cells would require an
    // astronomically unlikely random number sequence.
    assert_ne!(first.board().cells(), second.board().cells(),
        "Successive generations produced the same puzzle.");
}
