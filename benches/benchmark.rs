use criterion::{criterion_group, criterion_main, Criterion};

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use sudoku_gen::{Difficulty, Puzzle};
use sudoku_gen::generator::{Generator, Reducer};
use sudoku_gen::solver;

use std::time::Duration;

const MEASUREMENT_TIME_SECS: u64 = 10;

// Seeded RNGs keep the benchmarked workload comparable between runs; the
// reduction loop in particular has randomized runtime.

fn benchmark_full_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));

    group.bench_function("full grid", |b| {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(1));
        b.iter(|| generator.generate().unwrap())
    });

    group.finish();
}

fn benchmark_count_solutions(c: &mut Criterion) {
    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(2));
    let solved = generator.generate().unwrap();
    let mut reducer = Reducer::new(ChaCha8Rng::seed_from_u64(3));
    let puzzle = reducer.reduce(&solved, Difficulty::Hard.removal_target());

    let mut group = c.benchmark_group("counting");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));

    group.bench_function("count solutions limit 2", |b| {
        b.iter(|| solver::count_solutions(puzzle.clone(), 2))
    });

    group.finish();
}

fn benchmark_puzzles(c: &mut Criterion) {
    let mut group = c.benchmark_group("puzzles");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(20);

    let difficulties = [
        ("easy", Difficulty::Easy),
        ("medium", Difficulty::Medium),
        ("hard", Difficulty::Hard)
    ];

    for &(name, difficulty) in difficulties.iter() {
        group.bench_function(name, |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(4);
            b.iter(|| Puzzle::generate(&mut rng, difficulty).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_full_grid, benchmark_count_solutions,
    benchmark_puzzles);
criterion_main!(benches);
