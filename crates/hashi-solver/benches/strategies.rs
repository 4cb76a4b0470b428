//! Benchmarks for the solving strategies.
//!
//! # Benchmarks
//!
//! - **`<strategy>`**: Solves small generated puzzles with every strategy.
//! - **`smart_<difficulty>`**: Solves larger generated puzzles with the smart
//!   strategy, which is the only one fast enough for them.
//!
//! # Test Data
//!
//! Puzzles are generated from the seeds `0`, `1` and `2` (via
//! `PuzzleSeed::from_u64`), so every run solves the same puzzles.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench strategies
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use hashi_core::Puzzle;
use hashi_generator::{Difficulty, GeneratorConfig, PuzzleSeed, RandomPuzzleGenerator};
use hashi_solver::StrategyKind;

const SEEDS: [u64; 3] = [0, 1, 2];

fn problems(config: GeneratorConfig) -> Vec<Puzzle> {
    SEEDS
        .into_iter()
        .map(|value| {
            RandomPuzzleGenerator::generate_with_seed(config, PuzzleSeed::from_u64(value)).problem
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let config = GeneratorConfig::for_difficulty(Difficulty::VeryEasy).with_island_range(4..=6);
    let problems = problems(config);

    for kind in StrategyKind::ALL {
        let strategy = kind.strategy();
        for (i, problem) in problems.iter().enumerate() {
            c.bench_with_input(
                BenchmarkId::new(strategy.name(), format!("seed_{i}")),
                problem,
                |b, problem| {
                    b.iter_batched(
                        || hint::black_box(problem.fast_copy()),
                        |problem| strategy.solve(&problem),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_smart(c: &mut Criterion) {
    let strategy = StrategyKind::Smart.strategy();
    for difficulty in [Difficulty::Easy, Difficulty::Normal] {
        let name = format!(
            "smart_{}",
            difficulty.name().to_ascii_lowercase().replace(' ', "_")
        );
        let problems = problems(GeneratorConfig::for_difficulty(difficulty));
        for (i, problem) in problems.iter().enumerate() {
            c.bench_with_input(
                BenchmarkId::new(&name, format!("seed_{i}")),
                problem,
                |b, problem| {
                    b.iter_batched(
                        || hint::black_box(problem.fast_copy()),
                        |problem| strategy.solve(&problem),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_strategies,
        bench_smart
);
criterion_main!(benches);
