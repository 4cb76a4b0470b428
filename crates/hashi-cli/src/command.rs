use hashi_core::Puzzle;
use hashi_generator::{GeneratedPuzzle, GeneratorConfig, PuzzleSeed, RandomPuzzleGenerator};
use hashi_solver::{PuzzleSolver, SolveStats, StrategyKind};
use log::info;
use rayon::prelude::*;

use crate::{
    cli::{Command, GenerateArgs, ShowArgs, SolveArgs},
    error::CliError,
    puzzle_file,
};

pub(crate) fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Generate(args) => generate(&args),
        Command::Solve(args) => solve(&args),
        Command::Show(args) => show(&args),
    }
}

fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let config = generator_config(args)?;
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    let puzzle = match args.tries {
        0 => return Err(CliError::NoTries),
        1 => RandomPuzzleGenerator::generate_with_seed(config, seed),
        tries => hardest_of(config, seed, tries),
    };

    if let Some(path) = &args.output {
        puzzle_file::save(path, &puzzle.problem, args.format)?;
    }
    if let Some(path) = &args.solution {
        puzzle_file::save(path, &puzzle.solution, args.format)?;
    }

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    print_grid("Problem", &puzzle.problem);
    println!();
    print_grid("Solution", &puzzle.solution);
    Ok(())
}

fn generator_config(args: &GenerateArgs) -> Result<GeneratorConfig, CliError> {
    let config = GeneratorConfig::for_difficulty(args.difficulty);
    let preset = config.island_range();
    let min = args.min_islands.unwrap_or(*preset.start());
    let max = args.max_islands.unwrap_or(*preset.end());
    if min < 2 || min > max {
        return Err(CliError::InvalidIslandRange { min, max });
    }
    Ok(config.with_island_range(min..=max))
}

/// Generates `tries` puzzles in parallel and returns the one the smart solver
/// needs the most search for.
fn hardest_of(config: GeneratorConfig, seed: PuzzleSeed, tries: usize) -> GeneratedPuzzle {
    let mut rng = seed.rng();
    let seeds = (0..tries)
        .map(|_| PuzzleSeed::from_rng(&mut rng))
        .collect::<Vec<_>>();
    let strategy = StrategyKind::Smart.strategy();

    let (score, puzzle) = seeds
        .into_par_iter()
        .map(|seed| {
            let puzzle = RandomPuzzleGenerator::generate_with_seed(config, seed);
            let stats = strategy.solve(&puzzle.problem).stats;
            (search_effort(&stats), puzzle)
        })
        .max_by_key(|(score, _)| *score)
        .unwrap_or_else(|| {
            let puzzle = RandomPuzzleGenerator::generate_with_seed(config, seed);
            ((0, 0), puzzle)
        });
    info!(
        "kept puzzle {} out of {tries} ({} expanded, {} generated)",
        puzzle.seed, score.0, score.1
    );
    puzzle
}

/// Ranks solve statistics by expanded states, then by generated states.
fn search_effort(stats: &SolveStats) -> (usize, usize) {
    (stats.expanded(), stats.generated())
}

fn solve(args: &SolveArgs) -> Result<(), CliError> {
    let puzzle = puzzle_file::load(&args.input, args.format)?;
    let solver = PuzzleSolver::new(&puzzle, args.strategy.strategy());
    let result = solver.solve();
    if !result.solved {
        return Err(CliError::NoSolution {
            path: args.input.clone(),
        });
    }

    if let Some(path) = &args.output {
        puzzle_file::save(path, &result.puzzle, args.format)?;
    }

    println!("Strategy:");
    println!("  {}", solver.strategy().name());
    println!();
    print_grid("Solution", &result.puzzle);
    println!();
    println!("Stats:");
    println!("  expanded: {}", result.stats.expanded());
    println!("  generated: {}", result.stats.generated());
    println!("  pruned: {}", result.stats.pruned());
    println!("  duplicates: {}", result.stats.duplicates());
    println!("  forced: {}", result.stats.forced());
    Ok(())
}

fn show(args: &ShowArgs) -> Result<(), CliError> {
    let puzzle = puzzle_file::load(&args.input, args.format)?;
    print_grid("Puzzle", &puzzle);
    println!();
    println!("Status: {}", puzzle.status());
    println!("Size: {}x{}", puzzle.width(), puzzle.height());
    println!("Islands: {}", puzzle.islands().len());
    println!("Bridges: {}", puzzle.bridges().len());
    Ok(())
}

fn print_grid(title: &str, puzzle: &Puzzle) {
    println!("{title}:");
    if !puzzle.fits_text() {
        let (width, height) = puzzle.text_size();
        println!("  ({width}x{height} grid, too large to display)");
        return;
    }
    for line in puzzle.to_string().lines() {
        println!("  {line}");
    }
}

#[cfg(test)]
mod tests {
    use hashi_generator::Difficulty;

    use super::*;
    use crate::cli::Format;

    fn generate_args(min_islands: Option<usize>, max_islands: Option<usize>) -> GenerateArgs {
        GenerateArgs {
            seed: None,
            difficulty: Difficulty::Easy,
            min_islands,
            max_islands,
            tries: 1,
            output: None,
            solution: None,
            format: Format::Binary,
        }
    }

    #[test]
    fn test_generator_config_overrides() {
        let config = generator_config(&generate_args(None, None)).unwrap();
        assert_eq!(config.island_range(), Difficulty::Easy.island_range());

        let config = generator_config(&generate_args(Some(5), None)).unwrap();
        assert_eq!(config.island_range(), 5..=12);

        let config = generator_config(&generate_args(None, Some(9))).unwrap();
        assert_eq!(config.island_range(), 8..=9);
    }

    #[test]
    fn test_generator_config_rejects_bad_ranges() {
        assert!(matches!(
            generator_config(&generate_args(Some(1), None)),
            Err(CliError::InvalidIslandRange { min: 1, max: 12 })
        ));
        assert!(matches!(
            generator_config(&generate_args(Some(10), Some(9))),
            Err(CliError::InvalidIslandRange { min: 10, max: 9 })
        ));
    }

    #[test]
    fn test_hardest_of_is_deterministic() {
        let config = GeneratorConfig::for_difficulty(Difficulty::VeryEasy);
        let seed = PuzzleSeed::from_u64(7);
        let first = hardest_of(config, seed, 4);
        let second = hardest_of(config, seed, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_effort() {
        let puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        let searched = StrategyKind::Bfs.strategy().solve(&puzzle).stats;
        let deduced = StrategyKind::Smart.strategy().solve(&puzzle).stats;
        assert_eq!(search_effort(&deduced), (0, 0));
        assert!(search_effort(&searched) > search_effort(&deduced));
    }
}
