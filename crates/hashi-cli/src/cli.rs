use std::{convert::Infallible, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use hashi_generator::{Difficulty, PuzzleSeed};
use hashi_solver::StrategyKind;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Generate a new puzzle.
    Generate(GenerateArgs),
    /// Solve a puzzle file.
    Solve(SolveArgs),
    /// Print a puzzle file.
    Show(ShowArgs),
}

/// On-disk puzzle encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum Format {
    /// Big-endian binary format.
    #[default]
    Binary,
    /// Character grid.
    Text,
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    /// Seed as 64 hex digits, or any phrase to derive one from.
    #[arg(long, value_name = "SEED", value_parser = parse_seed)]
    pub(crate) seed: Option<PuzzleSeed>,

    /// Difficulty preset selecting the island range.
    #[arg(short, long, value_name = "DIFFICULTY", default_value = "normal")]
    pub(crate) difficulty: Difficulty,

    /// Override the smallest island count of the difficulty preset.
    #[arg(long, value_name = "COUNT")]
    pub(crate) min_islands: Option<usize>,

    /// Override the largest island count of the difficulty preset.
    #[arg(long, value_name = "COUNT")]
    pub(crate) max_islands: Option<usize>,

    /// Generate this many puzzles and keep the hardest one.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    pub(crate) tries: usize,

    /// Write the problem to this file.
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Write the solution to this file.
    #[arg(long, value_name = "PATH")]
    pub(crate) solution: Option<PathBuf>,

    /// Encoding of the written files.
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: Format,
}

#[derive(Debug, Args)]
pub(crate) struct SolveArgs {
    /// Puzzle file to solve.
    pub(crate) input: PathBuf,

    /// Search strategy.
    #[arg(short, long, value_name = "STRATEGY", default_value = "smart")]
    pub(crate) strategy: StrategyKind,

    /// Write the solved puzzle to this file.
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Encoding of the input and output files.
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: Format,
}

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Puzzle file to print.
    pub(crate) input: PathBuf,

    /// Encoding of the input file.
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: Format,
}

fn parse_seed(s: &str) -> Result<PuzzleSeed, Infallible> {
    Ok(s.parse().unwrap_or_else(|_| PuzzleSeed::from_phrase(s)))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "hashi",
            "generate",
            "--seed",
            "hello",
            "--difficulty",
            "very-easy",
            "--tries",
            "4",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected the generate command");
        };
        assert_eq!(args.seed, Some(PuzzleSeed::from_phrase("hello")));
        assert_eq!(args.difficulty, Difficulty::VeryEasy);
        assert_eq!(args.tries, 4);
        assert_eq!(args.format, Format::Binary);
    }

    #[test]
    fn test_parse_hex_seed() {
        let hex = "00".repeat(32);
        assert_eq!(parse_seed(&hex), Ok(PuzzleSeed::from_bytes([0; 32])));
    }

    #[test]
    fn test_parse_solve() {
        let cli = Cli::try_parse_from([
            "hashi", "solve", "a.hashi", "--strategy", "bfs", "--format", "text",
        ])
        .unwrap();
        let Command::Solve(args) = cli.command else {
            panic!("expected the solve command");
        };
        assert_eq!(args.input, PathBuf::from("a.hashi"));
        assert_eq!(args.strategy, StrategyKind::Bfs);
        assert_eq!(args.format, Format::Text);
    }

    #[test]
    fn test_unknown_strategy() {
        let result = Cli::try_parse_from(["hashi", "solve", "a.hashi", "--strategy", "random"]);
        assert!(result.is_err());
    }
}
