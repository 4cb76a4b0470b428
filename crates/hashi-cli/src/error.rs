use std::{io, path::PathBuf};

use hashi_core::{LoadError, ParsePuzzleError};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[display("failed to load {}: {source}", path.display())]
    Load { path: PathBuf, source: LoadError },
    #[display("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ParsePuzzleError,
    },
    #[display("{} is a {width}x{height} grid, too large for the text format", path.display())]
    TooLargeForText { path: PathBuf, width: u64, height: u64 },
    #[display("{} has no solution", path.display())]
    NoSolution { path: PathBuf },
    #[display("invalid island range: {min} to {max}")]
    InvalidIslandRange { min: usize, max: usize },
    #[display("--tries must be at least 1")]
    NoTries,
}
