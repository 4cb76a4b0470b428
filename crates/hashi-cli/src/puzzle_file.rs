//! Reading and writing puzzle files.

use std::{fs, path::Path};

use hashi_core::Puzzle;

use crate::{cli::Format, error::CliError};

pub(crate) fn load(path: &Path, format: Format) -> Result<Puzzle, CliError> {
    let puzzle = match format {
        Format::Binary => {
            let bytes = fs::read(path).map_err(|source| CliError::Read {
                path: path.to_owned(),
                source,
            })?;
            Puzzle::from_bytes(&bytes).map_err(|source| CliError::Load {
                path: path.to_owned(),
                source,
            })?
        }
        Format::Text => {
            let text = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_owned(),
                source,
            })?;
            text.parse::<Puzzle>().map_err(|source| CliError::Parse {
                path: path.to_owned(),
                source,
            })?
        }
    };
    log::debug!(
        "loaded {} islands and {} bridges from {}",
        puzzle.islands().len(),
        puzzle.bridges().len(),
        path.display()
    );
    Ok(puzzle)
}

pub(crate) fn save(path: &Path, puzzle: &Puzzle, format: Format) -> Result<(), CliError> {
    let write_error = |source| CliError::Write {
        path: path.to_owned(),
        source,
    };
    let bytes = match format {
        Format::Binary => puzzle.to_bytes().map_err(write_error)?,
        Format::Text if !puzzle.fits_text() => {
            let (width, height) = puzzle.text_size();
            return Err(CliError::TooLargeForText {
                path: path.to_owned(),
                width,
                height,
            });
        }
        Format::Text => puzzle.to_string().into_bytes(),
    };
    fs::write(path, bytes).map_err(write_error)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use hashi_core::Island;

    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("hashi-cli-{}-{name}", process::id()))
    }

    #[test]
    fn test_save_and_load() {
        let puzzle: Puzzle = "2-1\n|..\n1..".parse().unwrap();
        for (format, name) in [(Format::Binary, "binary"), (Format::Text, "text")] {
            let path = temp_path(name);
            save(&path, &puzzle, format).unwrap();
            let loaded = load(&path, format).unwrap();
            fs::remove_file(&path).unwrap();
            assert_eq!(loaded, puzzle);
        }
    }

    #[test]
    fn test_save_huge_grid_as_text() {
        let puzzle = Puzzle::from_islands([Island::at(0, 0, 1), Island::at(0, 2_000_000_000, 1)]);
        let path = temp_path("huge");
        let err = save(&path, &puzzle, Format::Text).unwrap_err();
        assert!(matches!(
            err,
            CliError::TooLargeForText {
                width: 1,
                height: 2_000_000_001,
                ..
            }
        ));
        assert!(!path.exists());

        save(&path, &puzzle, Format::Binary).unwrap();
        let loaded = load(&path, Format::Binary).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, puzzle);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_path("missing");
        let err = load(&path, Format::Binary).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_text() {
        let path = temp_path("malformed");
        fs::write(&path, "1-.").unwrap();
        let err = load(&path, Format::Text).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, CliError::Parse { .. }));
    }
}
