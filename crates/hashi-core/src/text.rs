//! Text grid rendering and parsing for [`Puzzle`].
//!
//! | char        | meaning                                   |
//! |-------------|-------------------------------------------|
//! | `.`         | empty cell                                |
//! | `0`-`9`     | island requiring that many bridges        |
//! | `-` / `=`   | single / double horizontal bridge         |
//! | `\|` / `H`  | single / double vertical bridge           |
//! | `?`         | island whose degree has no digit (output) |
//!
//! When parsing, `#` starts a comment, blank lines are skipped and each line is
//! trimmed.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Bridge, Island, Orientation, Position, Puzzle};

/// An error raised while parsing a text grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleError {
    /// The input holds no grid rows.
    #[display("puzzle grid is empty")]
    Empty,
    /// A character outside the grid alphabet.
    #[display("unexpected character {ch:?} at line {line}, column {column}")]
    UnexpectedChar {
        /// The character found.
        ch: char,
        /// 1-based source line.
        line: usize,
        /// 1-based column within the trimmed line.
        column: usize,
    },
    /// A bridge run that does not end at an island on both sides.
    #[display("bridge starting at line {line}, column {column} does not join two islands")]
    UnterminatedBridge {
        /// 1-based source line.
        line: usize,
        /// 1-based column within the trimmed line.
        column: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Island(u32),
    Bridge(Orientation, usize),
}

impl Cell {
    fn from_char(ch: char) -> Option<Self> {
        let cell = match ch {
            '.' => Self::Empty,
            '-' => Self::Bridge(Orientation::Horizontal, 1),
            '=' => Self::Bridge(Orientation::Horizontal, 2),
            '|' => Self::Bridge(Orientation::Vertical, 1),
            'H' => Self::Bridge(Orientation::Vertical, 2),
            _ => Self::Island(ch.to_digit(10)?),
        };
        Some(cell)
    }

    fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Island(required) => char::from_digit(required, 10).unwrap_or('?'),
            Self::Bridge(Orientation::Horizontal, 1) => '-',
            Self::Bridge(Orientation::Horizontal, _) => '=',
            Self::Bridge(Orientation::Vertical, 1) => '|',
            Self::Bridge(Orientation::Vertical, _) => 'H',
        }
    }
}

/// Largest bounding box, in cells, that the text grid renders.
pub const MAX_TEXT_CELLS: u64 = 1 << 24;

impl Puzzle {
    /// Returns the width and height of the islands' bounding box, in cells.
    ///
    /// Returns `(0, 0)` for an empty puzzle.
    ///
    /// ```
    /// use hashi_core::Puzzle;
    ///
    /// let puzzle: Puzzle = "..1-2\n....|\n....1".parse()?;
    /// assert_eq!(puzzle.text_size(), (3, 3));
    /// # Ok::<(), hashi_core::ParsePuzzleError>(())
    /// ```
    #[must_use]
    pub fn text_size(&self) -> (u64, u64) {
        let extent = |values: &mut dyn Iterator<Item = i32>| {
            let (min, max) = values.fold((i32::MAX, i32::MIN), |(min, max), v| {
                (min.min(v), max.max(v))
            });
            u64::try_from(i64::from(max) - i64::from(min) + 1).unwrap_or(0)
        };
        (
            extent(&mut self.islands().iter().map(|i| i.x())),
            extent(&mut self.islands().iter().map(|i| i.y())),
        )
    }

    /// Returns `true` if the text grid of this puzzle has at most
    /// [`MAX_TEXT_CELLS`] cells, so that [`Display`] can render it.
    #[must_use]
    pub fn fits_text(&self) -> bool {
        let (width, height) = self.text_size();
        width.saturating_mul(height) <= MAX_TEXT_CELLS
    }
}

impl Display for Puzzle {
    /// Renders the bounding box of the islands, one row per line.
    ///
    /// An empty puzzle renders as an empty string. A puzzle whose bounding box
    /// exceeds [`MAX_TEXT_CELLS`] fails with [`fmt::Error`]; check
    /// [`Puzzle::fits_text`] first.
    ///
    /// ```
    /// use hashi_core::Puzzle;
    ///
    /// let puzzle: Puzzle = "1-2.\n..|.\n..1.".parse()?;
    /// assert_eq!(puzzle.to_string(), "1-2\n..|\n..1\n");
    /// # Ok::<(), hashi_core::ParsePuzzleError>(())
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.fits_text() {
            return Err(fmt::Error);
        }
        let Some(min_x) = self.islands().iter().map(|i| i.x()).min() else {
            return Ok(());
        };
        let min_y = self.islands().iter().map(|i| i.y()).min().unwrap_or(0);
        let (width, height) = self.text_size();
        let width = usize::try_from(width).map_err(|_| fmt::Error)?;
        let height = usize::try_from(height).map_err(|_| fmt::Error)?;
        let index = |position: Position| {
            let x = usize::try_from(i64::from(position.x()) - i64::from(min_x)).ok()?;
            let y = usize::try_from(i64::from(position.y()) - i64::from(min_y)).ok()?;
            if x < width && y < height {
                Some(y * width + x)
            } else {
                None
            }
        };

        let mut cells = vec![Cell::Empty; width * height];
        for island in self.islands() {
            if let Some(i) = index(island.position()) {
                cells[i] = Cell::Island(island.required_bridges());
            }
        }
        for bridge in self.bridges() {
            let cell = Cell::Bridge(bridge.orientation(), self.multiplicity(*bridge));
            for position in bridge.interior() {
                if let Some(i) = index(position) {
                    cells[i] = cell;
                }
            }
        }

        for row in cells.chunks(width) {
            let line = row.iter().map(|cell| cell.to_char()).collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    /// Parses a text grid, rebuilding bridges from runs of bridge characters.
    ///
    /// ```
    /// use hashi_core::{Puzzle, PuzzleStatus};
    ///
    /// let puzzle: Puzzle = "
    ///     ## a doubled bridge
    ///     2=2
    /// "
    /// .parse()?;
    /// assert_eq!(puzzle.bridges().len(), 2);
    /// assert_eq!(puzzle.status(), PuzzleStatus::Solved);
    /// # Ok::<(), hashi_core::ParsePuzzleError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // (source line, cells)
        let mut rows = vec![];
        for (line_index, line) in s.lines().enumerate() {
            let line = line.split_once('#').map_or(line, |(grid, _)| grid).trim();
            if line.is_empty() {
                continue;
            }
            let cells = line
                .chars()
                .enumerate()
                .map(|(column, ch)| {
                    Cell::from_char(ch).ok_or(ParsePuzzleError::UnexpectedChar {
                        ch,
                        line: line_index + 1,
                        column: column + 1,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push((line_index + 1, cells));
        }
        if rows.is_empty() {
            return Err(ParsePuzzleError::Empty);
        }

        let width = rows.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
        let cell_at = |x: usize, y: usize| {
            rows.get(y)
                .and_then(|(_, cells)| cells.get(x).copied())
                .unwrap_or(Cell::Empty)
        };
        let position = |x: usize, y: usize| {
            Position::new(
                i32::try_from(x).unwrap_or(i32::MAX),
                i32::try_from(y).unwrap_or(i32::MAX),
            )
        };

        let mut puzzle = Puzzle::new();
        for y in 0..rows.len() {
            for x in 0..width {
                if let Cell::Island(required) = cell_at(x, y) {
                    puzzle.add_island(Island::new(position(x, y), required));
                }
            }
        }

        let mut bridges = vec![];
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let (outer, inner) = match orientation {
                Orientation::Horizontal => (rows.len(), width),
                Orientation::Vertical => (width, rows.len()),
            };
            let cell = |o: usize, i: usize| match orientation {
                Orientation::Horizontal => (i, o),
                Orientation::Vertical => (o, i),
            };

            for o in 0..outer {
                let mut i = 0;
                while i < inner {
                    let (x, y) = cell(o, i);
                    let Cell::Bridge(run_orientation, multiplicity) = cell_at(x, y) else {
                        i += 1;
                        continue;
                    };
                    if run_orientation != orientation {
                        i += 1;
                        continue;
                    }

                    let start = i;
                    while i < inner && cell_at(cell(o, i).0, cell(o, i).1) == cell_at(x, y) {
                        i += 1;
                    }

                    let unterminated = ParsePuzzleError::UnterminatedBridge {
                        line: rows[y].0,
                        column: x + 1,
                    };
                    let before = start.checked_sub(1).ok_or(unterminated)?;
                    let (bx, by) = cell(o, before);
                    let (ax, ay) = cell(o, i);
                    if !matches!(cell_at(bx, by), Cell::Island(_))
                        || i >= inner
                        || !matches!(cell_at(ax, ay), Cell::Island(_))
                    {
                        return Err(unterminated);
                    }
                    let bridge = Bridge::new(position(bx, by), position(ax, ay));
                    for _ in 0..multiplicity {
                        bridges.push(bridge);
                    }
                }
            }
        }

        for bridge in bridges {
            puzzle.add_bridge(bridge);
        }
        Ok(puzzle)
    }
}
