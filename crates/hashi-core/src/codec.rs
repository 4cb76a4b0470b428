//! Binary puzzle format.
//!
//! Every value is a big-endian 32-bit signed integer:
//!
//! ```text
//! Puzzle := IslandCount Island* BridgeCount Bridge*
//! Island := x y requiredBridges
//! Bridge := x1 y1 x2 y2
//! ```
//!
//! Bridge endpoints need not be in canonical order. On read, each endpoint is
//! resolved against the islands already loaded, and the resulting puzzle is
//! checked against every [`Puzzle`] invariant.

use std::io::{self, Read, Write};

use crate::{Bridge, InvariantError, Island, Position, Puzzle};

/// An error raised while reading a puzzle from the binary format.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The underlying reader failed.
    #[display("failed to read puzzle: {_0}")]
    #[from]
    Io(io::Error),
    /// The input ended in the middle of a value.
    #[display("puzzle data is truncated")]
    Truncated,
    /// An island or bridge count is negative.
    #[display("{what} count is negative: {count}")]
    NegativeCount {
        /// Which count was read (`"island"` or `"bridge"`).
        what: &'static str,
        /// The value read.
        count: i32,
    },
    /// An island requires a negative number of bridges.
    #[display("island at ({x},{y}) requires a negative number of bridges: {value}")]
    NegativeRequiredBridges {
        /// The island x coordinate.
        x: i32,
        /// The island y coordinate.
        y: i32,
        /// The value read.
        value: i32,
    },
    /// Two islands share a position.
    #[display("duplicate island at ({x},{y})")]
    DuplicateIsland {
        /// The shared x coordinate.
        x: i32,
        /// The shared y coordinate.
        y: i32,
    },
    /// A bridge ends where there is no island.
    #[display("bridge endpoint ({x},{y}) has no island")]
    DanglingEndpoint {
        /// The endpoint x coordinate.
        x: i32,
        /// The endpoint y coordinate.
        y: i32,
    },
    /// A bridge is diagonal or a loop.
    #[display("bridge {bridge} is not straight")]
    MalformedBridge {
        /// The offending bridge.
        bridge: Bridge,
    },
    /// The bridges read violate a puzzle invariant.
    #[display("invalid puzzle: {_0}")]
    #[from]
    Invalid(InvariantError),
    /// Extra bytes follow the puzzle.
    #[display("{count} unexpected trailing bytes")]
    TrailingBytes {
        /// Number of extra bytes.
        count: usize,
    },
}

/// Writes `puzzle` in the binary format.
///
/// # Errors
///
/// Returns an error if the writer fails, or if a count or degree does not fit in
/// a signed 32-bit integer.
pub fn write_puzzle<W>(writer: &mut W, puzzle: &Puzzle) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write_count(writer, puzzle.islands().len())?;
    for island in puzzle.islands() {
        write_i32(writer, island.x())?;
        write_i32(writer, island.y())?;
        let required = i32::try_from(island.required_bridges()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("required bridge count of {island} does not fit in 32 bits"),
            )
        })?;
        write_i32(writer, required)?;
    }

    write_count(writer, puzzle.bridges().len())?;
    for bridge in puzzle.bridges() {
        for position in [bridge.first(), bridge.second()] {
            write_i32(writer, position.x())?;
            write_i32(writer, position.y())?;
        }
    }
    Ok(())
}

/// Reads a puzzle in the binary format.
///
/// Bytes after the puzzle are left unread.
///
/// # Errors
///
/// Returns a [`LoadError`] if the input is truncated or malformed, or if the
/// puzzle it describes breaks an invariant.
pub fn read_puzzle<R>(reader: &mut R) -> Result<Puzzle, LoadError>
where
    R: Read + ?Sized,
{
    let mut puzzle = Puzzle::new();

    let island_count = read_count(reader, "island")?;
    for _ in 0..island_count {
        let x = read_i32(reader)?;
        let y = read_i32(reader)?;
        let value = read_i32(reader)?;
        let required = u32::try_from(value)
            .map_err(|_| LoadError::NegativeRequiredBridges { x, y, value })?;
        if !puzzle.add_island(Island::at(x, y, required)) {
            return Err(LoadError::DuplicateIsland { x, y });
        }
    }

    let bridge_count = read_count(reader, "bridge")?;
    for _ in 0..bridge_count {
        let mut endpoints = [Position::new(0, 0); 2];
        for endpoint in &mut endpoints {
            let x = read_i32(reader)?;
            let y = read_i32(reader)?;
            *endpoint = puzzle
                .island_at(Position::new(x, y))
                .ok_or(LoadError::DanglingEndpoint { x, y })?
                .position();
        }
        let bridge = Bridge::new(endpoints[0], endpoints[1]);
        if !bridge.is_straight() {
            return Err(LoadError::MalformedBridge { bridge });
        }
        puzzle.add_bridge(bridge);
    }

    puzzle.check_invariants()?;
    Ok(puzzle)
}

impl Puzzle {
    /// Encodes this puzzle in the binary format.
    ///
    /// # Errors
    ///
    /// Returns an error if a count or degree does not fit in a signed 32-bit
    /// integer.
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut bytes = vec![];
        write_puzzle(&mut bytes, self)?;
        Ok(bytes)
    }

    /// Decodes a puzzle from the binary format.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the data is malformed or if bytes remain after
    /// the puzzle.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashi_core::{Bridge, Island, Puzzle};
    ///
    /// let a = Island::at(0, 0, 2);
    /// let b = Island::at(0, 2, 2);
    /// let mut puzzle = Puzzle::from_islands([a, b]);
    /// puzzle.place_bridge(Bridge::between(a, b));
    /// puzzle.place_bridge(Bridge::between(a, b));
    ///
    /// let bytes = puzzle.to_bytes()?;
    /// assert_eq!(Puzzle::from_bytes(&bytes)?, puzzle);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let mut rest = bytes;
        let puzzle = read_puzzle(&mut rest)?;
        if !rest.is_empty() {
            return Err(LoadError::TrailingBytes { count: rest.len() });
        }
        Ok(puzzle)
    }
}

fn write_i32<W>(writer: &mut W, value: i32) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writer.write_all(&value.to_be_bytes())
}

fn write_count<W>(writer: &mut W, count: usize) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let count = i32::try_from(count).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("count {count} does not fit in 32 bits"),
        )
    })?;
    write_i32(writer, count)
}

fn read_i32<R>(reader: &mut R) -> Result<i32, LoadError>
where
    R: Read + ?Sized,
{
    let mut buf = [0; 4];
    reader.read_exact(&mut buf).map_err(|err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            LoadError::Truncated
        } else {
            LoadError::Io(err)
        }
    })?;
    Ok(i32::from_be_bytes(buf))
}

fn read_count<R>(reader: &mut R, what: &'static str) -> Result<u32, LoadError>
where
    R: Read + ?Sized,
{
    let count = read_i32(reader)?;
    u32::try_from(count).map_err(|_| LoadError::NegativeCount { what, count })
}
