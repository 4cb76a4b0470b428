//! Reproducible generator seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds display and parse as 64 lowercase hexadecimal characters.
///
/// # Examples
///
/// ```
/// use hashi_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_u64(42);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>()?, seed);
/// # Ok::<(), hashi_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Number of hexadecimal characters in the text form.
    pub const HEX_LEN: usize = 64;

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Draws a seed from `rng`.
    #[must_use]
    pub fn from_rng<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self(rng.random())
    }

    /// Expands a 64-bit value into a seed.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self::from_rng(&mut Pcg64::seed_from_u64(value))
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    ///
    /// ```
    /// use hashi_generator::PuzzleSeed;
    ///
    /// assert_eq!(PuzzleSeed::from_phrase("hashi"), PuzzleSeed::from_phrase("hashi"));
    /// assert_ne!(PuzzleSeed::from_phrase("hashi"), PuzzleSeed::from_phrase("Hashi"));
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns a random number generator seeded with this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An error raised when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input does not have exactly [`PuzzleSeed::HEX_LEN`] characters.
    #[display("seed must have {} hex digits, found {len}", PuzzleSeed::HEX_LEN)]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The input contains a character that is not a hex digit.
    #[display("invalid hex digit {ch:?} at position {index}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// 0-based character index.
        index: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != Self::HEX_LEN {
            return Err(ParseSeedError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut digits = s.chars().enumerate().map(|(index, ch)| {
            ch.to_digit(16)
                .and_then(|digit| u8::try_from(digit).ok())
                .ok_or(ParseSeedError::InvalidDigit { ch, index })
        });
        for byte in &mut bytes {
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                return Err(ParseSeedError::InvalidLength { len });
            };
            *byte = (high? << 4) | low?;
        }
        Ok(Self(bytes))
    }
}
