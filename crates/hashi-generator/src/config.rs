//! Generator tuning and difficulty presets.

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
    str::FromStr,
};

/// A named island-count range.
///
/// Variants are declared in increasing order of difficulty, so the derived
/// ordering sorts from easiest to hardest.
///
/// # Examples
///
/// ```
/// use hashi_generator::Difficulty;
///
/// assert_eq!(Difficulty::Hard.island_range(), 16..=32);
/// assert_eq!("very easy".parse::<Difficulty>()?, Difficulty::VeryEasy);
/// assert!(Difficulty::Easy < Difficulty::Normal);
/// # Ok::<(), hashi_generator::ParseDifficultyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// 4 to 8 islands.
    VeryEasy,
    /// 8 to 12 islands.
    Easy,
    /// 12 to 16 islands.
    Normal,
    /// 16 to 32 islands.
    Hard,
    /// 32 to 64 islands.
    VeryHard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 5] = [
        Self::VeryEasy,
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::VeryHard,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very easy",
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::VeryHard => "Very hard",
        }
    }

    /// Returns the inclusive range of island counts.
    #[must_use]
    pub const fn island_range(self) -> RangeInclusive<usize> {
        match self {
            Self::VeryEasy => 4..=8,
            Self::Easy => 8..=12,
            Self::Normal => 12..=16,
            Self::Hard => 16..=32,
            Self::VeryHard => 32..=64,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error raised when parsing an unknown [`Difficulty`] name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty: {input:?}")]
pub struct ParseDifficultyError {
    input: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parses a difficulty name, ignoring case and treating `-`, `_` and spaces
    /// alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |name: &str| {
            name.chars()
                .filter(|ch| !matches!(*ch, ' ' | '-' | '_'))
                .map(|ch| ch.to_ascii_lowercase())
                .collect::<String>()
        };
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|difficulty| normalize(difficulty.name()) == wanted)
            .ok_or_else(|| ParseDifficultyError {
                input: s.to_owned(),
            })
    }
}

/// Tunable parameters of the random generator.
///
/// Each round picks one of three operations with probability proportional to
/// its bias: subdividing a bridge, doubling a bridge, or attaching a new island.
/// Higher node-addition bias yields sparser, tree-like puzzles; higher
/// edge-addition bias yields more doubled bridges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Weight of the subdivision operation.
    pub subdivision_bias: f32,
    /// Weight of the bridge doubling operation.
    pub edge_addition_bias: f32,
    /// Weight of the island attachment operation.
    pub node_addition_bias: f32,
    /// Smallest distance between an island and a newly attached island.
    pub min_node_offset: i32,
    /// Largest distance between an island and a newly attached island.
    pub max_node_offset: i32,
    /// Smallest number of islands to generate.
    pub min_islands: usize,
    /// Largest number of islands to generate.
    pub max_islands: usize,
}

impl GeneratorConfig {
    /// Returns the default configuration with the island range of `difficulty`.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::default().with_island_range(difficulty.island_range())
    }

    /// Returns this configuration with a new island range.
    #[must_use]
    pub fn with_island_range(self, range: RangeInclusive<usize>) -> Self {
        Self {
            min_islands: *range.start(),
            max_islands: *range.end(),
            ..self
        }
    }

    /// Returns the effective island count range.
    ///
    /// A puzzle always has at least two islands, and an inverted range collapses
    /// to its lower bound.
    #[must_use]
    pub fn island_range(&self) -> RangeInclusive<usize> {
        let min = self.min_islands.max(2);
        min..=self.max_islands.max(min)
    }

    /// Returns the effective node offset range, at least one cell long.
    #[must_use]
    pub fn node_offset_range(&self) -> RangeInclusive<i32> {
        let min = self.min_node_offset.max(1);
        min..=self.max_node_offset.max(min)
    }

    pub(crate) fn bias_sum(&self) -> f32 {
        self.subdivision_bias + self.edge_addition_bias + self.node_addition_bias
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let range = Difficulty::Normal.island_range();
        Self {
            subdivision_bias: 0.5,
            edge_addition_bias: 0.75,
            node_addition_bias: 2.0,
            min_node_offset: 1,
            max_node_offset: 4,
            min_islands: *range.start(),
            max_islands: *range.end(),
        }
    }
}
