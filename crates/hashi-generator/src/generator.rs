//! Randomized puzzle construction.

use hashi_core::{Bridge, Island, MAX_BRIDGE_MULTIPLICITY, Orientation, Position, Puzzle};
use log::{debug, trace};
use rand::{Rng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg64;

use crate::{GeneratorConfig, PuzzleSeed};

/// Probability of attaching a new island in the negative direction.
const NEGATION_BIAS: f32 = 0.5;

/// A source of puzzles.
pub trait PuzzleGenerator {
    /// Generates a new puzzle.
    ///
    /// If `keep_bridges` is `true` the puzzle is returned in its
    /// [`Solved`](hashi_core::PuzzleStatus::Solved) state; otherwise it has the
    /// same islands and no bridges.
    fn generate(&mut self, keep_bridges: bool) -> Puzzle;
}

/// A generated puzzle together with its solution and the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed that reproduces this puzzle with the same configuration.
    pub seed: PuzzleSeed,
    /// The islands without bridges.
    pub problem: Puzzle,
    /// The islands with the bridges they were generated from.
    pub solution: Puzzle,
}

/// Generates solvable puzzles by randomly growing a bridge graph.
///
/// Starting from two connected islands, each round either subdivides a bridge
/// with a new island, doubles a bridge, or attaches a new island to an existing
/// one. Rounds repeat until the target island count is reached; the required
/// bridge counts are then read off the grown graph, which is therefore always a
/// valid solution.
///
/// All randomness comes from the generator's own [`Pcg64`], so a generator
/// created from a given seed and configuration always yields the same sequence
/// of puzzles.
///
/// # Examples
///
/// ```
/// use hashi_core::PuzzleStatus;
/// use hashi_generator::{Difficulty, GeneratorConfig, PuzzleGenerator, PuzzleSeed, RandomPuzzleGenerator};
///
/// let config = GeneratorConfig::for_difficulty(Difficulty::Easy);
/// let mut generator = RandomPuzzleGenerator::new(PuzzleSeed::from_u64(3), config);
///
/// let solution = generator.generate(true);
/// assert_eq!(solution.status(), PuzzleStatus::Solved);
/// assert!(config.island_range().contains(&solution.islands().len()));
/// ```
#[derive(Debug, Clone)]
pub struct RandomPuzzleGenerator {
    config: GeneratorConfig,
    rng: Pcg64,
}

impl RandomPuzzleGenerator {
    /// Creates a generator driven by `seed`.
    #[must_use]
    pub fn new(seed: PuzzleSeed, config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: seed.rng(),
        }
    }

    /// Creates a generator with a random seed.
    #[must_use]
    pub fn from_random_seed(config: GeneratorConfig) -> Self {
        Self::new(PuzzleSeed::random(), config)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The result only depends on `config` and `seed`.
    #[must_use]
    pub fn generate_with_seed(config: GeneratorConfig, seed: PuzzleSeed) -> GeneratedPuzzle {
        let solution = Self::new(seed, config).generate(true);
        let problem = solution.without_bridges();
        GeneratedPuzzle {
            seed,
            problem,
            solution,
        }
    }

    /// Generates a puzzle and its solution.
    ///
    /// A fresh per-puzzle seed is drawn from this generator, so the returned
    /// [`GeneratedPuzzle::seed`] reproduces the puzzle through
    /// [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate_bundle(&mut self) -> GeneratedPuzzle {
        let seed = PuzzleSeed::from_rng(&mut self.rng);
        Self::generate_with_seed(self.config, seed)
    }
}

impl PuzzleGenerator for RandomPuzzleGenerator {
    fn generate(&mut self, keep_bridges: bool) -> Puzzle {
        let target = self.rng.random_range(self.config.island_range());
        debug!("generating puzzle with {target} islands");

        let mut growth = Growth::new(&self.config, &mut self.rng);
        let mut rounds = 0_usize;
        while growth.puzzle.islands().len() < target {
            growth.next_round();
            rounds += 1;
        }

        let puzzle = growth.finish(keep_bridges);
        debug!(
            "generated {}x{} puzzle with {} islands in {rounds} rounds",
            puzzle.width(),
            puzzle.height(),
            puzzle.islands().len(),
        );
        puzzle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Subdivide,
    Double,
    Attach,
}

/// The graph being grown, with its unnormalized bounds.
#[derive(Debug)]
struct Growth<'a> {
    config: &'a GeneratorConfig,
    rng: &'a mut Pcg64,
    puzzle: Puzzle,
    min: Position,
    max: Position,
}

impl<'a> Growth<'a> {
    fn new(config: &'a GeneratorConfig, rng: &'a mut Pcg64) -> Self {
        let origin = Position::new(0, 0);
        let mut growth = Self {
            config,
            rng,
            puzzle: Puzzle::from_islands([Island::new(origin, 0)]),
            min: origin,
            max: origin,
        };
        while growth.puzzle.islands().len() < 2 {
            growth.attach();
        }
        growth
    }

    fn next_round(&mut self) {
        match self.choose_operation() {
            Operation::Subdivide => self.subdivide(),
            Operation::Double => self.double(),
            Operation::Attach => self.attach(),
        }
    }

    fn choose_operation(&mut self) -> Operation {
        let subdivide = if self.can_subdivide() {
            self.config.subdivision_bias.max(0.0)
        } else {
            0.0
        };
        let double = self.config.edge_addition_bias.max(0.0);
        let attach = self.config.node_addition_bias.max(0.0);
        // Only subdivision and attachment add islands.
        if subdivide + attach <= 0.0 {
            return Operation::Attach;
        }

        let value = self.rng.random::<f32>() * (subdivide + double + attach);
        if value < subdivide {
            Operation::Subdivide
        } else if value < subdivide + double {
            Operation::Double
        } else {
            Operation::Attach
        }
    }

    /// Returns `true` if some bridge has a free cell to place an island on.
    fn can_subdivide(&self) -> bool {
        self.puzzle
            .bridges()
            .iter()
            .any(|bridge| bridge.interior().next().is_some())
    }

    /// Splits a random bridge (and its duplicate) with a new island.
    fn subdivide(&mut self) {
        let Some(&bridge) = self.puzzle.bridges().choose(&mut *self.rng) else {
            return;
        };
        let interior = bridge.interior().collect::<Vec<_>>();
        let Some(&position) = interior.choose(&mut *self.rng) else {
            return;
        };

        let multiplicity = self.puzzle.delete_all_bridges(bridge);
        self.puzzle.add_island(Island::new(position, 0));
        for _ in 0..multiplicity {
            self.puzzle.add_bridge(Bridge::new(bridge.first(), position));
            self.puzzle.add_bridge(Bridge::new(position, bridge.second()));
        }
        trace!("subdivided {bridge} at {position}");
    }

    /// Doubles a random bridge unless it already is.
    fn double(&mut self) {
        let Some(&bridge) = self.puzzle.bridges().choose(&mut *self.rng) else {
            return;
        };
        if self.puzzle.multiplicity(bridge) < MAX_BRIDGE_MULTIPLICITY {
            self.puzzle.add_bridge(bridge);
            trace!("doubled {bridge}");
        }
    }

    /// Attaches a new island to a random island, if the spot is free.
    fn attach(&mut self) {
        let Some(&island) = self.puzzle.islands().choose(&mut *self.rng) else {
            return;
        };
        let position = self.random_offset(island.position());
        let bridge = Bridge::new(island.position(), position);

        let blocked = self.puzzle.island_at(position).is_some()
            || self
                .puzzle
                .bridges()
                .iter()
                .any(|existing| existing.crosses(position) || existing.intersects(bridge))
            || self
                .puzzle
                .islands()
                .iter()
                .any(|other| bridge.crosses(other.position()));
        if blocked {
            return;
        }

        self.puzzle.add_island(Island::new(position, 0));
        self.puzzle.add_bridge(bridge);
        self.min = Position::new(self.min.x().min(position.x()), self.min.y().min(position.y()));
        self.max = Position::new(self.max.x().max(position.x()), self.max.y().max(position.y()));
        trace!("attached {position} to {}", island.position());
    }

    fn random_offset(&mut self, from: Position) -> Position {
        let mut offset = self.rng.random_range(self.config.node_offset_range());
        let orientation = if self.rng.random::<f32>() < self.horizontal_bias() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if self.rng.random::<f32>() < NEGATION_BIAS {
            offset = -offset;
        }
        match orientation {
            Orientation::Horizontal => from.offset(offset, 0),
            Orientation::Vertical => from.offset(0, offset),
        }
    }

    /// Probability of attaching horizontally, leaning toward the shorter axis so
    /// the puzzle stays roughly square.
    #[expect(clippy::cast_precision_loss)]
    fn horizontal_bias(&self) -> f32 {
        let width = (self.max.x() - self.min.x()) as f32;
        let height = (self.max.y() - self.min.y()) as f32;
        if width > height {
            0.5 - (width - height) / width * 0.5
        } else if width < height {
            0.5 + (height - width) / height * 0.5
        } else {
            0.5
        }
    }

    /// Sets the required bridge counts and shifts the puzzle to the origin.
    fn finish(self, keep_bridges: bool) -> Puzzle {
        let islands = self.puzzle.islands();
        let min_x = islands.iter().map(|island| island.x()).min().unwrap_or(0);
        let min_y = islands.iter().map(|island| island.y()).min().unwrap_or(0);

        let degrees = self.puzzle.degrees();
        let mut puzzle = Puzzle::from_islands(islands.iter().zip(degrees).map(|(island, degree)| {
            Island::new(island.position().offset(-min_x, -min_y), degree)
        }));
        if keep_bridges {
            for bridge in self.puzzle.bridges() {
                puzzle.add_bridge(bridge.offset(-min_x, -min_y));
            }
        }
        puzzle
    }
}

#[cfg(test)]
mod tests {
    use hashi_core::PuzzleStatus;
    use proptest::prelude::*;

    use super::*;
    use crate::Difficulty;

    fn generator(seed: u64, difficulty: Difficulty) -> RandomPuzzleGenerator {
        RandomPuzzleGenerator::new(
            PuzzleSeed::from_u64(seed),
            GeneratorConfig::for_difficulty(difficulty),
        )
    }

    fn assert_well_formed(puzzle: &Puzzle, config: &GeneratorConfig) {
        assert_eq!(puzzle.check_invariants(), Ok(()));
        assert!(config.island_range().contains(&puzzle.islands().len()));
        for island in puzzle.islands() {
            assert!(island.x() >= 0 && island.y() >= 0, "{island}");
            assert!((1..=8).contains(&island.required_bridges()), "{island}");
        }
        assert!(puzzle.islands().iter().any(|island| island.x() == 0));
        assert!(puzzle.islands().iter().any(|island| island.y() == 0));
    }

    #[test]
    fn test_generate_with_bridges_is_solved() {
        for difficulty in [Difficulty::VeryEasy, Difficulty::Normal, Difficulty::Hard] {
            for seed in 0..10 {
                let mut generator = generator(seed, difficulty);
                let puzzle = generator.generate(true);
                assert_well_formed(&puzzle, generator.config());
                assert_eq!(puzzle.status(), PuzzleStatus::Solved, "seed {seed}\n{puzzle}");
            }
        }
    }

    #[test]
    fn test_generate_without_bridges_is_untouched() {
        let puzzle = generator(1, Difficulty::Easy).generate(false);
        assert!(puzzle.bridges().is_empty());
        assert_eq!(puzzle.status(), PuzzleStatus::Untouched);
    }

    #[test]
    fn test_reset_copy_is_untouched() {
        let solution = generator(2, Difficulty::Normal).generate(true);
        let mut copy = solution.copy();
        copy.reset();
        assert_eq!(copy.status(), PuzzleStatus::Untouched);
        assert_eq!(solution.status(), PuzzleStatus::Solved);
    }

    #[test]
    fn test_same_seed_same_puzzles() {
        let mut a = generator(5, Difficulty::Normal);
        let mut b = generator(5, Difficulty::Normal);
        for _ in 0..3 {
            assert_eq!(a.generate(true), b.generate(true));
        }
    }

    #[test]
    fn test_keep_bridges_only_changes_bridges() {
        let with = generator(9, Difficulty::Normal).generate(true);
        let without = generator(9, Difficulty::Normal).generate(false);
        assert_eq!(with.islands(), without.islands());
        assert!(without.bridges().is_empty());
    }

    #[test]
    fn test_different_seeds_differ() {
        let puzzles = (0..5)
            .map(|seed| generator(seed, Difficulty::Normal).generate(true))
            .collect::<Vec<_>>();
        assert!(puzzles.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_generate_bundle() {
        let config = GeneratorConfig::for_difficulty(Difficulty::Easy);
        let mut generator = RandomPuzzleGenerator::new(PuzzleSeed::from_u64(11), config);
        let bundle = generator.generate_bundle();

        assert_eq!(bundle.solution.status(), PuzzleStatus::Solved);
        assert_eq!(bundle.problem.status(), PuzzleStatus::Untouched);
        assert_eq!(bundle.problem.islands(), bundle.solution.islands());
        assert_eq!(
            RandomPuzzleGenerator::generate_with_seed(config, bundle.seed),
            bundle
        );

        let next = generator.generate_bundle();
        assert_ne!(next.seed, bundle.seed);
    }

    #[test]
    fn test_edge_addition_only_config_terminates() {
        let config = GeneratorConfig {
            subdivision_bias: 0.0,
            node_addition_bias: 0.0,
            ..GeneratorConfig::for_difficulty(Difficulty::VeryEasy)
        };
        let puzzle = RandomPuzzleGenerator::new(PuzzleSeed::from_u64(0), config).generate(true);
        assert_eq!(puzzle.status(), PuzzleStatus::Solved);
    }

    #[test]
    fn test_subdivision_without_attachment_terminates() {
        let config = GeneratorConfig {
            node_addition_bias: 0.0,
            ..GeneratorConfig::for_difficulty(Difficulty::Normal)
        };
        for seed in 0..4 {
            let puzzle =
                RandomPuzzleGenerator::new(PuzzleSeed::from_u64(seed), config).generate(true);
            assert!(config.island_range().contains(&puzzle.islands().len()));
            assert_eq!(puzzle.status(), PuzzleStatus::Solved);
        }
    }

    #[test]
    fn test_horizontal_bias_prefers_shorter_axis() {
        let config = GeneratorConfig::default();
        let mut rng = PuzzleSeed::from_u64(0).rng();
        let mut growth = Growth::new(&config, &mut rng);

        growth.min = Position::new(0, 0);
        growth.max = Position::new(4, 4);
        assert!((growth.horizontal_bias() - 0.5).abs() < f32::EPSILON);

        growth.max = Position::new(8, 4);
        assert!(growth.horizontal_bias() < 0.5);

        growth.max = Position::new(2, 8);
        assert!(growth.horizontal_bias() > 0.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_generated_puzzles_are_solved(seed in any::<u64>()) {
            let mut generator = generator(seed, Difficulty::Easy);
            let puzzle = generator.generate(true);
            assert_well_formed(&puzzle, generator.config());
            prop_assert_eq!(puzzle.status(), PuzzleStatus::Solved);
        }
    }
}
