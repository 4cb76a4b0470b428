use hashi_core::{Bridge, Island, MAX_BRIDGE_MULTIPLICITY, Puzzle};
use tinyvec::TinyVec;

use crate::deduction::Forced;

/// Solver state for deduction-based solving.
///
/// This type wraps a [`Puzzle`] together with the bridges that may still be
/// placed on it, and caches what deduction rules query over and over: the
/// remaining degree of every island, the capacity of every candidate and the
/// candidates incident to every island.
///
/// The capacity of a candidate is the number of further copies it could carry:
/// the free multiplicity of the pair, bounded by the remaining degree of both
/// endpoints. Capacities ignore conflicts between candidates, so they never
/// underestimate what a solution can place.
///
/// # Examples
///
/// ```
/// use hashi_core::Puzzle;
/// use hashi_solver::DeductionGrid;
///
/// let puzzle: Puzzle = "2.2\n...\n1.1".parse()?;
/// let grid = DeductionGrid::new(puzzle);
/// assert_eq!(grid.candidates().len(), 4);
/// assert_eq!(grid.remaining(0), Some(2));
/// assert_eq!(grid.total_capacity(0), 3);
/// assert!(!grid.is_dead());
/// # Ok::<(), hashi_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DeductionGrid {
    puzzle: Puzzle,
    candidates: Vec<Bridge>,
    /// Remaining degree per island index; `None` if overfilled.
    remaining: Vec<Option<u32>>,
    /// Capacity per candidate index.
    capacities: Vec<u32>,
    /// Candidate indices per island index.
    incident: Vec<TinyVec<[usize; 4]>>,
}

impl From<Puzzle> for DeductionGrid {
    fn from(puzzle: Puzzle) -> Self {
        Self::new(puzzle)
    }
}

impl DeductionGrid {
    /// Creates a grid whose candidates are all bridges placeable on `puzzle`.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let candidates = puzzle.possible_bridges();
        Self::with_candidates(puzzle, &candidates)
    }

    /// Creates a grid from candidates computed for `puzzle` or one of its
    /// ancestors.
    ///
    /// Candidates that can no longer be placed are dropped.
    #[must_use]
    pub fn with_candidates(puzzle: Puzzle, candidates: &[Bridge]) -> Self {
        let mut grid = Self {
            puzzle,
            candidates: candidates.to_vec(),
            remaining: vec![],
            capacities: vec![],
            incident: vec![],
        };
        grid.refresh();
        grid
    }

    fn refresh(&mut self) {
        let puzzle = &self.puzzle;
        self.candidates = puzzle.possible_bridges_from(&self.candidates);
        self.remaining = puzzle
            .degrees()
            .into_iter()
            .zip(puzzle.islands())
            .map(|(degree, island)| island.required_bridges().checked_sub(degree))
            .collect();

        self.incident = vec![TinyVec::new(); puzzle.islands().len()];
        self.capacities = Vec::with_capacity(self.candidates.len());
        for (index, bridge) in self.candidates.iter().enumerate() {
            let free = MAX_BRIDGE_MULTIPLICITY.saturating_sub(puzzle.multiplicity(*bridge));
            let mut capacity = u32::try_from(free).unwrap_or(u32::MAX);
            for position in [bridge.first(), bridge.second()] {
                if let Some(i) = puzzle.island_index(position) {
                    capacity = capacity.min(self.remaining[i].unwrap_or(0));
                    self.incident[i].push(index);
                }
            }
            self.capacities.push(capacity);
        }
    }

    /// Returns the underlying puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Consumes the grid and returns the underlying puzzle.
    #[must_use]
    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }

    /// Returns the bridges that can still be placed, in sorted order.
    #[must_use]
    pub fn candidates(&self) -> &[Bridge] {
        &self.candidates
    }

    /// Returns how many more bridges the island at `index` needs, or `None` if it
    /// has too many.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn remaining(&self, index: usize) -> Option<u32> {
        self.remaining[index]
    }

    /// Returns the capacity of the candidate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn capacity(&self, index: usize) -> u32 {
        self.capacities[index]
    }

    /// Returns the indices of the candidates touching the island at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn incident(&self, index: usize) -> &[usize] {
        &self.incident[index]
    }

    /// Returns the islands reachable from the island at `index` through a
    /// candidate, paired with the candidate index.
    ///
    /// Every neighbour appears once, since candidates are distinct pairs.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn candidate_neighbors(&self, index: usize) -> impl Iterator<Item = (usize, Island)> {
        let position = self.puzzle.islands()[index].position();
        self.incident[index].iter().filter_map(move |&candidate| {
            let other = self.candidates[candidate].other_endpoint(position);
            self.puzzle
                .island_at(other)
                .map(|island| (candidate, island))
        })
    }

    /// Returns the summed capacity of the candidates touching the island at
    /// `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn total_capacity(&self, index: usize) -> u32 {
        self.incident[index]
            .iter()
            .map(|&candidate| self.capacities[candidate])
            .sum()
    }

    /// Returns `true` if some island is overfilled or can no longer reach its
    /// required degree.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.remaining
            .iter()
            .enumerate()
            .any(|(index, remaining)| match remaining {
                None => true,
                Some(remaining) => *remaining > self.total_capacity(index),
            })
    }

    /// Returns `true` if the underlying puzzle is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.puzzle.status().is_solved()
    }

    /// Places the bridges of a forced move.
    ///
    /// Returns `false` if some bridge cannot be placed legally or would overfill
    /// an endpoint; the grid must then be considered dead, as bridges placed
    /// before the failing one are kept.
    pub fn apply(&mut self, forced: &Forced) -> bool {
        for &bridge in forced.bridges() {
            let fits = [bridge.first(), bridge.second()].into_iter().all(|position| {
                self.puzzle
                    .remaining_bridges(position)
                    .is_some_and(|remaining| remaining > 0)
            });
            if !fits || !self.puzzle.place_bridge(bridge) {
                return false;
            }
        }
        self.refresh();
        true
    }
}
