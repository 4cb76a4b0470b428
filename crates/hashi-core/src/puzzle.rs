//! The puzzle graph and its placement rules.

use std::{collections::VecDeque, sync::Arc};

use crate::{
    Bridge, Island, Position,
    sorted::{count_sorted, insert_sorted, remove_sorted},
};

/// Maximum number of equal bridges allowed between the same pair of islands.
pub const MAX_BRIDGE_MULTIPLICITY: usize = 2;

/// The derived state of a [`Puzzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum PuzzleStatus {
    /// No bridge has been placed.
    #[display("untouched")]
    Untouched,
    /// Some bridges are placed, but the puzzle is not solved.
    #[display("unsolved")]
    Unsolved,
    /// Every island has exactly its required number of bridges and all islands
    /// form a single connected component.
    #[display("solved")]
    Solved,
}

/// A violated [`Puzzle`] invariant, reported by [`Puzzle::check_invariants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvariantError {
    /// A bridge ends at a position without an island.
    #[display("bridge {bridge} ends at {position}, which has no island")]
    MissingEndpoint {
        /// The offending bridge.
        bridge: Bridge,
        /// The endpoint without an island.
        position: Position,
    },
    /// A bridge is diagonal or a loop.
    #[display("bridge {bridge} is not straight")]
    NotStraight {
        /// The offending bridge.
        bridge: Bridge,
    },
    /// A bridge occurs more than [`MAX_BRIDGE_MULTIPLICITY`] times.
    #[display("bridge {bridge} occurs {count} times")]
    TooManyBridges {
        /// The offending bridge.
        bridge: Bridge,
        /// How often it occurs.
        count: usize,
    },
    /// A bridge passes over an island.
    #[display("bridge {bridge} crosses the island at {position}")]
    CrossesIsland {
        /// The offending bridge.
        bridge: Bridge,
        /// The island it passes over.
        position: Position,
    },
    /// Two different bridges overlap.
    #[display("bridges {first} and {second} intersect")]
    Intersects {
        /// One of the overlapping bridges.
        first: Bridge,
        /// The other overlapping bridge.
        second: Bridge,
    },
}

/// A bridge puzzle: a set of islands and the bridges currently placed between them.
///
/// Islands are kept sorted and unique by position; bridges are kept sorted, with a
/// doubled bridge stored as two equal entries. Because both sequences are always
/// sorted, the derived equality and ordering compare puzzles by their canonical
/// form, which solvers use for state deduplication.
///
/// # Copies
///
/// The island list is stored behind an [`Arc`] and shared between copies:
///
/// - [`fast_copy`](Self::fast_copy) (and [`Clone`]) shares the island list and
///   clones only the bridge list. Solvers use it for every search state.
/// - [`copy`](Self::copy) allocates a new island list as well.
///
/// Mutating the islands of a shared puzzle (via [`add_island`](Self::add_island))
/// first detaches it from the other copies, so a fast copy never observes island
/// changes made through another copy.
///
/// # Examples
///
/// ```
/// use hashi_core::{Bridge, Island, Puzzle, PuzzleStatus};
///
/// let a = Island::at(0, 0, 1);
/// let b = Island::at(3, 0, 1);
/// let mut puzzle = Puzzle::from_islands([a, b]);
/// assert_eq!(puzzle.status(), PuzzleStatus::Untouched);
///
/// assert!(puzzle.place_bridge(Bridge::between(a, b)));
/// assert_eq!(puzzle.status(), PuzzleStatus::Solved);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Puzzle {
    islands: Arc<Vec<Island>>,
    bridges: Vec<Bridge>,
}

impl Puzzle {
    /// Creates an empty puzzle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a puzzle without bridges from a set of islands.
    ///
    /// Islands sharing a position with an earlier island are ignored.
    #[must_use]
    pub fn from_islands<I>(islands: I) -> Self
    where
        I: IntoIterator<Item = Island>,
    {
        let mut puzzle = Self::new();
        for island in islands {
            puzzle.add_island(island);
        }
        puzzle
    }

    /// Returns a deep copy that shares nothing with `self`.
    ///
    /// # Panics
    ///
    /// Panics if a bridge refers to a position without an island.
    #[must_use]
    pub fn copy(&self) -> Self {
        for bridge in &self.bridges {
            for position in [bridge.first(), bridge.second()] {
                assert!(
                    self.island_index(position).is_some(),
                    "cannot copy bridge {bridge}: no island at {position}"
                );
            }
        }
        Self {
            islands: Arc::new(self.islands.as_ref().clone()),
            bridges: self.bridges.clone(),
        }
    }

    /// Returns a copy that shares the island list and clones only the bridges.
    #[must_use]
    pub fn fast_copy(&self) -> Self {
        Self {
            islands: Arc::clone(&self.islands),
            bridges: self.bridges.clone(),
        }
    }

    /// Returns a fast copy of this puzzle with all bridges removed.
    #[must_use]
    pub fn without_bridges(&self) -> Self {
        Self {
            islands: Arc::clone(&self.islands),
            bridges: vec![],
        }
    }

    /// Returns `true` if both puzzles share the same island allocation.
    #[must_use]
    pub fn shares_islands_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.islands, &other.islands)
    }

    /// Returns the islands, sorted by position.
    #[must_use]
    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    /// Returns the placed bridges, sorted, with doubled bridges appearing twice.
    #[must_use]
    pub fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }

    /// Returns one more than the largest x coordinate, or `0` for an empty puzzle.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.islands
            .iter()
            .map(|island| island.x())
            .max()
            .map_or(0, |x| u32::try_from(x).map_or(0, |x| x + 1))
    }

    /// Returns one more than the largest y coordinate, or `0` for an empty puzzle.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.islands
            .iter()
            .map(|island| island.y())
            .max()
            .map_or(0, |y| u32::try_from(y).map_or(0, |y| y + 1))
    }

    /// Returns the index of the island at `position` in [`islands`](Self::islands).
    #[must_use]
    pub fn island_index(&self, position: Position) -> Option<usize> {
        self.islands
            .binary_search_by_key(&position, |island| island.position())
            .ok()
    }

    /// Returns the island at `position`, if any.
    #[must_use]
    pub fn island_at(&self, position: Position) -> Option<Island> {
        self.island_index(position).map(|i| self.islands[i])
    }

    /// Returns the first bridge passing over `position`, if any.
    #[must_use]
    pub fn bridge_at(&self, position: Position) -> Option<Bridge> {
        self.bridges
            .iter()
            .copied()
            .find(|bridge| bridge.crosses(position))
    }

    /// Returns the distinct islands connected to `position` by at least one bridge.
    #[must_use]
    pub fn neighbors(&self, position: Position) -> Vec<Island> {
        let mut neighbors = self
            .bridges
            .iter()
            .filter(|bridge| bridge.has_endpoint(position))
            .filter_map(|bridge| self.island_at(bridge.other_endpoint(position)))
            .collect::<Vec<_>>();
        neighbors.dedup();
        neighbors
    }

    /// Returns the island at the other end of `bridge`.
    ///
    /// # Panics
    ///
    /// Panics if `island` is not an endpoint of `bridge`, or if the other endpoint
    /// has no island.
    #[must_use]
    #[track_caller]
    pub fn other_endpoint(&self, bridge: Bridge, island: Island) -> Island {
        let position = bridge.other_endpoint(island.position());
        self.island_at(position)
            .unwrap_or_else(|| panic!("bridge {bridge} ends at {position}, which has no island"))
    }

    /// Returns the number of bridges incident to the island at `position`.
    #[must_use]
    pub fn bridge_count(&self, position: Position) -> usize {
        self.bridges
            .iter()
            .filter(|bridge| bridge.has_endpoint(position))
            .count()
    }

    /// Returns how many copies of `bridge` are placed.
    #[must_use]
    pub fn multiplicity(&self, bridge: Bridge) -> usize {
        count_sorted(&self.bridges, &bridge)
    }

    /// Returns the current bridge count of every island, in island order.
    #[must_use]
    pub fn degrees(&self) -> Vec<u32> {
        let mut degrees = vec![0; self.islands.len()];
        for bridge in &self.bridges {
            for position in [bridge.first(), bridge.second()] {
                if let Some(i) = self.island_index(position) {
                    degrees[i] += 1;
                }
            }
        }
        degrees
    }

    /// Returns the number of bridges the island at `position` still needs, or
    /// `None` if it already has more than required or there is no island.
    #[must_use]
    pub fn remaining_bridges(&self, position: Position) -> Option<u32> {
        let island = self.island_at(position)?;
        let count = u32::try_from(self.bridge_count(position)).ok()?;
        island.required_bridges().checked_sub(count)
    }

    /// Returns `true` if every island is reachable from every other island.
    ///
    /// Puzzles with at most one island are trivially connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.islands.len() <= 1 {
            return true;
        }

        let mut adjacency = vec![vec![]; self.islands.len()];
        for bridge in &self.bridges {
            if let (Some(a), Some(b)) = (
                self.island_index(bridge.first()),
                self.island_index(bridge.second()),
            ) {
                adjacency[a].push(b);
                adjacency[b].push(a);
            }
        }

        let mut marked = vec![false; self.islands.len()];
        let mut queue = VecDeque::from([0]);
        marked[0] = true;
        let mut reached = 1;
        while let Some(i) = queue.pop_front() {
            for &j in &adjacency[i] {
                if !marked[j] {
                    marked[j] = true;
                    reached += 1;
                    queue.push_back(j);
                }
            }
        }
        reached == self.islands.len()
    }

    /// Returns `true` if every island has exactly its required number of bridges.
    #[must_use]
    pub fn has_required_bridge_counts(&self) -> bool {
        self.degrees()
            .into_iter()
            .zip(self.islands.iter())
            .all(|(degree, island)| degree == island.required_bridges())
    }

    /// Returns the derived status of the puzzle.
    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        if self.bridges.is_empty() {
            PuzzleStatus::Untouched
        } else if self.has_required_bridge_counts() && self.is_connected() {
            PuzzleStatus::Solved
        } else {
            PuzzleStatus::Unsolved
        }
    }

    /// Returns `true` if `bridge` can be placed without breaking any invariant.
    ///
    /// The bridge must be straight, join two existing islands, not already be
    /// doubled, not pass over any island, and not overlap any other bridge. A copy
    /// of an already placed bridge may overlap that bridge.
    #[must_use]
    pub fn can_place_bridge(&self, bridge: Bridge) -> bool {
        if !bridge.is_straight() || bridge.is_loop() {
            return false;
        }
        if self.island_index(bridge.first()).is_none()
            || self.island_index(bridge.second()).is_none()
        {
            return false;
        }

        let multiplicity = self.multiplicity(bridge);
        if multiplicity >= MAX_BRIDGE_MULTIPLICITY {
            return false;
        }
        if self
            .islands
            .iter()
            .any(|island| bridge.crosses(island.position()))
        {
            return false;
        }
        multiplicity > 0 || !self.bridges.iter().any(|other| bridge.intersects(*other))
    }

    /// Places `bridge` if [`can_place_bridge`](Self::can_place_bridge) allows it.
    ///
    /// Returns `true` if the bridge was placed.
    pub fn place_bridge(&mut self, bridge: Bridge) -> bool {
        let placeable = self.can_place_bridge(bridge);
        if placeable {
            insert_sorted(&mut self.bridges, bridge);
        }
        placeable
    }

    /// Removes one copy of `bridge`.
    ///
    /// Returns `true` if a copy was removed.
    pub fn delete_bridge(&mut self, bridge: Bridge) -> bool {
        remove_sorted(&mut self.bridges, &bridge)
    }

    /// Removes every copy of `bridge`, returning how many were removed.
    pub fn delete_all_bridges(&mut self, bridge: Bridge) -> usize {
        let before = self.bridges.len();
        self.bridges.retain(|existing| *existing != bridge);
        before - self.bridges.len()
    }

    /// Removes every bridge.
    pub fn reset(&mut self) {
        self.bridges.clear();
    }

    /// Adds an island without any placement check beyond position uniqueness.
    ///
    /// Returns `false` (and leaves the puzzle unchanged) if an island already
    /// occupies the position. Intended for trusted builders such as the generator
    /// and the decoders.
    pub fn add_island(&mut self, island: Island) -> bool {
        match self
            .islands
            .binary_search_by_key(&island.position(), |existing| existing.position())
        {
            Ok(_) => false,
            Err(index) => {
                Arc::make_mut(&mut self.islands).insert(index, island);
                true
            }
        }
    }

    /// Adds a bridge without checking [`can_place_bridge`](Self::can_place_bridge).
    ///
    /// Intended for trusted builders and for solvers that already validated the
    /// move. The caller is responsible for keeping the puzzle invariants.
    pub fn add_bridge(&mut self, bridge: Bridge) {
        debug_assert!(
            self.island_index(bridge.first()).is_some()
                && self.island_index(bridge.second()).is_some(),
            "bridge {bridge} must join two islands"
        );
        insert_sorted(&mut self.bridges, bridge);
    }

    /// Returns every bridge that can currently be placed, once per island pair.
    ///
    /// Checks all island pairs, so this is quadratic in the number of islands.
    #[must_use]
    pub fn possible_bridges(&self) -> Vec<Bridge> {
        let mut bridges = vec![];
        for (i, a) in self.islands.iter().enumerate() {
            for b in &self.islands[i + 1..] {
                let bridge = Bridge::between(*a, *b);
                if self.can_place_bridge(bridge) {
                    bridges.push(bridge);
                }
            }
        }
        bridges
    }

    /// Re-filters a candidate list computed earlier for an ancestor of this puzzle.
    ///
    /// Keeps candidates that can still be placed and whose endpoints both still
    /// need more bridges. Since placing bridges only ever removes options, the
    /// result equals filtering [`possible_bridges`](Self::possible_bridges) by
    /// endpoint saturation whenever `candidates` came from an ancestor state.
    #[must_use]
    pub fn possible_bridges_from(&self, candidates: &[Bridge]) -> Vec<Bridge> {
        let degrees = self.degrees();
        let unsaturated = |position: Position| {
            self.island_index(position)
                .is_some_and(|i| degrees[i] < self.islands[i].required_bridges())
        };
        candidates
            .iter()
            .copied()
            .filter(|bridge| unsaturated(bridge.first()) && unsaturated(bridge.second()))
            .filter(|bridge| self.can_place_bridge(*bridge))
            .collect()
    }

    /// Checks every puzzle invariant, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`] describing the first broken invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if let Some(&bridge) = self.bridges.iter().find(|bridge| !bridge.is_straight()) {
            return Err(InvariantError::NotStraight { bridge });
        }
        for (i, &bridge) in self.bridges.iter().enumerate() {
            for position in [bridge.first(), bridge.second()] {
                if self.island_index(position).is_none() {
                    return Err(InvariantError::MissingEndpoint { bridge, position });
                }
            }
            let count = self.multiplicity(bridge);
            if count > MAX_BRIDGE_MULTIPLICITY {
                return Err(InvariantError::TooManyBridges { bridge, count });
            }
            if let Some(island) = self
                .islands
                .iter()
                .find(|island| bridge.crosses(island.position()))
            {
                return Err(InvariantError::CrossesIsland {
                    bridge,
                    position: island.position(),
                });
            }
            if let Some(&other) = self.bridges[i + 1..]
                .iter()
                .find(|other| **other != bridge && bridge.intersects(**other))
            {
                return Err(InvariantError::Intersects {
                    first: bridge,
                    second: other,
                });
            }
        }
        Ok(())
    }
}
