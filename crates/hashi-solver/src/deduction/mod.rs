//! Deduction rules for the [`Smart`](crate::strategy::Smart) strategy.
//!
//! Each rule implements the [`Deduction`] trait and looks for bridges that every
//! solution reachable from the current state must contain.

use std::fmt::Debug;

use hashi_core::{Bridge, Island};

pub use self::{
    last_bridge::LastBridge, leaf_island::LeafIsland, odd_degree::OddDegree,
    saturated_island::SaturatedIsland,
};
use crate::DeductionGrid;

mod last_bridge;
mod leaf_island;
mod odd_degree;
mod saturated_island;

/// Returns all available deductions.
///
/// Deductions are ordered from the cheapest to the most specific, which is the
/// order the smart strategy tries them in.
///
/// # Examples
///
/// ```
/// use hashi_solver::deduction;
///
/// let names = deduction::all_deductions()
///     .iter()
///     .map(|deduction| deduction.name())
///     .collect::<Vec<_>>();
/// assert_eq!(
///     names,
///     ["saturated island", "odd degree", "leaf island", "last bridge"]
/// );
/// ```
#[must_use]
pub fn all_deductions() -> Vec<BoxedDeduction> {
    vec![
        Box::new(SaturatedIsland::new()),
        Box::new(OddDegree::new()),
        Box::new(LeafIsland::new()),
        Box::new(LastBridge::new()),
    ]
}

/// A rule that finds forced bridges.
pub trait Deduction: Debug + Send + Sync {
    /// Returns the name of the deduction.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the deduction.
    fn clone_box(&self) -> BoxedDeduction;

    /// Returns the first forced move found on `grid`, if any.
    ///
    /// Islands are examined in order and the move concerns a single island.
    /// Every returned bridge is one of the grid's candidates.
    fn find(&self, grid: &DeductionGrid) -> Option<Forced>;
}

/// A boxed deduction.
pub type BoxedDeduction = Box<dyn Deduction>;

impl Clone for BoxedDeduction {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Bridges around one island that every solution must contain.
///
/// A bridge listed twice must be doubled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forced {
    island: Island,
    bridges: Vec<Bridge>,
}

impl Forced {
    /// Creates a forced move around `island`.
    #[must_use]
    pub fn new(island: Island, bridges: Vec<Bridge>) -> Self {
        Self { island, bridges }
    }

    /// Returns the island the deduction was made for.
    #[must_use]
    pub fn island(&self) -> Island {
        self.island
    }

    /// Returns the bridges to place.
    #[must_use]
    pub fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }
}

/// Iterates over the islands that still need bridges, with their index and
/// remaining degree.
fn open_islands(grid: &DeductionGrid) -> impl Iterator<Item = (usize, Island, u32)> {
    grid.puzzle()
        .islands()
        .iter()
        .enumerate()
        .filter_map(|(index, island)| match grid.remaining(index) {
            Some(remaining) if remaining > 0 => Some((index, *island, remaining)),
            _ => None,
        })
}

/// Returns the single candidate leading to a neighbour that requires more than
/// one bridge, or `None` if there are none or several.
fn single_heavy_neighbor(grid: &DeductionGrid, index: usize) -> Option<Bridge> {
    let mut heavy = grid
        .candidate_neighbors(index)
        .filter(|(_, neighbor)| neighbor.required_bridges() > 1);
    let (candidate, _) = heavy.next()?;
    heavy
        .next()
        .is_none()
        .then(|| grid.candidates()[candidate])
}
