use std::iter;

use super::{BoxedDeduction, Deduction, Forced, open_islands};
use crate::DeductionGrid;

const NAME: &str = "saturated island";

/// Fills an island whose candidates can carry exactly the bridges it still needs.
///
/// Every candidate of such an island is placed up to its capacity.
///
/// # Examples
///
/// ```
/// use hashi_core::Puzzle;
/// use hashi_solver::{
///     DeductionGrid,
///     deduction::{Deduction, SaturatedIsland},
/// };
///
/// // The corner 4 has two neighbours, each able to take two bridges.
/// let grid = DeductionGrid::new("4.2\n...\n2..".parse::<Puzzle>()?);
/// let forced = SaturatedIsland::new().find(&grid).unwrap();
/// assert_eq!(forced.bridges().len(), 4);
/// # Ok::<(), hashi_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SaturatedIsland;

impl SaturatedIsland {
    /// Creates a new `SaturatedIsland` deduction.
    #[must_use]
    pub const fn new() -> Self {
        SaturatedIsland
    }
}

impl Deduction for SaturatedIsland {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedDeduction {
        Box::new(*self)
    }

    fn find(&self, grid: &DeductionGrid) -> Option<Forced> {
        open_islands(grid)
            .find(|&(index, _, remaining)| grid.total_capacity(index) == remaining)
            .map(|(index, island, _)| {
                let bridges = grid
                    .incident(index)
                    .iter()
                    .flat_map(|&candidate| {
                        let bridge = grid.candidates()[candidate];
                        iter::repeat_n(bridge, grid.capacity(candidate) as usize)
                    })
                    .collect();
                Forced::new(island, bridges)
            })
    }
}
