use super::{BoxedDeduction, Deduction, Forced, open_islands, single_heavy_neighbor};
use crate::DeductionGrid;

const NAME: &str = "leaf island";

/// Connects an unbridged `1` to its only neighbour that needs more than one
/// bridge.
///
/// Joining two `1` islands closes them off from the rest of the puzzle, so
/// unless the puzzle has only two islands a `1` must connect to a larger one.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeafIsland;

impl LeafIsland {
    /// Creates a new `LeafIsland` deduction.
    #[must_use]
    pub const fn new() -> Self {
        LeafIsland
    }
}

impl Deduction for LeafIsland {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedDeduction {
        Box::new(*self)
    }

    fn find(&self, grid: &DeductionGrid) -> Option<Forced> {
        if grid.puzzle().islands().len() <= 2 {
            return None;
        }
        open_islands(grid)
            .filter(|(_, island, remaining)| island.required_bridges() == 1 && *remaining == 1)
            .find_map(|(index, island, _)| {
                let bridge = single_heavy_neighbor(grid, index)?;
                Some(Forced::new(island, vec![bridge]))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::DeductionTester;

    #[test]
    fn test_avoids_other_leaf() {
        DeductionTester::from_str(
            "
            1.1
            ...
            3..
            ",
        )
        .find(&LeafIsland::new())
        .assert_island(0, 0)
        .assert_forced([((0, 0), (0, 2))]);
    }

    #[test]
    fn test_two_heavy_neighbors() {
        DeductionTester::from_str(
            "
            1.2
            ...
            2..
            ",
        )
        .find(&LeafIsland::new())
        .assert_none();
    }

    #[test]
    fn test_two_island_puzzle() {
        DeductionTester::from_str("1.1")
            .find(&LeafIsland::new())
            .assert_none();
    }
}
