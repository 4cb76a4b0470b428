use super::{BoxedDeduction, Deduction, Forced, open_islands, single_heavy_neighbor};
use crate::DeductionGrid;

const NAME: &str = "last bridge";

/// Routes the last bridge of a hub of `1` islands away from other `1` islands.
///
/// An island that only connects to `1` islands so far, and needs one more
/// bridge, would close off its group by connecting to another `1`. Unless that
/// group would cover the whole puzzle, the bridge must go to the only candidate
/// neighbour needing more than one bridge.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastBridge;

impl LastBridge {
    /// Creates a new `LastBridge` deduction.
    #[must_use]
    pub const fn new() -> Self {
        LastBridge
    }
}

impl Deduction for LastBridge {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedDeduction {
        Box::new(*self)
    }

    fn find(&self, grid: &DeductionGrid) -> Option<Forced> {
        let puzzle = grid.puzzle();
        open_islands(grid)
            .filter(|(_, island, remaining)| island.required_bridges() > 1 && *remaining == 1)
            .find_map(|(index, island, _)| {
                let neighbors = puzzle.neighbors(island.position());
                if neighbors
                    .iter()
                    .any(|neighbor| neighbor.required_bridges() != 1)
                {
                    return None;
                }
                if puzzle.islands().len() <= neighbors.len() + 2 {
                    return None;
                }
                let bridge = single_heavy_neighbor(grid, index)?;
                Some(Forced::new(island, vec![bridge]))
            })
    }
}
