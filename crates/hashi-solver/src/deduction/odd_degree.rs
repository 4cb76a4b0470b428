use super::{BoxedDeduction, Deduction, Forced, open_islands};
use crate::DeductionGrid;

const NAME: &str = "odd degree";

/// Places one bridge towards a neighbour the island cannot do without.
///
/// If the other candidates of an island together cannot carry what it still
/// needs, the remaining candidate must take at least one bridge. The classic
/// case is an island requiring `2n - 1` bridges with `n` neighbours: each of
/// them gets at least one.
///
/// # Examples
///
/// ```
/// use hashi_core::Puzzle;
/// use hashi_solver::{
///     DeductionGrid,
///     deduction::{Deduction, OddDegree},
/// };
///
/// let grid = DeductionGrid::new("3.2\n...\n2..".parse::<Puzzle>()?);
/// let forced = OddDegree::new().find(&grid).unwrap();
/// assert_eq!(forced.bridges().len(), 1);
/// # Ok::<(), hashi_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct OddDegree;

impl OddDegree {
    /// Creates a new `OddDegree` deduction.
    #[must_use]
    pub const fn new() -> Self {
        OddDegree
    }
}

impl Deduction for OddDegree {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedDeduction {
        Box::new(*self)
    }

    fn find(&self, grid: &DeductionGrid) -> Option<Forced> {
        open_islands(grid).find_map(|(index, island, remaining)| {
            let total = grid.total_capacity(index);
            grid.incident(index)
                .iter()
                .find(|&&candidate| remaining > total - grid.capacity(candidate))
                .map(|&candidate| Forced::new(island, vec![grid.candidates()[candidate]]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::DeductionTester;

    #[test]
    fn test_three_with_two_neighbors() {
        DeductionTester::from_str(
            "
            3.2
            ...
            2..
            ",
        )
        .find(&OddDegree::new())
        .assert_island(0, 0)
        .assert_forced([((0, 0), (0, 2))])
        .apply()
        .find(&OddDegree::new())
        .assert_island(0, 0)
        .assert_forced([((0, 0), (2, 0))]);
    }

    #[test]
    fn test_five_with_three_neighbors() {
        DeductionTester::from_str(
            "
            2.5.2
            .....
            2.2..
            ",
        )
        .find(&OddDegree::new())
        .assert_island(2, 0)
        .assert_forced([((0, 0), (2, 0))]);
    }

    #[test]
    fn test_no_deduction_with_slack() {
        DeductionTester::from_str(
            "
            2.2
            ...
            2.2
            ",
        )
        .find(&OddDegree::new())
        .assert_none();
    }
}
