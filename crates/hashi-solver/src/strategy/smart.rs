use std::cmp::Reverse;

use hashi_core::{Bridge, Puzzle};
use log::trace;

use super::{BoxedStrategy, SolveStrategy};
use crate::{
    DeductionGrid, SolveResult, SolveStats,
    deduction::{self, BoxedDeduction},
    search::{SearchSpace, is_infeasible},
};

const NAME: &str = "smart";

/// Constraint propagation with backtracking.
///
/// Before searching, and after every branching placement, the deductions are
/// applied until none of them finds a forced move. A branch is abandoned as
/// soon as a forced move is illegal or some island can no longer reach its
/// required degree. Branching tries the candidates whose endpoints still need
/// the most bridges first.
///
/// # Examples
///
/// ```
/// use hashi_core::Puzzle;
/// use hashi_solver::{SolveStrategy as _, strategy::Smart};
///
/// let puzzle: Puzzle = "2.2\n...\n1.1".parse()?;
/// let result = Smart::new().solve(&puzzle);
/// assert!(result.solved);
/// // Deductions alone were enough.
/// assert_eq!(result.stats.expanded(), 0);
/// assert_eq!(result.stats.forced(), 3);
/// # Ok::<(), hashi_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Smart {
    deductions: Vec<BoxedDeduction>,
}

impl Default for Smart {
    fn default() -> Self {
        Self::new()
    }
}

impl Smart {
    /// Creates a new `Smart` strategy using [`deduction::all_deductions`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_deductions(deduction::all_deductions())
    }

    /// Creates a new `Smart` strategy using the given deductions, tried in order.
    #[must_use]
    pub fn with_deductions(deductions: Vec<BoxedDeduction>) -> Self {
        Self { deductions }
    }

    /// Returns the deductions in the order they are tried.
    #[must_use]
    pub fn deductions(&self) -> &[BoxedDeduction] {
        &self.deductions
    }

    /// Applies deductions until none applies.
    ///
    /// Returns `false` if the grid turned out to have no solution.
    fn propagate(&self, grid: &mut DeductionGrid, stats: &mut SolveStats) -> bool {
        loop {
            if grid.is_dead() {
                return false;
            }
            if grid.is_solved() {
                return true;
            }
            let Some((name, forced)) = self
                .deductions
                .iter()
                .find_map(|deduction| Some((deduction.name(), deduction.find(grid)?)))
            else {
                return true;
            };
            trace!(
                "{NAME}: {name} forces {:?} at {}",
                forced.bridges(),
                forced.island().position()
            );
            if !grid.apply(&forced) {
                return false;
            }
            stats.forced += forced.bridges().len();
        }
    }
}

/// Orders candidates by the summed remaining degree of their endpoints, most
/// demanding first.
fn branching_order(grid: &DeductionGrid) -> Vec<Bridge> {
    let puzzle = grid.puzzle();
    let mut bridges = grid.candidates().to_vec();
    bridges.sort_by_key(|bridge| {
        let demand: u32 = [bridge.first(), bridge.second()]
            .into_iter()
            .map(|position| puzzle.remaining_bridges(position).unwrap_or(0))
            .sum();
        Reverse(demand)
    });
    bridges
}

impl SolveStrategy for Smart {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(self.clone())
    }

    fn solve(&self, puzzle: &Puzzle) -> SolveResult {
        let mut stats = SolveStats::default();
        if puzzle.status().is_solved() {
            return SolveResult::solved(puzzle.fast_copy(), stats);
        }
        if is_infeasible(puzzle) {
            return SolveResult::unsolved(puzzle, stats);
        }

        let mut root = DeductionGrid::new(puzzle.fast_copy());
        if !self.propagate(&mut root, &mut stats) {
            return SolveResult::unsolved(puzzle, stats);
        }
        if root.is_solved() {
            return SolveResult::solved(root.into_puzzle(), stats);
        }

        let mut space = SearchSpace::new();
        space.insert(root.puzzle());
        let mut stack = vec![root];

        while let Some(grid) = stack.pop() {
            stats.expanded += 1;
            let mut children = vec![];
            for bridge in branching_order(&grid) {
                let mut child = grid.puzzle().fast_copy();
                child.add_bridge(bridge);
                stats.generated += 1;

                let mut child = DeductionGrid::with_candidates(child, grid.candidates());
                if !self.propagate(&mut child, &mut stats) {
                    stats.pruned += 1;
                    continue;
                }
                if !space.insert(child.puzzle()) {
                    stats.duplicates += 1;
                    continue;
                }
                if child.is_solved() {
                    return SolveResult::solved(child.into_puzzle(), stats);
                }
                children.push(child);
            }
            // Most demanding branch on top.
            stack.extend(children.into_iter().rev());
        }

        trace!("{NAME}: exhausted {} states", space.len());
        SolveResult::unsolved(puzzle, stats)
    }
}

#[cfg(test)]
mod tests {
    use hashi_core::Position;

    use super::*;

    #[test]
    fn test_branching_order() {
        let grid = DeductionGrid::new("2.2\n...\n1.1".parse().unwrap());
        let order = branching_order(&grid);
        assert_eq!(
            order[0],
            Bridge::new(Position::new(0, 0), Position::new(2, 0))
        );
        assert_eq!(
            order[3],
            Bridge::new(Position::new(0, 2), Position::new(2, 2))
        );
    }

    #[test]
    fn test_solves_by_deduction() {
        let puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        let result = Smart::new().solve(&puzzle);
        assert!(result.solved);
        assert_eq!(result.stats.expanded(), 0);
        assert_eq!(result.stats.forced(), 3);
        assert!(puzzle.bridges().is_empty());
    }

    #[test]
    fn test_solves_without_deductions() {
        let puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        let strategy = Smart::with_deductions(vec![]);
        assert!(strategy.deductions().is_empty());

        let result = strategy.solve(&puzzle);
        assert!(result.solved);
        assert_eq!(result.stats.forced(), 0);
        assert!(result.stats.expanded() > 0);
    }

    #[test]
    fn test_dead_root() {
        let puzzle: Puzzle = "3.3".parse().unwrap();
        let result = Smart::new().solve(&puzzle);
        assert!(!result.solved);
        assert_eq!(result.stats.expanded(), 0);
        assert_eq!(result.puzzle, puzzle);
    }

    #[test]
    fn test_searches_when_stuck() {
        // Every island has slack, so no deduction applies at the root.
        let puzzle: Puzzle = "
            2.2
            ...
            2.2
        "
        .parse()
        .unwrap();
        let result = Smart::new().solve(&puzzle);
        assert!(result.solved);
        assert!(result.stats.expanded() > 0);
    }
}
