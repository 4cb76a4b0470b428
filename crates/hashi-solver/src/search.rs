//! Building blocks shared by the search strategies.

use std::collections::BTreeSet;

use hashi_core::{Bridge, Puzzle};

/// A search state: a puzzle and the bridges that may still be added to it.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) puzzle: Puzzle,
    pub(crate) candidates: Vec<Bridge>,
}

impl Node {
    pub(crate) fn root(puzzle: &Puzzle) -> Self {
        let puzzle = puzzle.fast_copy();
        let candidates = puzzle.possible_bridges_from(&puzzle.possible_bridges());
        Self { puzzle, candidates }
    }

    /// Returns a new state with `bridge` added.
    ///
    /// `bridge` must be one of this node's candidates.
    pub(crate) fn child(&self, bridge: Bridge) -> Self {
        let mut puzzle = self.puzzle.fast_copy();
        puzzle.add_bridge(bridge);
        let candidates = puzzle.possible_bridges_from(&self.candidates);
        Self { puzzle, candidates }
    }

    pub(crate) fn is_solved(&self) -> bool {
        self.puzzle.status().is_solved()
    }
}

/// Returns `true` if some island has more bridges than it requires.
pub(crate) fn is_infeasible(puzzle: &Puzzle) -> bool {
    puzzle
        .degrees()
        .into_iter()
        .zip(puzzle.islands())
        .any(|(degree, island)| degree > island.required_bridges())
}

/// Returns `true` if adding `bridge` overfilled one of its endpoints.
pub(crate) fn overfills(puzzle: &Puzzle, bridge: Bridge) -> bool {
    [bridge.first(), bridge.second()]
        .into_iter()
        .any(|position| puzzle.remaining_bridges(position).is_none())
}

/// Returns the number of islands that have exactly the bridges they require.
pub(crate) fn satisfied_islands(puzzle: &Puzzle) -> usize {
    puzzle
        .degrees()
        .into_iter()
        .zip(puzzle.islands())
        .filter(|(degree, island)| *degree == island.required_bridges())
        .count()
}

/// The states visited so far.
///
/// All states of one solve share the same islands, so the sorted bridge list is
/// a canonical key.
#[derive(Debug, Default)]
pub(crate) struct SearchSpace {
    seen: BTreeSet<Vec<Bridge>>,
}

impl SearchSpace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records `puzzle`, returning `false` if it was already seen.
    pub(crate) fn insert(&mut self, puzzle: &Puzzle) -> bool {
        if self.seen.contains(puzzle.bridges()) {
            return false;
        }
        self.seen.insert(puzzle.bridges().to_vec())
    }

    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use hashi_core::Position;

    use super::*;

    fn bridge(x1: i32, y1: i32, x2: i32, y2: i32) -> Bridge {
        Bridge::new(Position::new(x1, y1), Position::new(x2, y2))
    }

    #[test]
    fn test_root_excludes_saturated_endpoints() {
        let puzzle: Puzzle = "
            2-1
            ...
            1..
        "
        .parse()
        .unwrap();
        let node = Node::root(&puzzle);
        assert_eq!(node.candidates, vec![bridge(0, 0, 0, 2)]);
    }

    #[test]
    fn test_child_refines_candidates() {
        let puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        let root = Node::root(&puzzle);
        assert_eq!(root.candidates.len(), 4);

        let child = root.child(bridge(0, 0, 0, 2));
        assert_eq!(root.puzzle.bridges().len(), 0);
        assert_eq!(child.puzzle.bridges(), &[bridge(0, 0, 0, 2)]);
        assert_eq!(
            child.candidates,
            vec![bridge(0, 0, 2, 0), bridge(2, 0, 2, 2)]
        );
        assert!(child.puzzle.shares_islands_with(&root.puzzle));
    }

    #[test]
    fn test_feasibility() {
        let mut puzzle: Puzzle = "1.1".parse().unwrap();
        let b = bridge(0, 0, 2, 0);
        puzzle.add_bridge(b);
        assert!(!is_infeasible(&puzzle));
        assert!(!overfills(&puzzle, b));
        assert_eq!(satisfied_islands(&puzzle), 2);

        puzzle.add_bridge(b);
        assert!(is_infeasible(&puzzle));
        assert!(overfills(&puzzle, b));
        assert_eq!(satisfied_islands(&puzzle), 0);
    }

    #[test]
    fn test_search_space_dedups() {
        let puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        let root = Node::root(&puzzle);
        let a = root.child(bridge(0, 0, 0, 2)).child(bridge(0, 0, 2, 0));
        let b = root.child(bridge(0, 0, 2, 0)).child(bridge(0, 0, 0, 2));

        let mut space = SearchSpace::new();
        assert!(space.insert(&a.puzzle));
        assert!(!space.insert(&b.puzzle));
        assert_eq!(space.len(), 1);
    }
}
