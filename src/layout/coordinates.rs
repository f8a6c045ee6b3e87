//! Coordinate assignment for the dendrogram layout.
//!
//! * x: sum of edge lengths from the root (root at 0, missing or zero
//!   branch lengths count as [DEFAULT_EDGE_LENGTH](crate::model::DEFAULT_EDGE_LENGTH))
//! * y: terminals are numbered 0, 1, 2, ... left to right; every other clade
//!   sits at the mean y of its direct children

use crate::model::{CladeIndex, PhyloTree};
use serde::Serialize;

/// Offset of the unclassified clade's y from the largest y in the tree.
const UNCLASSIFIED_Y_OFFSET: f64 = 2.0;

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// =#========================================================================#=
// POSITIONS
// =#========================================================================#=
/// Layout positions keyed by [CladeIndex].
///
/// Clades that were not laid out (for instance clades not reachable from the
/// root) have no position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    points: Vec<Option<Point>>,
}

impl Positions {
    /// Creates an empty map for an arena of `num_clades` clades.
    pub fn new(num_clades: usize) -> Self {
        Self {
            points: vec![None; num_clades],
        }
    }

    /// Returns the position of the clade, if it has one.
    pub fn get(&self, index: CladeIndex) -> Option<Point> {
        self.points.get(index).copied().flatten()
    }

    /// Sets the position of the clade, growing the map if needed.
    pub fn insert(&mut self, index: CladeIndex, point: Point) {
        if index >= self.points.len() {
            self.points.resize(index + 1, None);
        }
        self.points[index] = Some(point);
    }

    /// Returns the number of clades with a position.
    pub fn len(&self) -> usize {
        self.points.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(index, point)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (CladeIndex, Point)> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| point.map(|p| (index, p)))
    }

    /// Returns the largest y over all positioned clades.
    pub fn max_y(&self) -> Option<f64> {
        self.iter().map(|(_, p)| p.y).reduce(f64::max)
    }
}

// =#========================================================================#=
// COORDINATE ASSIGNER
// =#========================================================================#=
/// Computes [Positions] for every clade reachable from the root.
///
/// Two passes:
/// 1. Terminal pass: pre-order walk numbering the terminals and setting x
///    for every clade top-down.
/// 2. Internal pass: post-order walk setting each non-terminal's y to the
///    mean of its children's y.
///
/// # Example
/// ```
/// use cladogram::layout::CoordinateAssigner;
/// use cladogram::newick::parse_str;
///
/// let tree = parse_str("(A,B,(C,D)E)F;").unwrap();
/// let positions = CoordinateAssigner::new(&tree).assign();
///
/// let e = tree.find_by_name("E").unwrap();
/// assert_eq!(positions.get(e).map(|p| (p.x, p.y)), Some((1.0, 2.5)));
/// assert_eq!(positions.get(tree.root_index()).map(|p| p.y), Some(7.0 / 6.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoordinateAssigner<'a> {
    tree: &'a PhyloTree,
}

impl<'a> CoordinateAssigner<'a> {
    pub fn new(tree: &'a PhyloTree) -> Self {
        Self { tree }
    }

    pub fn assign(&self) -> Positions {
        let tree = self.tree;
        let mut xs: Vec<Option<f64>> = vec![None; tree.num_clades()];
        let mut ys: Vec<Option<f64>> = vec![None; tree.num_clades()];

        // Terminal pass; the root's own branch length is never counted
        let mut next_terminal_y = 0.0;
        for clade in tree.pre_order_iter() {
            let x = match clade.parent_index() {
                Some(parent) if clade.index() != tree.root_index() => {
                    xs[parent].unwrap_or_default() + clade.edge_length()
                }
                _ => 0.0,
            };
            xs[clade.index()] = Some(x);

            if clade.is_terminal() {
                ys[clade.index()] = Some(next_terminal_y);
                next_terminal_y += 1.0;
            }
        }

        // Internal pass
        for clade in tree.post_order_iter().filter(|c| !c.is_terminal()) {
            let sum: f64 = clade
                .children()
                .iter()
                .map(|&child| ys[child].unwrap_or_default())
                .sum();
            ys[clade.index()] = Some(sum / clade.num_children() as f64);
        }

        let mut positions = Positions::new(tree.num_clades());
        for (index, (x, y)) in xs.into_iter().zip(ys).enumerate() {
            if let (Some(x), Some(y)) = (x, y) {
                positions.insert(index, Point::new(x, y));
            }
        }
        positions
    }
}

/// Returns the position of a spliced-out unclassified clade: `x = 0` and
/// `y = 2 - max(y)` over the positions of the tree.
///
/// The placement is arbitrary and may coincide with a clade of the tree
/// when there are few terminals.
pub fn place_unclassified(positions: &Positions) -> Point {
    let max_y = positions.max_y().unwrap_or_default();
    Point::new(0.0, UNCLASSIFIED_Y_OFFSET - max_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newick::parse_str;

    fn position(tree: &PhyloTree, positions: &Positions, name: &str) -> (f64, f64) {
        let p = positions.get(tree.find_by_name(name).unwrap()).unwrap();
        (p.x, p.y)
    }

    #[test]
    fn test_terminals_are_numbered_left_to_right() {
        let tree = parse_str("(A,B,(C,D)E)F;").unwrap();
        let positions = CoordinateAssigner::new(&tree).assign();

        assert_eq!(position(&tree, &positions, "A"), (1.0, 0.0));
        assert_eq!(position(&tree, &positions, "B"), (1.0, 1.0));
        assert_eq!(position(&tree, &positions, "C"), (2.0, 2.0));
        assert_eq!(position(&tree, &positions, "D"), (2.0, 3.0));
        assert_eq!(position(&tree, &positions, "E"), (1.0, 2.5));
        assert_eq!(position(&tree, &positions, "F"), (0.0, 7.0 / 6.0));
        assert_eq!(positions.len(), 6);
    }

    #[test]
    fn test_branch_lengths() {
        let tree = parse_str("((B:0.2,(C:0.3,D:0.4)E:0.5)F:0.1)A:7;").unwrap();
        let positions = CoordinateAssigner::new(&tree).assign();

        assert_eq!(position(&tree, &positions, "A").0, 0.0);
        assert_eq!(position(&tree, &positions, "F").0, 0.1);
        assert_eq!(position(&tree, &positions, "E").0, 0.1 + 0.5);
        assert_eq!(position(&tree, &positions, "D").0, 0.1 + 0.5 + 0.4);
    }

    #[test]
    fn test_zero_branch_length_counts_as_one() {
        let tree = parse_str("(A:0,B:2);").unwrap();
        let positions = CoordinateAssigner::new(&tree).assign();
        assert_eq!(positions.get(tree.root().children()[0]).unwrap().x, 1.0);
        assert_eq!(positions.get(tree.root().children()[1]).unwrap().x, 2.0);
    }

    #[test]
    fn test_polytomy_and_single_child() {
        let tree = parse_str("((A,B,C,D)P,(E)S)R;").unwrap();
        let positions = CoordinateAssigner::new(&tree).assign();
        assert_eq!(position(&tree, &positions, "P").1, 1.5);
        assert_eq!(position(&tree, &positions, "S").1, 4.0);
        assert_eq!(position(&tree, &positions, "R").1, 2.75);
    }

    #[test]
    fn test_place_unclassified() {
        let tree = parse_str("(A,B,(C,D)E)F;").unwrap();
        let positions = CoordinateAssigner::new(&tree).assign();
        assert_eq!(place_unclassified(&positions), Point::new(0.0, -1.0));
    }
}
