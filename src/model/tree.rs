//! Tree module for phylogenetic tree representation.
//!
//! This module provides the core data structure for representing phylogenetic trees:
//! - [PhyloTree]: The tree structure using the arena pattern on [Clade]s.
//! - [CladeIndex] is used to index clades.

use crate::model::clade::{BranchLength, Clade};
use std::collections::VecDeque;

/// Index of a clade in a tree (arena).
pub type CladeIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: CladeIndex = usize::MAX;

// =#========================================================================#=
// PHYLO TREE
// =#========================================================================#=
/// A rooted phylogenetic tree of arbitrary arity, represented using the
/// arena pattern on [Clade].
///
/// Clades are stored in a contiguous vector and referenced by [CladeIndex].
/// Positions and other per-clade data computed by the layout are keyed by
/// this index rather than by clade name, so duplicate or missing names never
/// collide.
///
/// # Structure
/// - All clades are stored in the arena; the index of the root is maintained
/// - Children are ordered; the order is the left-to-right traversal order
/// - No assumption on order of indices is maintained
/// - A clade may be *detached* (no parent and not the root); traversals
///   starting at the root never reach it
///
/// # Example
/// ```
/// use cladogram::model::{BranchLength, PhyloTree};
///
/// // Create a tree: (A:0.2,B,(C,D)E)F;
/// let mut tree = PhyloTree::new(6);
/// let f = tree.add_clade(Some("F".to_string()), None);
/// let a = tree.add_clade(Some("A".to_string()), Some(BranchLength::new(0.2)));
/// let b = tree.add_clade(Some("B".to_string()), None);
/// let e = tree.add_clade(Some("E".to_string()), None);
/// let c = tree.add_clade(Some("C".to_string()), None);
/// let d = tree.add_clade(Some("D".to_string()), None);
/// tree.attach(f, a);
/// tree.attach(f, b);
/// tree.attach(f, e);
/// tree.attach(e, c);
/// tree.attach(e, d);
/// tree.set_root(f);
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.num_terminals(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PhyloTree {
    /// Clades of this tree (arena pattern)
    clades: Vec<Clade>,

    /// Index of the root of this tree
    root_index: CladeIndex,
}

// ============================================================================
// New, Construction (pub)
// ============================================================================
impl PhyloTree {
    /// Creates a new, empty tree with capacity for `num_clades` clades.
    pub fn new(num_clades: usize) -> Self {
        PhyloTree {
            clades: Vec::with_capacity(num_clades),
            root_index: NO_ROOT_SET_INDEX,
        }
    }

    /// Adds a clade without parent and children, returning its unique index.
    pub fn add_clade(&mut self, name: Option<String>, branch_length: Option<BranchLength>) -> CladeIndex {
        let index = self.clades.len();
        self.clades.push(Clade::new(index, name, branch_length));
        index
    }

    /// Appends `child` to the children of `parent`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn attach(&mut self, parent: CladeIndex, child: CladeIndex) {
        self[child].set_parent(parent);
        self[parent].push_child(child);
    }

    /// Sets the root of this tree.
    pub fn set_root(&mut self, root: CladeIndex) {
        self.root_index = root;
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl PhyloTree {
    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> CladeIndex {
        self.root_index
    }

    /// Returns a reference to the root clade.
    ///
    /// # Panics
    /// Panics if the root hasn't been set and thus tree hasn't been fully constructed yet.
    pub fn root(&self) -> &Clade {
        &self[self.root_index]
    }

    /// Returns a reference to the clade at the given index.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    pub fn clade(&self, index: CladeIndex) -> &Clade {
        &self[index]
    }

    /// Returns a mutable reference to the clade at the given index.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    pub fn clade_mut(&mut self, index: CladeIndex) -> &mut Clade {
        &mut self[index]
    }

    /// Returns the clade at the given index, or `None` if out of bounds.
    pub fn get(&self, index: CladeIndex) -> Option<&Clade> {
        self.clades.get(index)
    }

    /// Returns the number of clades in the arena, including detached ones.
    pub fn num_clades(&self) -> usize {
        self.clades.len()
    }

    /// Returns the number of terminal clades reachable from the root.
    pub fn num_terminals(&self) -> usize {
        self.terminals().count()
    }

    /// Returns the number of non-terminal clades reachable from the root.
    pub fn num_internal(&self) -> usize {
        self.pre_order_iter().filter(|c| !c.is_terminal()).count()
    }

    /// Returns the terminal clades in left-to-right order
    /// (depth-first, children in list order).
    pub fn terminals(&self) -> impl Iterator<Item = &Clade> {
        self.pre_order_iter().filter(|c| c.is_terminal())
    }

    /// Returns the first clade in level order carrying the given name.
    pub fn find_by_name(&self, name: &str) -> Option<CladeIndex> {
        self.level_order_iter().find(|c| c.is_named(name)).map(Clade::index)
    }

    /// Returns the path from the root (exclusive) to the given clade (inclusive).
    ///
    /// The path of the root itself is empty. For a detached clade the path
    /// only contains the clade itself.
    pub fn path_to(&self, index: CladeIndex) -> Vec<CladeIndex> {
        let mut path = Vec::new();
        let mut current = index;
        while current != self.root_index {
            path.push(current);
            match self[current].parent_index() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        path.reverse();
        path
    }

    /// Returns the number of edges between the root and the given clade.
    pub fn depth_of(&self, index: CladeIndex) -> usize {
        self.path_to(index).len()
    }

    /// Returns the sum of edge lengths along the path from the root to the
    /// given clade, substituting the default length for missing or zero
    /// branch lengths (see [Clade::edge_length]).
    ///
    /// Edges are summed from the root downwards.
    pub fn distance_from_root(&self, index: CladeIndex) -> f64 {
        self.path_to(index)
            .into_iter()
            .fold(0.0, |sum, i| sum + self[i].edge_length())
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is set, within bounds and the root has no parent
    /// - All clade indices match their position in the arena
    /// - All child indices are valid and point back to correct parent
    /// - All parent indices are valid and include this clade as a child
    /// - Every clade is visited at most once from the root (no cycles, no shared children)
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if !self.is_root_set() || self.root_index >= self.clades.len() {
            return false;
        }

        if self.root().has_parent() {
            return false;
        }

        for (index, clade) in self.clades.iter().enumerate() {
            if clade.index() != index {
                return false;
            }

            for &child in clade.children() {
                match self.clades.get(child) {
                    Some(child_clade) if child_clade.parent_index() == Some(index) => {}
                    _ => return false,
                }
            }

            if let Some(parent) = clade.parent_index() {
                match self.clades.get(parent) {
                    Some(parent_clade) if parent_clade.children().contains(&index) => {}
                    _ => return false,
                }
            }
        }

        // Bounded walk: a cycle would revisit clades
        let mut visited = vec![false; self.clades.len()];
        let mut stack = vec![self.root_index];
        while let Some(index) = stack.pop() {
            if visited[index] {
                return false;
            }
            visited[index] = true;
            stack.extend_from_slice(self[index].children());
        }

        true
    }

    /// Returns an iterator over the tree in level order (breadth-first).
    pub fn level_order_iter(&self) -> LevelOrderIter<'_> {
        LevelOrderIter::new(self)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Children are visited in list order, so the terminals appear left to right.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// Useful for aggregating data from the terminals upwards.
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }
}

impl std::ops::Index<CladeIndex> for PhyloTree {
    type Output = Clade;

    fn index(&self, index: CladeIndex) -> &Self::Output {
        &self.clades[index]
    }
}

impl std::ops::IndexMut<CladeIndex> for PhyloTree {
    fn index_mut(&mut self, index: CladeIndex) -> &mut Self::Output {
        &mut self.clades[index]
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for level-order traversal (breadth-first, children in list order).
pub struct LevelOrderIter<'a> {
    tree: &'a PhyloTree,
    queue: VecDeque<CladeIndex>,
}

impl<'a> LevelOrderIter<'a> {
    fn new(tree: &'a PhyloTree) -> Self {
        let mut queue = VecDeque::new();
        if tree.is_root_set() {
            queue.push_back(tree.root_index);
        }
        LevelOrderIter { tree, queue }
    }
}

impl<'a> Iterator for LevelOrderIter<'a> {
    type Item = &'a Clade;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        let clade = &self.tree[index];
        self.queue.extend(clade.children().iter().copied());
        Some(clade)
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
pub struct PreOrderIter<'a> {
    tree: &'a PhyloTree,
    stack: Vec<CladeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a PhyloTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push(tree.root_index);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Clade;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let clade = &self.tree[index];

        // Push children in reverse, so the first child is processed first
        self.stack.extend(clade.children().iter().rev().copied());

        Some(clade)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// Each clade is visited after all its descendants have been visited.
pub struct PostOrderIter<'a> {
    tree: &'a PhyloTree,
    stack: Vec<(CladeIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a PhyloTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push((tree.root_index, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Clade;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let clade = &self.tree[index];

            if children_visited || clade.is_terminal() {
                return Some(clade);
            }

            self.stack.push((index, true));
            // Push children in reverse, so the first child is processed first
            self.stack
                .extend(clade.children().iter().rev().map(|&child| (child, false)));
        }
        None
    }
}
