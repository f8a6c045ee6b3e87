//! Trait for constructing phylogenetic trees during parsing.
//!
//! The [`TreeBuilder`] trait decouples the [NewickParser](crate::newick::NewickParser)
//! from concrete tree representations. The parser calls builder methods as it
//! reads Newick syntax, and the builder assembles whatever tree structure it wants.
//!
//! # Built-in implementation
//! * [`PhyloTreeBuilder`] - Builds a [`PhyloTree`]
//!
//! # Builder lifecycle
//! A builder can construct multiple trees sequentially:
//!
//! ```text
//! Empty ──→ init_next() ──→ Building ──→ add_leaf/add_internal ──→ finish_tree() ──→ Empty
//!   ↑                                                                                 │
//!   └─────────────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::model::clade::BranchLength;
use crate::model::tree::{CladeIndex, PhyloTree};

// =#========================================================================#=
// TREE BUILDER (trait)
// =#========================================================================#=
/// Abstraction for constructing trees during parsing.
///
/// The parser drives the lifecycle:
///
/// 1. [`init_next`](Self::init_next) -> prepare for a new tree
/// 2. [`add_leaf`](Self::add_leaf), [`add_internal`](Self::add_internal) -> build structure bottom-up
/// 3. [`finish_tree`](Self::finish_tree) -> designate the root, finalize and return the tree
pub trait TreeBuilder {
    /// The type used to identify clades during construction.
    ///
    /// Returned by the `add_*` methods, then passed to subsequent calls to
    /// connect parent-child relationships.
    type CladeIdx: Copy;

    /// The tree type produced by this builder.
    type Tree;

    /// Prepares the builder for constructing a new tree.
    ///
    /// # Arguments
    /// * `num_clades` — Expected number of clades (hint for allocation)
    fn init_next(&mut self, num_clades: usize);

    /// Adds a terminal clade.
    ///
    /// # Arguments
    /// * `name` — Label, if the Newick string provides a non-empty one
    /// * `branch_len` — Branch length to parent, if specified
    fn add_leaf(&mut self, name: Option<String>, branch_len: Option<BranchLength>) -> Self::CladeIdx;

    /// Adds a clade with the given ordered children.
    ///
    /// The children are indices returned by previous `add_*` calls.
    fn add_internal(
        &mut self,
        children: &[Self::CladeIdx],
        name: Option<String>,
        branch_len: Option<BranchLength>,
    ) -> Self::CladeIdx;

    /// Designates `root` as root, finalizes the building process and returns
    /// the resulting tree.
    ///
    /// Returns `None` if [`init_next`](Self::init_next) was not called.
    fn finish_tree(&mut self, root: Self::CladeIdx) -> Option<Self::Tree>;
}

// =#========================================================================#=
// PHYLO TREE BUILDER
// =#========================================================================#=
/// [TreeBuilder] producing [PhyloTree]s.
#[derive(Debug, Default)]
pub struct PhyloTreeBuilder {
    current_tree: Option<PhyloTree>,
}

impl PhyloTreeBuilder {
    pub fn new() -> Self {
        Self { current_tree: None }
    }

    fn tree_mut(&mut self) -> &mut PhyloTree {
        // Tolerate a missing init_next() call
        self.current_tree.get_or_insert_with(|| PhyloTree::new(0))
    }
}

impl TreeBuilder for PhyloTreeBuilder {
    type CladeIdx = CladeIndex;
    type Tree = PhyloTree;

    fn init_next(&mut self, num_clades: usize) {
        self.current_tree = Some(PhyloTree::new(num_clades));
    }

    fn add_leaf(&mut self, name: Option<String>, branch_len: Option<BranchLength>) -> CladeIndex {
        self.tree_mut().add_clade(name, branch_len)
    }

    fn add_internal(
        &mut self,
        children: &[CladeIndex],
        name: Option<String>,
        branch_len: Option<BranchLength>,
    ) -> CladeIndex {
        let tree = self.tree_mut();
        let index = tree.add_clade(name, branch_len);
        for &child in children {
            tree.attach(index, child);
        }
        index
    }

    fn finish_tree(&mut self, root: CladeIndex) -> Option<PhyloTree> {
        let mut tree = self.current_tree.take()?;
        tree.set_root(root);
        Some(tree)
    }
}
