//! Clade module for phylogenetic tree representation.

use crate::model::tree::CladeIndex;
use std::ops::Deref;

/// Edge length substituted for missing or zero branch lengths.
pub const DEFAULT_EDGE_LENGTH: f64 = 1.0;

// =#========================================================================#=
// CLADE
// =#========================================================================#=
/// Represents a clade (node) in a phylogenetic tree.
///
/// A clade has an arbitrary number of ordered children; the order is the
/// traversal order used by the layout. A clade without children is terminal.
///
/// # Invariants
/// - `index` is the position of the clade in its tree's arena
/// - `branch_length` is non-negative and finite (enforced by [BranchLength]); might not be set
/// - `parent` is `None` for the root and for clades detached from the tree
/// - `name` is never `Some("")`; empty labels are stored as `None`
#[derive(PartialEq, Debug, Clone)]
pub struct Clade {
    /// Index of this clade in the tree arena
    index: CladeIndex,
    /// Label of this clade, if any
    name: Option<String>,
    /// Distance to parent clade (optional, non-negative if present)
    branch_length: Option<BranchLength>,
    /// Index of the parent clade
    parent: Option<CladeIndex>,
    /// Indices of the child clades, in traversal order
    children: Vec<CladeIndex>,
}

impl Clade {
    /// Creates a new clade without parent and children.
    ///
    /// # Arguments
    /// * `index` - The unique index of this clade in the tree (arena)
    /// * `name` - Label of the clade; an empty string counts as unnamed
    /// * `branch_length` - Distance to parent clade
    pub fn new(index: CladeIndex, name: Option<String>, branch_length: Option<BranchLength>) -> Self {
        Clade {
            index,
            name: name.filter(|n| !n.is_empty()),
            branch_length,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the index of this clade.
    pub fn index(&self) -> CladeIndex {
        self.index
    }

    /// Returns the name of this clade, or `None` if unnamed.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if this clade carries the given name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Sets the name of this clade; an empty string unsets it.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
    }

    /// Returns the branch length, if set.
    pub fn branch_length(&self) -> Option<BranchLength> {
        self.branch_length
    }

    /// Returns the length of the edge to the parent as used for layout:
    /// the branch length, or [DEFAULT_EDGE_LENGTH] if it is missing or zero.
    pub fn edge_length(&self) -> f64 {
        match self.branch_length {
            Some(length) if *length > 0.0 => *length,
            _ => DEFAULT_EDGE_LENGTH,
        }
    }

    /// Returns the indices of the children, in order.
    pub fn children(&self) -> &[CladeIndex] {
        &self.children
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this clade has no children.
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the index of the parent, or `None` for a root or detached clade.
    pub fn parent_index(&self) -> Option<CladeIndex> {
        self.parent
    }

    /// Returns `true` if this clade has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub(crate) fn set_parent(&mut self, parent: CladeIndex) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: CladeIndex) {
        self.children.push(child);
    }
}

// =#========================================================================#=
// BRANCH LENGTH
// =#========================================================================#=
/// Branch length in a phylogenetic tree, enforced non-negative.
///
/// Represents the evolutionary distance between a clade and its parent.
/// The value is guaranteed to be non-negative and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchLength(f64);

impl BranchLength {
    /// Creates a new branch length.
    ///
    /// # Panics
    /// Panics if `length` is negative or not finite.
    pub fn new(length: f64) -> Self {
        assert!(length >= 0.0, "Branch length must be non-negative, got {}", length);
        assert!(length.is_finite(), "Branch length must be finite, got {}", length);
        BranchLength(length)
    }

    /// Creates a new branch length, or `None` if `length` is negative or not finite.
    pub fn try_new(length: f64) -> Option<Self> {
        (length >= 0.0 && length.is_finite()).then_some(BranchLength(length))
    }
}

impl Deref for BranchLength {
    type Target = f64;
    fn deref(&self) -> &f64 {
        &self.0
    }
}
