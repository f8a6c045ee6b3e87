//! Data model for rooted phylogenetic trees of arbitrary arity.
//!
//! # Tree representation
//! Trees are represented by [PhyloTree], which uses the arena pattern to store
//! [Clade] nodes referenced by [CladeIndex]. Clades have an ordered list of
//! children, so polytomies and single-child clades are representable.
//!
//! # Building trees
//! Trees are typically constructed during parsing via the [TreeBuilder]
//! trait, which decouples the parser from the concrete tree type. The
//! [PhyloTreeBuilder] builds a [PhyloTree]; you can implement [TreeBuilder]
//! to construct your own tree representation while reusing the parser.

pub mod clade;
pub mod tree;
pub mod tree_builder;

pub use clade::{BranchLength, Clade, DEFAULT_EDGE_LENGTH};
pub use tree::{CladeIndex, LevelOrderIter, PhyloTree, PostOrderIter, PreOrderIter};
pub use tree_builder::{PhyloTreeBuilder, TreeBuilder};
