//! Cladogram is a library to lay out phylogenetic trees given as Newick
//! strings as rectangular dendrograms.
//!
//! Core functionality provided:
//! - Newick: Parse a single Newick string of arbitrary arity (polytomies,
//!   internal labels, quoted labels, comments) into a [PhyloTree], and write
//!   it back.
//! - Preprocessing: A clade named `"root"` becomes the root; a child of the
//!   root named `"unclassified"` is flattened into the root and drawn apart;
//!   the tree can be cut off at a given depth.
//! - Layout: Every clade gets an x-coordinate (sum of branch lengths from the
//!   root, missing lengths count as 1) and a y-coordinate (terminals numbered
//!   left to right, other clades at the mean of their children).
//! - Figure: One marker per clade and two lines per edge ("elbow"), plus axis
//!   ranges, serializable to the JSON shape of a Plotly figure.
//!
//! # Usage patterns
//! 1. [create_phylogenetic_tree] runs the whole pipeline.
//! 2. [Dendrogram](layout::Dendrogram) gives access to the laid-out tree and
//!    the positions; the individual stages live in [crate::layout] and
//!    [crate::figure].
//!
//! ## Example
//! ```
//! use cladogram::{DisplayLevel, LayoutConfig, create_phylogenetic_tree};
//!
//! let config = LayoutConfig::new().with_display_level(DisplayLevel::Depth(2));
//! let figure = create_phylogenetic_tree("((B:0.2,(C:0.3,D:0.4)E:0.5)F:0.1)A;", &config)?;
//!
//! // A, F, B and E remain
//! assert_eq!(figure.markers().count(), 4);
//! println!("{}", figure.to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod figure;
pub mod layout;
pub mod model;
pub mod newick;
pub mod parser;

pub use config::{DisplayLevel, LayoutConfig};
pub use error::{Error, Result};
pub use figure::Figure;
pub use model::PhyloTree;

use crate::layout::Dendrogram;

/// Lays out the tree given as Newick string and returns its [Figure].
///
/// Spaces in the string are replaced by underscores before parsing.
///
/// # Errors
/// [Error::InvalidInput] if the string is empty or not valid Newick.
pub fn create_phylogenetic_tree(newick: &str, config: &LayoutConfig) -> Result<Figure> {
    Dendrogram::from_newick(newick, config).map(|dendrogram| dendrogram.figure())
}
