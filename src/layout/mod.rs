//! Dendrogram layout: from a parsed tree to positioned clades.
//!
//! The pipeline runs in this order:
//! 1. [Preprocessor] - root designation, unclassified splice, depth trim;
//!    builds a new tree
//! 2. [NameResolver] - every clade gets a display name
//! 3. [CoordinateAssigner] - x and y for every clade
//!
//! [Dendrogram] runs all three and hands the result to the
//! [figure](crate::figure) module.

pub mod coordinates;
pub mod naming;
pub mod preprocess;

pub use coordinates::{CoordinateAssigner, Point, Positions, place_unclassified};
pub use naming::{NameResolver, SYNTHETIC_NAME_PREFIX};
pub use preprocess::{Preprocessed, Preprocessor, ROOT_NAME, UNCLASSIFIED_NAME};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::figure::Figure;
use crate::model::{Clade, CladeIndex, PhyloTree};
use crate::newick;
use tracing::debug;

/// A laid-out tree, ready to be turned into a [Figure].
///
/// # Example
/// ```
/// use cladogram::LayoutConfig;
/// use cladogram::layout::Dendrogram;
///
/// let dendrogram = Dendrogram::from_newick("(A,B,(C,D)E)F;", &LayoutConfig::default())?;
/// let c = dendrogram.position_of("C").unwrap();
/// assert_eq!((c.x, c.y), (2.0, 2.0));
/// # Ok::<(), cladogram::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dendrogram {
    tree: PhyloTree,
    unclassified: Option<CladeIndex>,
    positions: Positions,
    show_labels: bool,
}

impl Dendrogram {
    /// Normalizes spaces, parses the Newick string and lays out the tree.
    ///
    /// # Errors
    /// [Error::InvalidInput](crate::Error::InvalidInput) if the string is not
    /// valid Newick. No layout work is done in that case.
    pub fn from_newick(newick: &str, config: &LayoutConfig) -> Result<Self> {
        let parsed = newick::parse_str(newick::normalize_whitespace(newick))?;
        debug!(clades = parsed.num_clades(), "parsed Newick string");
        Ok(Self::from_tree(&parsed, config))
    }

    /// Lays out a parsed tree; the tree itself is not modified.
    ///
    /// # Panics
    /// Panics if the root of `parsed` is not set.
    pub fn from_tree(parsed: &PhyloTree, config: &LayoutConfig) -> Self {
        let preprocessed = Preprocessor::new(config.display_level).apply(parsed);
        let (mut tree, unclassified) = preprocessed.into_parts();

        let mut resolver = NameResolver::new();
        resolver.name_all(&mut tree);
        if let Some(index) = unclassified {
            resolver.resolve_name(&mut tree[index]);
        }

        let mut positions = CoordinateAssigner::new(&tree).assign();
        if let Some(index) = unclassified {
            positions.insert(index, place_unclassified(&positions));
        }
        debug!(positioned = positions.len(), "assigned coordinates");

        Self {
            tree,
            unclassified,
            positions,
            show_labels: config.show_labels,
        }
    }

    /// Returns the preprocessed and fully named tree.
    pub fn tree(&self) -> &PhyloTree {
        &self.tree
    }

    /// Returns the positions of all tree clades and of the unclassified clade.
    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    /// Returns the spliced-out unclassified clade, if any.
    pub fn unclassified(&self) -> Option<&Clade> {
        self.unclassified.map(|index| &self.tree[index])
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    /// Returns the position of the first clade in level order with the given
    /// name, falling back to the unclassified clade.
    pub fn position_of(&self, name: &str) -> Option<Point> {
        self.tree
            .find_by_name(name)
            .or_else(|| self.unclassified.filter(|&index| self.tree[index].is_named(name)))
            .and_then(|index| self.positions.get(index))
    }

    /// Builds the figure: traces, bounds and axis layout.
    pub fn figure(&self) -> Figure {
        Figure::from_dendrogram(self)
    }
}
