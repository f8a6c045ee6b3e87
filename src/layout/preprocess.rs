//! Root designation, unclassified splice and depth trim.
//!
//! The parsed tree is never modified: [Preprocessor::apply] copies the
//! retained clades into a fresh [PhyloTree] with the rewired structure.

use crate::config::DisplayLevel;
use crate::model::{Clade, CladeIndex, PhyloTree};
use tracing::debug;

/// Name marking the clade to use as root.
pub const ROOT_NAME: &str = "root";

/// Name of the root child that is flattened into the root and drawn apart.
pub const UNCLASSIFIED_NAME: &str = "unclassified";

/// Result of preprocessing: the tree to lay out and, if one was spliced
/// out, the unclassified clade.
///
/// The unclassified clade lives in the same arena as the tree but is
/// detached: it has neither parent nor children, and no traversal from the
/// root reaches it.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    tree: PhyloTree,
    unclassified: Option<CladeIndex>,
}

impl Preprocessed {
    pub fn tree(&self) -> &PhyloTree {
        &self.tree
    }

    /// Returns the detached unclassified clade.
    pub fn unclassified(&self) -> Option<&Clade> {
        self.unclassified.map(|index| &self.tree[index])
    }

    pub fn into_parts(self) -> (PhyloTree, Option<CladeIndex>) {
        (self.tree, self.unclassified)
    }
}

/// Builds the tree to lay out from a parsed tree:
///
/// 1. **Root designation**: the first clade in level order named
///    [ROOT_NAME] becomes the root and everything outside its subtree is
///    dropped. Otherwise the parsed root is kept and named [ROOT_NAME] if
///    it is unnamed.
/// 2. **Unclassified splice**: the first child of the root named
///    [UNCLASSIFIED_NAME] is removed, its children are appended to the
///    children of the root, and it is kept as a detached, childless clade.
///    Further children with that name are ordinary clades.
/// 3. **Depth trim**: clades at depth `>=` the [DisplayLevel] limit (root at
///    depth 0) keep no children.
///
/// Names, branch lengths and child order are copied unchanged.
///
/// # Example
/// ```
/// use cladogram::layout::Preprocessor;
/// use cladogram::newick::{parse_str, to_newick};
/// use cladogram::DisplayLevel;
///
/// let parsed = parse_str("(X,(Y,Z)unclassified);").unwrap();
/// let result = Preprocessor::new(DisplayLevel::Unlimited).apply(&parsed);
/// assert_eq!(to_newick(result.tree()), "(X,Y,Z)root;");
/// assert_eq!(result.unclassified().and_then(|c| c.name()), Some("unclassified"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Preprocessor {
    display_level: DisplayLevel,
}

impl Preprocessor {
    pub fn new(display_level: DisplayLevel) -> Self {
        Self { display_level }
    }

    /// Returns a new, rewired tree; `parsed` is left untouched.
    ///
    /// # Panics
    /// Panics if the root of `parsed` is not set.
    pub fn apply(&self, parsed: &PhyloTree) -> Preprocessed {
        let source_root = match parsed.find_by_name(ROOT_NAME) {
            Some(index) => {
                if index != parsed.root_index() {
                    debug!(clade = index, "reassigned root to clade named '{ROOT_NAME}'");
                }
                index
            }
            None => parsed.root_index(),
        };

        let root_children = parsed[source_root].children();
        let unclassified_source = root_children
            .iter()
            .copied()
            .find(|&child| parsed[child].is_named(UNCLASSIFIED_NAME));

        // Children of the new root, in the source tree
        let mut top_level: Vec<CladeIndex> = root_children
            .iter()
            .copied()
            .filter(|&child| Some(child) != unclassified_source)
            .collect();
        if let Some(unclassified) = unclassified_source {
            top_level.extend_from_slice(parsed[unclassified].children());
            debug!(
                spliced = parsed[unclassified].num_children(),
                "flattened '{UNCLASSIFIED_NAME}' into root"
            );
        }

        let mut tree = PhyloTree::new(parsed.num_clades());
        let root = copy_clade(parsed, source_root, &mut tree);
        if tree[root].name().is_none() {
            tree[root].set_name(ROOT_NAME);
        }
        tree.set_root(root);

        // (source clade, new parent, depth of source clade in new tree)
        let mut stack: Vec<(CladeIndex, CladeIndex, usize)> = Vec::new();
        let mut trimmed = 0;
        if self.display_level.keeps_children_at(0) {
            stack.extend(top_level.iter().rev().map(|&child| (child, root, 1)));
        } else if !top_level.is_empty() {
            trimmed += 1;
        }

        while let Some((source, parent, depth)) = stack.pop() {
            let index = copy_clade(parsed, source, &mut tree);
            tree.attach(parent, index);

            let children = parsed[source].children();
            if self.display_level.keeps_children_at(depth) {
                stack.extend(children.iter().rev().map(|&child| (child, index, depth + 1)));
            } else if !children.is_empty() {
                trimmed += 1;
            }
        }

        let unclassified = unclassified_source.map(|source| copy_clade(parsed, source, &mut tree));

        debug!(
            clades = tree.num_terminals() + tree.num_internal(),
            trimmed,
            display_level = %self.display_level,
            "preprocessed tree"
        );

        Preprocessed { tree, unclassified }
    }
}

/// Adds a childless, detached copy of the source clade to `tree`.
fn copy_clade(source: &PhyloTree, index: CladeIndex, tree: &mut PhyloTree) -> CladeIndex {
    let clade = &source[index];
    tree.add_clade(clade.name().map(str::to_string), clade.branch_length())
}
