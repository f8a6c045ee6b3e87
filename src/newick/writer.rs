//! Newick format writing for [PhyloTree]s.

use crate::model::tree::{CladeIndex, PhyloTree};
use crate::newick::defs::{BYTES_PER_CLADE_GUESS, NEWICK_QUOTE_TRIGGERS};

/// Returns the Newick representation of the tree with closing semicolon.
///
/// Labels are written as stored and single quoted when they contain
/// whitespace or Newick punctuation. Branch lengths are written as given;
/// missing ones are omitted. Clades detached from the root are not written.
///
/// # Example
/// ```
/// use cladogram::newick::{parse_str, to_newick};
///
/// let tree = parse_str("(A:1,'B b':2,(C,D)E)F;").unwrap();
/// assert_eq!(to_newick(&tree), "(A:1,'B b':2,(C,D)E)F;");
/// ```
pub fn to_newick(tree: &PhyloTree) -> String {
    let mut newick = String::with_capacity(tree.num_clades() * BYTES_PER_CLADE_GUESS);
    if !tree.is_root_set() {
        newick.push(';');
        return newick;
    }

    let mut stack = vec![WriteStep::Open(tree.root_index())];
    while let Some(step) = stack.pop() {
        match step {
            WriteStep::Open(index) => {
                let clade = &tree[index];
                if clade.is_terminal() {
                    write_label(tree, index, &mut newick);
                    continue;
                }

                newick.push('(');
                stack.push(WriteStep::Close(index));
                for (i, &child) in clade.children().iter().enumerate().rev() {
                    stack.push(WriteStep::Open(child));
                    if i > 0 {
                        stack.push(WriteStep::Separator);
                    }
                }
            }
            WriteStep::Separator => newick.push(','),
            WriteStep::Close(index) => {
                newick.push(')');
                write_label(tree, index, &mut newick);
            }
        }
    }

    newick.push(';');
    newick
}

/// Pending output while writing; the stack replaces recursion.
enum WriteStep {
    Open(CladeIndex),
    Separator,
    Close(CladeIndex),
}

/// Writes the label and branch length of a clade.
fn write_label(tree: &PhyloTree, index: CladeIndex, newick: &mut String) {
    let clade = &tree[index];

    if let Some(name) = clade.name() {
        newick.push_str(&escape_label(name));
    }

    if let Some(branch_length) = clade.branch_length() {
        newick.push(':');
        newick.push_str(&(*branch_length).to_string());
    }
}

/// Wraps labels containing special characters in single quotes,
/// doubling internal single quotes.
fn escape_label(label: &str) -> String {
    if label.contains(NEWICK_QUOTE_TRIGGERS) {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.to_string()
    }
}
