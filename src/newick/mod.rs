//! Newick format parser and writer for phylogenetic trees.
//!
//! This module provides [NewickParser] to parse a Newick string into a
//! [PhyloTree], and [to_newick] to write one back. The parser uses a
//! [TreeBuilder](crate::model::TreeBuilder) internally.
//!
//! # Quick API
//! * [`parse_str`] - parses a single string, returns a [PhyloTree]
//! * [`normalize_whitespace`] - replaces spaces by underscores, as done by the
//!   layout pipeline before parsing
//!
//! # Format
//! The Newick format has the following grammar:
//! * `tree ::= clade ';'`
//! * `clade ::= '(' clade {',' clade} ')' [label] [branch_length] | [label] [branch_length]`
//! * `branch_length ::= ':' number`
//!
//! Furthermore:
//! * Whitespace can occur between elements,
//!   just not within an unquoted label or a branch_length
//! * Comments are square brackets and can occur anywhere where whitespace is allowed
//! * Extended Newick annotations (`[&rate=0.5]`) are treated as comments

mod defs;
pub mod parser;
pub mod writer;

pub use parser::NewickParser;
pub use writer::to_newick;

use crate::model::PhyloTree;
use crate::parser::ParsingError;
use crate::parser::byte_parser::ByteParser;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single Newick string to obtain a [PhyloTree].
///
/// The string is parsed verbatim; see [normalize_whitespace] for the
/// normalization the layout pipeline applies first.
///
/// # Returns
/// * [PhyloTree] - Tree parsed from the string
/// * [ParsingError] - If the string is empty or not valid Newick format
///
/// # Example
/// ```
/// use cladogram::newick::parse_str;
///
/// let tree = parse_str("(Fratercula_cirrhata,(Fratercula_arctica,Fratercula_corniculata));")?;
/// assert_eq!(tree.num_terminals(), 3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<PhyloTree, ParsingError> {
    let newick = newick.as_ref();
    let mut byte_parser = ByteParser::for_str(newick);
    NewickParser::new_defaults()
        .with_num_clades(estimate_num_clades(newick))
        .parse_str(&mut byte_parser)
}

/// Replaces every space character by an underscore.
///
/// Names can therefore not distinguish spaces from underscores. Other
/// whitespace (tabs, newlines) is left alone and separates tokens.
///
/// ```
/// use cladogram::newick::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("(Homo sapiens, Pan);"), "(Homo_sapiens,_Pan);");
/// ```
pub fn normalize_whitespace(newick: &str) -> String {
    newick.replace(' ', "_")
}

/// Upper bound guess for the number of clades: every clade but the first
/// is preceded by `(` or `,`.
fn estimate_num_clades(newick: &str) -> usize {
    1 + newick.bytes().filter(|&b| b == b'(' || b == b',').count()
}
