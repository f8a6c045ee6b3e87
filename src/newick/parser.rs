//! Structs and logic to parse Newick strings.
//!
//! This module provides the [NewickParser] struct, which parses a single
//! Newick tree of arbitrary arity from a [ByteParser].

use crate::model::clade::BranchLength;
use crate::model::tree_builder::{PhyloTreeBuilder, TreeBuilder};
use crate::newick::defs::{DEFAULT_NUM_CLADES_GUESS, NEWICK_LABEL_DELIMITERS};
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::ParsingError;

// =#========================================================================#=
// NEWICK PARSER
// =#========================================================================#=
/// Parser (configuration) for a Newick format phylogenetic tree.
///
/// Generic over [TreeBuilder] (construction).
///
/// # Construction
/// * [`new(tree_builder)`](Self::new) — generic constructor
/// * [`new_defaults()`](Self::new_defaults) — uses [PhyloTreeBuilder]
///
/// # Configuration
/// * [`with_num_clades(num_clades)`](Self::with_num_clades)
///     - Expected number of clades, used to pre-allocate the tree.
///
/// # Format
/// * `tree ::= clade ';'`
/// * `clade ::= '(' clade {',' clade} ')' [label] [branch_length] | [label] [branch_length]`
/// * `branch_length ::= ':' number`
///
/// Furthermore:
/// * Any number of children per clade (polytomies, single children)
/// * Labels may be empty, quoted (`'It''s'`) or unquoted
/// * Whitespace and `[...]` comments can occur between elements
/// * Nothing but whitespace and comments may follow the closing `;`
///
/// # Example
/// ```
/// use cladogram::newick::NewickParser;
/// use cladogram::parser::ByteParser;
///
/// let mut byte_parser = ByteParser::for_str("(A,B,(C,D)E)F;");
/// let tree = NewickParser::new_defaults().parse_str(&mut byte_parser).unwrap();
/// assert_eq!(tree.root().name(), Some("F"));
/// assert_eq!(tree.root().num_children(), 3);
/// ```
pub struct NewickParser<T: TreeBuilder> {
    num_clades: usize,
    tree_builder: T,
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl<T: TreeBuilder> NewickParser<T> {
    /// Creates a new [NewickParser] with the given tree builder.
    pub fn new(tree_builder: T) -> Self {
        Self {
            num_clades: DEFAULT_NUM_CLADES_GUESS,
            tree_builder,
        }
    }

    /// Sets the expected number of clades of the parsed tree.
    ///
    /// This allows pre-allocation of the tree for better performance.
    pub fn with_num_clades(mut self, num_clades: usize) -> Self {
        self.num_clades = num_clades;
        self
    }
}

impl NewickParser<PhyloTreeBuilder> {
    /// Creates a new [NewickParser] building a [PhyloTree](crate::model::PhyloTree).
    pub fn new_defaults() -> Self {
        Self::new(PhyloTreeBuilder::new())
    }
}

impl Default for NewickParser<PhyloTreeBuilder> {
    fn default() -> Self {
        Self::new_defaults()
    }
}

// ============================================================================
// Parsing (pub)
// ============================================================================
impl<T: TreeBuilder> NewickParser<T> {
    /// Parses a single Newick tree from the given [ByteParser].
    ///
    /// # Returns
    /// * `Ok(T::Tree)` - The parsed phylogenetic tree
    /// * `Err(ParsingError)` - If the input is empty or not valid Newick
    pub fn parse_str<S: ByteSource>(&mut self, parser: &mut ByteParser<S>) -> Result<T::Tree, ParsingError> {
        parser.skip_comment_and_whitespace()?;
        if parser.is_eof() {
            return Err(ParsingError::empty_input(parser));
        }

        self.tree_builder.init_next(self.num_clades);
        let root = self.parse_clade(parser)?;

        parser.skip_comment_and_whitespace()?;
        if !parser.consume_if(b';') {
            return Err(ParsingError::invalid_newick_string(
                parser,
                format!("Expected ';' at end of tree but found {:?}", parser.peek().map(|b| b as char)),
            ));
        }

        parser.skip_comment_and_whitespace()?;
        if !parser.is_eof() {
            return Err(ParsingError::invalid_newick_string(
                parser,
                "Unexpected content after ';'".to_string(),
            ));
        }

        self.tree_builder.finish_tree(root).ok_or_else(|| {
            ParsingError::invalid_newick_string(parser, "Tree builder produced no tree".to_string())
        })
    }
}

// ============================================================================
// Parsing helpers (private)
// ============================================================================
impl<T: TreeBuilder> NewickParser<T> {
    /// Parses the root clade with all its descendants and adds them to the
    /// builder bottom-up.
    ///
    /// Runs on an explicit stack of open child lists, one per `(` not yet
    /// closed, so nesting depth is bounded by memory only:
    /// - `(` opens a new child list
    /// - a terminal is added as soon as its label and branch length are read
    /// - `)` closes the innermost list; the clade is added once its own label
    ///   and branch length follow
    /// - a finished clade is pushed to the enclosing list; with no open list
    ///   left it is the root
    fn parse_clade<S: ByteSource>(&mut self, parser: &mut ByteParser<S>) -> Result<T::CladeIdx, ParsingError> {
        let mut open: Vec<Vec<T::CladeIdx>> = Vec::new();

        loop {
            parser.skip_comment_and_whitespace()?;
            if parser.consume_if(b'(') {
                open.push(Vec::new());
                continue;
            }

            let name = self.parse_name(parser)?;
            let branch_length = self.parse_branch_length(parser)?;
            let mut clade = self.tree_builder.add_leaf(name, branch_length);

            // Attach finished clades until a sibling follows
            loop {
                let Some(mut children) = open.pop() else {
                    return Ok(clade);
                };
                children.push(clade);

                parser.skip_comment_and_whitespace()?;
                if parser.consume_if(b',') {
                    open.push(children);
                    break;
                }
                if parser.consume_if(b')') {
                    let name = self.parse_name(parser)?;
                    let branch_length = self.parse_branch_length(parser)?;
                    clade = self.tree_builder.add_internal(&children, name, branch_length);
                    continue;
                }
                if parser.is_eof() {
                    return Err(ParsingError::unexpected_eof(parser));
                }
                return Err(ParsingError::invalid_newick_string(
                    parser,
                    format!("Expected ',' or ')' after child but found {:?}", parser.peek().map(|b| b as char)),
                ));
            }
        }
    }

    /// Parses an optional (quoted or unquoted) label; empty labels yield `None`.
    fn parse_name<S: ByteSource>(&mut self, parser: &mut ByteParser<S>) -> Result<Option<String>, ParsingError> {
        let label = parser.parse_label(NEWICK_LABEL_DELIMITERS)?;
        Ok(if label.is_empty() { None } else { Some(label) })
    }

    /// Parses optional branch length `[:number]`:
    /// - Skips comments/whitespace before and after `:`
    /// - Supports scientific notation (e.g., `1.5e-10`)
    ///
    /// # Returns
    /// - [BranchLength] if found branch length and was able to parse it
    /// - `None` if found no branch length
    /// - [ParsingError] if the value is not a non-negative finite number
    fn parse_branch_length<S: ByteSource>(&mut self, parser: &mut ByteParser<S>) -> Result<Option<BranchLength>, ParsingError> {
        parser.skip_comment_and_whitespace()?;
        if !parser.consume_if(b':') {
            return Ok(None);
        }
        parser.skip_comment_and_whitespace()?;

        let mut branch_length_str = String::new();
        while let Some(b) = parser.peek() {
            // Valid characters for a float: digits, '.', '-', '+', 'e', 'E'
            if b.is_ascii_digit() || b == b'.' || b == b'-' || b == b'+' || b == b'e' || b == b'E' {
                branch_length_str.push(b as char);
                parser.next();
            } else {
                break;
            }
        }

        let value: f64 = branch_length_str
            .parse()
            .map_err(|_| ParsingError::invalid_branch_length(parser, format!("'{branch_length_str}' is not a number")))?;

        BranchLength::try_new(value)
            .map(Some)
            .ok_or_else(|| ParsingError::invalid_branch_length(parser, format!("{value} is negative or not finite")))
    }
}
