//! Constants for the Newick parser and writer.

/// Newick label delimiters: parentheses, brackets, comma, colon, semicolon, whitespace
pub(crate) const NEWICK_LABEL_DELIMITERS: &[u8] = b"([,:; \n\t\r)]";

/// Characters that force a label to be single quoted when written
pub(crate) const NEWICK_QUOTE_TRIGGERS: &[char] = &[' ', ',', ';', '\t', '\n', '\r', '(', ')', ':', '[', ']', '\''];

/// Default guess for number of clades, when unknown
pub(crate) const DEFAULT_NUM_CLADES_GUESS: usize = 16;

/// Rough number of input bytes per clade, used to size the arena
pub(crate) const BYTES_PER_CLADE_GUESS: usize = 4;
