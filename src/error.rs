//! Crate-level error type.

use crate::parser::ParsingError;

/// Errors surfaced by the public API.
///
/// Only the parsing boundary and configuration loading can fail; once a tree
/// has been parsed, preprocessing, coordinate assignment and trace generation
/// always succeed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid Newick input: {0}")]
    InvalidInput(#[from] ParsingError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid display level '{0}': expected a non-negative integer or \"unlimited\"")]
    InvalidDisplayLevel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
