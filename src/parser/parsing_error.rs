//! Error types for the Newick parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading a Newick string.

use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur during Newick parsing.
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum ParsingErrorType {
    #[error("Empty input")]
    EmptyInput,
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("Unclosed comment")]
    UnclosedComment,
    #[error("Unclosed quoted label")]
    UnclosedQuotedLabel,
    #[error("Invalid newick string: {0}")]
    InvalidNewickString(String),
    #[error("Invalid branch length: {0}")]
    InvalidBranchLength(String),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and following bytes).
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
#[error("{kind} at position {position}{}", context_suffix(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

fn context_suffix(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} bytes): {}", context.len(), context)
    }
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: ParsingErrorType, parser: &ByteParser<S>) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for EmptyInput
    pub fn empty_input<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::EmptyInput, parser)
    }

    /// Convenience constructor for UnexpectedEof
    pub fn unexpected_eof<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedEof, parser)
    }

    /// Convenience constructor for UnclosedComment
    pub fn unclosed_comment<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnclosedComment, parser)
    }

    /// Convenience constructor for UnclosedQuotedLabel
    pub fn unclosed_quoted_label<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnclosedQuotedLabel, parser)
    }

    /// Convenience constructor for InvalidNewickString
    pub fn invalid_newick_string<S: ByteSource>(parser: &ByteParser<S>, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidNewickString(msg), parser)
    }

    /// Convenience constructor for InvalidBranchLength
    pub fn invalid_branch_length<S: ByteSource>(parser: &ByteParser<S>, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidBranchLength(msg), parser)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input following the error position (may be empty)
    pub fn context(&self) -> &str {
        &self.context
    }
}
