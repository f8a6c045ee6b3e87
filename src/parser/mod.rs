//! Basic low-level byte parser functionality.
//!
//! The [ByteParser] and its [ParsingError] are shared building blocks of the
//! [Newick parser](crate::newick::NewickParser).

pub mod byte_parser;
pub mod byte_source;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
