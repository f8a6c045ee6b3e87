//! Low-level byte-by-byte parser for Newick text.
//!
//! This module provides [ByteParser] with support for peeking, consuming,
//! comment skipping and quote-aware label parsing. It is the foundation of
//! the [NewickParser](crate::newick::NewickParser).

use crate::parser::byte_source::{ByteSource, InMemoryByteSource};
use crate::parser::parsing_error::ParsingError;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser with support for peeking, consuming, and label parsing.
///
/// # Features
/// - Works with any [ByteSource]
/// - Whitespace and `[...]` comment skipping
/// - Quote-aware label parsing (single quotes with `''` escaping)
/// - Context extraction for error reporting
///
/// Labels are collected as raw bytes and decoded as UTF-8 (lossy), so
/// non-ASCII taxon names survive parsing unchanged.
///
/// # Example
/// ```
/// use cladogram::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("[comment] 'Taxon one':1.5");
/// parser.skip_comment_and_whitespace().unwrap();
/// let label = parser.parse_label(b"(),:;").unwrap();
/// assert_eq!(label, "Taxon one");
/// assert!(parser.consume_if(b':'));
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new `ByteParser` from a string slice by copying it.
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    #[inline(always)]
    pub fn next(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Skips (consumes) all consecutive whitespace characters.
    ///
    /// Whitespace includes: space (' '), tab ('\t'), newline ('\n'), and carriage return ('\r').
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
                self.next();
            } else {
                break;
            }
        }
    }

    /// Skips (consumes) a comment if present.
    ///
    /// Comments are enclosed in square brackets `[...]`.
    ///
    /// # Returns
    /// * `Ok(true)` - A comment was found and consumed
    /// * `Ok(false)` - No comment at current position
    /// * `Err(ParsingError)` - Comment was opened but never closed
    pub fn skip_comment(&mut self) -> Result<bool, ParsingError> {
        if self.consume_if(b'[') {
            if !self.consume_until(b']') {
                return Err(ParsingError::unclosed_comment(self));
            }
            return Ok(true);
        }

        Ok(false)
    }

    /// Skips (consumes) all consecutive whitespace and comments.
    ///
    /// # Errors
    /// Returns an error if an unclosed comment is encountered.
    pub fn skip_comment_and_whitespace(&mut self) -> Result<(), ParsingError> {
        self.skip_whitespace();

        while self.skip_comment()? {
            self.skip_whitespace();
        }

        Ok(())
    }

    /// Checks if the current byte matches the target byte.
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek() == Some(ch)
    }

    /// Consumes the current byte if it matches the target byte.
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consumes bytes up to and including the target byte.
    ///
    /// # Returns
    /// `true` if the target was found, `false` if EOF was reached first
    pub fn consume_until(&mut self, target: u8) -> bool {
        while let Some(b) = self.next() {
            if b == target {
                return true;
            }
        }
        false
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Returns the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns up to `k` bytes from the current position for error context.
    pub fn get_context(&self, k: usize) -> Vec<u8> {
        self.source.get_context(k)
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    pub fn get_context_as_string(&self, k: usize) -> String {
        String::from_utf8_lossy(&self.get_context(k)).into_owned()
    }

    /// Parses a label (quoted or unquoted) with the given delimiter set.
    ///
    /// Detects whether the label is quoted (single quotes) or unquoted and
    /// calls the appropriate method. An empty string is returned if the
    /// parser sits directly on a delimiter.
    ///
    /// # Errors
    /// Returns an error if a comment or a quoted label is not closed.
    pub fn parse_label(&mut self, delimiters: &[u8]) -> Result<String, ParsingError> {
        self.skip_comment_and_whitespace()?;

        if self.peek() == Some(b'\'') {
            self.parse_quoted_label()
        } else {
            Ok(self.parse_unquoted_label(delimiters))
        }
    }

    /// Parses a quoted label enclosed in single quotes with escape support.
    ///
    /// Assumes the opening quote has not been consumed yet. Single quotes within
    /// the label are escaped by doubling them (e.g., `'Wilson''s'` becomes `Wilson's`).
    ///
    /// # Errors
    /// Returns an error if the quoted label is not properly closed
    pub fn parse_quoted_label(&mut self) -> Result<String, ParsingError> {
        self.next(); // consume opening '

        let mut label = Vec::new();
        loop {
            match self.next() {
                Some(b'\'') => {
                    // Escaped quote (two single quotes in a row)
                    if self.peek() == Some(b'\'') {
                        label.push(b'\'');
                        self.next();
                    } else {
                        break;
                    }
                }
                Some(b) => label.push(b),
                None => return Err(ParsingError::unclosed_quoted_label(self)),
            }
        }

        Ok(String::from_utf8_lossy(&label).into_owned())
    }

    /// Parses an unquoted label until any of the given delimiters (or EOF) is encountered.
    pub fn parse_unquoted_label(&mut self, delimiters: &[u8]) -> String {
        let mut label = Vec::new();

        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            label.push(b);
            self.next();
        }

        String::from_utf8_lossy(&label).into_owned()
    }
}
