//! Byte source abstractions for parsing.
//!
//! This module provides the [ByteSource] trait and the [InMemoryByteSource]
//! implementation used by [ByteParser](crate::parser::ByteParser).

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================#=
/// Trait defining the interface for different byte sources used by ByteParser.
///
/// Newick strings handed to the layout pipeline are always held in memory,
/// but keeping the seam lets the parser logic stay independent of where the
/// bytes come from.
pub trait ByteSource {
    /// Peek at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn peek(&self) -> Option<u8>;

    /// Get the current byte and advance the position (consume it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn next_byte(&mut self) -> Option<u8>;

    /// Returns the current position in the byte stream.
    fn position(&self) -> usize;

    /// Returns up to `k` bytes from the current position for error context.
    fn get_context(&self, k: usize) -> Vec<u8>;

    /// Check if at end of data.
    fn is_eof(&self) -> bool;
}

// =#========================================================================#=
// IN MEMORY BYTE SOURCE
// =#========================================================================#=
/// An in-memory byte source that owns its data.
pub struct InMemoryByteSource {
    /// The owned byte data being parsed
    input: Vec<u8>,
    /// Current position in the byte slice
    pos: usize,
}

impl InMemoryByteSource {
    /// Creates a new in-memory byte source from a Vec of bytes.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { input: bytes, pos: 0 }
    }
}

impl ByteSource for InMemoryByteSource {
    #[inline(always)]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline(always)]
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    fn get_context(&self, k: usize) -> Vec<u8> {
        let start = self.pos.min(self.input.len());
        let end = (self.pos + k).min(self.input.len());
        self.input[start..end].to_vec()
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}
