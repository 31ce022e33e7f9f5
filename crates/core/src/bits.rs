//! Bit packing: characters to a flat bit string, and bit strings to
//! fixed-width chunks.
//!
//! Bits are kept as text over `{'0', '1'}` all the way to the hex layer, so
//! every intermediate value is directly inspectable in tests.
//!
//! # Padding Rules
//! - `chunk`: pads the final partial chunk with trailing zeros
//! - `join`: keeps the padding; the decoding tree discards leftover bits that
//!   do not complete a code
//!
//! # Example
//! ```
//! use vlc_core::bits::{chunk, join, to_bits};
//! use vlc_core::table::CodeTable;
//!
//! let bits = to_bits(CodeTable::standard(), "!bob").unwrap();
//! assert_eq!(bits, "0010000000010100010000010");
//!
//! let chunks = chunk(&bits, 8).unwrap();
//! assert_eq!(chunks.len(), 4);
//! assert_eq!(chunks[3].as_str(), "00000000");
//! assert_eq!(join(&chunks), "00100000000101000100000100000000");
//! ```

use std::fmt;

use crate::error::{PackError, Result};
use crate::table::CodeTable;

/// One fixed-width group of bits, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitChunk(String);

impl BitChunk {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bit characters in the chunk.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for BitChunk {
    fn from(bits: &str) -> Self {
        Self(bits.to_string())
    }
}

impl From<String> for BitChunk {
    fn from(bits: String) -> Self {
        Self(bits)
    }
}

impl fmt::Display for BitChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Concatenate the code of every character in `text`.
///
/// # Errors
/// Returns `PackError::UnknownCharacter` for the first character with no
/// code. Nothing is returned for the rest of the input.
pub fn to_bits(table: &CodeTable, text: &str) -> Result<String> {
    let mut bits = String::with_capacity(text.len() * 4);

    for (position, ch) in text.chars().enumerate() {
        let code = table
            .lookup(ch)
            .ok_or(PackError::UnknownCharacter { ch, position })?;
        bits.push_str(code);
    }

    Ok(bits)
}

/// Split `bits` into chunks of `width`, padding the last one with '0'.
///
/// Empty input produces no chunks.
///
/// # Errors
/// Returns `PackError::InvalidWidth` if `width` is 0.
pub fn chunk(bits: &str, width: usize) -> Result<Vec<BitChunk>> {
    if width == 0 {
        return Err(PackError::InvalidWidth(width).into());
    }

    let bits: Vec<char> = bits.chars().collect();
    let mut chunks = Vec::with_capacity(bits.len().div_ceil(width));

    for group in bits.chunks(width) {
        let mut chunk = String::with_capacity(width);
        chunk.extend(group);
        // Only the final group can be short
        chunk.extend(std::iter::repeat('0').take(width - group.len()));
        chunks.push(BitChunk(chunk));
    }

    Ok(chunks)
}

/// Concatenate chunk contents in order.
pub fn join(chunks: &[BitChunk]) -> String {
    let mut bits = String::with_capacity(chunks.iter().map(BitChunk::len).sum());
    for chunk in chunks {
        bits.push_str(chunk.as_str());
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn chunk_strs(bits: &str, width: usize) -> Vec<String> {
        chunk(bits, width)
            .unwrap()
            .into_iter()
            .map(BitChunk::into_string)
            .collect()
    }

    #[test]
    fn test_to_bits() {
        let table = CodeTable::standard();

        assert_eq!(to_bits(table, "!bob").unwrap(), "0010000000010100010000010");
        assert_eq!(to_bits(table, "").unwrap(), "");
        assert_eq!(to_bits(table, " ").unwrap(), "11");
        assert_eq!(to_bits(table, "e").unwrap(), "101");
        assert_eq!(to_bits(table, "!!").unwrap(), "001000001000");
    }

    #[test]
    fn test_to_bits_unknown_character() {
        let table = CodeTable::standard();

        let result = to_bits(table, "A");
        assert!(matches!(
            result,
            Err(Error::Pack(PackError::UnknownCharacter { ch: 'A', position: 0 }))
        ));

        let result = to_bits(table, "abc 7");
        assert!(matches!(
            result,
            Err(Error::Pack(PackError::UnknownCharacter { ch: '7', position: 4 }))
        ));
    }

    #[test]
    fn test_chunk_not_multiple_of_width() {
        assert_eq!(
            chunk_strs("0010000000010100010000010", 8),
            vec!["00100000", "00010100", "01000001", "00000000"]
        );
    }

    #[test]
    fn test_chunk_exact_width() {
        assert_eq!(chunk_strs("11110000", 8), vec!["11110000"]);
        assert_eq!(chunk_strs("1111000010101010", 8), vec!["11110000", "10101010"]);
    }

    #[test]
    fn test_chunk_empty() {
        assert!(chunk("", 8).unwrap().is_empty());
    }

    #[test]
    fn test_chunk_shorter_than_width() {
        assert_eq!(chunk_strs("101", 8), vec!["10100000"]);
        assert_eq!(chunk_strs("10101", 10), vec!["1010100000"]);
    }

    #[test]
    fn test_chunk_width_one() {
        assert_eq!(chunk_strs("101", 1), vec!["1", "0", "1"]);
    }

    #[test]
    fn test_chunk_zero_width() {
        let result = chunk("101", 0);
        assert!(matches!(
            result,
            Err(Error::Pack(PackError::InvalidWidth(0)))
        ));
    }

    #[test]
    fn test_join() {
        let chunks = vec![BitChunk::from("0101111"), BitChunk::from("10000000")];
        assert_eq!(join(&chunks), "010111110000000");
        assert_eq!(join(&[]), "");
    }

    #[test]
    fn test_join_keeps_padding() {
        let chunks = chunk("101", 8).unwrap();
        assert_eq!(join(&chunks), "10100000");
    }
}
