//! Hex token conversion and the wire string format.
//!
//! Each bit chunk becomes one two-digit uppercase hex token; tokens are joined
//! with a separator (a single space by default):
//!
//! ```text
//! "00100000" "00110000" "00111100"  ->  "20 30 3C"
//! ```
//!
//! The format has no header or length field. It is self-delimiting only by
//! the separator.
//!
//! # Splitting
//!
//! `string_to_tokens` is a plain split: consecutive separators produce empty
//! tokens and the empty string produces a single empty token. This keeps
//! `tokens_to_string` and `string_to_tokens` mutual inverses on well-formed
//! input; the empty tokens are rejected later by `from_hex`.

use std::fmt;

use crate::bits::BitChunk;
use crate::error::{HexError, Result};

/// Two hex digits encoding one bit chunk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexToken(String);

impl HexToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for HexToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for HexToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Display for HexToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a `width`-bit chunk as two uppercase hex digits.
///
/// # Errors
/// Returns `HexError::MalformedChunk` if the chunk is not exactly `width`
/// characters of '0'/'1', or if `width` is outside 1..=8.
pub fn to_hex(chunk: &BitChunk, width: usize) -> Result<HexToken> {
    let bits = chunk.as_str();
    let malformed = |reason| HexError::MalformedChunk {
        chunk: bits.to_string(),
        reason,
    };

    if width == 0 || width > 8 {
        return Err(malformed("width must be 1..=8").into());
    }
    if bits.chars().count() != width {
        return Err(malformed("wrong number of bits").into());
    }
    if !bits.chars().all(|b| b == '0' || b == '1') {
        return Err(malformed("non-binary digit").into());
    }

    let value = u8::from_str_radix(bits, 2).map_err(|_| malformed("not a binary number"))?;

    Ok(HexToken(format!("{:02X}", value)))
}

/// Parse a two-digit hex token into a `width`-bit chunk.
///
/// Lowercase digits are accepted.
///
/// # Errors
/// Returns `HexError::MalformedToken` if the token is not exactly two hex
/// digits, or its value does not fit in `width` bits.
pub fn from_hex(token: &HexToken, width: usize) -> Result<BitChunk> {
    let digits = token.as_str();
    let malformed = |reason| HexError::MalformedToken {
        token: digits.to_string(),
        reason,
    };

    if width == 0 || width > 8 {
        return Err(malformed("width must be 1..=8").into());
    }
    if digits.chars().count() != 2 {
        return Err(malformed("expected exactly two hex digits").into());
    }
    // from_str_radix alone would also accept a leading '+'
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed("invalid hex digit").into());
    }

    let value = u8::from_str_radix(digits, 16).map_err(|_| malformed("invalid hex digit"))?;

    if width < 8 && value >> width != 0 {
        return Err(malformed("value does not fit chunk width").into());
    }

    Ok(BitChunk::from(format!("{:0width$b}", value, width = width)))
}

/// Join tokens with `separator`. No tokens produce the empty string.
pub fn tokens_to_string(tokens: &[HexToken], separator: &str) -> String {
    let mut out = String::with_capacity(tokens.len() * (2 + separator.len()));

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(token.as_str());
    }

    out
}

/// Split a wire string on `separator`.
///
/// Never fails; `""` yields `[""]` and `"AA  BB"` yields `["AA", "", "BB"]`.
pub fn string_to_tokens(wire: &str, separator: &str) -> Vec<HexToken> {
    wire.split(separator).map(HexToken::from).collect()
}
