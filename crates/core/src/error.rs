//! Error types for the VLC codec.
//!
//! Every encode/decode entry point returns a structured error instead of
//! panicking. A failure aborts only the call that produced it; there are no
//! partial results.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Table: constructing a code table from caller-supplied pairs
/// - Pack: mapping characters to bits, or chunking a bit string
/// - Hex: converting chunks to hex tokens and back
/// - Tree: walking a bit string through the decoding tree
/// - Config: rejected codec configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Code table construction error (e.g., empty or non-binary code)
    #[error("code table error: {0}")]
    Table(#[from] TableError),

    /// Bit packing error (e.g., character missing from the table)
    #[error("bit packing error: {0}")]
    Pack(#[from] PackError),

    /// Hex conversion error (e.g., malformed token on decode)
    #[error("hex codec error: {0}")]
    Hex(#[from] HexError),

    /// Decoding tree walk error
    #[error("decoding tree error: {0}")]
    Tree(#[from] TreeError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Code table construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A character was assigned the empty code
    #[error("empty code for character {ch:?}")]
    EmptyCode { ch: char },

    /// A code contains something other than '0' or '1'
    #[error("code {code:?} for character {ch:?} contains non-binary digit {bit:?}")]
    InvalidCodeBit { ch: char, code: String, bit: char },
}

/// Bit packing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    /// Input character has no entry in the code table
    #[error("unknown character {ch:?} at position {position}")]
    UnknownCharacter { ch: char, position: usize },

    /// Chunk width of zero cannot partition a bit string
    #[error("invalid chunk width: {0}")]
    InvalidWidth(usize),
}

/// Hex codec errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// Chunk is not a binary string of the expected width
    #[error("malformed chunk {chunk:?}: {reason}")]
    MalformedChunk { chunk: String, reason: &'static str },

    /// Token is not a valid two-digit hex value for the expected width
    #[error("malformed token {token:?}: {reason}")]
    MalformedToken { token: String, reason: &'static str },
}

/// Decoding tree errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// Bit string contains something other than '0' or '1'
    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit { bit: char, position: usize },

    /// Bit leads to a branch no code covers (incomplete table)
    #[error("no code continues at bit position {position}")]
    NoPath { position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
