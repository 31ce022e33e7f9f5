//! vlc-core: text codec over a fixed variable-length prefix code
//!
//! This library packs text into a compact hex representation and back:
//! - Folds uppercase letters into a `!` marker plus lowercase letter
//! - Maps each character to its code from a fixed, shared code table
//! - Packs the bit stream into 8-bit chunks, zero-padding the last one
//! - Renders chunks as space-separated two-digit hex tokens
//!
//! ```
//! let wire = vlc_core::encode("My name is Ted").unwrap();
//! assert_eq!(wire, "20 30 3C 18 77 4A E4 4D 28");
//! assert_eq!(vlc_core::decode(&wire).unwrap(), "My name is Ted");
//! ```
//!
//! # Architecture
//!
//! - `table`: the character -> code table
//! - `transform`: reversible case folding
//! - `bits`: characters to bits, bits to fixed-width chunks
//! - `hex`: chunks to hex tokens, tokens to the wire string
//! - `tree`: arena decoding tree for prefix codes
//! - `codec`: the encode/decode pipeline over an injected table
//! - `config`: chunk width, separator and case marker
//! - `stats`: per-call encode statistics
//! - `sample`: seeded sample text for round-trip testing
//!
//! # Design Principles
//!
//! - **No panics**: invalid input produces a typed error
//! - **Immutable shared state**: the standard table, tree and codec are built
//!   once and only read afterwards
//! - **Injectable table**: alternate tables go through `Codec::new`

pub mod bits;
pub mod codec;
pub mod config;
pub mod error;
pub mod hex;
pub mod sample;
pub mod stats;
pub mod table;
pub mod transform;
pub mod tree;

// Re-export commonly used types
pub use codec::Codec;
pub use config::CodecConfig;
pub use error::{Error, Result};
pub use table::CodeTable;

/// Encode `text` with the standard codec.
///
/// See [`Codec::encode`].
pub fn encode(text: &str) -> Result<String> {
    Codec::standard().encode(text)
}

/// Decode a wire string with the standard codec.
///
/// See [`Codec::decode`].
pub fn decode(wire: &str) -> Result<String> {
    Codec::standard().decode(wire)
}
