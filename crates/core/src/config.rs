//! Codec configuration.
//!
//! The defaults describe the standard wire format: 8-bit chunks, tokens
//! separated by a single space, and `!` as the case marker. Everything works
//! with `CodecConfig::default()`; the other knobs exist so tests and callers
//! with their own code tables can vary the packing.

use crate::error::{Error, Result};

/// Width of one packed chunk in the standard format.
pub const DEFAULT_CHUNK_WIDTH: usize = 8;

/// Separator between hex tokens in the standard format.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Reserved character meaning "next character was uppercase".
pub const DEFAULT_MARKER: char = '!';

/// Largest chunk width whose value still fits in a two-digit hex token.
pub const MAX_CHUNK_WIDTH: usize = 8;

/// Complete configuration for a codec instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Bits per chunk (1..=8)
    pub chunk_width: usize,

    /// Token separator in the wire string
    pub separator: String,

    /// Case marker emitted before folded uppercase letters
    pub marker: char,
}

impl CodecConfig {
    /// Set the chunk width.
    pub fn with_chunk_width(mut self, width: usize) -> Self {
        self.chunk_width = width;
        self
    }

    /// Set the token separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the case marker.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Check that the configuration describes a decodable wire format.
    ///
    /// # Errors
    /// Returns `Error::Config` if:
    /// - `chunk_width` is 0 or larger than 8
    /// - `separator` is empty or contains a hex digit
    /// - `marker` is an uppercase letter (it would itself be folded) or a
    ///   hex digit
    pub fn validate(&self) -> Result<()> {
        if self.chunk_width == 0 || self.chunk_width > MAX_CHUNK_WIDTH {
            return Err(Error::Config(format!(
                "chunk width must be 1..={}, got {}",
                MAX_CHUNK_WIDTH, self.chunk_width
            )));
        }

        if self.separator.is_empty() {
            return Err(Error::Config("separator must not be empty".to_string()));
        }

        if self.separator.chars().any(|c| c.is_ascii_hexdigit()) {
            return Err(Error::Config(format!(
                "separator {:?} must not contain hex digits",
                self.separator
            )));
        }

        if self.marker.is_uppercase() {
            return Err(Error::Config(format!(
                "marker {:?} must not be an uppercase letter",
                self.marker
            )));
        }

        if self.marker.is_ascii_hexdigit() {
            return Err(Error::Config(format!(
                "marker {:?} must not be a hex digit",
                self.marker
            )));
        }

        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            chunk_width: DEFAULT_CHUNK_WIDTH,
            separator: DEFAULT_SEPARATOR.to_string(),
            marker: DEFAULT_MARKER,
        }
    }
}
