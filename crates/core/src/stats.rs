//! Statistics for a single encode call.
//!
//! Collected by [`Codec::encode_with_stats`](crate::codec::Codec::encode_with_stats)
//! at each pipeline stage:
//! - Characters in and after case folding
//! - Data bits produced by the code table
//! - Padding bits added to fill the last chunk
//! - Chunk count and wire string length

/// Counts gathered while encoding one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Characters in the original text
    pub input_chars: usize,

    /// Characters after case folding (each uppercase letter adds a marker)
    pub prepared_chars: usize,

    /// Bits produced by the code table
    pub data_bits: usize,

    /// Zero bits appended to complete the final chunk
    pub padding_bits: usize,

    /// Number of chunks (one hex token each)
    pub chunks: usize,

    /// Bits per chunk
    pub chunk_width: usize,

    /// Length of the wire string
    pub wire_len: usize,
}

impl EncodeStats {
    /// Total packed bits, padding included.
    pub fn packed_bits(&self) -> usize {
        self.chunks * self.chunk_width
    }

    /// Packed size relative to 8 bits per input character.
    ///
    /// Returns 0.0 for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_chars == 0 {
            0.0
        } else {
            self.packed_bits() as f64 / (self.input_chars * 8) as f64
        }
    }

    /// Average code length per folded character, padding excluded.
    pub fn bits_per_char(&self) -> f64 {
        if self.prepared_chars == 0 {
            0.0
        } else {
            self.data_bits as f64 / self.prepared_chars as f64
        }
    }

    /// Export as `key=value` lines (for logging/testing).
    pub fn export_text(&self) -> String {
        format!(
            "input_chars={}\n\
             prepared_chars={}\n\
             data_bits={}\n\
             padding_bits={}\n\
             chunks={}\n\
             wire_len={}\n\
             compression_ratio={:.4}\n",
            self.input_chars,
            self.prepared_chars,
            self.data_bits,
            self.padding_bits,
            self.chunks,
            self.wire_len,
            self.compression_ratio(),
        )
    }
}
