//! Encode/decode facade composing the pipeline stages.
//!
//! ```text
//! encode: text -> prepare -> to_bits -> chunk -> to_hex -> tokens_to_string
//! decode: wire -> string_to_tokens -> from_hex -> join -> tree decode -> restore
//! ```
//!
//! A `Codec` owns (or, for the standard codec, borrows) its code table and
//! the decoding tree built from it, so the tree is constructed once per codec
//! rather than once per call. Codecs are immutable and `Sync`; one instance can
//! serve concurrent callers.

use std::borrow::Cow;
use std::sync::OnceLock;

use crate::bits::{self, BitChunk};
use crate::config::CodecConfig;
use crate::error::Result;
use crate::hex::{self, HexToken};
use crate::stats::EncodeStats;
use crate::table::CodeTable;
use crate::transform::CaseFold;
use crate::tree::DecodingTree;

static STANDARD_CODEC: OnceLock<Codec> = OnceLock::new();

/// Text codec for one code table and wire configuration.
#[derive(Debug, Clone)]
pub struct Codec {
    table: Cow<'static, CodeTable>,
    tree: Cow<'static, DecodingTree>,
    fold: CaseFold,
    config: CodecConfig,
}

impl Codec {
    /// Create a codec for `table`, building its decoding tree.
    ///
    /// # Errors
    /// Returns `Error::Config` if `config` fails validation.
    pub fn new(table: CodeTable, config: CodecConfig) -> Result<Self> {
        config.validate()?;
        let tree = DecodingTree::build(&table);

        Ok(Self {
            table: Cow::Owned(table),
            tree: Cow::Owned(tree),
            fold: CaseFold::new(config.marker),
            config,
        })
    }

    /// The process-wide codec over the standard table and default config.
    pub fn standard() -> &'static Codec {
        STANDARD_CODEC.get_or_init(|| {
            let config = CodecConfig::default();
            Self {
                table: Cow::Borrowed(CodeTable::standard()),
                tree: Cow::Borrowed(DecodingTree::standard()),
                fold: CaseFold::new(config.marker),
                config,
            }
        })
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn tree(&self) -> &DecodingTree {
        &self.tree
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `text` into the hex wire format.
    ///
    /// # Errors
    /// - `PackError::UnknownCharacter` if a character (after case folding)
    ///   has no code
    /// - `HexError::MalformedChunk` if a packed chunk cannot be rendered
    pub fn encode(&self, text: &str) -> Result<String> {
        self.encode_with_stats(text).map(|(wire, _)| wire)
    }

    /// Encode `text` and report what each stage produced.
    pub fn encode_with_stats(&self, text: &str) -> Result<(String, EncodeStats)> {
        let width = self.config.chunk_width;

        let prepared = self.fold.prepare(text);
        let bit_string = bits::to_bits(&self.table, &prepared)?;
        let chunks = bits::chunk(&bit_string, width)?;

        let tokens = chunks
            .iter()
            .map(|chunk| hex::to_hex(chunk, width))
            .collect::<Result<Vec<HexToken>>>()?;
        let wire = hex::tokens_to_string(&tokens, &self.config.separator);

        let data_bits = bit_string.chars().count();
        let stats = EncodeStats {
            input_chars: text.chars().count(),
            prepared_chars: prepared.chars().count(),
            data_bits,
            padding_bits: chunks.len() * width - data_bits,
            chunks: chunks.len(),
            chunk_width: width,
            wire_len: wire.len(),
        };

        tracing::debug!(
            input_chars = stats.input_chars,
            data_bits = stats.data_bits,
            chunks = stats.chunks,
            "encoded text"
        );

        Ok((wire, stats))
    }

    /// Decode a hex wire string back into text.
    ///
    /// Empty wire text decodes to empty text, mirroring `encode("") == ""`.
    ///
    /// # Errors
    /// - `HexError::MalformedToken` if a token is not valid hex for the
    ///   configured width (including empty tokens from doubled separators)
    /// - `TreeError::NoPath` if non-padding bits leave the tree, which only
    ///   happens with an incomplete code table
    pub fn decode(&self, wire: &str) -> Result<String> {
        if wire.is_empty() {
            return Ok(String::new());
        }

        let width = self.config.chunk_width;

        let tokens = hex::string_to_tokens(wire, &self.config.separator);
        let chunks = tokens
            .iter()
            .map(|token| hex::from_hex(token, width))
            .collect::<Result<Vec<BitChunk>>>()?;
        let bit_string = bits::join(&chunks);

        let prepared = self.tree.decode(&bit_string)?;
        let text = self.fold.restore(&prepared);

        tracing::debug!(
            tokens = tokens.len(),
            output_chars = text.chars().count(),
            "decoded text"
        );

        Ok(text)
    }
}
