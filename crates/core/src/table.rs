//! Code table: the fixed character -> bit-string assignment shared by both
//! ends of the codec.
//!
//! Codes are stored as strings over `{'0', '1'}`. The table is never mutated
//! after construction. The standard table is built lazily on first use and
//! cached for the lifetime of the process.
//!
//! # Prefix Freedom
//!
//! Decoding is only unambiguous when no code is a prefix of another. The
//! standard table satisfies this (and is complete: every bit path ends at a
//! code). Tables built with [`CodeTable::new`] are checked for well-formed
//! codes but not for prefix freedom; use [`CodeTable::is_prefix_free`] when
//! that matters.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{Result, TableError};

/// Character -> code assignment used by the standard codec.
///
/// Frequent characters get short codes; `!` doubles as the case marker.
const STANDARD_CODES: [(char, &str); 28] = [
    (' ', "11"),
    ('!', "001000"),
    ('a', "011"),
    ('b', "0000010"),
    ('c', "000101"),
    ('d', "00101"),
    ('e', "101"),
    ('f', "000100"),
    ('g', "0000100"),
    ('h', "0011"),
    ('i', "01001"),
    ('j', "000000001"),
    ('k', "0000000001"),
    ('l', "001001"),
    ('m', "000011"),
    ('n', "10000"),
    ('o', "10001"),
    ('p', "0000101"),
    ('q', "000000000001"),
    ('r', "01000"),
    ('s', "0101"),
    ('t', "1001"),
    ('u', "00011"),
    ('v', "00000001"),
    ('w', "0000011"),
    ('x', "00000000001"),
    ('y', "0000001"),
    ('z', "000000000000"),
];

static STANDARD_TABLE: OnceLock<CodeTable> = OnceLock::new();

/// Immutable mapping from character to its variable-length code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Build a table from `(character, code)` pairs.
    ///
    /// A later pair for the same character replaces an earlier one.
    ///
    /// # Errors
    /// - `TableError::EmptyCode` if a code is empty
    /// - `TableError::InvalidCodeBit` if a code contains anything but '0'/'1'
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut codes = BTreeMap::new();

        for (ch, code) in pairs {
            let code = code.into();
            if code.is_empty() {
                return Err(TableError::EmptyCode { ch }.into());
            }
            if let Some(bit) = code.chars().find(|&b| b != '0' && b != '1') {
                return Err(TableError::InvalidCodeBit { ch, code, bit }.into());
            }
            codes.insert(ch, code);
        }

        Ok(Self { codes })
    }

    /// The shared standard table, built once on first access.
    pub fn standard() -> &'static CodeTable {
        STANDARD_TABLE.get_or_init(|| {
            let codes = STANDARD_CODES
                .iter()
                .map(|&(ch, code)| (ch, code.to_string()))
                .collect();
            CodeTable { codes }
        })
    }

    /// Look up the code for `ch`.
    pub fn lookup(&self, ch: char) -> Option<&str> {
        self.codes.get(&ch).map(String::as_str)
    }

    /// Whether `ch` has a code.
    pub fn contains(&self, ch: char) -> bool {
        self.codes.contains_key(&ch)
    }

    /// Iterate `(character, code)` pairs in character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&ch, code)| (ch, code.as_str()))
    }

    /// Number of characters in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Length of the longest code (0 for an empty table).
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Check that no code is a prefix of another (including duplicates).
    pub fn is_prefix_free(&self) -> bool {
        // After sorting, a prefix always sorts immediately before some code
        // it prefixes, so adjacent pairs are enough.
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}
