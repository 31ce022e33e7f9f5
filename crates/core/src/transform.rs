//! Reversible case folding.
//!
//! The code table only covers lowercase letters, so uppercase letters are
//! folded into a marker + lowercase pair before encoding and restored after
//! decoding:
//!
//! ```text
//! prepare: "My name is Ted"   -> "!my name is !ted"
//! restore: "!my name is !ted" -> "My name is Ted"
//! ```
//!
//! The marker is reserved. A literal marker in the input cannot be told apart
//! from a folded letter, so `restore(prepare(s)) == s` only holds when `s`
//! does not contain it.

use crate::config::DEFAULT_MARKER;

/// Case folding with a given marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseFold {
    marker: char,
}

impl CaseFold {
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Replace each uppercase letter with the marker followed by its
    /// lowercase form. Everything else passes through unchanged.
    pub fn prepare(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());

        for ch in text.chars() {
            if ch.is_uppercase() {
                out.push(self.marker);
                out.extend(ch.to_lowercase());
            } else {
                out.push(ch);
            }
        }

        out
    }

    /// Undo [`prepare`](Self::prepare): uppercase the character after each
    /// marker and drop the marker.
    ///
    /// A marker with nothing after it is dropped silently.
    pub fn restore(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();

        while let Some(ch) = chars.next() {
            if ch != self.marker {
                out.push(ch);
                continue;
            }

            match chars.next() {
                Some(next) => out.extend(next.to_uppercase()),
                None => tracing::trace!("dropping trailing case marker"),
            }
        }

        out
    }
}

impl Default for CaseFold {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

/// [`CaseFold::prepare`] with the default `!` marker.
pub fn prepare(text: &str) -> String {
    CaseFold::default().prepare(text)
}

/// [`CaseFold::restore`] with the default `!` marker.
pub fn restore(text: &str) -> String {
    CaseFold::default().restore(text)
}
