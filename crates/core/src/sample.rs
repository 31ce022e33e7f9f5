//! Seeded sample text over the encodable alphabet.
//!
//! Generated text mixes:
//! - Word-like runs of lowercase letters
//! - Capitalized words (exercising the case fold)
//! - Occasional all-caps words and repeated spaces
//!
//! It never contains the case marker, so `decode(encode(text)) == text`
//! holds for every sample.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate `len` characters of encodable text.
///
/// The same `seed` always yields the same text.
pub fn generate_sample_text(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(len);

    while text.len() < len {
        let word_len = rng.gen_range(1..=9);
        let style: u8 = rng.gen_range(0..10);

        for i in 0..word_len {
            let ch = LOWERCASE[rng.gen_range(0..LOWERCASE.len())] as char;
            let upper = match style {
                // 20% capitalized
                0..=1 => i == 0,
                // 10% all caps
                2 => true,
                _ => false,
            };
            text.push(if upper { ch.to_ascii_uppercase() } else { ch });
        }

        let spaces = if rng.gen_bool(0.1) { 2 } else { 1 };
        text.extend(std::iter::repeat(' ').take(spaces));
    }

    // Everything is ASCII, so byte length equals char count
    text.truncate(len);
    text
}
