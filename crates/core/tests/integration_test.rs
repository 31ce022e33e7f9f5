//! Integration tests for the full codec pipeline.
//!
//! These tests verify end-to-end behavior: text -> fold -> bits -> chunks ->
//! hex wire string -> chunks -> bits -> tree -> restore, with verification
//! that output matches input.

use vlc_core::{
    bits::{chunk, join, to_bits},
    error::{Error, HexError, PackError},
    hex::{from_hex, string_to_tokens, to_hex, tokens_to_string},
    sample::generate_sample_text,
    transform::{prepare, restore},
    tree::DecodingTree,
    CodeTable, Codec, CodecConfig,
};

/// Run each stage by hand and compare with the facade.
#[test]
fn test_stages_match_facade() {
    let text = "Hello World";
    let table = CodeTable::standard();

    let prepared = prepare(text);
    assert_eq!(prepared, "!hello !world");

    let bits = to_bits(table, &prepared).unwrap();
    let chunks = chunk(&bits, 8).unwrap();
    let tokens: Vec<_> = chunks.iter().map(|c| to_hex(c, 8).unwrap()).collect();
    let wire = tokens_to_string(&tokens, " ");

    assert_eq!(wire, vlc_core::encode(text).unwrap());

    let parsed: Vec<_> = string_to_tokens(&wire, " ")
        .iter()
        .map(|t| from_hex(t, 8).unwrap())
        .collect();
    assert_eq!(parsed, chunks);

    let decoded = DecodingTree::build(table).decode(&join(&parsed)).unwrap();
    assert_eq!(decoded, prepared);
    assert_eq!(restore(&decoded), text);
}

#[test]
fn test_known_encodings() {
    let cases = [
        ("My name is Ted", "20 30 3C 18 77 4A E4 4D 28"),
        ("hello world", "3A 49 31 C1 C5 04 94 56"),
        ("", ""),
    ];

    for (text, wire) in cases {
        assert_eq!(vlc_core::encode(text).unwrap(), wire, "encode {text:?}");
        assert_eq!(vlc_core::decode(wire).unwrap(), text, "decode {wire:?}");
    }
}

#[test]
fn test_every_supported_character() {
    let lower: String = ('a'..='z').collect();
    let upper: String = ('A'..='Z').collect();
    let text = format!("{lower} {upper}  {lower}");

    let wire = vlc_core::encode(&text).unwrap();
    assert_eq!(vlc_core::decode(&wire).unwrap(), text);
}

/// Seeded sweep over generated text of many lengths.
#[test]
fn test_round_trip_generated_text() {
    for seed in 0..50u64 {
        let len = (seed as usize * 37) % 400;
        let text = generate_sample_text(seed, len);

        let wire = vlc_core::encode(&text).unwrap();
        let decoded = vlc_core::decode(&wire).unwrap();

        assert_eq!(decoded, text, "seed {seed}");
    }
}

#[test]
fn test_wire_format_shape() {
    let wire = vlc_core::encode(&generate_sample_text(9, 300)).unwrap();

    for token in wire.split(' ') {
        assert_eq!(token.len(), 2);
        assert!(token.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }
    assert!(!wire.starts_with(' '));
    assert!(!wire.ends_with(' '));
}

#[test]
fn test_unknown_character_produces_no_output() {
    for text in ["abc1", "hello, world", "tab\there", "caf\u{e9}"] {
        let result = vlc_core::encode(text);
        assert!(
            matches!(result, Err(Error::Pack(PackError::UnknownCharacter { .. }))),
            "accepted {text:?}"
        );
    }
}

#[test]
fn test_malformed_wire_text() {
    for wire in ["20 30 3C 1", "XX", "20\n", " 20"] {
        let result = vlc_core::decode(wire);
        assert!(
            matches!(result, Err(Error::Hex(HexError::MalformedToken { .. }))),
            "accepted {wire:?}"
        );
    }
}

/// Padding that happens to complete a code decodes as extra characters.
#[test]
fn test_padding_completing_a_code_is_lossy() {
    let table = CodeTable::new([('x', "0"), ('y', "1")]).unwrap();
    let codec = Codec::new(table, CodecConfig::default()).unwrap();

    let wire = codec.encode("y").unwrap();
    assert_eq!(wire, "80");
    assert_eq!(codec.decode(&wire).unwrap(), "yxxxxxxx");

    // Full chunks carry no padding and round-trip exactly
    let wire = codec.encode("yxyxyxyx").unwrap();
    assert_eq!(wire, "AA");
    assert_eq!(codec.decode(&wire).unwrap(), "yxyxyxyx");
}

#[test]
fn test_incomplete_table_drops_padding_off_tree() {
    let table = CodeTable::new([('a', "10"), ('b', "11")]).unwrap();
    let codec = Codec::new(table, CodecConfig::default()).unwrap();

    // "ab" = 1011 -> padded 10110000; the padding walks into the uncovered 0 branch
    let wire = codec.encode("ab").unwrap();
    assert_eq!(wire, "B0");
    assert_eq!(codec.decode(&wire).unwrap(), "ab");

    // Non-zero bits off the tree are still an error
    assert!(matches!(codec.decode("40"), Err(Error::Tree(_))));
}

#[test]
fn test_round_trip_with_injected_table() {
    let table = CodeTable::new([('a', "1"), ('b', "01")]).unwrap();
    let codec = Codec::new(table, CodecConfig::default()).unwrap();

    assert_eq!(codec.encode("a").unwrap(), "80");
    assert_eq!(codec.decode("80").unwrap(), "a");

    for text in ["b", "ab", "ba", "bbb", "abababab", "bbbbbbbbb"] {
        let wire = codec.encode(text).unwrap();
        assert_eq!(codec.decode(&wire).unwrap(), text, "wire {wire:?}");
    }
}

#[test]
fn test_literal_marker_is_reserved() {
    let wire = vlc_core::encode("Hello World!").unwrap();
    assert_eq!(vlc_core::decode(&wire).unwrap(), "Hello World");

    let wire = vlc_core::encode("!ok").unwrap();
    assert_eq!(vlc_core::decode(&wire).unwrap(), "Ok");
}

#[test]
fn test_concurrent_use_of_standard_codec() {
    let handles: Vec<_> = (0..8u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let text = generate_sample_text(seed, 1000);
                let wire = vlc_core::encode(&text).unwrap();
                (text, vlc_core::decode(&wire).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (text, decoded) = handle.join().unwrap();
        assert_eq!(decoded, text);
    }
}

#[test]
fn test_compression_stats_on_text() {
    let text = generate_sample_text(3, 2000);
    let (wire, stats) = Codec::standard().encode_with_stats(&text).unwrap();

    assert_eq!(stats.input_chars, 2000);
    assert_eq!(stats.wire_len, wire.len());
    assert_eq!(stats.packed_bits(), stats.data_bits + stats.padding_bits);
    assert!(stats.padding_bits < 8);
    // Lowercase-heavy text packs into fewer than 8 bits per character
    assert!(stats.compression_ratio() < 1.0);
}
