#![cfg(feature = "alloc")]

use base2n::{encode_to_bytes, encode_to_chars, encode_to_string, Encoding};

/// Drains the lazy encoder into a `String`, checking along the way that
/// the closed-form size agrees with what is actually produced.
fn materialize(encoding: &Encoding, input: &[u8]) -> String {
    let chars = encode_to_chars(encoding, input.iter().copied());
    assert_eq!(chars.len(), encoding.encoded_len(input.len()));
    let output: String = chars.collect();
    assert_eq!(output.chars().count(), encoding.encoded_len(input.len()));
    output
}

#[test]
fn base64_basics() {
    assert_eq!(materialize(&Encoding::BASE64, b"Man"), "TWFu");
    assert_eq!(materialize(&Encoding::BASE64, b"Ma"), "TWE=");
    assert_eq!(materialize(&Encoding::BASE64, b"M"), "TQ==");
    assert_eq!(materialize(&Encoding::BASE64, b""), "");
}

#[test]
fn base64_value_corner_cases() {
    let input = [0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF];
    assert_eq!(materialize(&Encoding::BASE64, &input), "AP8A/wD/");
}

#[test]
fn base64_test_string() {
    let result = encode_to_string(
        &Encoding::BASE64,
        b"Many hands make light work.".iter().copied(),
    );
    assert_eq!(result, "TWFueSBoYW5kcyBtYWtlIGxpZ2h0IHdvcmsu");
}

#[test]
fn base64_no_pad_basics() {
    assert_eq!(materialize(&Encoding::BASE64_NO_PAD, b"Man"), "TWFu");
    assert_eq!(materialize(&Encoding::BASE64_NO_PAD, b"Ma"), "TWE");
    assert_eq!(materialize(&Encoding::BASE64_NO_PAD, b"M"), "TQ");
    assert_eq!(materialize(&Encoding::BASE64_NO_PAD, b""), "");
}

#[test]
fn base64url_basics() {
    assert_eq!(materialize(&Encoding::BASE64_URL, b"Man"), "TWFu");
    assert_eq!(materialize(&Encoding::BASE64_URL, b"Ma"), "TWE");
    assert_eq!(materialize(&Encoding::BASE64_URL, b"M"), "TQ");
    assert_eq!(materialize(&Encoding::BASE64_URL, b"ab~"), "YWJ-");
    assert_eq!(materialize(&Encoding::BASE64_URL, b""), "");
}

#[test]
fn base32_basics() {
    assert_eq!(materialize(&Encoding::BASE32, b"abcde"), "MFRGGZDF");
    assert_eq!(materialize(&Encoding::BASE32, b"abcd"), "MFRGGZA=");
    assert_eq!(materialize(&Encoding::BASE32, b"abc"), "MFRGG===");
    assert_eq!(materialize(&Encoding::BASE32, b"ab"), "MFRA====");
    assert_eq!(materialize(&Encoding::BASE32, b"a"), "ME======");
    assert_eq!(materialize(&Encoding::BASE32, b""), "");
}

#[test]
fn z_base32_basics() {
    assert_eq!(materialize(&Encoding::Z_BASE32, b"abcde"), "cftgg3df");
    assert_eq!(materialize(&Encoding::Z_BASE32, b"abcd"), "cftgg3y");
    assert_eq!(materialize(&Encoding::Z_BASE32, b"abc"), "cftgg");
    assert_eq!(materialize(&Encoding::Z_BASE32, b"ab"), "cfty");
    assert_eq!(materialize(&Encoding::Z_BASE32, b"a"), "cr");
    assert_eq!(materialize(&Encoding::Z_BASE32, b""), "");
}

#[test]
fn hexdec_basics() {
    assert_eq!(materialize(&Encoding::HEXDEC, b"Aloha"), "416c6f6861");
    assert_eq!(materialize(&Encoding::HEXDEC, b""), "");
}

#[test]
fn binary_basics() {
    assert_eq!(
        materialize(&Encoding::BINARY, b"Aloha"),
        concat!("01000001", "01101100", "01101111", "01101000", "01100001"),
    );
    assert_eq!(materialize(&Encoding::BINARY, b""), "");
}

#[test]
fn base8_basics() {
    assert_eq!(materialize(&Encoding::BASE8, b"x"), "360=====");
    assert_eq!(materialize(&Encoding::BASE8, b"xy"), "360744==");
    assert_eq!(materialize(&Encoding::BASE8, b""), "");
}

#[test]
fn base4_basics() {
    assert_eq!(materialize(&Encoding::BASE4, b"x"), "1320");
    assert_eq!(materialize(&Encoding::BASE4, b""), "");
}

const ALL_ENCODINGS: [&Encoding; 9] = [
    &Encoding::BASE2,
    &Encoding::BASE4,
    &Encoding::BASE8,
    &Encoding::BASE16,
    &Encoding::BASE32,
    &Encoding::Z_BASE32,
    &Encoding::BASE64,
    &Encoding::BASE64_NO_PAD,
    &Encoding::BASE64_URL,
];

#[test]
fn closed_form_size_matches_drained_count() {
    for encoding in ALL_ENCODINGS {
        for len in 0..=64 {
            let input: Vec<u8> = (0..len).map(|i| (i * 31 % 256) as u8).collect();
            let drained = encode_to_chars(encoding, input.iter().copied()).count();
            assert_eq!(
                drained,
                encoding.encoded_len(len),
                "length mismatch for {len}-byte input",
            );
        }
    }
}

#[test]
fn unpadded_output_contains_no_padding_symbol() {
    for encoding in [&Encoding::Z_BASE32, &Encoding::BASE64_URL, &Encoding::BASE64_NO_PAD] {
        for len in 0..=16 {
            let input: Vec<u8> = (0..len).map(|i| (i * 31 % 256) as u8).collect();
            let output = encode_to_string(encoding, input.iter().copied());
            assert!(!output.contains('='));
        }
    }
}

#[test]
fn re_encoding_is_identical() {
    let input = b"Many hands make light work.";
    for encoding in ALL_ENCODINGS {
        let first = encode_to_string(encoding, input.iter().copied());
        let second = encode_to_string(encoding, input.iter().copied());
        assert_eq!(first, second);
    }
}

#[test]
fn byte_and_char_encoders_agree() {
    let input = b"Aloha";
    for encoding in ALL_ENCODINGS {
        let chars: String = encode_to_chars(encoding, input.iter().copied()).collect();
        let bytes: Vec<u8> = encode_to_bytes(encoding, input.iter().copied()).collect();
        assert_eq!(chars.as_bytes(), bytes.as_slice());
    }
}

#[test]
fn encode_to_string_matches_char_encoder() {
    let input = b"Man";
    for encoding in ALL_ENCODINGS {
        let collected: String = encode_to_chars(encoding, input.iter().copied()).collect();
        assert_eq!(encode_to_string(encoding, input.iter().copied()), collected);
    }
}

#[test]
fn encoder_len_counts_down_as_output_is_consumed() {
    let mut encoder = encode_to_chars(&Encoding::BASE64, b"Ma".iter().copied());
    assert_eq!(encoder.len(), 4);

    assert_eq!(encoder.next(), Some('T'));
    assert_eq!(encoder.len(), 3);
    assert_eq!(encoder.next(), Some('W'));
    assert_eq!(encoder.len(), 2);
    assert_eq!(encoder.next(), Some('E'));
    assert_eq!(encoder.len(), 1);
    assert_eq!(encoder.next(), Some('='));
    assert_eq!(encoder.len(), 0);
    assert_eq!(encoder.next(), None);
}

#[test]
fn custom_alphabet_round_numbers() {
    let encoding = Encoding::new(b"0123456789abcdef", None).unwrap();
    assert_eq!(materialize(&encoding, &[0xDE, 0xAD, 0xBE, 0xEF]), "deadbeef");
}
