//! Property tests for the codec laws:
//! 1. Nibble bijection in both directions
//! 2. Direct pipeline round-trip and fixed width
//! 3. Text pipeline round-trip (addresses and arbitrary strings)
//! 4. Length guard and unknown-symbol guard on decode
//! 5. Batch results stay independent and ordered

use cosmic_encoding::{
    normalize_address, AddressConverter, CodecError, ConvertError, NibbleCodec, ADDRESS_HEX_LEN,
    SYMBOLS_PER_BYTE,
};
use proptest::prelude::*;

// ── Strategies ───────────────────────────────────────────────────────────────

/// Valid address with random digit case.
fn address() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{40}".prop_map(|hex| format!("0x{}", hex))
}

/// Sixteen distinct printable chars in random order.
fn alphabet() -> impl Strategy<Value = String> {
    Just("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|chars| chars.into_iter().take(16).collect())
}

// ── Bijection ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn nibble_symbol_bijection(v in 0u8..16) {
        let codec = NibbleCodec::default();
        let symbol = codec.nibble_to_symbol(v).unwrap();
        prop_assert_eq!(codec.symbol_to_nibble(symbol).unwrap(), v);
    }

    #[test]
    fn out_of_range_nibble_rejected(v in 16u8..=255) {
        let codec = NibbleCodec::default();
        prop_assert_eq!(codec.nibble_to_symbol(v), Err(CodecError::InvalidNibble(v)));
    }

    #[test]
    fn custom_alphabet_bijection(symbols in alphabet()) {
        let codec = NibbleCodec::from_symbols(&symbols).unwrap();
        for &s in codec.symbols() {
            let v = codec.symbol_to_nibble(s).unwrap();
            prop_assert_eq!(codec.nibble_to_symbol(v).unwrap(), s);
        }
    }
}

// ── Pipelines ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn direct_roundtrip(addr in address()) {
        let c = AddressConverter::default();
        let encoded = c.encode_direct(&addr).unwrap();
        prop_assert_eq!(encoded.encoding.chars().count(), ADDRESS_HEX_LEN);

        let decoded = c.decode_direct(&encoded.encoding).unwrap();
        prop_assert_eq!(decoded.decoded_address, normalize_address(&addr).unwrap());
    }

    #[test]
    fn text_roundtrip(addr in address()) {
        let c = AddressConverter::default();
        let encoded = c.encode_text(&addr).unwrap();
        prop_assert_eq!(encoded.encoding_length, addr.len() * SYMBOLS_PER_BYTE);

        let decoded = c.decode_text(&encoded.encoding).unwrap();
        prop_assert_eq!(decoded.decoded_address, normalize_address(&addr).unwrap());
    }

    #[test]
    fn direct_roundtrip_custom_alphabet(addr in address(), symbols in alphabet()) {
        let c = AddressConverter::new(NibbleCodec::from_symbols(&symbols).unwrap());
        let encoded = c.encode_direct(&addr).unwrap();
        let decoded = c.decode_direct(&encoded.encoding).unwrap();
        prop_assert_eq!(decoded.decoded_address, encoded.normalized_address);
    }

    #[test]
    fn text_codec_roundtrip_any_string(s in any::<String>()) {
        let codec = NibbleCodec::default();
        let encoded = codec.encode_text(&s);
        prop_assert_eq!(encoded.chars().count(), s.len() * SYMBOLS_PER_BYTE);
        prop_assert_eq!(codec.decode_text(&encoded).unwrap(), s);
    }
}

// ── Guards ───────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn decode_direct_length_guard(len in 0usize..120) {
        prop_assume!(len != ADDRESS_HEX_LEN);
        let c = AddressConverter::default();
        let symbols: String = std::iter::repeat('█').take(len).collect();
        let failure = c.decode_direct(&symbols).unwrap_err();
        prop_assert_eq!(
            failure.error,
            ConvertError::LengthMismatch { expected: ADDRESS_HEX_LEN, actual: len }
        );
    }

    #[test]
    fn unknown_symbol_guard(addr in address(), pos in 0usize..ADDRESS_HEX_LEN, bad in "[a-z]") {
        let c = AddressConverter::default();
        let bad = bad.chars().next().unwrap();

        let mut direct: Vec<char> = c.encode_direct(&addr).unwrap().encoding.chars().collect();
        direct[pos] = bad;
        let direct: String = direct.into_iter().collect();
        let failure = c.decode_direct(&direct).unwrap_err();
        prop_assert_eq!(failure.error, ConvertError::UnknownSymbol { symbol: bad, position: pos });

        let mut text: Vec<char> = c.encode_text(&addr).unwrap().encoding.chars().collect();
        text[pos] = bad;
        let text: String = text.into_iter().collect();
        let failure = c.decode_text(&text).unwrap_err();
        prop_assert_eq!(failure.error, ConvertError::UnknownSymbol { symbol: bad, position: pos });
    }

    #[test]
    fn invalid_addresses_rejected(body in "[0-9a-f]{0,39}|[0-9a-f]{41,60}") {
        let c = AddressConverter::default();
        let addr = format!("0x{}", body);
        prop_assert!(matches!(
            c.encode_direct(&addr).unwrap_err().error,
            ConvertError::InvalidAddressFormat(_)
        ));
    }
}

// ── Batch ────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn batch_independence(a in address(), b in address()) {
        let c = AddressConverter::default();
        let results = c.batch_encode([a.as_str(), "0xg", b.as_str()]);
        prop_assert_eq!(results.len(), 3);
        prop_assert_eq!(&results[0], &c.encode_text(&a));
        prop_assert!(results[1].is_err());
        prop_assert_eq!(&results[2], &c.encode_text(&b));
    }
}
