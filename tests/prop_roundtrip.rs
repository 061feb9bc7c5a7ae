//! Property-based round-trip tests.
//!
//! Generated trees stay inside the wire limits: integers 0..=255, strings of at
//! most 80 bytes, containers of at most 8 entries and 4 levels of nesting.

use binjson::{Decoder, Encoder, Object, Value, compress, decompress};
use proptest::prelude::*;

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,30}",
        // Up to 20 chars of at most 4 bytes each.
        "\\PC{0,20}",
        Just(String::new()),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        (0i64..=255).prop_map(Value::Integer),
        any::<bool>().prop_map(Value::Boolean),
        arb_string().prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::List),
            prop::collection::vec((arb_string(), inner), 0..8)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Object>())),
        ]
    })
}

proptest! {
    #[test]
    fn round_trip(value in arb_value()) {
        let bytes = compress(&value).unwrap();
        prop_assert_eq!(decompress(&bytes).unwrap(), value);
    }

    #[test]
    fn reencoding_is_idempotent(value in arb_value()) {
        let first = compress(&value).unwrap();
        let second = compress(&decompress(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_truncation_fails(value in arb_value()) {
        let bytes = compress(&value).unwrap();
        for cut in 0..bytes.len() {
            prop_assert!(decompress(&bytes[..cut]).is_err(), "prefix of {} bytes decoded", cut);
        }
    }

    #[test]
    fn strict_decoder_accepts_exact_input(value in arb_value()) {
        let bytes = Encoder::new().compress(&value).unwrap();
        prop_assert!(Decoder::new().strict(true).decompress(&bytes).is_ok());
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = decompress(&bytes);
    }
}
