//! Property-based tests: round-trip guarantees over generated inputs, both
//! through serde and at the `Value` level.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use toon_codec::{
    decode, encode, from_str, to_string, DecodeOptions, Delimiter, EncodeOptions, KeyFolding, Map,
    PathExpansion, Value,
};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("deserialize failed: {e}\nserialized was: {serialized}");
                false
            }
        },
        Err(e) => {
            eprintln!("serialize failed: {e}");
            false
        }
    }
}

/// Arbitrary `Value` trees. Floats are built as `i64 / 256` so every value
/// is exactly representable and the integral ones exercise the
/// float-to-integer canonicalization.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<i64>().prop_map(|i| Value::from(i as f64 / 256.0)),
        any::<String>().prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(any::<String>(), inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map>())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_string(s in any::<String>()) {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }

    #[test]
    fn prop_value_roundtrip(value in arb_value()) {
        let text = encode(&value, &EncodeOptions::default()).unwrap();
        let back = decode(&text, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(&back, &value, "text was {:?}", text);
    }

    #[test]
    fn prop_value_roundtrip_folded(value in arb_value()) {
        let enc_opts = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
        let dec_opts = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
        let text = encode(&value, &enc_opts).unwrap();
        let back = decode(&text, &dec_opts).unwrap();
        prop_assert_eq!(&back, &value, "text was {:?}", text);
    }

    #[test]
    fn prop_value_roundtrip_delimiters(
        value in arb_value(),
        delimiter in prop_oneof![
            Just(Delimiter::Comma),
            Just(Delimiter::Tab),
            Just(Delimiter::Pipe)
        ],
    ) {
        let enc_opts = EncodeOptions::new().with_delimiter(delimiter);
        let text = encode(&value, &enc_opts).unwrap();
        let back = decode(&text, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(&back, &value, "text was {:?}", text);
    }

    #[test]
    fn prop_encoding_idempotent(value in arb_value()) {
        let opts = EncodeOptions::default();
        let once = encode(&value, &opts).unwrap();
        let again = encode(&decode(&once, &DecodeOptions::default()).unwrap(), &opts).unwrap();
        prop_assert_eq!(once, again);
    }

    #[test]
    fn prop_no_trailing_whitespace(value in arb_value()) {
        let text = encode(&value, &EncodeOptions::default()).unwrap();
        prop_assert!(!text.ends_with('\n'));
        for line in text.lines() {
            prop_assert!(!line.ends_with(' '), "trailing space in {:?}", line);
        }
    }
}
