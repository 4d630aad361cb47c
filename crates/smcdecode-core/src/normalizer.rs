//! Canonical display forms for decoded values.
//!
//! [`normalize`] rewrites fixed-size byte sequences into `0x`-prefixed hex
//! strings and wide integers into base-10 strings, so the result can be
//! compared, printed, or serialized to JSON without precision loss. Every
//! other value passes through untouched, which makes the function idempotent.

use indexmap::IndexMap;

use crate::types::AbiValue;

/// Normalize a single decoded value.
pub fn normalize(value: AbiValue) -> AbiValue {
    match value {
        AbiValue::FixedBytes(bytes) => AbiValue::Str(format!("0x{}", hex::encode(bytes))),
        AbiValue::Address(addr) => AbiValue::Str(format!("0x{}", hex::encode(addr.as_slice()))),

        // A fixed-size sequence of non-byte elements: normalize element-wise.
        AbiValue::FixedArray(items) => {
            AbiValue::FixedArray(items.into_iter().map(normalize).collect())
        }

        AbiValue::BigUint(v) => AbiValue::Str(v.to_string()),
        AbiValue::BigInt(v) => AbiValue::Str(v.to_string()),

        other => other,
    }
}

/// Normalize every value of an argument map, keeping its order.
pub fn normalize_map(arguments: IndexMap<String, AbiValue>) -> IndexMap<String, AbiValue> {
    arguments
        .into_iter()
        .map(|(name, value)| (name, normalize(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, I256, U256};

    fn samples() -> Vec<AbiValue> {
        let addr: Address = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
            .parse()
            .unwrap();
        vec![
            AbiValue::Bool(false),
            AbiValue::Uint(7),
            AbiValue::Int(-7),
            AbiValue::BigUint(U256::MAX),
            AbiValue::BigInt(I256::MIN),
            AbiValue::Address(addr),
            AbiValue::FixedBytes(vec![0xAB; 32]),
            AbiValue::Bytes(vec![1, 2, 3]),
            AbiValue::Str("0xdeadbeef".into()),
            AbiValue::FixedArray(vec![
                AbiValue::BigUint(U256::from(1u64)),
                AbiValue::FixedBytes(vec![0x01]),
            ]),
            AbiValue::Array(vec![AbiValue::BigUint(U256::from(2u64))]),
            AbiValue::Tuple(vec![("0".into(), AbiValue::FixedBytes(vec![0xff]))]),
        ]
    }

    #[test]
    fn bytes32_becomes_hex_string() {
        let v = normalize(AbiValue::FixedBytes(vec![0xAB; 32]));
        let s = v.as_str().unwrap();
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 2 + 64);
        assert_eq!(s, s.to_lowercase());
    }

    #[test]
    fn address_word_is_stable_hex() {
        // a 32-byte topic word that carries an address
        let mut word = vec![0u8; 12];
        word.extend_from_slice(&hex::decode("D8DA6BF26964AF9D7EED9E03E53415D37AA96045").unwrap());
        let v = normalize(AbiValue::FixedBytes(word));
        assert_eq!(
            v.as_str().unwrap(),
            "0x000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045"
        );
    }

    #[test]
    fn big_integers_become_decimal() {
        assert_eq!(
            normalize(AbiValue::BigUint(U256::from(1000u64))),
            AbiValue::Str("1000".into())
        );
        assert_eq!(
            normalize(AbiValue::BigInt(I256::try_from(-42i64).unwrap())),
            AbiValue::Str("-42".into())
        );
    }

    #[test]
    fn fixed_arrays_are_recursed() {
        let v = normalize(AbiValue::FixedArray(vec![
            AbiValue::BigUint(U256::from(5u64)),
            AbiValue::Uint(6),
        ]));
        assert_eq!(
            v,
            AbiValue::FixedArray(vec![AbiValue::Str("5".into()), AbiValue::Uint(6)])
        );
    }

    #[test]
    fn other_values_pass_through() {
        let dynamic = AbiValue::Array(vec![AbiValue::BigUint(U256::from(2u64))]);
        assert_eq!(normalize(dynamic.clone()), dynamic);
        assert_eq!(normalize(AbiValue::Uint(9)), AbiValue::Uint(9));
        assert_eq!(normalize(AbiValue::Bytes(vec![1])), AbiValue::Bytes(vec![1]));
    }

    #[test]
    fn normalize_is_idempotent() {
        for v in samples() {
            let once = normalize(v);
            assert_eq!(normalize(once.clone()), once);
        }
    }

    #[test]
    fn map_keeps_order() {
        let mut args = IndexMap::new();
        args.insert("z".to_string(), AbiValue::BigUint(U256::from(1u64)));
        args.insert("a".to_string(), AbiValue::Uint(2));
        args.insert("m".to_string(), AbiValue::FixedBytes(vec![0x0f]));
        let out = normalize_map(args);
        let keys: Vec<_> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(out["m"], AbiValue::Str("0x0f".into()));
    }
}
