//! Bridge between the alloy ABI codec and the smcdecode value model.
//!
//! alloy does the actual word-level ABI decoding; this module resolves
//! declared parameter types, invokes the codec, and converts each
//! `DynSolValue` into an [`AbiValue`] variant.

use alloy_dyn_abi::{DynSolType, DynSolValue, Specifier};
use alloy_json_abi::EventParam;
use alloy_primitives::B256;
use std::collections::HashSet;
use smcdecode_core::{error::DecodeError, types::AbiValue};

/// ABI word size in bytes.
pub const WORD_SIZE: usize = 32;

/// Output key for a declared argument; unnamed arguments become `arg<i>`.
pub fn arg_name(name: &str, position: usize) -> String {
    if name.is_empty() {
        format!("arg{position}")
    } else {
        name.to_string()
    }
}

/// Output keys for a whole argument list, in declaration order.
///
/// Declared names win. A synthesized `arg<i>` or a repeated name that is
/// already taken gets a `_<n>` suffix, so every argument keeps its own key.
pub fn argument_keys<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let names: Vec<&str> = names.into_iter().collect();
    let declared: HashSet<&str> = names.iter().copied().filter(|n| !n.is_empty()).collect();
    let mut used: HashSet<String> = HashSet::with_capacity(names.len());

    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let base = arg_name(name, i);
            let mut key = base.clone();
            let mut n = 1;
            while used.contains(&key) || (key != *name && declared.contains(key.as_str())) {
                key = format!("{base}_{n}");
                n += 1;
            }
            used.insert(key.clone());
            key
        })
        .collect()
}

/// Resolve declared parameter types (function `Param`s or `EventParam`s).
pub fn resolve_types<'a, P>(params: impl IntoIterator<Item = &'a P>) -> Result<Vec<DynSolType>, DecodeError>
where
    P: Specifier<DynSolType> + 'a,
{
    params
        .into_iter()
        .map(|p| {
            p.resolve()
                .map_err(|e| DecodeError::unpack(format!("unsupported parameter type: {e}")))
        })
        .collect()
}

/// ABI-decode `data` as a sequence of `types` (an argument tuple).
pub fn unpack_sequence(types: Vec<DynSolType>, data: &[u8]) -> Result<Vec<DynSolValue>, DecodeError> {
    if types.is_empty() {
        return Ok(vec![]);
    }

    let decoded = DynSolType::Tuple(types)
        .abi_decode_params(data)
        .map_err(|e| DecodeError::unpack(e.to_string()))?;

    Ok(match decoded {
        DynSolValue::Tuple(vals) => vals,
        other => vec![other],
    })
}

/// Reference types are stored in topics as the keccak256 of their
/// encoding, so the original value cannot be recovered.
fn hashed_in_topic(ty: &DynSolType) -> bool {
    matches!(
        ty,
        DynSolType::String
            | DynSolType::Bytes
            | DynSolType::Array(_)
            | DynSolType::FixedArray(..)
            | DynSolType::Tuple(_)
    )
}

/// Decode one indexed event argument from its topic word.
pub fn unpack_topic(param: &EventParam, topic: &B256) -> Result<AbiValue, DecodeError> {
    let ty = param
        .resolve()
        .map_err(|e| DecodeError::unpack(format!("unsupported parameter type: {e}")))?;

    if hashed_in_topic(&ty) {
        return Ok(AbiValue::FixedBytes(topic.to_vec()));
    }

    ty.abi_decode(topic.as_slice())
        .map(from_dyn)
        .map_err(|e| DecodeError::unpack(format!("topic for '{}': {e}", param.name)))
}

/// Convert a decoded `DynSolValue` into an `AbiValue`.
pub fn from_dyn(val: DynSolValue) -> AbiValue {
    match val {
        DynSolValue::Bool(b) => AbiValue::Bool(b),

        DynSolValue::Int(i, bits) => {
            if bits <= 64 {
                match i64::try_from(i) {
                    Ok(v) => AbiValue::Int(v),
                    Err(_) => AbiValue::BigInt(i),
                }
            } else {
                AbiValue::BigInt(i)
            }
        }

        DynSolValue::Uint(u, bits) => {
            if bits <= 64 {
                match u64::try_from(u) {
                    Ok(v) => AbiValue::Uint(v),
                    Err(_) => AbiValue::BigUint(u),
                }
            } else {
                AbiValue::BigUint(u)
            }
        }

        DynSolValue::FixedBytes(word, size) => AbiValue::FixedBytes(word.as_slice()[..size].to_vec()),

        DynSolValue::Address(a) => AbiValue::Address(a),

        // address (20 bytes) + selector (4 bytes)
        DynSolValue::Function(f) => AbiValue::FixedBytes(f.to_vec()),

        DynSolValue::Bytes(b) => AbiValue::Bytes(b),

        DynSolValue::String(s) => AbiValue::Str(s),

        DynSolValue::Array(vals) => AbiValue::Array(vals.into_iter().map(from_dyn).collect()),

        DynSolValue::FixedArray(vals) => {
            // uint8[N] is a fixed byte sequence
            if !vals.is_empty() && vals.iter().all(|v| matches!(v, DynSolValue::Uint(_, 8))) {
                let bytes = vals
                    .iter()
                    .filter_map(|v| v.as_uint().map(|(u, _)| u.as_limbs()[0] as u8))
                    .collect();
                AbiValue::FixedBytes(bytes)
            } else {
                AbiValue::FixedArray(vals.into_iter().map(from_dyn).collect())
            }
        }

        DynSolValue::Tuple(fields) => AbiValue::Tuple(
            fields
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), from_dyn(v)))
                .collect(),
        ),
    }
}
