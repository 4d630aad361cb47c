//! The decoded value model.
//!
//! Every argument unpacked from a call payload or log record is represented
//! as an [`AbiValue`]. The variant is chosen once, when the ABI codec hands
//! back a value.

use alloy_primitives::{Address, I256, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded ABI argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AbiValue {
    Bool(bool),
    /// Unsigned integer declared with at most 64 bits
    Uint(u64),
    /// Signed integer declared with at most 64 bits
    Int(i64),
    /// Unsigned integer wider than 64 bits
    BigUint(U256),
    /// Signed integer wider than 64 bits
    BigInt(I256),
    /// 20-byte account address
    Address(Address),
    /// Fixed-size byte sequence: `bytesN`, hashed indexed topics, `uint8[N]`
    FixedBytes(Vec<u8>),
    /// Dynamic `bytes`
    Bytes(Vec<u8>),
    Str(String),
    /// Fixed-length array `T[N]` of non-byte elements
    FixedArray(Vec<AbiValue>),
    /// Dynamic array `T[]`
    Array(Vec<AbiValue>),
    /// Tuple / struct, components named by position
    Tuple(Vec<(String, AbiValue)>),
}

impl AbiValue {
    /// Returns the inner string if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AbiValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&Address> {
        match self {
            AbiValue::Address(a) => Some(a),
            _ => None,
        }
    }

    /// Coerce any unsigned integer variant to a `U256`.
    pub fn as_u256(&self) -> Option<U256> {
        match self {
            AbiValue::Uint(v) => Some(U256::from(*v)),
            AbiValue::BigUint(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns `true` for byte-sequence variants whose size is fixed by the ABI.
    pub fn is_fixed_bytes(&self) -> bool {
        matches!(self, AbiValue::FixedBytes(_) | AbiValue::Address(_))
    }
}

impl fmt::Display for AbiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiValue::Bool(v) => write!(f, "{v}"),
            AbiValue::Uint(v) => write!(f, "{v}"),
            AbiValue::Int(v) => write!(f, "{v}"),
            AbiValue::BigUint(v) => write!(f, "{v}"),
            AbiValue::BigInt(v) => write!(f, "{v}"),
            AbiValue::Address(a) => write!(f, "0x{}", hex::encode(a.as_slice())),
            AbiValue::FixedBytes(b) | AbiValue::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            AbiValue::Str(s) => write!(f, "{s}"),
            AbiValue::FixedArray(v) | AbiValue::Array(v) => {
                let parts: Vec<_> = v.iter().map(|x| x.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            AbiValue::Tuple(fields) => {
                let parts: Vec<_> = fields.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}
