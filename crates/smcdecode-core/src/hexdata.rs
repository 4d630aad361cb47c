//! Hex text helpers shared by the call and log decoders.

use alloy_primitives::B256;

use crate::error::DecodeError;

/// Strip exactly one leading `0x` / `0X`, if present.
pub fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode hex text (optionally `0x`-prefixed) into bytes.
pub fn decode_hex(s: &str, what: &str) -> Result<Vec<u8>, DecodeError> {
    hex::decode(strip_0x(s)).map_err(|e| DecodeError::malformed(format!("invalid {what} hex: {e}")))
}

/// Parse a 32-byte hash, e.g. a log topic.
pub fn parse_hash(s: &str, what: &str) -> Result<B256, DecodeError> {
    let bytes = decode_hex(s, what)?;
    if bytes.len() != 32 {
        return Err(DecodeError::malformed(format!(
            "{what} must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    Ok(B256::from_slice(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_one_prefix() {
        assert_eq!(strip_0x("0x00ab"), "00ab");
        assert_eq!(strip_0x("0X0x"), "0x");
        assert_eq!(strip_0x("abcd"), "abcd");
    }

    #[test]
    fn leading_zero_bytes_survive() {
        assert_eq!(decode_hex("0x0000ff", "data").unwrap(), vec![0, 0, 0xff]);
    }

    #[test]
    fn bad_hex_is_malformed() {
        let err = decode_hex("0xzz", "data").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload { .. }));
    }

    #[test]
    fn hash_length_checked() {
        assert!(parse_hash("0x1234", "topic").is_err());
        let h = parse_hash(&format!("0x{}", "11".repeat(32)), "topic").unwrap();
        assert_eq!(h, B256::repeat_byte(0x11));
    }
}
