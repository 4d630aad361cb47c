//! Contract-call decoder.
//!
//! Decodes transaction `input` data sent to a registered contract.
//!
//! # How it works
//! - First 4 bytes of the payload = keccak256(function_signature)[:4] (the selector)
//! - The selector is resolved against the ABI registered at the `to` address
//! - Remaining bytes = ABI-encoded inputs tuple, which must be whole 32-byte words

use std::sync::Arc;

use indexmap::IndexMap;
use smcdecode_core::{
    call::DecodedCall, error::DecodeError, fingerprint, hexdata, normalizer::normalize,
    types::AbiValue,
};
use smcdecode_registry::AbiRegistry;
use tracing::debug;

use crate::codec::{self, WORD_SIZE};
use crate::signature::function_signature;

/// Decodes call payloads against the contracts in an [`AbiRegistry`].
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct CallDecoder {
    registry: Arc<AbiRegistry>,
}

impl CallDecoder {
    pub fn new(registry: Arc<AbiRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &AbiRegistry {
        &self.registry
    }

    /// Decode a hex call payload sent to the contract at `to`.
    ///
    /// Payloads of two characters or fewer (`""`, `"0x"`) carry no call
    /// and yield `Ok(None)`; a plain value transfer is not an error.
    ///
    /// # Errors
    /// - `UnknownContract` if no ABI is registered at `to`
    /// - `MethodNotFound` if the selector matches none of its methods
    /// - `MalformedPayload` for bad hex, a payload shorter than the selector,
    ///   or an argument body that is not a whole number of words
    /// - `UnpackFailure` if the body does not match the method's inputs
    pub fn decode_input(&self, to: &str, input: &str) -> Result<Option<DecodedCall>, DecodeError> {
        if input.len() <= 2 {
            return Ok(None);
        }
        let payload = hexdata::decode_hex(input, "call payload")?;
        self.decode_bytes(to, &payload).map(Some)
    }

    /// Decode raw payload bytes (selector + argument body).
    pub fn decode_bytes(&self, to: &str, payload: &[u8]) -> Result<DecodedCall, DecodeError> {
        let (selector, body) = match payload {
            [a, b, c, d, body @ ..] => ([*a, *b, *c, *d], body),
            _ => {
                return Err(DecodeError::malformed(format!(
                    "call payload too short: {} bytes (need at least 4 for selector)",
                    payload.len()
                )))
            }
        };

        let func = self.registry.resolve_by_selector(to, selector)?;

        if body.len() % WORD_SIZE != 0 {
            return Err(DecodeError::malformed(format!(
                "improperly formatted arguments for {}: {} bytes is not a multiple of {WORD_SIZE}",
                func.name,
                body.len()
            )));
        }

        let method_id = fingerprint::selector_hex(selector);
        debug!("decoding call {} ({}) to {}", func.name, method_id, to);

        let types = codec::resolve_types(&func.inputs)?;
        let values = codec::unpack_sequence(types, body)?;

        let keys = codec::argument_keys(func.inputs.iter().map(|p| p.name.as_str()));
        let arguments: IndexMap<String, AbiValue> = keys
            .into_iter()
            .zip(values)
            .map(|(key, value)| (key, normalize(codec::from_dyn(value))))
            .collect();

        Ok(DecodedCall {
            function: function_signature(func),
            method_id,
            method_name: func.name.clone(),
            arguments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
    const ERC20_ABI: &str = r#"[
        {"type":"function","name":"transfer","stateMutability":"nonpayable",
         "inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],
         "outputs":[{"name":"","type":"bool"}]},
        {"type":"function","name":"approve","stateMutability":"nonpayable",
         "inputs":[{"name":"","type":"address"},{"name":"","type":"uint256"}],
         "outputs":[{"name":"","type":"bool"}]},
        {"type":"function","name":"pair","stateMutability":"nonpayable",
         "inputs":[{"name":"","type":"uint256"},{"name":"arg0","type":"uint256"}],
         "outputs":[]},
        {"type":"function","name":"totalSupply","stateMutability":"view",
         "inputs":[],"outputs":[{"name":"","type":"uint256"}]}
    ]"#;

    fn decoder() -> CallDecoder {
        let mut registry = AbiRegistry::new();
        registry.register_json("token", TOKEN, ERC20_ABI).unwrap();
        CallDecoder::new(Arc::new(registry))
    }

    fn word(byte_hex: &str) -> String {
        format!("{byte_hex:0>64}")
    }

    fn transfer_input() -> String {
        format!(
            "0xa9059cbb{}{}",
            word("d8da6bf26964af9d7eed9e03e53415d37aa96045"),
            word("3e8")
        )
    }

    #[test]
    fn decodes_transfer() {
        let call = decoder().decode_input(TOKEN, &transfer_input()).unwrap().unwrap();
        assert_eq!(call.method_name, "transfer");
        assert_eq!(call.method_id, "0xa9059cbb");
        assert_eq!(call.function, "transfer(address to, uint256 amount)");
        assert_eq!(call.argument_names(), vec!["to", "amount"]);
        assert_eq!(
            call.argument("to"),
            Some(&AbiValue::Str("0xd8da6bf26964af9d7eed9e03e53415d37aa96045".into()))
        );
        assert_eq!(call.argument("amount"), Some(&AbiValue::Str("1000".into())));
    }

    #[test]
    fn empty_input_is_no_call() {
        let d = decoder();
        assert!(d.decode_input(TOKEN, "").unwrap().is_none());
        assert!(d.decode_input(TOKEN, "0x").unwrap().is_none());
    }

    #[test]
    fn prefix_is_optional() {
        let input = transfer_input();
        let call = decoder().decode_input(TOKEN, &input[2..]).unwrap().unwrap();
        assert_eq!(call.method_name, "transfer");
    }

    #[test]
    fn zero_argument_method() {
        let call = decoder().decode_input(TOKEN, "0x18160ddd").unwrap().unwrap();
        assert_eq!(call.method_name, "totalSupply");
        assert_eq!(call.function, "totalSupply()");
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn unnamed_inputs_keyed_by_position() {
        let input = format!("0x095ea7b3{}{}", word("01"), word("02"));
        let call = decoder().decode_input(TOKEN, &input).unwrap().unwrap();
        assert_eq!(call.argument_names(), vec!["arg0", "arg1"]);
        assert_eq!(call.function, "approve(address, uint256)");
    }

    #[test]
    fn synthesized_key_never_shadows_declared_argument() {
        let selector = fingerprint::selector_hex(fingerprint::selector("pair(uint256,uint256)"));
        let input = format!("{selector}{}{}", word("01"), word("02"));
        let call = decoder().decode_input(TOKEN, &input).unwrap().unwrap();
        assert_eq!(call.argument_names(), vec!["arg0_1", "arg0"]);
        assert_eq!(call.argument("arg0_1"), Some(&AbiValue::Str("1".into())));
        assert_eq!(call.argument("arg0"), Some(&AbiValue::Str("2".into())));
    }

    #[test]
    fn unknown_selector() {
        let err = decoder().decode_input(TOKEN, "0xdeadbeef").unwrap_err();
        match err {
            DecodeError::MethodNotFound { selector, .. } => assert_eq!(selector, "0xdeadbeef"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_contract() {
        let err = decoder()
            .decode_input("0x0000000000000000000000000000000000000001", &transfer_input())
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnknownContract { .. }));
    }

    #[test]
    fn ragged_body_is_malformed() {
        let input = format!("{}00", transfer_input());
        match decoder().decode_input(TOKEN, &input).unwrap_err() {
            DecodeError::MalformedPayload { reason } => {
                assert!(reason.contains("65 bytes"), "reason: {reason}")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_payload_is_malformed() {
        let err = decoder().decode_input(TOKEN, "0xa905").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload { .. }));
    }

    #[test]
    fn bad_hex_is_malformed() {
        let err = decoder().decode_input(TOKEN, "0xnothex!").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload { .. }));
    }

    #[test]
    fn truncated_body_fails_unpack() {
        let input = format!("0xa9059cbb{}", word("01"));
        let err = decoder().decode_input(TOKEN, &input).unwrap_err();
        assert!(matches!(err, DecodeError::UnpackFailure { .. }));
    }
}
