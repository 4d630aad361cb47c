//! Output type for decoded transaction call payloads.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::AbiValue;

/// Result of decoding a transaction's input data against a contract ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedCall {
    /// Canonical signature with argument names, e.g. `transfer(address to, uint256 amount)`
    pub function: String,
    /// `"0x"` + hex of the 4-byte selector
    pub method_id: String,
    /// Bare method name, e.g. `transfer`
    pub method_name: String,
    /// Normalized arguments in ABI declaration order
    pub arguments: IndexMap<String, AbiValue>,
}

impl DecodedCall {
    /// Look up a decoded argument by name.
    pub fn argument(&self, name: &str) -> Option<&AbiValue> {
        self.arguments.get(name)
    }

    /// Argument names in declaration order.
    pub fn argument_names(&self) -> Vec<&str> {
        self.arguments.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DecodedCall {
        let mut arguments = IndexMap::new();
        arguments.insert("to".to_string(), AbiValue::Str("0xabc".into()));
        arguments.insert("amount".to_string(), AbiValue::Str("1000".into()));
        DecodedCall {
            function: "transfer(address to, uint256 amount)".into(),
            method_id: "0xa9059cbb".into(),
            method_name: "transfer".into(),
            arguments,
        }
    }

    #[test]
    fn argument_lookup() {
        let call = sample();
        assert!(call.argument("to").is_some());
        assert!(call.argument("nonexistent").is_none());
        assert_eq!(call.argument_names(), ["to", "amount"]);
    }

    #[test]
    fn json_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["methodId"], "0xa9059cbb");
        assert_eq!(json["methodName"], "transfer");
        assert!(json["arguments"].is_object());
    }
}
