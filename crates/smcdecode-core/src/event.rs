//! Raw and decoded event log types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::normalizer::normalize_map;
use crate::types::AbiValue;

/// A raw, undecoded log record as returned by a chain node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    /// Contract address that emitted the log
    pub address: String,
    /// `topics[0]` is the event's topic hash; `topics[1..]` are indexed arguments in order
    pub topics: Vec<String>,
    /// Hex-encoded non-indexed arguments (optionally `0x`-prefixed)
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub block_height: u64,
    #[serde(default)]
    pub tx_hash: String,
    /// Log index within the transaction
    #[serde(default)]
    pub log_index: u32,
}

impl RawLog {
    pub fn new(address: impl Into<String>, topics: Vec<String>, data: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            topics,
            data: data.into(),
            ..Self::default()
        }
    }

    /// Returns `topics[0]`, the event topic hash, if present.
    pub fn event_topic(&self) -> Option<&str> {
        self.topics.first().map(String::as_str)
    }
}

/// A decoded event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedEvent {
    pub address: String,
    pub tx_hash: String,
    pub block_height: u64,
    pub log_index: u32,
    /// Bare event name, e.g. `Transfer`
    pub method_name: String,
    /// Reconstructed signature, e.g.
    /// `Transfer(index_topic_1 address from, index_topic_2 address to, uint256 value)`
    pub signature: String,
    /// Indexed and non-indexed arguments merged in ABI declaration order
    pub arguments: IndexMap<String, AbiValue>,
}

impl DecodedEvent {
    /// Look up a decoded argument by name.
    pub fn argument(&self, name: &str) -> Option<&AbiValue> {
        self.arguments.get(name)
    }

    /// Argument names in declaration order.
    pub fn argument_names(&self) -> Vec<&str> {
        self.arguments.keys().map(String::as_str).collect()
    }

    /// Apply the value normalizer to every argument.
    ///
    /// The log decoder leaves arguments in their unpacked form; call this
    /// when hex/decimal display forms are needed.
    pub fn normalized(mut self) -> Self {
        self.arguments = normalize_map(self.arguments);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    #[test]
    fn raw_log_event_topic() {
        let log = RawLog::new(
            "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            vec!["0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef".into()],
            "",
        );
        assert!(log.event_topic().unwrap().starts_with("0xddf252ad"));
        assert!(RawLog::default().event_topic().is_none());
    }

    #[test]
    fn raw_log_from_node_json() {
        let log: RawLog = serde_json::from_str(
            r#"{"address":"0x01","topics":["0x02"],"data":"00","blockHeight":12,"txHash":"0x03"}"#,
        )
        .unwrap();
        assert_eq!(log.block_height, 12);
        assert_eq!(log.log_index, 0);
    }

    #[test]
    fn normalized_keeps_order() {
        let mut arguments = IndexMap::new();
        arguments.insert("from".to_string(), AbiValue::FixedBytes(vec![0x01; 32]));
        arguments.insert("value".to_string(), AbiValue::BigUint(U256::from(1000u64)));
        let event = DecodedEvent {
            address: String::new(),
            tx_hash: String::new(),
            block_height: 0,
            log_index: 0,
            method_name: "Transfer".into(),
            signature: "Transfer(index_topic_1 address from, uint256 value)".into(),
            arguments,
        }
        .normalized();
        assert_eq!(event.argument_names(), ["from", "value"]);
        assert_eq!(event.argument("value"), Some(&AbiValue::Str("1000".into())));
    }
}
