//! A single contract's parsed ABI plus its selector and topic indexes.

use alloy_json_abi::{Event, Function, JsonAbi};
use alloy_primitives::{Address, B256};
use smcdecode_core::{error::RegistryError, fingerprint};
use std::collections::HashMap;

/// Parsed interface description of one deployed contract.
///
/// Immutable once built. Methods are indexed by 4-byte selector and
/// non-anonymous events by topic hash; within one ABI each key maps to
/// exactly one entry.
#[derive(Debug, Clone)]
pub struct ContractAbi {
    name: String,
    address: Address,
    abi: JsonAbi,
    functions: HashMap<[u8; 4], Function>,
    events: HashMap<B256, Event>,
}

impl ContractAbi {
    /// Build the selector/topic indexes for `abi`.
    ///
    /// # Errors
    /// `DuplicateSelector` / `DuplicateTopic` if two entries hash to the same key.
    pub fn new(
        name: impl Into<String>,
        address: Address,
        abi: JsonAbi,
    ) -> Result<Self, RegistryError> {
        let mut functions: HashMap<[u8; 4], Function> = HashMap::new();
        for func in abi.functions() {
            let signature = func.signature();
            let selector = fingerprint::selector(&signature);
            if let Some(existing) = functions.get(&selector) {
                return Err(RegistryError::DuplicateSelector {
                    selector: fingerprint::selector_hex(selector),
                    first: existing.signature(),
                    second: signature,
                });
            }
            functions.insert(selector, func.clone());
        }

        let mut events: HashMap<B256, Event> = HashMap::new();
        for event in abi.events().filter(|e| !e.anonymous) {
            let signature = event.signature();
            let topic = fingerprint::topic_hash(&signature);
            if let Some(existing) = events.get(&topic) {
                return Err(RegistryError::DuplicateTopic {
                    topic: format!("0x{}", hex::encode(topic)),
                    first: existing.signature(),
                    second: signature,
                });
            }
            events.insert(topic, event.clone());
        }

        Ok(Self {
            name: name.into(),
            address,
            abi,
            functions,
            events,
        })
    }

    /// Parse a standard ABI JSON document and index it.
    pub fn from_json(
        name: impl Into<String>,
        address: Address,
        abi_json: &str,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        let abi: JsonAbi = serde_json::from_str(abi_json).map_err(|e| RegistryError::InvalidAbi {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        Self::new(name, address, abi)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// `"0x"`-prefixed lowercase address.
    pub fn address_hex(&self) -> String {
        format!("0x{}", hex::encode(self.address.as_slice()))
    }

    /// The underlying parsed ABI.
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Look up a method by its 4-byte selector.
    pub fn function_by_selector(&self, selector: [u8; 4]) -> Option<&Function> {
        self.functions.get(&selector)
    }

    /// Look up an event by its topic hash (`topics[0]`).
    pub fn event_by_topic(&self, topic: &B256) -> Option<&Event> {
        self.events.get(topic)
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// All indexed methods with their selectors.
    pub fn functions(&self) -> impl Iterator<Item = (&[u8; 4], &Function)> {
        self.functions.iter()
    }

    /// All indexed events with their topic hashes.
    pub fn events(&self) -> impl Iterator<Item = (&B256, &Event)> {
        self.events.iter()
    }
}
