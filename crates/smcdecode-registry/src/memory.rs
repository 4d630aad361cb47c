//! In-memory ABI registry keyed by contract address.
//!
//! Populate it with `&mut` access at startup, then share it read-only
//! (typically behind an `Arc`). Because every mutating method needs
//! `&mut self`, registration after the registry has been shared does not
//! compile, and the read path needs no locking.

use alloy_json_abi::{Event, Function, JsonAbi};
use alloy_primitives::{Address, B256};
use smcdecode_core::{
    error::{DecodeError, RegistryError},
    fingerprint, hexdata,
};
use std::collections::HashMap;
use tracing::info;

use crate::contract::ContractAbi;

/// Parse a 20-byte address, case-insensitive, `0x` optional.
pub fn parse_address(s: &str) -> Option<Address> {
    let bytes = hex::decode(hexdata::strip_0x(s.trim())).ok()?;
    (bytes.len() == 20).then(|| Address::from_slice(&bytes))
}

/// Registry of contract ABIs.
#[derive(Debug, Default, Clone)]
pub struct AbiRegistry {
    contracts: HashMap<Address, ContractAbi>,
}

impl AbiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `abi` for the contract deployed at `address`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        address: &str,
        abi: JsonAbi,
    ) -> Result<(), RegistryError> {
        let addr = parse_address(address).ok_or_else(|| RegistryError::InvalidAddress {
            address: address.to_string(),
        })?;
        self.insert(ContractAbi::new(name, addr, abi)?)
    }

    /// Register a contract from its ABI JSON text.
    pub fn register_json(
        &mut self,
        name: impl Into<String>,
        address: &str,
        abi_json: &str,
    ) -> Result<(), RegistryError> {
        let addr = parse_address(address).ok_or_else(|| RegistryError::InvalidAddress {
            address: address.to_string(),
        })?;
        self.insert(ContractAbi::from_json(name, addr, abi_json)?)
    }

    /// Add an already-indexed contract. Each address may be registered once.
    pub fn insert(&mut self, contract: ContractAbi) -> Result<(), RegistryError> {
        let address = contract.address();
        if self.contracts.contains_key(&address) {
            return Err(RegistryError::AlreadyRegistered {
                address: contract.address_hex(),
            });
        }
        info!(
            "registered contract '{}' at {} ({} methods, {} events)",
            contract.name(),
            contract.address_hex(),
            contract.function_count(),
            contract.event_count()
        );
        self.contracts.insert(address, contract);
        Ok(())
    }

    /// Look up the ABI registered for `address`.
    ///
    /// # Errors
    /// `UnknownContract` if nothing is registered there, `MalformedPayload`
    /// if `address` is not a 20-byte hex string.
    pub fn contract(&self, address: &str) -> Result<&ContractAbi, DecodeError> {
        let addr = parse_address(address)
            .ok_or_else(|| DecodeError::malformed(format!("invalid contract address '{address}'")))?;
        self.contract_at(&addr).ok_or_else(|| DecodeError::UnknownContract {
            address: address.to_string(),
        })
    }

    pub fn contract_at(&self, address: &Address) -> Option<&ContractAbi> {
        self.contracts.get(address)
    }

    /// Resolve the method of the contract at `address` whose selector is `selector`.
    pub fn resolve_by_selector(
        &self,
        address: &str,
        selector: [u8; 4],
    ) -> Result<&Function, DecodeError> {
        let contract = self.contract(address)?;
        contract
            .function_by_selector(selector)
            .ok_or_else(|| DecodeError::MethodNotFound {
                address: contract.address_hex(),
                selector: fingerprint::selector_hex(selector),
            })
    }

    /// Resolve the event of the contract at `address` whose topic hash is `topic`.
    pub fn resolve_by_topic(&self, address: &str, topic: &B256) -> Result<&Event, DecodeError> {
        let contract = self.contract(address)?;
        contract
            .event_by_topic(topic)
            .ok_or_else(|| DecodeError::EventNotFound {
                address: contract.address_hex(),
                topic: format!("0x{}", hex::encode(topic)),
            })
    }

    /// All registered contracts, in no particular order.
    pub fn contracts(&self) -> impl Iterator<Item = &ContractAbi> {
        self.contracts.values()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
