//! `smcdecode contracts` and `smcdecode selector`.

use alloy_json_abi::{Event, Function};
use anyhow::Result;
use smcdecode_core::fingerprint;
use smcdecode_evm::{event_signature, function_signature};
use smcdecode_registry::AbiRegistry;

pub fn list(registry: &AbiRegistry, detail: bool) -> Result<()> {
    let mut contracts: Vec<_> = registry.contracts().collect();
    contracts.sort_by(|a, b| a.name().cmp(b.name()));

    for contract in contracts {
        println!(
            "{:<16} {}  {} methods, {} events",
            contract.name(),
            contract.address_hex(),
            contract.function_count(),
            contract.event_count()
        );
        if !detail {
            continue;
        }

        let mut functions: Vec<_> = contract.functions().collect();
        functions.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        for (selector, func) in functions {
            println!("    {}  {}", fingerprint::selector_hex(*selector), function_signature(func));
        }

        let mut events: Vec<_> = contract.events().collect();
        events.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        for (topic, event) in events {
            println!("    0x{}  {}", hex::encode(topic), event_signature(event));
        }
    }
    Ok(())
}

/// Canonical form of a human-written signature.
///
/// `"event Transfer(address indexed from, address indexed to, uint256 value)"`
/// → `"Transfer(address,address,uint256)"`. Text that does not parse is
/// hashed as given.
pub fn canonical_signature(signature: &str) -> String {
    let trimmed = signature.trim();
    if trimmed.starts_with("event ") {
        if let Ok(event) = Event::parse(trimmed) {
            return event.signature();
        }
    } else if let Ok(func) = Function::parse(trimmed) {
        return func.signature();
    }
    trimmed.to_string()
}

pub fn selector(signature: &str) -> Result<()> {
    let canonical = canonical_signature(signature);
    println!("Signature:  {}", canonical);
    println!("Selector:   {}", fingerprint::selector_hex(fingerprint::selector(&canonical)));
    println!("Topic:      0x{}", hex::encode(fingerprint::topic_hash(&canonical)));
    Ok(())
}
