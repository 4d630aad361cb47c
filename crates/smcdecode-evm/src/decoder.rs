//! Event log decoder.
//!
//! - `topics[0]` is keccak256 of the event's canonical signature
//! - `topics[1..]` hold the indexed arguments, one 32-byte word each
//! - `data` holds the non-indexed arguments as an ABI-encoded tuple
//!
//! Decoded arguments are merged back into declaration order and returned
//! in their unpacked form; see [`DecodedEvent::normalized`].

use std::sync::Arc;

use alloy_json_abi::Event;
use indexmap::IndexMap;
use smcdecode_core::{
    error::DecodeError,
    event::{DecodedEvent, RawLog},
    hexdata,
    types::AbiValue,
};
use smcdecode_registry::{AbiRegistry, ContractAbi};
use tracing::debug;

use crate::codec;
use crate::signature::event_signature;

/// Decodes log records emitted by the contracts in an [`AbiRegistry`].
#[derive(Debug, Clone)]
pub struct LogDecoder {
    registry: Arc<AbiRegistry>,
}

impl LogDecoder {
    pub fn new(registry: Arc<AbiRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &AbiRegistry {
        &self.registry
    }

    /// Decode `log` using the ABI registered at `log.address`.
    pub fn decode(&self, log: &RawLog) -> Result<DecodedEvent, DecodeError> {
        let contract = self.registry.contract(&log.address)?;
        self.decode_with_abi(contract, log)
    }

    /// Decode `log` against an explicitly chosen contract ABI.
    ///
    /// # Errors
    /// - `MalformedPayload` if the log has no topics, a topic is not a
    ///   32-byte hex word, `data` is not hex, or the number of indexed
    ///   topics differs from the event's indexed argument count
    /// - `EventNotFound` if `topics[0]` matches none of the ABI's events
    /// - `UnpackFailure` if `data` does not match the non-indexed inputs
    pub fn decode_with_abi(
        &self,
        contract: &ContractAbi,
        log: &RawLog,
    ) -> Result<DecodedEvent, DecodeError> {
        let first = log
            .event_topic()
            .ok_or_else(|| DecodeError::malformed("log has no topics"))?;
        let topic0 = hexdata::parse_hash(first, "topic[0]")?;

        let event = contract
            .event_by_topic(&topic0)
            .ok_or_else(|| DecodeError::EventNotFound {
                address: contract.address_hex(),
                topic: format!("0x{}", hex::encode(topic0)),
            })?;

        debug!(
            "decoding log {} from {} (tx {}, index {})",
            event.name, log.address, log.tx_hash, log.log_index
        );

        let mut slots: Vec<Option<AbiValue>> = vec![None; event.inputs.len()];
        unpack_data(event, &log.data, &mut slots)?;
        unpack_topics(event, &log.topics[1..], &mut slots)?;

        let keys = codec::argument_keys(event.inputs.iter().map(|p| p.name.as_str()));
        let arguments: IndexMap<String, AbiValue> = keys
            .into_iter()
            .zip(slots)
            .filter_map(|(key, slot)| slot.map(|v| (key, v)))
            .collect();

        Ok(DecodedEvent {
            address: log.address.clone(),
            tx_hash: log.tx_hash.clone(),
            block_height: log.block_height,
            log_index: log.log_index,
            method_name: event.name.clone(),
            signature: event_signature(event),
            arguments,
        })
    }
}

/// Fill the non-indexed slots from `data`. Empty data leaves them unset.
fn unpack_data(
    event: &Event,
    data: &str,
    slots: &mut [Option<AbiValue>],
) -> Result<(), DecodeError> {
    let bytes = hexdata::decode_hex(data, "log data")?;
    if bytes.is_empty() {
        return Ok(());
    }

    let positions: Vec<usize> = event
        .inputs
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.indexed)
        .map(|(i, _)| i)
        .collect();

    let types = codec::resolve_types(positions.iter().map(|&i| &event.inputs[i]))?;
    let values = codec::unpack_sequence(types, &bytes)?;

    for (pos, value) in positions.into_iter().zip(values) {
        slots[pos] = Some(codec::from_dyn(value));
    }
    Ok(())
}

/// Fill the indexed slots from `topics[1..]`, in declaration order.
fn unpack_topics(
    event: &Event,
    topics: &[String],
    slots: &mut [Option<AbiValue>],
) -> Result<(), DecodeError> {
    let indexed: Vec<usize> = event
        .inputs
        .iter()
        .enumerate()
        .filter(|(_, p)| p.indexed)
        .map(|(i, _)| i)
        .collect();

    if indexed.len() != topics.len() {
        return Err(DecodeError::malformed(format!(
            "event {} declares {} indexed arguments but the log carries {} topics",
            event.name,
            indexed.len(),
            topics.len()
        )));
    }

    for (n, (pos, topic)) in indexed.into_iter().zip(topics).enumerate() {
        let word = hexdata::parse_hash(topic, &format!("topic[{}]", n + 1))?;
        slots[pos] = Some(codec::unpack_topic(&event.inputs[pos], &word)?);
    }
    Ok(())
}
