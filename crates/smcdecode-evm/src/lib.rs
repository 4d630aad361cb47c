//! # smcdecode-evm
//!
//! Decoders for contract-call payloads and event logs of registered
//! contracts on KardiaChain and other EVM-compatible chains.
//!
//! ## Implementation notes
//! - Uses `alloy-dyn-abi` for ABI decode
//! - Call payload: 4-byte selector + ABI-encoded argument tuple
//! - Log: `topics[0]` → event topic hash, `topics[1..]` → indexed arguments,
//!   `data` → non-indexed arguments
//! - Registries are shared as `Arc<AbiRegistry>`; decoders hold no other state

pub mod batch;
pub mod call_decoder;
pub mod codec;
pub mod decoder;
pub mod signature;

pub use batch::{decode_inputs, decode_logs, BatchDecodeResult, ErrorMode};
pub use call_decoder::CallDecoder;
pub use decoder::LogDecoder;
pub use signature::{event_signature, function_signature};
