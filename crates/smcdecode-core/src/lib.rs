//! # smcdecode-core
//!
//! Core types shared across all smcdecode crates: the decoded value model,
//! the value normalizer, raw/decoded call and log records, error enums, and
//! selector/topic hashing. The registry and EVM decoders are built on top of
//! the definitions here.

pub mod call;
pub mod error;
pub mod event;
pub mod fingerprint;
pub mod hexdata;
pub mod normalizer;
pub mod types;

pub use call::DecodedCall;
pub use error::{BatchDecodeError, DecodeError, RegistryError};
pub use event::{DecodedEvent, RawLog};
pub use normalizer::{normalize, normalize_map};
pub use types::AbiValue;
