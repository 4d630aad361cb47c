//! # smcdecode-registry
//!
//! ABI registry for smcdecode.
//!
//! Holds the parsed interface description of every known contract, keyed
//! by address, with per-contract indexes from 4-byte selector to method and
//! from topic hash to event. Contracts can be registered programmatically
//! or loaded from a YAML/JSON config file at startup.

pub mod config;
pub mod contract;
pub mod memory;

pub use config::{ContractConfig, RegistryConfig};
pub use contract::ContractAbi;
pub use memory::{parse_address, AbiRegistry};
