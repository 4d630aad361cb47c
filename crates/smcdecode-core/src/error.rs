//! Error types for the smcdecode decode pipeline.

use thiserror::Error;

/// Errors that can occur while decoding a single call payload or log record.
///
/// None of these are retried internally: malformed input means either an
/// unsupported contract version or corrupted upstream data.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unknown contract {address}")]
    UnknownContract { address: String },

    #[error("Method not found for selector {selector} on contract {address}")]
    MethodNotFound { address: String, selector: String },

    #[error("Event not found for topic {topic} on contract {address}")]
    EventNotFound { address: String, topic: String },

    #[error("Malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("ABI unpack failed: {reason}")]
    UnpackFailure { reason: String },
}

impl DecodeError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }

    pub fn unpack(reason: impl Into<String>) -> Self {
        Self::UnpackFailure {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during batch decoding.
#[derive(Debug, Error)]
pub enum BatchDecodeError {
    #[error("Decode error at index {index}: {source}")]
    ItemFailed {
        index: usize,
        #[source]
        source: DecodeError,
    },
}

/// Errors from building or loading the ABI registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Contract {address} is already registered")]
    AlreadyRegistered { address: String },

    #[error("Invalid contract address '{address}'")]
    InvalidAddress { address: String },

    #[error("Invalid ABI for '{name}': {reason}")]
    InvalidAbi { name: String, reason: String },

    #[error("Selector {selector} is declared by both '{first}' and '{second}'")]
    DuplicateSelector {
        selector: String,
        first: String,
        second: String,
    },

    #[error("Topic {topic} is declared by both '{first}' and '{second}'")]
    DuplicateTopic {
        topic: String,
        first: String,
        second: String,
    },

    #[error("Registry config validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Parse error in registry config: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
