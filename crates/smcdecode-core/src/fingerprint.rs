//! Selector and topic-hash computation.
//!
//! A method selector is the first 4 bytes of the keccak256 hash of its
//! canonical signature, e.g. `keccak256("transfer(address,uint256)")[..4]`
//! = `0xa9059cbb`. An event's topic hash is the full 32-byte hash; it is
//! carried as `topics[0]` of every non-anonymous log.

use alloy_primitives::B256;
use tiny_keccak::{Hasher, Keccak};

/// keccak256 of arbitrary bytes.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// 4-byte selector of a canonical method signature `name(type1,type2,...)`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// 32-byte topic hash of a canonical event signature `Name(type1,type2,...)`.
pub fn topic_hash(signature: &str) -> B256 {
    B256::from(keccak256(signature.as_bytes()))
}

/// `"0x"`-prefixed lowercase hex of a selector.
pub fn selector_hex(selector: [u8; 4]) -> String {
    format!("0x{}", hex::encode(selector))
}
