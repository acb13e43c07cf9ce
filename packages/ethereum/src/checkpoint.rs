//! Valset checkpoint encoding, bit-compatible with the Gravity Solidity contract's
//! `makeCheckpoint`:
//!
//! ```solidity
//! keccak256(abi.encode(gravityId, "checkpoint", valsetNonce, validators, powers))
//! ```
use crate::address::EthAddress;
use crate::error::EthereumError;
use crate::hash::keccak256;

/// Method name the Solidity contract mixes into every valset checkpoint
pub const CHECKPOINT_METHOD_NAME: &[u8] = b"checkpoint";

const WORD: usize = 32;
/// Number of head words: gravity id, method name, nonce and the two array offsets
const HEAD_WORDS: usize = 5;

/// `bytes32` right-pads `bytes` with zeroes, the way Solidity converts a short string literal
/// to `bytes32`
pub fn bytes32(bytes: &[u8]) -> Result<[u8; WORD], EthereumError> {
    if bytes.len() > WORD {
        return Err(EthereumError::GravityIdTooLong(bytes.len()));
    }
    let mut padded = [0u8; WORD];
    padded[..bytes.len()].copy_from_slice(bytes);
    Ok(padded)
}

/// `uint256` encodes `n` as a big-endian, left-padded ABI word
pub fn uint256(n: u64) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 8..].copy_from_slice(&n.to_be_bytes());
    word
}

/// `encode_checkpoint` returns the ABI encoding of a valset, ready to be hashed.
///
/// `members` must already be in the canonical valset order.
pub fn encode_checkpoint(
    gravity_id: &[u8],
    nonce: u64,
    members: &[(EthAddress, u64)],
) -> Result<Vec<u8>, EthereumError> {
    if members.is_empty() {
        return Err(EthereumError::EmptyValset);
    }
    let gravity_id = bytes32(gravity_id)?;
    let method_name = bytes32(CHECKPOINT_METHOD_NAME)?;

    let n = members.len();
    let addresses_offset = HEAD_WORDS * WORD;
    let powers_offset = addresses_offset + (n + 1) * WORD;

    let mut encoded = Vec::with_capacity((HEAD_WORDS + 2 * (n + 1)) * WORD);
    encoded.extend_from_slice(&gravity_id);
    encoded.extend_from_slice(&method_name);
    encoded.extend_from_slice(&uint256(nonce));
    encoded.extend_from_slice(&uint256(addresses_offset as u64));
    encoded.extend_from_slice(&uint256(powers_offset as u64));

    encoded.extend_from_slice(&uint256(n as u64));
    for (address, _) in members {
        encoded.extend_from_slice(&address.to_word());
    }
    encoded.extend_from_slice(&uint256(n as u64));
    for (_, power) in members {
        encoded.extend_from_slice(&uint256(*power));
    }

    Ok(encoded)
}

/// `checkpoint_hash` is the hash validators sign to attest to a valset
pub fn checkpoint_hash(
    gravity_id: &[u8],
    nonce: u64,
    members: &[(EthAddress, u64)],
) -> Result<[u8; WORD], EthereumError> {
    let encoded = encode_checkpoint(gravity_id, nonce, members)?;
    Ok(keccak256(&encoded))
}
