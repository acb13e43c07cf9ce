use sha3::{Digest, Keccak256};

pub const HASH_LENGTH: usize = 32;

/// `keccak256` is the legacy Keccak-256 hash used by the EVM (not NIST SHA3-256)
pub fn keccak256(data: &[u8]) -> [u8; HASH_LENGTH] {
    let mut hash = [0u8; HASH_LENGTH];
    hash.copy_from_slice(&Keccak256::digest(data));
    hash
}
