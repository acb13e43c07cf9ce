use std::fmt;
use std::str::FromStr;

use crate::error::EthereumError;
use crate::hash::keccak256;

pub const ADDRESS_LENGTH: usize = 20;
/// Length of an uncompressed SEC1 public key (`0x04 || x || y`)
pub const UNCOMPRESSED_PUBKEY_LENGTH: usize = 65;

/// A 20-byte Ethereum account address.
///
/// Ordering is byte-wise, which is also the ordering of the lower-case hex rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthAddress([u8; ADDRESS_LENGTH]);

impl EthAddress {
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        EthAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Derives the address from an uncompressed public key: the last 20 bytes of the Keccak-256
    /// hash of the 64 coordinate bytes.
    pub fn from_uncompressed_pubkey(pubkey: &[u8]) -> Result<Self, EthereumError> {
        if pubkey.len() != UNCOMPRESSED_PUBKEY_LENGTH || pubkey[0] != 0x04 {
            return Err(EthereumError::InvalidPublicKeyLength(pubkey.len()));
        }
        let hash = keccak256(&pubkey[1..]);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&hash[12..]);
        Ok(EthAddress(bytes))
    }

    /// The address left-padded to a 32-byte ABI word
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }
}

impl FromStr for EthAddress {
    type Err = EthereumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_str = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(hex_str).map_err(|e| EthereumError::InvalidAddress(e.to_string()))?;
        let bytes: [u8; ADDRESS_LENGTH] = bytes.try_into().map_err(|b: Vec<u8>| {
            EthereumError::InvalidAddress(format!(
                "expected {ADDRESS_LENGTH} bytes, got {}",
                b.len()
            ))
        })?;
        Ok(EthAddress(bytes))
    }
}

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; ADDRESS_LENGTH]> for EthAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        EthAddress(bytes)
    }
}
