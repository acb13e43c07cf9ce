use cosmwasm_std::Api;

use crate::address::EthAddress;
use crate::error::EthereumError;

/// `r || s || v`
pub const SIGNATURE_LENGTH: usize = 65;

/// Offset Ethereum adds to the recovery id in legacy `v` values
const LEGACY_V_OFFSET: u8 = 27;

/// `recovery_param` turns a signature's `v` byte into the secp256k1 recovery id.
/// Both the raw (`0`, `1`) and the legacy Ethereum (`27`, `28`) forms are accepted.
pub fn recovery_param(v: u8) -> Result<u8, EthereumError> {
    let param = if v >= LEGACY_V_OFFSET {
        v - LEGACY_V_OFFSET
    } else {
        v
    };
    if param > 1 {
        return Err(EthereumError::InvalidRecoveryId(v));
    }
    Ok(param)
}

/// `recover_eth_address` recovers the Ethereum address that produced `signature` over
/// `message_hash`, using the host's secp256k1 recovery.
pub fn recover_eth_address(
    api: &dyn Api,
    message_hash: &[u8],
    signature: &[u8],
) -> Result<EthAddress, EthereumError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(EthereumError::InvalidSignatureLength {
            expected: SIGNATURE_LENGTH,
            actual: signature.len(),
        });
    }
    let param = recovery_param(signature[SIGNATURE_LENGTH - 1])?;
    let pubkey = api
        .secp256k1_recover_pubkey(message_hash, &signature[..SIGNATURE_LENGTH - 1], param)
        .map_err(|e| EthereumError::RecoverPubkey(e.to_string()))?;
    EthAddress::from_uncompressed_pubkey(&pubkey)
}
