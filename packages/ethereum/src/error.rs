use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EthereumError {
    #[error("Invalid Ethereum address: {0}")]
    InvalidAddress(String),
    #[error("Invalid public key length: {0}")]
    InvalidPublicKeyLength(usize),
    #[error("Signature must be {expected} bytes long, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },
    #[error("Invalid signature recovery id: {0}")]
    InvalidRecoveryId(u8),
    #[error("Failed to recover public key: {0}")]
    RecoverPubkey(String),
    #[error("Gravity id is {0} bytes long, at most 32 bytes are allowed")]
    GravityIdTooLong(usize),
    #[error("Cannot build a checkpoint for an empty validator set")]
    EmptyValset,
}
