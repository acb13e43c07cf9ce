use thiserror::Error;

use cosmwasm_std::StdError;
use gravity_ethereum::EthereumError;

#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Std(#[from] StdError),
    #[error("{0}")]
    Ethereum(#[from] EthereumError),
    #[error("Empty validator address")]
    EmptyValidatorAddress,
    #[error("Duplicate validator: {0}")]
    DuplicatedValidator(String),
    #[error("Empty id set")]
    EmptyIdSet,
    #[error("Duplicate id in id set: {0}")]
    DuplicatedId(u64),
    #[error("Transfer amount must be positive")]
    ZeroAmount,
    #[error("Amount denom {amount} does not match fee denom {fee}")]
    DenomMismatch { amount: String, fee: String },
    #[error("Invalid transfer: {0}")]
    InvalidTransfer(String),
}

impl ApiError {
    pub fn invalid_transfer(msg: impl Into<String>) -> Self {
        ApiError::InvalidTransfer(msg.into())
    }
}
