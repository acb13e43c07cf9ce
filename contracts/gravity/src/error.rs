use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

use gravity_apis::ApiError;
use gravity_ethereum::EthereumError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),
    #[error("{0}")]
    Admin(#[from] AdminError),
    #[error("{0}")]
    Payment(#[from] PaymentError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Ethereum(#[from] EthereumError),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("No valset with nonce {0}")]
    UnknownValset(u64),
    #[error("No valset has been requested yet")]
    NoValset,
    #[error("Withdrawal {0} not found")]
    WithdrawalNotFound(u64),
    #[error("{0} is not the sender of withdrawal {1}")]
    NotOwner(String, u64),
    #[error("{0} is not a current validator")]
    NotValidator(String),
    #[error("Validator {0} has no registered Ethereum address")]
    EthAddressNotSet(String),
    #[error("Ethereum address {0} is already registered by validator {1}")]
    EthAddressInUse(String, String),
    #[error("Ethereum address {eth_address} is not a member of valset {nonce}")]
    NotValsetMember { eth_address: String, nonce: u64 },
    #[error("Signature recovers to {recovered}, expected {expected}")]
    SignatureMismatch { expected: String, recovered: String },
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),
    #[error("No validator with a registered Ethereum address and non-zero power")]
    EmptyValset,
    #[error("Invalid params: {0}")]
    InvalidParams(String),
    #[error("Withdrawal {0} was already batched")]
    AlreadyBatched(u64),
    #[error("Insufficient funds: required {required}, sent {sent}")]
    InsufficientFunds { required: String, sent: String },
    #[error("Overpaid: required {required}, sent {sent}")]
    Overpaid { required: String, sent: String },
}
