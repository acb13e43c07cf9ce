use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Coin, Decimal};
#[cfg(not(target_arch = "wasm32"))]
use {crate::state::config::Config, cw_controllers::AdminResponse};

use gravity_apis::pool_api::{BatchFees, IdSet, OutgoingTransfer};
use gravity_apis::valset_api::{ValidatorInfo, ValidatorUpdate, Valset, ValsetConfirm};

use crate::state::config::Params;

#[cw_serde]
pub struct InstantiateMsg {
    /// `admin` may update validators, mark withdrawals as batched and change the admin
    pub admin: Option<String>,
    /// `gravity_id` is mixed into every checkpoint. At most 32 bytes
    pub gravity_id: String,
    /// `bridge_contract` is the Ethereum address of the Gravity Solidity contract
    pub bridge_contract: String,
    pub bridge_chain_id: u64,
    pub params: Option<Params>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Change the admin
    UpdateAdmin { admin: Option<String> },
    /// Snapshot the current validator set into a new valset.
    /// The new nonce is returned in the response data
    RequestValset {},
    /// Submit the sender's signature over the checkpoint of valset `nonce`
    ConfirmValset {
        nonce: u64,
        /// 65-byte `r || s || v` signature
        eth_signature: Binary,
    },
    /// Register the sender's Ethereum address.
    ///
    /// `signature` is the Ethereum key's signature over the Keccak-256 hash of the sender's
    /// canonical address
    SetEthAddress {
        eth_address: String,
        signature: Binary,
    },
    /// Escrow `amount + bridge_fee` and queue a withdrawal to `eth_dest`.
    /// The exact coins must be attached to the message
    SendToEth {
        eth_dest: String,
        amount: Coin,
        bridge_fee: Coin,
    },
    /// Cancel a pending withdrawal of the sender and refund it
    CancelSendToEth { id: u64 },
    /// Take the given withdrawals out of the pool, as part of a batch.
    /// Admin only
    RemoveBatched { ids: IdSet },
    /// Replace the current validator set. Admin only
    UpdateValidators { validators: Vec<ValidatorUpdate> },
}

/// Messages sent by the host chain
#[cw_serde]
pub enum SudoMsg {
    /// Replace the current validator set, at the end of a block whose staking changed
    UpdateValidators { validators: Vec<ValidatorUpdate> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// `Config` returns the current configuration of the gravity contract
    #[returns(Config)]
    Config {},
    /// `Params` returns the current valset parameters
    #[returns(Params)]
    Params {},
    /// `Admin` returns the current admin of the contract
    #[returns(AdminResponse)]
    Admin {},
    /// `Valset` returns the valset with the given nonce
    #[returns(Valset)]
    Valset { nonce: u64 },
    /// `LatestValset` returns the most recently requested valset
    #[returns(Valset)]
    LatestValset {},
    /// `Valsets` lists valsets by nonce.
    ///
    /// `start_after` is the nonce to start after, exclusive.
    /// `reverse` lists from the latest valset down
    #[returns(ValsetsResponse)]
    Valsets {
        start_after: Option<u64>,
        limit: Option<u32>,
        reverse: Option<bool>,
    },
    /// `Checkpoint` returns the hash validators sign for valset `nonce`
    #[returns(CheckpointResponse)]
    Checkpoint { nonce: u64 },
    /// `ValsetConfirm` returns the confirmation of `validator` for valset `nonce`, if any
    #[returns(Option<ValsetConfirm>)]
    ValsetConfirm { nonce: u64, validator: String },
    /// `ValsetConfirms` returns all confirmations for valset `nonce`
    #[returns(ValsetConfirmsResponse)]
    ValsetConfirms { nonce: u64 },
    /// `SignedPower` returns how much of valset `nonce`'s power has confirmed it
    #[returns(SignedPowerResponse)]
    SignedPower { nonce: u64 },
    /// `PendingValsets` returns the valsets `validator` has yet to confirm, oldest first
    #[returns(ValsetsResponse)]
    PendingValsets { validator: String },
    /// `Validators` returns the current validator set
    #[returns(ValidatorsResponse)]
    Validators {},
    /// `EthAddress` returns the Ethereum address registered by `validator`, if any
    #[returns(Option<String>)]
    EthAddress { validator: String },
    /// `Withdrawal` returns the pending withdrawal with the given id
    #[returns(OutgoingTransfer)]
    Withdrawal { id: u64 },
    /// `PendingWithdrawals` lists pending withdrawals by id, optionally of one token only
    #[returns(WithdrawalsResponse)]
    PendingWithdrawals {
        token: Option<String>,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// `BatchFees` returns the fees of the pending withdrawals per token, highest first
    #[returns(BatchFeesResponse)]
    BatchFees {},
}

#[cw_serde]
pub struct ValsetsResponse {
    pub valsets: Vec<Valset>,
}

#[cw_serde]
pub struct CheckpointResponse {
    pub nonce: u64,
    /// Hex-encoded 32-byte checkpoint
    pub checkpoint: String,
}

#[cw_serde]
pub struct ValsetConfirmsResponse {
    pub confirms: Vec<ValsetConfirm>,
}

#[cw_serde]
pub struct SignedPowerResponse {
    pub nonce: u64,
    /// Sum of the normalized powers of the members that confirmed the valset
    pub signed_power: u64,
    pub total_power: u64,
    /// `signed_power / total_power`
    pub ratio: Decimal,
}

#[cw_serde]
pub struct ValidatorsResponse {
    pub validators: Vec<ValidatorInfo>,
}

#[cw_serde]
pub struct WithdrawalsResponse {
    pub withdrawals: Vec<OutgoingTransfer>,
}

#[cw_serde]
pub struct BatchFeesResponse {
    pub fees: Vec<BatchFees>,
}
