/// Valset attestation messages / API
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};

/// `ValidatorPower` is one member of a valset snapshot
#[cw_serde]
pub struct ValidatorPower {
    /// `eth_address` is the member's Ethereum address, lower-case and `0x`-prefixed
    pub eth_address: String,
    /// `power` is the member's share of the total voting power, normalized so that all
    /// members of a valset sum up to (at most) `u32::MAX`
    pub power: u64,
}

/// `Valset` is an immutable snapshot of the validator set, identified by its nonce
#[cw_serde]
pub struct Valset {
    pub nonce: u64,
    /// `members` are sorted by power descending, ties broken by address ascending
    pub members: Vec<ValidatorPower>,
    /// `height` is the block height at which the snapshot was taken
    pub height: u64,
}

impl Valset {
    pub fn total_power(&self) -> u64 {
        self.members.iter().map(|m| m.power).sum()
    }

    pub fn power_of(&self, eth_address: &str) -> Option<u64> {
        self.members
            .iter()
            .find(|m| m.eth_address == eth_address)
            .map(|m| m.power)
    }
}

/// `ValsetConfirm` is a validator's signature over a valset checkpoint
#[cw_serde]
pub struct ValsetConfirm {
    pub nonce: u64,
    /// `validator` is the validator's account on this chain
    pub validator: Addr,
    /// `eth_address` is the Ethereum address the signature recovered to
    pub eth_address: String,
    /// `signature` is the 65-byte `r || s || v` signature over the checkpoint
    pub signature: Binary,
}

/// `ValidatorUpdate` sets the voting power of a validator account
#[cw_serde]
pub struct ValidatorUpdate {
    pub address: String,
    pub power: u64,
}

/// `ValidatorInfo` is the registry view of a current validator
#[cw_serde]
pub struct ValidatorInfo {
    pub address: Addr,
    pub power: u64,
    pub eth_address: Option<String>,
}
