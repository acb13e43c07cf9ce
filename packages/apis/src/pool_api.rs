/// Withdrawal pool messages / API
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Uint128, Uint256};

/// `OutgoingTransfer` is a pending withdrawal to the Ethereum side ("tx-out")
#[cw_serde]
pub struct OutgoingTransfer {
    /// `id` is globally unique and never reused, even after cancellation
    pub id: u64,
    pub sender: Addr,
    /// `dest_address` is the Ethereum recipient, lower-case and `0x`-prefixed
    pub dest_address: String,
    /// `token` is the denomination of both `amount` and `fee`
    pub token: String,
    pub amount: Uint128,
    /// `fee` is paid to whoever relays the batch containing this transfer
    pub fee: Uint128,
}

impl OutgoingTransfer {
    /// Total escrowed for this transfer
    pub fn total(&self) -> Uint128 {
        self.amount + self.fee
    }

    pub fn escrowed_coin(&self) -> Coin {
        Coin::new(self.total(), self.token.clone())
    }
}

/// `IdSet` references the contents of a batch by transfer id
#[cw_serde]
#[derive(Default)]
pub struct IdSet {
    pub ids: Vec<u64>,
}

impl IdSet {
    /// Builds an ordered, de-duplicated set
    pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
        let mut ids: Vec<u64> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        IdSet { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// `BatchFees` aggregates the pending transfers of one token
#[cw_serde]
pub struct BatchFees {
    pub token: String,
    pub total_fees: Uint256,
    pub tx_count: u64,
}
