//! Lifecycle notifications for off-chain relayers and indexers.
//!
//! They are emitted as chain events only and never stored as queryable state.
use cosmwasm_std::Event;

pub const MODULE_NAME: &str = "gravity";

pub const WITHDRAWAL_RECEIVED_EVENT: &str = "withdrawal_received";
pub const WITHDRAW_CANCELED_EVENT: &str = "withdraw_canceled";

/// A transfer entered the withdrawal pool
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawalReceived {
    pub module: String,
    pub bridge_contract: String,
    pub bridge_chain_id: u64,
    pub outgoing_tx_id: u64,
    pub nonce: u64,
}

impl From<WithdrawalReceived> for Event {
    fn from(ev: WithdrawalReceived) -> Self {
        Event::new(WITHDRAWAL_RECEIVED_EVENT)
            .add_attribute("module", ev.module)
            .add_attribute("bridge_contract", ev.bridge_contract)
            .add_attribute("bridge_chain_id", ev.bridge_chain_id.to_string())
            .add_attribute("outgoing_tx_id", ev.outgoing_tx_id.to_string())
            .add_attribute("nonce", ev.nonce.to_string())
    }
}

/// A pending transfer was canceled by its sender
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawCanceled {
    pub module: String,
    pub bridge_contract: String,
    pub bridge_chain_id: u64,
}

impl From<WithdrawCanceled> for Event {
    fn from(ev: WithdrawCanceled) -> Self {
        Event::new(WITHDRAW_CANCELED_EVENT)
            .add_attribute("module", ev.module)
            .add_attribute("bridge_contract", ev.bridge_contract)
            .add_attribute("bridge_chain_id", ev.bridge_chain_id.to_string())
    }
}
