use std::collections::BTreeMap;

use cosmwasm_std::{
    to_json_binary, BankMsg, Coin, DepsMut, Env, Event, MessageInfo, Order, Response, StdError,
    StdResult, Storage, Uint256,
};
use cw_utils::{may_pay, nonpayable};

use gravity_apis::events::{WithdrawCanceled, WithdrawalReceived, MODULE_NAME};
use gravity_apis::pool_api::{BatchFees, IdSet, OutgoingTransfer};
use gravity_apis::{TransferRequest, Validate};

use crate::error::ContractError;
use crate::state::config::{Config, ADMIN, CONFIG};
use crate::state::pool::{next_tx_id, pool, BATCHED};

fn withdrawal_received(cfg: &Config, id: u64) -> Event {
    WithdrawalReceived {
        module: MODULE_NAME.to_string(),
        bridge_contract: cfg.bridge_contract.clone(),
        bridge_chain_id: cfg.bridge_chain_id,
        outgoing_tx_id: id,
        nonce: id,
    }
    .into()
}

fn withdraw_canceled(cfg: &Config) -> Event {
    WithdrawCanceled {
        module: MODULE_NAME.to_string(),
        bridge_contract: cfg.bridge_contract.clone(),
        bridge_chain_id: cfg.bridge_chain_id,
    }
    .into()
}

/// `handle_send_to_eth` queues a withdrawal to the Ethereum side.
///
/// The sender attaches exactly `amount + bridge_fee`, which stays in escrow in this contract
/// until the withdrawal is canceled or batched
pub fn handle_send_to_eth(
    deps: DepsMut,
    info: MessageInfo,
    eth_dest: String,
    amount: Coin,
    bridge_fee: Coin,
) -> Result<Response, ContractError> {
    let request = TransferRequest::new(&eth_dest, &amount, &bridge_fee)?;
    request.validate()?;
    let dest_address = request.eth_dest.to_string();

    let required = amount
        .amount
        .checked_add(bridge_fee.amount)
        .map_err(StdError::from)?;
    let sent = may_pay(&info, &amount.denom)?;
    if sent < required {
        return Err(ContractError::InsufficientFunds {
            required: Coin::new(required, amount.denom.clone()).to_string(),
            sent: Coin::new(sent, amount.denom.clone()).to_string(),
        });
    }
    if sent > required {
        return Err(ContractError::Overpaid {
            required: Coin::new(required, amount.denom.clone()).to_string(),
            sent: Coin::new(sent, amount.denom.clone()).to_string(),
        });
    }

    let id = next_tx_id(deps.storage)?;
    let transfer = OutgoingTransfer {
        id,
        sender: info.sender.clone(),
        dest_address,
        token: amount.denom,
        amount: amount.amount,
        fee: bridge_fee.amount,
    };
    pool().save(deps.storage, id, &transfer)?;

    let cfg = CONFIG.load(deps.storage)?;
    Ok(Response::new()
        .set_data(to_json_binary(&id)?)
        .add_event(withdrawal_received(&cfg, id))
        .add_attribute("action", "send_to_eth")
        .add_attribute("id", id.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("eth_dest", transfer.dest_address))
}

/// `handle_cancel_send_to_eth` removes a pending withdrawal of the sender and refunds its
/// amount and fee
pub fn handle_cancel_send_to_eth(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let transfer = pool()
        .may_load(deps.storage, id)?
        .ok_or(ContractError::WithdrawalNotFound(id))?;
    if transfer.sender != info.sender {
        return Err(ContractError::NotOwner(info.sender.to_string(), id));
    }
    pool().remove(deps.storage, id)?;

    let refund = BankMsg::Send {
        to_address: transfer.sender.to_string(),
        amount: vec![transfer.escrowed_coin()],
    };
    let cfg = CONFIG.load(deps.storage)?;
    Ok(Response::new()
        .add_message(refund)
        .add_event(withdraw_canceled(&cfg))
        .add_attribute("action", "cancel_send_to_eth")
        .add_attribute("id", id.to_string())
        .add_attribute("sender", info.sender))
}

/// `handle_remove_batched` takes the given withdrawals out of the pool, once a batch of them
/// has been formed. Either every id is removed or none is
pub fn handle_remove_batched(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    ids: IdSet,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;
    ids.validate()?;

    for id in &ids.ids {
        if BATCHED.has(deps.storage, *id) {
            return Err(ContractError::AlreadyBatched(*id));
        }
        if !pool().has(deps.storage, *id) {
            return Err(ContractError::WithdrawalNotFound(*id));
        }
    }
    for id in &ids.ids {
        pool().remove(deps.storage, *id)?;
        BATCHED.save(deps.storage, *id, &env.block.height)?;
    }

    let ids_attr = ids
        .ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    Ok(Response::new()
        .add_attribute("action", "remove_batched")
        .add_attribute("ids", ids_attr))
}

/// `compute_batch_fees` sums the fees of the pending withdrawals per token.
///
/// Sorted by total fees descending, ties broken by token ascending
pub fn compute_batch_fees(storage: &dyn Storage) -> StdResult<Vec<BatchFees>> {
    let mut by_token: BTreeMap<String, (Uint256, u64)> = BTreeMap::new();
    for item in pool().range(storage, None, None, Order::Ascending) {
        let (_, transfer) = item?;
        let entry = by_token
            .entry(transfer.token)
            .or_insert((Uint256::zero(), 0));
        entry.0 += Uint256::from(transfer.fee);
        entry.1 += 1;
    }

    let mut fees = by_token
        .into_iter()
        .map(|(token, (total_fees, tx_count))| BatchFees {
            token,
            total_fees,
            tx_count,
        })
        .collect::<Vec<_>>();
    fees.sort_by(|a, b| {
        b.total_fees
            .cmp(&a.total_fees)
            .then_with(|| a.token.cmp(&b.token))
    });
    Ok(fees)
}
