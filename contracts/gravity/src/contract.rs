use cosmwasm_std::{
    to_json_binary, Deps, DepsMut, Empty, Env, MessageInfo, QueryResponse, Response, StdResult,
};
use cw2::set_contract_version;
use cw_utils::{maybe_addr, nonpayable};

use gravity_apis::normalize_eth_address;
use gravity_ethereum::checkpoint::bytes32;

use crate::confirm::{handle_confirm_valset, signed_power};
use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, SudoMsg};
use crate::pool::{handle_cancel_send_to_eth, handle_remove_batched, handle_send_to_eth};
use crate::queries;
use crate::state::config::{Config, ADMIN, CONFIG, PARAMS};
use crate::validators::{
    handle_admin_update_validators, handle_set_eth_address, handle_update_validators,
};
use crate::valset::handle_request_valset;

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    // The gravity id must fit in a checkpoint word
    bytes32(msg.gravity_id.as_bytes())?;
    let config = Config {
        gravity_id: msg.gravity_id,
        bridge_contract: normalize_eth_address(&msg.bridge_contract)?,
        bridge_chain_id: msg.bridge_chain_id,
    };
    CONFIG.save(deps.storage, &config)?;

    let api = deps.api;
    ADMIN.set(deps.branch(), maybe_addr(api, msg.admin.clone())?)?;

    let params = msg.params.unwrap_or_default();
    params.validate()?;
    PARAMS.save(deps.storage, &params)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("gravity_id", config.gravity_id)
        .add_attribute("bridge_contract", config.bridge_contract))
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<QueryResponse, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&queries::config(deps)?)?),
        QueryMsg::Params {} => Ok(to_json_binary(&queries::params(deps)?)?),
        QueryMsg::Admin {} => to_json_binary(&ADMIN.query_admin(deps)?).map_err(Into::into),
        QueryMsg::Valset { nonce } => Ok(to_json_binary(&queries::valset(deps, nonce)?)?),
        QueryMsg::LatestValset {} => Ok(to_json_binary(&queries::latest_valset(deps)?)?),
        QueryMsg::Valsets {
            start_after,
            limit,
            reverse,
        } => Ok(to_json_binary(&queries::valsets(
            deps,
            start_after,
            limit,
            reverse,
        )?)?),
        QueryMsg::Checkpoint { nonce } => {
            Ok(to_json_binary(&queries::checkpoint(deps, nonce)?)?)
        }
        QueryMsg::ValsetConfirm { nonce, validator } => Ok(to_json_binary(
            &queries::valset_confirm(deps, nonce, validator)?,
        )?),
        QueryMsg::ValsetConfirms { nonce } => {
            Ok(to_json_binary(&queries::valset_confirms(deps, nonce)?)?)
        }
        QueryMsg::SignedPower { nonce } => Ok(to_json_binary(&signed_power(deps, nonce)?)?),
        QueryMsg::PendingValsets { validator } => Ok(to_json_binary(
            &queries::pending_valsets(deps, validator)?,
        )?),
        QueryMsg::Validators {} => Ok(to_json_binary(&queries::validators(deps)?)?),
        QueryMsg::EthAddress { validator } => {
            Ok(to_json_binary(&queries::eth_address(deps, validator)?)?)
        }
        QueryMsg::Withdrawal { id } => Ok(to_json_binary(&queries::withdrawal(deps, id)?)?),
        QueryMsg::PendingWithdrawals {
            token,
            start_after,
            limit,
        } => Ok(to_json_binary(&queries::pending_withdrawals(
            deps,
            token,
            start_after,
            limit,
        )?)?),
        QueryMsg::BatchFees {} => Ok(to_json_binary(&queries::batch_fees(deps)?)?),
    }
}

/// This is a no-op, as there is no state to migrate yet
pub fn migrate(_deps: DepsMut, _env: Env, _msg: Empty) -> StdResult<Response> {
    Ok(Response::default())
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;
    match msg {
        ExecuteMsg::UpdateAdmin { admin } => ADMIN
            .execute_update_admin(deps, info, maybe_addr(api, admin)?)
            .map_err(Into::into),
        ExecuteMsg::RequestValset {} => handle_request_valset(deps, env, info),
        ExecuteMsg::ConfirmValset {
            nonce,
            eth_signature,
        } => handle_confirm_valset(deps, info, nonce, eth_signature),
        ExecuteMsg::SetEthAddress {
            eth_address,
            signature,
        } => handle_set_eth_address(deps, info, eth_address, signature),
        ExecuteMsg::SendToEth {
            eth_dest,
            amount,
            bridge_fee,
        } => handle_send_to_eth(deps, info, eth_dest, amount, bridge_fee),
        ExecuteMsg::CancelSendToEth { id } => handle_cancel_send_to_eth(deps, info, id),
        ExecuteMsg::RemoveBatched { ids } => handle_remove_batched(deps, env, info, ids),
        ExecuteMsg::UpdateValidators { validators } => {
            handle_admin_update_validators(deps, info, validators)
        }
    }
}

pub fn sudo(deps: DepsMut, _env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::UpdateValidators { validators } => handle_update_validators(deps, validators),
    }
}
