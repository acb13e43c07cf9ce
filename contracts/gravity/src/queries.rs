use cosmwasm_std::{Deps, StdResult};

use gravity_apis::pool_api::OutgoingTransfer;
use gravity_apis::valset_api::{Valset, ValsetConfirm};

use crate::confirm::pending_valsets as collect_pending_valsets;
use crate::error::ContractError;
use crate::msg::{
    BatchFeesResponse, CheckpointResponse, ValidatorsResponse, ValsetConfirmsResponse,
    ValsetsResponse, WithdrawalsResponse,
};
use crate::pool::compute_batch_fees;
use crate::state::config::{Config, Params, CONFIG, PARAMS};
use crate::state::confirm::{get_valset_confirms, VALSET_CONFIRMS};
use crate::state::pool::{get_pending_transfers, pool};
use crate::state::validators::{get_validators, ETH_ADDRESSES};
use crate::state::valset::{get_latest_valset, get_valsets};
use crate::valset::{get_valset, valset_checkpoint};

pub fn config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn params(deps: Deps) -> StdResult<Params> {
    PARAMS.load(deps.storage)
}

pub fn valset(deps: Deps, nonce: u64) -> Result<Valset, ContractError> {
    get_valset(deps.storage, nonce)
}

pub fn latest_valset(deps: Deps) -> Result<Valset, ContractError> {
    get_latest_valset(deps.storage)?.ok_or(ContractError::NoValset)
}

pub fn valsets(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
    reverse: Option<bool>,
) -> StdResult<ValsetsResponse> {
    let valsets = get_valsets(deps.storage, start_after, limit, reverse)?;
    Ok(ValsetsResponse { valsets })
}

pub fn checkpoint(deps: Deps, nonce: u64) -> Result<CheckpointResponse, ContractError> {
    let valset = get_valset(deps.storage, nonce)?;
    let checkpoint = valset_checkpoint(deps.storage, &valset)?;
    Ok(CheckpointResponse {
        nonce,
        checkpoint: hex::encode(checkpoint),
    })
}

pub fn valset_confirm(
    deps: Deps,
    nonce: u64,
    validator: String,
) -> StdResult<Option<ValsetConfirm>> {
    let validator = deps.api.addr_validate(&validator)?;
    VALSET_CONFIRMS.may_load(deps.storage, (nonce, &validator))
}

pub fn valset_confirms(deps: Deps, nonce: u64) -> StdResult<ValsetConfirmsResponse> {
    let confirms = get_valset_confirms(deps.storage, nonce)?;
    Ok(ValsetConfirmsResponse { confirms })
}

pub fn pending_valsets(deps: Deps, validator: String) -> StdResult<ValsetsResponse> {
    let validator = deps.api.addr_validate(&validator)?;
    let valsets = collect_pending_valsets(deps, &validator)?;
    Ok(ValsetsResponse { valsets })
}

pub fn validators(deps: Deps) -> StdResult<ValidatorsResponse> {
    let validators = get_validators(deps.storage)?;
    Ok(ValidatorsResponse { validators })
}

pub fn eth_address(deps: Deps, validator: String) -> StdResult<Option<String>> {
    let validator = deps.api.addr_validate(&validator)?;
    ETH_ADDRESSES.may_load(deps.storage, &validator)
}

pub fn withdrawal(deps: Deps, id: u64) -> Result<OutgoingTransfer, ContractError> {
    pool()
        .may_load(deps.storage, id)?
        .ok_or(ContractError::WithdrawalNotFound(id))
}

pub fn pending_withdrawals(
    deps: Deps,
    token: Option<String>,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<WithdrawalsResponse> {
    let withdrawals = get_pending_transfers(deps.storage, token, start_after, limit)?;
    Ok(WithdrawalsResponse { withdrawals })
}

pub fn batch_fees(deps: Deps) -> StdResult<BatchFeesResponse> {
    let fees = compute_batch_fees(deps.storage)?;
    Ok(BatchFeesResponse { fees })
}
