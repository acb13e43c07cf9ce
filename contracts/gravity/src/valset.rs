use cosmwasm_std::{
    to_json_binary, DepsMut, Env, MessageInfo, Order, Response, StdResult, Storage,
};
use cw_utils::nonpayable;

use gravity_apis::valset_api::{ValidatorPower, Valset};
use gravity_ethereum::{checkpoint_hash, EthAddress};

use crate::error::ContractError;
use crate::state::config::{CONFIG, PARAMS};
use crate::state::validators::{ETH_ADDRESSES, VALIDATORS};
use crate::state::valset::{next_valset_nonce, VALSETS};

/// Sum of the powers of every valset, as checked by the Gravity Solidity contract
pub const TOTAL_VALSET_POWER: u64 = u32::MAX as u64;

/// `normalize_power` scales `power` so that powers summing up to `present` sum up to (at most)
/// `total` instead
pub fn normalize_power(power: u64, present: u128, total: u64) -> u64 {
    if present == 0 {
        return 0;
    }
    (power as u128 * total as u128 / present) as u64
}

fn sort_members(members: &mut [(EthAddress, u64)]) {
    members.sort_by(|(a_addr, a_power), (b_addr, b_power)| {
        b_power.cmp(a_power).then_with(|| a_addr.cmp(b_addr))
    });
}

/// `snapshot_members` computes the members of a new valset from the current validators.
///
/// Validators without a registered Ethereum address are left out. The largest
/// `max_members` remaining powers are kept and normalized to `TOTAL_VALSET_POWER`.
/// Members whose normalized power floors to zero are dropped
pub fn snapshot_members(
    storage: &dyn Storage,
    max_members: usize,
) -> Result<Vec<ValidatorPower>, ContractError> {
    let mut members = vec![];
    for item in VALIDATORS.range(storage, None, None, Order::Ascending) {
        let (validator, power) = item?;
        if let Some(eth_address) = ETH_ADDRESSES.may_load(storage, &validator)? {
            members.push((eth_address.parse::<EthAddress>()?, power));
        }
    }
    sort_members(&mut members);
    members.truncate(max_members);

    let present: u128 = members.iter().map(|(_, power)| *power as u128).sum();
    for (_, power) in members.iter_mut() {
        *power = normalize_power(*power, present, TOTAL_VALSET_POWER);
    }
    // shares that floor to zero
    members.retain(|(_, power)| *power > 0);
    if members.is_empty() {
        return Err(ContractError::EmptyValset);
    }
    // flooring may turn distinct powers into ties
    sort_members(&mut members);

    Ok(members
        .into_iter()
        .map(|(addr, power)| ValidatorPower {
            eth_address: addr.to_string(),
            power,
        })
        .collect())
}

/// `valset_checkpoint` computes the hash validators sign to attest to `valset`
pub fn valset_checkpoint(
    storage: &dyn Storage,
    valset: &Valset,
) -> Result<[u8; 32], ContractError> {
    let cfg = CONFIG.load(storage)?;
    let members = valset
        .members
        .iter()
        .map(|m| Ok((m.eth_address.parse::<EthAddress>()?, m.power)))
        .collect::<Result<Vec<_>, ContractError>>()?;
    Ok(checkpoint_hash(cfg.gravity_id.as_bytes(), valset.nonce, &members)?)
}

pub fn get_valset(storage: &dyn Storage, nonce: u64) -> Result<Valset, ContractError> {
    VALSETS
        .may_load(storage, nonce)?
        .ok_or(ContractError::UnknownValset(nonce))
}

pub fn handle_request_valset(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let params = PARAMS.load(deps.storage)?;
    let members = snapshot_members(deps.storage, params.max_valset_members as usize)?;
    let nonce = next_valset_nonce(deps.storage)?;
    let valset = Valset {
        nonce,
        members,
        height: env.block.height,
    };
    VALSETS.save(deps.storage, nonce, &valset)?;

    Ok(Response::new()
        .set_data(to_json_binary(&nonce)?)
        .add_attribute("action", "request_valset")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("members", valset.members.len().to_string())
        .add_attribute("sender", info.sender))
}

/// Stored valsets, newest first
pub(crate) fn valsets_desc(
    storage: &dyn Storage,
) -> impl Iterator<Item = StdResult<Valset>> + '_ {
    VALSETS
        .range(storage, None, None, Order::Descending)
        .map(|item| item.map(|(_, v)| v))
}
