use std::collections::BTreeSet;

use cosmwasm_std::{Addr, Binary, Decimal, Deps, DepsMut, MessageInfo, Response, StdResult};
use cw_utils::nonpayable;

use gravity_apis::valset_api::{Valset, ValsetConfirm};

use crate::error::ContractError;
use crate::msg::SignedPowerResponse;
use crate::state::confirm::{get_valset_confirms, has_confirmed, VALSET_CONFIRMS};
use crate::state::validators::ETH_ADDRESSES;
use crate::validators::{ensure_validator, recover_signer};
use crate::valset::{get_valset, valset_checkpoint, valsets_desc};

/// Number of most recent valsets scanned for pending confirmations
pub const MAX_PENDING_VALSETS: usize = 100;

/// `handle_confirm_valset` records a validator's signature over the checkpoint of valset
/// `nonce`, replacing its previous confirmation of the same valset.
///
/// The signature must recover to the Ethereum address the validator has registered at the
/// time of the call, and that address must be a member of the valset
pub fn handle_confirm_valset(
    deps: DepsMut,
    info: MessageInfo,
    nonce: u64,
    eth_signature: Binary,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let valset = get_valset(deps.storage, nonce)?;
    ensure_validator(deps.as_ref(), &info.sender)?;
    let eth_address = ETH_ADDRESSES
        .may_load(deps.storage, &info.sender)?
        .ok_or_else(|| ContractError::EthAddressNotSet(info.sender.to_string()))?;

    let checkpoint = valset_checkpoint(deps.storage, &valset)?;
    let recovered = recover_signer(deps.as_ref(), &checkpoint, &eth_signature)?;
    if recovered != eth_address {
        return Err(ContractError::SignatureMismatch {
            expected: eth_address,
            recovered,
        });
    }
    // only keys of the snapshot may confirm it
    if valset.power_of(&eth_address).is_none() {
        return Err(ContractError::NotValsetMember { eth_address, nonce });
    }

    let confirm = ValsetConfirm {
        nonce,
        validator: info.sender.clone(),
        eth_address,
        signature: eth_signature,
    };
    let previous = VALSET_CONFIRMS.may_load(deps.storage, (nonce, &info.sender))?;
    if previous.as_ref() == Some(&confirm) {
        deps.api.debug(&format!(
            "gravity: duplicate confirmation of valset {} by {}",
            nonce, info.sender
        ));
    }
    VALSET_CONFIRMS.save(deps.storage, (nonce, &info.sender), &confirm)?;

    Ok(Response::new()
        .add_attribute("action", "confirm_valset")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("validator", info.sender)
        .add_attribute("eth_address", confirm.eth_address))
}

/// `signed_power` sums the powers of the members of valset `nonce` that confirmed it.
///
/// Confirmations are matched to members by the Ethereum address they recovered to, each member
/// counting once
pub fn signed_power(deps: Deps, nonce: u64) -> Result<SignedPowerResponse, ContractError> {
    let valset = get_valset(deps.storage, nonce)?;
    let signers = get_valset_confirms(deps.storage, nonce)?
        .into_iter()
        .map(|c| c.eth_address)
        .collect::<BTreeSet<_>>();

    let signed_power = valset
        .members
        .iter()
        .filter(|m| signers.contains(&m.eth_address))
        .map(|m| m.power)
        .sum::<u64>();
    let total_power = valset.total_power();
    let ratio = if total_power == 0 {
        Decimal::zero()
    } else {
        Decimal::from_ratio(signed_power, total_power)
    };

    Ok(SignedPowerResponse {
        nonce,
        signed_power,
        total_power,
        ratio,
    })
}

/// `pending_valsets` lists the valsets `validator` is a member of but has not confirmed yet,
/// oldest first. Only the `MAX_PENDING_VALSETS` most recent valsets are considered
pub fn pending_valsets(deps: Deps, validator: &Addr) -> StdResult<Vec<Valset>> {
    let Some(eth_address) = ETH_ADDRESSES.may_load(deps.storage, validator)? else {
        return Ok(vec![]);
    };
    let mut pending = vec![];
    for valset in valsets_desc(deps.storage).take(MAX_PENDING_VALSETS) {
        let valset = valset?;
        if valset.power_of(&eth_address).is_some()
            && !has_confirmed(deps.storage, valset.nonce, validator)
        {
            pending.push(valset);
        }
    }
    pending.reverse();
    Ok(pending)
}
