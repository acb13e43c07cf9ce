use cosmwasm_std::{Addr, Binary, Deps, DepsMut, MessageInfo, Response};
use cw_utils::nonpayable;

use gravity_apis::valset_api::ValidatorUpdate;
use gravity_apis::{normalize_eth_address, Validate};
use gravity_ethereum::{keccak256, recover_eth_address};

use crate::error::ContractError;
use crate::state::config::ADMIN;
use crate::state::validators::{
    replace_validators, set_eth_address, ETH_ADDRESS_OWNERS, VALIDATORS,
};

/// `handle_update_validators` replaces the current validator set.
/// Sent by the host chain through sudo, or by the admin
pub fn handle_update_validators(
    deps: DepsMut,
    validators: Vec<ValidatorUpdate>,
) -> Result<Response, ContractError> {
    validators.validate()?;
    let validators = validators
        .iter()
        .map(|v| Ok((deps.api.addr_validate(&v.address)?, v.power)))
        .collect::<Result<Vec<(Addr, u64)>, ContractError>>()?;
    replace_validators(deps.storage, &validators)?;

    Ok(Response::new()
        .add_attribute("action", "update_validators")
        .add_attribute("validators", validators.len().to_string()))
}

pub fn handle_admin_update_validators(
    deps: DepsMut,
    info: MessageInfo,
    validators: Vec<ValidatorUpdate>,
) -> Result<Response, ContractError> {
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;
    handle_update_validators(deps, validators)
}

/// `ensure_validator` fails unless `addr` is part of the current validator set
pub fn ensure_validator(deps: Deps, addr: &Addr) -> Result<u64, ContractError> {
    VALIDATORS
        .may_load(deps.storage, addr)?
        .ok_or_else(|| ContractError::NotValidator(addr.to_string()))
}

/// `recover_signer` returns the Ethereum address that signed `message_hash`.
/// Malformed signatures are reported as `InvalidSignature`
pub fn recover_signer(
    deps: Deps,
    message_hash: &[u8],
    signature: &[u8],
) -> Result<String, ContractError> {
    let signer = recover_eth_address(deps.api, message_hash, signature)
        .map_err(|e| ContractError::InvalidSignature(e.to_string()))?;
    Ok(signer.to_string())
}

/// `eth_address_claim_hash` is the hash a validator signs with its Ethereum key to claim it
pub fn eth_address_claim_hash(deps: Deps, validator: &Addr) -> Result<[u8; 32], ContractError> {
    let canonical = deps.api.addr_canonicalize(validator.as_str())?;
    Ok(keccak256(canonical.as_slice()))
}

pub fn handle_set_eth_address(
    deps: DepsMut,
    info: MessageInfo,
    eth_address: String,
    signature: Binary,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure_validator(deps.as_ref(), &info.sender)?;
    let eth_address = normalize_eth_address(&eth_address)?;

    let hash = eth_address_claim_hash(deps.as_ref(), &info.sender)?;
    let recovered = recover_signer(deps.as_ref(), &hash, &signature)?;
    if recovered != eth_address {
        return Err(ContractError::SignatureMismatch {
            expected: eth_address,
            recovered,
        });
    }

    if let Some(owner) = ETH_ADDRESS_OWNERS.may_load(deps.storage, &eth_address)? {
        if owner != info.sender {
            return Err(ContractError::EthAddressInUse(eth_address, owner.to_string()));
        }
    }
    set_eth_address(deps.storage, &info.sender, &eth_address)?;

    Ok(Response::new()
        .add_attribute("action", "set_eth_address")
        .add_attribute("validator", info.sender)
        .add_attribute("eth_address", eth_address))
}
