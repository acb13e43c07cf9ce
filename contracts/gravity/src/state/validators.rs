use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Map;

use gravity_apis::valset_api::ValidatorInfo;

/// Voting power of the current validators, by validator account
pub(crate) const VALIDATORS: Map<&Addr, u64> = Map::new("validators");
/// Registered Ethereum address by validator account. Survives the validator leaving the set
pub(crate) const ETH_ADDRESSES: Map<&Addr, String> = Map::new("eth_addresses");
/// Reverse map of validator accounts by registered Ethereum address
pub(crate) const ETH_ADDRESS_OWNERS: Map<&str, Addr> = Map::new("eth_address_owners");

/// `replace_validators` makes `validators` the current validator set.
/// Zero-power entries are dropped
pub fn replace_validators(
    storage: &mut dyn Storage,
    validators: &[(Addr, u64)],
) -> StdResult<()> {
    let current = VALIDATORS
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<Addr>>>()?;
    for addr in &current {
        VALIDATORS.remove(storage, addr);
    }
    for (addr, power) in validators.iter().filter(|(_, power)| *power > 0) {
        VALIDATORS.save(storage, addr, power)?;
    }
    Ok(())
}

pub fn get_validators(storage: &dyn Storage) -> StdResult<Vec<ValidatorInfo>> {
    VALIDATORS
        .range(storage, None, None, Order::Ascending)
        .map(|item| {
            let (address, power) = item?;
            let eth_address = ETH_ADDRESSES.may_load(storage, &address)?;
            Ok(ValidatorInfo {
                address,
                power,
                eth_address,
            })
        })
        .collect()
}

/// `set_eth_address` registers `eth_address` for `validator`, releasing its previous address
pub fn set_eth_address(
    storage: &mut dyn Storage,
    validator: &Addr,
    eth_address: &str,
) -> StdResult<()> {
    if let Some(previous) = ETH_ADDRESSES.may_load(storage, validator)? {
        ETH_ADDRESS_OWNERS.remove(storage, &previous);
    }
    ETH_ADDRESSES.save(storage, validator, &eth_address.to_string())?;
    ETH_ADDRESS_OWNERS.save(storage, eth_address, validator)
}
