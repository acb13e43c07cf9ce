use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Map;

use gravity_apis::valset_api::ValsetConfirm;

/// Valset confirmations by valset nonce and validator.
/// A later confirmation by the same validator replaces the earlier one
pub(crate) const VALSET_CONFIRMS: Map<(u64, &Addr), ValsetConfirm> = Map::new("valset_confirms");

pub fn get_valset_confirms(storage: &dyn Storage, nonce: u64) -> StdResult<Vec<ValsetConfirm>> {
    VALSET_CONFIRMS
        .prefix(nonce)
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, v)| v))
        .collect()
}

pub fn has_confirmed(storage: &dyn Storage, nonce: u64, validator: &Addr) -> bool {
    VALSET_CONFIRMS.has(storage, (nonce, validator))
}
