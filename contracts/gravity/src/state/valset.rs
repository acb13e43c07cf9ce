use cosmwasm_std::Order::{Ascending, Descending};
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};

use gravity_apis::valset_api::Valset;

/// Valset snapshots by nonce
pub(crate) const VALSETS: Map<u64, Valset> = Map::new("valsets");
/// Nonce of the most recently requested valset. Zero / missing before the first request
pub(crate) const LAST_VALSET_NONCE: Item<u64> = Item::new("last_valset_nonce");

// Settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

pub fn last_valset_nonce(storage: &dyn Storage) -> StdResult<u64> {
    Ok(LAST_VALSET_NONCE.may_load(storage)?.unwrap_or_default())
}

/// `next_valset_nonce` reserves the nonce of a new valset.
/// Nonces start at 1 and are never handed out twice
pub fn next_valset_nonce(storage: &mut dyn Storage) -> StdResult<u64> {
    let nonce = last_valset_nonce(storage)? + 1;
    LAST_VALSET_NONCE.save(storage, &nonce)?;
    Ok(nonce)
}

pub fn get_latest_valset(storage: &dyn Storage) -> StdResult<Option<Valset>> {
    let res = get_valsets(storage, None, Some(1), Some(true))?;
    Ok(res.into_iter().next())
}

pub fn get_valsets(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: Option<u32>,
    reverse: Option<bool>,
) -> StdResult<Vec<Valset>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let reverse = reverse.unwrap_or(false);
    let start_after = start_after.map(Bound::exclusive);
    let (start, end, order) = if reverse {
        (None, start_after, Descending)
    } else {
        (start_after, None, Ascending)
    };
    VALSETS
        .range(storage, start, end, order)
        .take(limit)
        .map(|item| item.map(|(_, v)| v))
        .collect()
}
