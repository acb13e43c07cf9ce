use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::{Bound, Index, IndexList, IndexedMap, Item, Map, MultiIndex};

use gravity_apis::pool_api::OutgoingTransfer;

pub const POOL_KEY: &str = "pool";
const POOL_TOKEN_KEY: &str = "pool__token";

/// Id of the most recently added withdrawal. Zero / missing before the first one
pub(crate) const LAST_TX_ID: Item<u64> = Item::new("last_tx_id");
/// Block height at which each withdrawal left the pool in a batch, by withdrawal id
pub(crate) const BATCHED: Map<u64, u64> = Map::new("batched");

// Settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

pub struct PoolIndexes<'a> {
    // Pending withdrawals by token denomination.
    // Last type param defines the pk deserialization type
    pub token: MultiIndex<'a, String, OutgoingTransfer, u64>,
}

impl<'a> IndexList<OutgoingTransfer> for PoolIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<OutgoingTransfer>> + '_> {
        let v: Vec<&dyn Index<OutgoingTransfer>> = vec![&self.token];
        Box::new(v.into_iter())
    }
}

/// Indexed map of the pending withdrawals ("tx-out pool"), by id.
///
/// The token index is a `MultiIndex`, as there are many withdrawals of the same token.
pub fn pool<'a>() -> IndexedMap<u64, OutgoingTransfer, PoolIndexes<'a>> {
    let indexes = PoolIndexes {
        token: MultiIndex::new(|_, tx| tx.token.clone(), POOL_KEY, POOL_TOKEN_KEY),
    };
    IndexedMap::new(POOL_KEY, indexes)
}

/// `next_tx_id` reserves the id of a new withdrawal.
/// Ids start at 1 and are never handed out twice, cancellations included
pub fn next_tx_id(storage: &mut dyn Storage) -> StdResult<u64> {
    let id = LAST_TX_ID.may_load(storage)?.unwrap_or_default() + 1;
    LAST_TX_ID.save(storage, &id)?;
    Ok(id)
}

/// Pending withdrawals in id order, optionally restricted to one token
pub fn get_pending_transfers(
    storage: &dyn Storage,
    token: Option<String>,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<OutgoingTransfer>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after.map(Bound::exclusive);
    let pool = pool();
    let iter = match token {
        Some(token) => pool
            .idx
            .token
            .prefix(token)
            .range(storage, start_after, None, Order::Ascending),
        None => pool.range(storage, start_after, None, Order::Ascending),
    };
    iter.take(limit).map(|item| item.map(|(_, v)| v)).collect()
}
