use cosmwasm_schema::cw_serde;

use cw_controllers::Admin;
use cw_storage_plus::Item;
use derivative::Derivative;

use crate::error::ContractError;

pub(crate) const CONFIG: Item<Config> = Item::new("config");
pub(crate) const PARAMS: Item<Params> = Item::new("params");
/// Storage for admin
pub(crate) const ADMIN: Admin = Admin::new("admin");

/// Config binds this contract to one deployment of the Gravity Solidity contract
#[cw_serde]
pub struct Config {
    /// `gravity_id` is the replay-protection domain mixed into every checkpoint.
    /// At most 32 bytes
    pub gravity_id: String,
    /// `bridge_contract` is the Ethereum address of the Gravity Solidity contract
    pub bridge_contract: String,
    /// `bridge_chain_id` is the EIP-155 chain id of the Ethereum side
    pub bridge_chain_id: u64,
}

/// Params define the valset snapshot parameters
#[cw_serde]
#[derive(Derivative)]
#[derivative(Default)]
pub struct Params {
    /// `max_valset_members` is the maximum number of validators (largest powers first) included
    /// in a valset
    #[derivative(Default(value = "100"))]
    pub max_valset_members: u32,
}

impl Params {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.max_valset_members == 0 {
            return Err(ContractError::InvalidParams(
                "max_valset_members must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
