use cosmwasm_schema::write_api;
use cosmwasm_std::Empty;

use gravity_contract::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, SudoMsg};

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        query: QueryMsg,
        migrate: Empty,
        execute: ExecuteMsg,
        sudo: SudoMsg,
    }
}
