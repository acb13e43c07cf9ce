use anyhow::Result as AnyResult;
use derivative::Derivative;

use cosmwasm_std::{from_json, Addr, Api, Binary, Coin, Empty, Uint128};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use gravity_apis::pool_api::{IdSet, OutgoingTransfer};
use gravity_apis::valset_api::{ValidatorUpdate, Valset};
use gravity_ethereum::keccak256;
use test_utils::EthSigner;

use crate::msg::{
    BatchFeesResponse, CheckpointResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
    SignedPowerResponse, SudoMsg, ValidatorsResponse, ValsetsResponse, WithdrawalsResponse,
};

pub(crate) const GRAVITY_ID: &str = "gravity-multitest";
pub(crate) const BRIDGE_CONTRACT: &str = "0xd1e2b6c8a3f4b05c9e7d6a8b2c1f0e9d8c7b6a54";
pub(crate) const DENOM: &str = "ugraviton";

fn contract_gravity() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(crate::execute, crate::instantiate, crate::query)
        .with_sudo(crate::sudo)
        .with_migrate(crate::migrate);
    Box::new(contract)
}

#[derive(Derivative)]
#[derivative(Default = "new")]
pub struct SuiteBuilder {
    height: Option<u64>,
    funds: Vec<(String, Vec<Coin>)>,
    max_valset_members: Option<u32>,
}

impl SuiteBuilder {
    pub fn with_height(mut self, height: u64) -> Self {
        self.height = Some(height);
        self
    }

    /// Initial bank balance of the account named `name`
    pub fn with_funds(mut self, name: &str, funds: &[Coin]) -> Self {
        self.funds.push((name.to_string(), funds.to_vec()));
        self
    }

    pub fn with_max_valset_members(mut self, max: u32) -> Self {
        self.max_valset_members = Some(max);
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        let mut app = App::default();
        let owner = app.api().addr_make("owner");

        let mut block = app.block_info();
        block.height = self.height.unwrap_or(1);
        app.set_block(block);

        let funds = self
            .funds
            .iter()
            .map(|(name, coins)| (app.api().addr_make(name), coins.clone()))
            .collect::<Vec<_>>();
        app.init_modules(|router, _api, storage| -> AnyResult<()> {
            for (addr, coins) in funds {
                router.bank.init_balance(storage, &addr, coins)?;
            }
            Ok(())
        })
        .unwrap();

        let code_id = app.store_code_with_creator(owner.clone(), contract_gravity());
        let params = self
            .max_valset_members
            .map(|max_valset_members| crate::state::config::Params { max_valset_members });
        let contract = app
            .instantiate_contract(
                code_id,
                owner.clone(),
                &InstantiateMsg {
                    admin: Some(owner.to_string()),
                    gravity_id: GRAVITY_ID.to_string(),
                    bridge_contract: BRIDGE_CONTRACT.to_string(),
                    bridge_chain_id: 5,
                    params,
                },
                &[],
                "gravity",
                Some(owner.to_string()),
            )
            .unwrap();

        Suite {
            app,
            contract,
            owner,
        }
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct Suite {
    #[derivative(Debug = "ignore")]
    pub app: App,
    /// Gravity contract address
    pub contract: Addr,
    /// Admin of the gravity contract
    pub owner: Addr,
}

impl Suite {
    pub fn addr(&self, name: &str) -> Addr {
        self.app.api().addr_make(name)
    }

    pub fn next_block(&mut self) {
        self.app.update_block(|block| {
            block.height += 1;
            block.time = block.time.plus_seconds(5);
        });
    }

    #[track_caller]
    pub fn balance(&self, addr: &Addr) -> Uint128 {
        self.app
            .wrap()
            .query_balance(addr, DENOM)
            .unwrap()
            .amount
    }

    /// Replaces the validator set, the way the host chain does
    #[track_caller]
    pub fn update_validators(&mut self, validators: &[(&Addr, u64)]) -> AnyResult<AppResponse> {
        let validators = validators
            .iter()
            .map(|(addr, power)| ValidatorUpdate {
                address: addr.to_string(),
                power: *power,
            })
            .collect();
        self.app.wasm_sudo(
            self.contract.clone(),
            &SudoMsg::UpdateValidators { validators },
        )
    }

    #[track_caller]
    pub fn set_eth_address(
        &mut self,
        validator: &Addr,
        signer: &EthSigner,
    ) -> AnyResult<AppResponse> {
        let canonical = self.app.api().addr_canonicalize(validator.as_str())?;
        let hash = keccak256(canonical.as_slice());
        self.app.execute_contract(
            validator.clone(),
            self.contract.clone(),
            &ExecuteMsg::SetEthAddress {
                eth_address: signer.eth_address(),
                signature: Binary::from(signer.sign_hash(&hash)),
            },
            &[],
        )
    }

    /// Requests a new valset, returning its nonce
    #[track_caller]
    pub fn request_valset(&mut self, sender: &Addr) -> AnyResult<u64> {
        let res = self.app.execute_contract(
            sender.clone(),
            self.contract.clone(),
            &ExecuteMsg::RequestValset {},
            &[],
        )?;
        let data = res
            .data
            .ok_or_else(|| anyhow::anyhow!("no nonce in response data"))?;
        Ok(from_json(data)?)
    }

    /// Signs the checkpoint of valset `nonce` with `signer` and submits it as `validator`
    #[track_caller]
    pub fn confirm_valset(
        &mut self,
        validator: &Addr,
        signer: &EthSigner,
        nonce: u64,
    ) -> AnyResult<AppResponse> {
        let checkpoint = hex::decode(self.query_checkpoint(nonce)?.checkpoint)?;
        self.app.execute_contract(
            validator.clone(),
            self.contract.clone(),
            &ExecuteMsg::ConfirmValset {
                nonce,
                eth_signature: Binary::from(signer.sign_hash(&checkpoint)),
            },
            &[],
        )
    }

    #[track_caller]
    pub fn send_to_eth(
        &mut self,
        sender: &Addr,
        amount: u128,
        fee: u128,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.contract.clone(),
            &ExecuteMsg::SendToEth {
                eth_dest: "0x2222222222222222222222222222222222222222".to_string(),
                amount: Coin::new(amount, DENOM),
                bridge_fee: Coin::new(fee, DENOM),
            },
            funds,
        )
    }

    #[track_caller]
    pub fn cancel_send_to_eth(&mut self, sender: &Addr, id: u64) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.contract.clone(),
            &ExecuteMsg::CancelSendToEth { id },
            &[],
        )
    }

    #[track_caller]
    pub fn remove_batched(&mut self, ids: &[u64]) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            self.owner.clone(),
            self.contract.clone(),
            &ExecuteMsg::RemoveBatched {
                ids: IdSet::new(ids.iter().copied()),
            },
            &[],
        )
    }

    pub fn query_checkpoint(&self, nonce: u64) -> AnyResult<CheckpointResponse> {
        Ok(self
            .app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::Checkpoint { nonce })?)
    }

    #[track_caller]
    pub fn get_valset(&self, nonce: u64) -> Valset {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::Valset { nonce })
            .unwrap()
    }

    #[track_caller]
    pub fn get_latest_valset(&self) -> Valset {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::LatestValset {})
            .unwrap()
    }

    #[track_caller]
    pub fn get_signed_power(&self, nonce: u64) -> SignedPowerResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::SignedPower { nonce })
            .unwrap()
    }

    #[track_caller]
    pub fn get_pending_valsets(&self, validator: &Addr) -> Vec<Valset> {
        let res: ValsetsResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.contract.clone(),
                &QueryMsg::PendingValsets {
                    validator: validator.to_string(),
                },
            )
            .unwrap();
        res.valsets
    }

    #[track_caller]
    pub fn get_validators(&self) -> ValidatorsResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::Validators {})
            .unwrap()
    }

    #[track_caller]
    pub fn get_pending_withdrawals(&self, token: Option<&str>) -> Vec<OutgoingTransfer> {
        let res: WithdrawalsResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.contract.clone(),
                &QueryMsg::PendingWithdrawals {
                    token: token.map(String::from),
                    start_after: None,
                    limit: None,
                },
            )
            .unwrap();
        res.withdrawals
    }

    #[track_caller]
    pub fn get_batch_fees(&self) -> BatchFeesResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::BatchFees {})
            .unwrap()
    }
}
