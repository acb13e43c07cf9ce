mod suite;

use cosmwasm_std::{coin, coins, Decimal, Uint128, Uint256};
use suite::{SuiteBuilder, BRIDGE_CONTRACT, DENOM, GRAVITY_ID};
use test_utils::signers;

use crate::error::ContractError;

const USER: &str = "user";

mod instantiation {
    use super::*;

    use crate::msg::QueryMsg;
    use crate::state::config::{Config, Params};

    #[test]
    fn instantiate_works() {
        let suite = SuiteBuilder::new().with_max_valset_members(2).build();

        let config: Config = suite
            .app
            .wrap()
            .query_wasm_smart(suite.contract.clone(), &QueryMsg::Config {})
            .unwrap();
        assert_eq!(
            config,
            Config {
                gravity_id: GRAVITY_ID.to_string(),
                bridge_contract: BRIDGE_CONTRACT.to_string(),
                bridge_chain_id: 5,
            }
        );
        let params: Params = suite
            .app
            .wrap()
            .query_wasm_smart(suite.contract.clone(), &QueryMsg::Params {})
            .unwrap();
        assert_eq!(params.max_valset_members, 2);
    }
}

mod valsets {
    use super::*;

    #[test]
    fn signed_power_scenario() {
        let mut suite = SuiteBuilder::new().with_height(100).build();
        let vals = [suite.addr("val1"), suite.addr("val2"), suite.addr("val3")];
        let keys = signers(3);
        suite
            .update_validators(&[(&vals[0], 40), (&vals[1], 30), (&vals[2], 30)])
            .unwrap();
        for (val, key) in vals.iter().zip(&keys) {
            suite.set_eth_address(val, key).unwrap();
        }

        let nonce = suite.request_valset(&vals[0]).unwrap();
        assert_eq!(nonce, 1);
        let valset = suite.get_valset(nonce);
        assert_eq!(valset.height, 100);
        assert_eq!(valset.members.len(), 3);

        suite.confirm_valset(&vals[0], &keys[0], nonce).unwrap();
        suite.confirm_valset(&vals[1], &keys[1], nonce).unwrap();
        let signed = suite.get_signed_power(nonce);
        assert!(signed.ratio.abs_diff(Decimal::percent(70)) < Decimal::permille(1));

        // val3 submits a signature made with another key
        let err = suite
            .confirm_valset(&vals[2], &keys[0], nonce)
            .unwrap_err();
        assert!(matches!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::SignatureMismatch { .. }
        ));
        assert_eq!(suite.get_signed_power(nonce), signed);

        // re-submission does not change the signed power
        suite.confirm_valset(&vals[1], &keys[1], nonce).unwrap();
        assert_eq!(suite.get_signed_power(nonce), signed);
    }

    #[test]
    fn snapshots_are_immutable() {
        let mut suite = SuiteBuilder::new().build();
        let vals = [suite.addr("val1"), suite.addr("val2")];
        let keys = signers(2);
        suite
            .update_validators(&[(&vals[0], 10), (&vals[1], 10)])
            .unwrap();
        suite.set_eth_address(&vals[0], &keys[0]).unwrap();
        suite.set_eth_address(&vals[1], &keys[1]).unwrap();

        let first = suite.request_valset(&vals[0]).unwrap();
        let snapshot = suite.get_valset(first);
        let checkpoint = suite.query_checkpoint(first).unwrap();

        // val2 leaves, val1 gains power
        suite.next_block();
        suite.update_validators(&[(&vals[0], 50)]).unwrap();
        assert_eq!(suite.get_validators().validators.len(), 1);

        assert_eq!(suite.get_valset(first), snapshot);
        assert_eq!(suite.query_checkpoint(first).unwrap(), checkpoint);

        let second = suite.request_valset(&vals[1]).unwrap();
        assert_eq!(second, first + 1);
        let latest = suite.get_latest_valset();
        assert_eq!(latest.nonce, second);
        assert_eq!(latest.members.len(), 1);
        assert_eq!(latest.members[0].eth_address, keys[0].eth_address());

        // val2 left the set, so it can not confirm anymore
        let err = suite.confirm_valset(&vals[1], &keys[1], first).unwrap_err();
        assert_eq!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::NotValidator(vals[1].to_string())
        );

        // unknown nonces have no checkpoint to sign
        suite.query_checkpoint(42).unwrap_err();
    }

    #[test]
    fn failed_requests_store_nothing() {
        let mut suite = SuiteBuilder::new().build();
        let val = suite.addr("val1");
        let key = &signers(1)[0];
        suite.update_validators(&[(&val, 10)]).unwrap();

        // no registered Ethereum address yet
        let err = suite.request_valset(&val).unwrap_err();
        assert_eq!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::EmptyValset
        );

        suite.set_eth_address(&val, key).unwrap();
        let nonce = suite.request_valset(&val).unwrap();
        assert_eq!(nonce, 1);
        assert_eq!(suite.get_valset(nonce).total_power(), u32::MAX as u64);
    }

    #[test]
    fn key_rotation_does_not_lower_signed_power() {
        let mut suite = SuiteBuilder::new().build();
        let vals = [suite.addr("val1"), suite.addr("val2")];
        let keys = signers(3);
        suite
            .update_validators(&[(&vals[0], 60), (&vals[1], 40)])
            .unwrap();
        suite.set_eth_address(&vals[0], &keys[0]).unwrap();
        suite.set_eth_address(&vals[1], &keys[1]).unwrap();
        let nonce = suite.request_valset(&vals[0]).unwrap();

        suite.confirm_valset(&vals[0], &keys[0], nonce).unwrap();
        let before = suite.get_signed_power(nonce);

        suite.set_eth_address(&vals[0], &keys[2]).unwrap();
        let err = suite.confirm_valset(&vals[0], &keys[2], nonce).unwrap_err();
        assert!(matches!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::NotValsetMember { .. }
        ));
        assert_eq!(suite.get_signed_power(nonce), before);
    }

    #[test]
    fn valset_members_are_capped() {
        let mut suite = SuiteBuilder::new().with_max_valset_members(2).build();
        let vals = [suite.addr("val1"), suite.addr("val2"), suite.addr("val3")];
        let keys = signers(3);
        suite
            .update_validators(&[(&vals[0], 10), (&vals[1], 30), (&vals[2], 20)])
            .unwrap();
        for (val, key) in vals.iter().zip(&keys) {
            suite.set_eth_address(val, key).unwrap();
        }

        let nonce = suite.request_valset(&vals[0]).unwrap();
        let valset = suite.get_valset(nonce);
        let members: Vec<_> = valset.members.iter().map(|m| m.eth_address.clone()).collect();
        assert_eq!(members, vec![keys[1].eth_address(), keys[2].eth_address()]);

        // val1 is no member, so nothing is pending for it
        assert!(suite.get_pending_valsets(&vals[0]).is_empty());
        assert_eq!(suite.get_pending_valsets(&vals[1]).len(), 1);
        suite.confirm_valset(&vals[1], &keys[1], nonce).unwrap();
        assert!(suite.get_pending_valsets(&vals[1]).is_empty());
    }
}

mod withdrawals {
    use super::*;

    #[test]
    fn escrow_and_refund() {
        let mut suite = SuiteBuilder::new()
            .with_funds(USER, &coins(1_000, DENOM))
            .build();
        let user = suite.addr(USER);

        suite
            .send_to_eth(&user, 100, 10, &coins(110, DENOM))
            .unwrap();
        assert_eq!(suite.balance(&user), Uint128::new(890));
        assert_eq!(suite.balance(&suite.contract.clone()), Uint128::new(110));

        // the bank module refuses to move funds the user does not have
        assert!(suite
            .send_to_eth(&user, 1_000, 10, &coins(1_010, DENOM))
            .is_err());
        assert_eq!(suite.balance(&user), Uint128::new(890));

        let res = suite.cancel_send_to_eth(&user, 1).unwrap();
        assert!(res.has_event(
            &cosmwasm_std::Event::new("wasm-withdraw_canceled")
                .add_attribute("bridge_chain_id", "5")
        ));
        assert_eq!(suite.balance(&user), Uint128::new(1_000));
        assert_eq!(suite.balance(&suite.contract.clone()), Uint128::zero());
    }

    #[test]
    fn batch_fees_scenario() {
        let mut suite = SuiteBuilder::new()
            .with_funds(USER, &[coin(1_000, DENOM)])
            .build();
        let user = suite.addr(USER);

        suite.send_to_eth(&user, 100, 10, &coins(110, DENOM)).unwrap();
        suite.send_to_eth(&user, 100, 5, &coins(105, DENOM)).unwrap();

        let fees = suite.get_batch_fees().fees;
        assert_eq!(fees.len(), 1);
        assert_eq!(fees[0].token, DENOM);
        assert_eq!(fees[0].total_fees, Uint256::from(15u128));
        assert_eq!(fees[0].tx_count, 2);
    }

    #[test]
    fn batch_fees_track_pending_withdrawals() {
        let mut suite = SuiteBuilder::new()
            .with_funds(USER, &coins(1_000_000, DENOM))
            .build();
        let user = suite.addr(USER);

        // deterministic pseudo-random fees
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut fees = vec![];
        for _ in 0..20 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let fee = (seed % 500) as u128;
            suite
                .send_to_eth(&user, 100, fee, &coins(100 + fee, DENOM))
                .unwrap();
            fees.push(fee);
        }
        let total = |suite: &suite::Suite| suite.get_batch_fees().fees[0].total_fees;
        assert_eq!(total(&suite), Uint256::from(fees.iter().sum::<u128>()));

        suite.cancel_send_to_eth(&user, 7).unwrap();
        assert_eq!(
            total(&suite),
            Uint256::from(fees.iter().sum::<u128>() - fees[6])
        );
        assert_eq!(suite.get_batch_fees().fees[0].tx_count, 19);
    }

    #[test]
    fn batched_withdrawals_are_gone() {
        let mut suite = SuiteBuilder::new()
            .with_funds(USER, &coins(1_000, DENOM))
            .build();
        let user = suite.addr(USER);
        suite.send_to_eth(&user, 100, 10, &coins(110, DENOM)).unwrap();
        suite.send_to_eth(&user, 100, 10, &coins(110, DENOM)).unwrap();

        suite.remove_batched(&[1]).unwrap();
        let err = suite.cancel_send_to_eth(&user, 1).unwrap_err();
        assert_eq!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::WithdrawalNotFound(1)
        );
        let err = suite.remove_batched(&[1]).unwrap_err();
        assert_eq!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::AlreadyBatched(1)
        );

        // ids keep increasing across add / cancel / batch
        suite.cancel_send_to_eth(&user, 2).unwrap();
        suite.send_to_eth(&user, 100, 10, &coins(110, DENOM)).unwrap();
        let pending = suite.get_pending_withdrawals(Some(DENOM));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 3);
        // the escrow of the batched withdrawal stays in the contract
        assert_eq!(suite.balance(&suite.contract.clone()), Uint128::new(220));
    }
}
