use std::collections::HashSet;

use cosmwasm_std::Coin;
use gravity_ethereum::EthAddress;

use crate::error::ApiError;
use crate::pool_api::IdSet;
use crate::valset_api::ValidatorUpdate;

/// A trait for validating the API structs / input.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// `normalize_eth_address` checks an Ethereum address and returns its canonical lower-case,
/// `0x`-prefixed rendering
pub fn normalize_eth_address(addr: &str) -> Result<String, ApiError> {
    let addr: EthAddress = addr.parse()?;
    Ok(addr.to_string())
}

impl Validate for [ValidatorUpdate] {
    fn validate(&self) -> Result<(), ApiError> {
        let mut seen = HashSet::new();
        for update in self {
            if update.address.is_empty() {
                return Err(ApiError::EmptyValidatorAddress);
            }
            if !seen.insert(update.address.as_str()) {
                return Err(ApiError::DuplicatedValidator(update.address.clone()));
            }
        }
        Ok(())
    }
}

impl Validate for IdSet {
    fn validate(&self) -> Result<(), ApiError> {
        if self.ids.is_empty() {
            return Err(ApiError::EmptyIdSet);
        }
        let mut seen = HashSet::new();
        for id in &self.ids {
            if !seen.insert(*id) {
                return Err(ApiError::DuplicatedId(*id));
            }
        }
        Ok(())
    }
}

/// `TransferRequest` is the user input of a withdrawal, with the destination already parsed
pub struct TransferRequest<'a> {
    pub eth_dest: EthAddress,
    pub amount: &'a Coin,
    pub bridge_fee: &'a Coin,
}

impl<'a> TransferRequest<'a> {
    pub fn new(eth_dest: &str, amount: &'a Coin, bridge_fee: &'a Coin) -> Result<Self, ApiError> {
        Ok(TransferRequest {
            eth_dest: eth_dest.parse()?,
            amount,
            bridge_fee,
        })
    }
}

impl Validate for TransferRequest<'_> {
    fn validate(&self) -> Result<(), ApiError> {
        if self.amount.denom.is_empty() {
            return Err(ApiError::invalid_transfer("empty denom"));
        }
        if self.amount.denom != self.bridge_fee.denom {
            return Err(ApiError::DenomMismatch {
                amount: self.amount.denom.clone(),
                fee: self.bridge_fee.denom.clone(),
            });
        }
        if self.amount.amount.is_zero() {
            return Err(ApiError::ZeroAmount);
        }
        Ok(())
    }
}
