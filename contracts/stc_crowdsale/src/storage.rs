use crate::types::*;
use sale_common::SaleError;
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_wei_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::WeiRaised)
        .unwrap_or(0)
}

pub fn set_wei_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::WeiRaised, &amount);
}

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn set_finalized(env: &Env, finalized: bool) {
    env.storage().instance().set(&DataKey::Finalized, &finalized);
}

pub fn get_token_credit(env: &Env, beneficiary: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TokenCredit(beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_token_credit(env: &Env, beneficiary: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::TokenCredit(beneficiary.clone()), &amount);
}
