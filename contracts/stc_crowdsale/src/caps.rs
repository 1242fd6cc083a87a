//! Per-beneficiary contribution caps gating the whitelist window.
//!
//! A cap of zero means "not whitelisted". `contributed` grows with every
//! accepted purchase, in either window, but is only compared against the cap
//! while the whitelist window is open. Lowering a cap never undoes past
//! purchases; it only blocks further ones.

use crate::events;
use crate::types::DataKey;
use sale_common::SaleError;
use soroban_sdk::{Address, Env, Vec};

pub fn get_user_cap(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::UserCap(user.clone()))
        .unwrap_or(0)
}

pub fn get_contribution(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contributed(user.clone()))
        .unwrap_or(0)
}

pub fn is_whitelisted(env: &Env, user: &Address) -> bool {
    get_user_cap(env, user) > 0
}

pub fn set_user_cap(env: &Env, user: &Address, cap: i128) -> Result<(), SaleError> {
    if cap < 0 {
        return Err(SaleError::InvalidAmount);
    }
    env.storage()
        .persistent()
        .set(&DataKey::UserCap(user.clone()), &cap);
    events::user_cap(env, user, cap);
    Ok(())
}

pub fn set_group_cap(env: &Env, users: &Vec<Address>, cap: i128) -> Result<(), SaleError> {
    if cap < 0 {
        return Err(SaleError::InvalidAmount);
    }
    for user in users.iter() {
        set_user_cap(env, &user, cap)?;
    }
    Ok(())
}

pub fn set_multi_user_cap(
    env: &Env,
    users: &Vec<Address>,
    caps: &Vec<i128>,
) -> Result<(), SaleError> {
    if users.len() != caps.len() {
        return Err(SaleError::LengthMismatch);
    }
    // Validate everything before the first write.
    if caps.iter().any(|cap| cap < 0) {
        return Err(SaleError::InvalidAmount);
    }
    for (user, cap) in users.iter().zip(caps.iter()) {
        set_user_cap(env, &user, cap)?;
    }
    Ok(())
}

/// Whitelist-window check for crediting `amount` more to `beneficiary`.
pub fn check_whitelist_purchase(
    env: &Env,
    beneficiary: &Address,
    amount: i128,
) -> Result<(), SaleError> {
    let cap = get_user_cap(env, beneficiary);
    if cap <= 0 {
        return Err(SaleError::NotWhitelisted);
    }
    let after = get_contribution(env, beneficiary)
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;
    if after > cap {
        return Err(SaleError::CapExceeded);
    }
    Ok(())
}

pub fn record_contribution(env: &Env, beneficiary: &Address, amount: i128) -> Result<(), SaleError> {
    let total = get_contribution(env, beneficiary)
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;
    env.storage()
        .persistent()
        .set(&DataKey::Contributed(beneficiary.clone()), &total);
    Ok(())
}
