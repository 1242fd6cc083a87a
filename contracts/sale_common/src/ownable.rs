//! Single-owner access control, shared by composition.
//!
//! Each contract stores its owner under [`OwnableKey::Owner`] in instance
//! storage. Admin entry points take the caller explicitly and go through
//! [`require_owner`]; entry points reserved for a controlling contract (the
//! vault's owner is the engine) use [`require_owner_auth`] instead.

use crate::errors::SaleError;
use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum OwnableKey {
    Owner,
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&OwnableKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, SaleError> {
    env.storage()
        .instance()
        .get(&OwnableKey::Owner)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OwnableKey::Owner, owner);
}

/// Authenticates `caller` and checks it is the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), SaleError> {
    caller.require_auth();
    let owner = get_owner(env)?;
    if *caller != owner {
        return Err(SaleError::Unauthorized);
    }
    Ok(())
}

/// Requires the stored owner's authorization for the current invocation.
pub fn require_owner_auth(env: &Env) -> Result<Address, SaleError> {
    let owner = get_owner(env)?;
    owner.require_auth();
    Ok(owner)
}

pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), SaleError> {
    require_owner(env, caller)?;
    set_owner(env, new_owner);
    env.events().publish(
        (symbol_short!("owner"),),
        (caller.clone(), new_owner.clone()),
    );
    Ok(())
}
