use crate::events;
use crate::storage::*;
use crate::types::*;
use sale_common::{ownable, SaleError};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String};

contractmeta!(
    key = "Description",
    val = "STC Token - pausable fungible token sold through the STC crowdsale"
);

pub const TOKEN_NAME: &str = "Survey Token";
pub const TOKEN_SYMBOL: &str = "STC";

#[contract]
pub struct StcToken;

#[contractimpl]
impl StcToken {
    /// Creates the whole supply and assigns it to `owner`.
    pub fn initialize(
        env: Env,
        owner: Address,
        total_supply: i128,
        decimals: u32,
    ) -> Result<(), SaleError> {
        if ownable::has_owner(&env) {
            return Err(SaleError::AlreadyInitialized);
        }
        owner.require_auth();

        if total_supply < 0 {
            return Err(SaleError::InvalidAmount);
        }

        let metadata = TokenMetadata {
            decimal: decimals,
            name: String::from_str(&env, TOKEN_NAME),
            symbol: String::from_str(&env, TOKEN_SYMBOL),
        };
        set_metadata(&env, &metadata);
        ownable::set_owner(&env, &owner);
        set_paused(&env, false);
        set_total_supply(&env, total_supply);
        set_balance(&env, &owner, total_supply);

        events::transfer(&env, &env.current_contract_address(), &owner, total_supply);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), SaleError> {
        from.require_auth();
        ensure_not_paused(&env)?;

        move_balance(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), SaleError> {
        spender.require_auth();
        ensure_not_paused(&env)?;

        let allowance = get_allowance(&env, &from, &spender);
        if amount > allowance {
            return Err(SaleError::InsufficientAllowance);
        }

        move_balance(&env, &from, &to, amount)?;
        set_allowance(&env, &from, &spender, allowance - amount);
        Ok(())
    }

    /// Sets the allowance to exactly `amount`.
    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) -> Result<(), SaleError> {
        from.require_auth();
        ensure_not_paused(&env)?;

        if amount < 0 {
            return Err(SaleError::InvalidAmount);
        }

        set_allowance(&env, &from, &spender, amount);
        events::approve(&env, &from, &spender, amount);
        Ok(())
    }

    pub fn increase_allowance(
        env: Env,
        from: Address,
        spender: Address,
        delta: i128,
    ) -> Result<i128, SaleError> {
        from.require_auth();
        ensure_not_paused(&env)?;

        if delta < 0 {
            return Err(SaleError::InvalidAmount);
        }

        let allowance = get_allowance(&env, &from, &spender)
            .checked_add(delta)
            .ok_or(SaleError::Overflow)?;
        set_allowance(&env, &from, &spender, allowance);
        events::approve(&env, &from, &spender, allowance);
        Ok(allowance)
    }

    /// Lowers the allowance by `delta`, stopping at zero.
    pub fn decrease_allowance(
        env: Env,
        from: Address,
        spender: Address,
        delta: i128,
    ) -> Result<i128, SaleError> {
        from.require_auth();
        ensure_not_paused(&env)?;

        if delta < 0 {
            return Err(SaleError::InvalidAmount);
        }

        let current = get_allowance(&env, &from, &spender);
        let allowance = if delta >= current { 0 } else { current - delta };
        set_allowance(&env, &from, &spender, allowance);
        events::approve(&env, &from, &spender, allowance);
        Ok(allowance)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), SaleError> {
        ownable::require_owner(&env, &caller)?;
        if is_paused(&env) {
            return Err(SaleError::AlreadyInState);
        }

        set_paused(&env, true);
        events::pause(&env, &caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), SaleError> {
        ownable::require_owner(&env, &caller)?;
        if !is_paused(&env) {
            return Err(SaleError::AlreadyInState);
        }

        set_paused(&env, false);
        events::unpause(&env, &caller);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), SaleError> {
        ownable::transfer_ownership(&env, &caller, &new_owner)
    }

    // View functions
    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, SaleError> {
        Ok(get_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, SaleError> {
        Ok(get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, SaleError> {
        Ok(get_metadata(&env)?.symbol)
    }

    pub fn paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn owner(env: Env) -> Result<Address, SaleError> {
        ownable::get_owner(&env)
    }
}

fn ensure_not_paused(env: &Env) -> Result<(), SaleError> {
    if is_paused(env) {
        return Err(SaleError::Paused);
    }
    Ok(())
}

/// Debits `from` and credits `to`. Tokens sent to the token contract itself
/// could never be moved again, so it is not a valid recipient.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), SaleError> {
    if amount < 0 {
        return Err(SaleError::InvalidAmount);
    }
    if *to == env.current_contract_address() {
        return Err(SaleError::InvalidRecipient);
    }

    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(SaleError::InsufficientBalance);
    }
    set_balance(env, from, from_balance - amount);

    // Re-read so a transfer to self nets out.
    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;
    set_balance(env, to, to_balance);

    events::transfer(env, from, to, amount);
    Ok(())
}
