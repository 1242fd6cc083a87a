use crate::events;
use crate::storage::*;
use sale_common::{ownable, FundsVaultInterface, SaleError, VaultState};
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

contractmeta!(
    key = "Description",
    val = "Refund vault holding crowdsale contributions until the sale is finalized"
);

#[contract]
pub struct FundsVaultContract;

#[contractimpl]
impl FundsVaultInterface for FundsVaultContract {
    fn initialize(
        env: Env,
        owner: Address,
        wallet: Address,
        payment_token: Address,
    ) -> Result<(), SaleError> {
        if ownable::has_owner(&env) {
            return Err(SaleError::AlreadyInitialized);
        }
        owner.require_auth();

        ownable::set_owner(&env, &owner);
        set_config(
            &env,
            &VaultConfig {
                wallet,
                payment_token,
            },
        );
        set_state(&env, VaultState::Active);
        Ok(())
    }

    fn deposit(env: Env, investor: Address, amount: i128) -> Result<(), SaleError> {
        ownable::require_owner_auth(&env)?;

        if amount <= 0 {
            return Err(SaleError::InvalidAmount);
        }
        if get_state(&env)? != VaultState::Active {
            return Err(SaleError::InvalidStateTransition);
        }

        let total = get_deposited(&env, &investor)
            .checked_add(amount)
            .ok_or(SaleError::Overflow)?;
        set_deposited(&env, &investor, total);

        events::deposited(&env, &investor, amount);
        Ok(())
    }

    fn enable_refunds(env: Env) -> Result<(), SaleError> {
        ownable::require_owner_auth(&env)?;
        leave_active(&env, VaultState::Refunding)?;

        events::refunds_enabled(&env);
        Ok(())
    }

    fn close(env: Env) -> Result<i128, SaleError> {
        ownable::require_owner_auth(&env)?;
        leave_active(&env, VaultState::Closed)?;

        let config = get_config(&env)?;
        let token_client = token::Client::new(&env, &config.payment_token);
        let vault = env.current_contract_address();
        let balance = token_client.balance(&vault);
        if balance > 0 {
            token_client.transfer(&vault, &config.wallet, &balance);
        }

        events::closed(&env, &config.wallet, balance);
        Ok(balance)
    }

    fn claim_refund(env: Env, investor: Address) -> Result<i128, SaleError> {
        ownable::require_owner_auth(&env)?;

        if get_state(&env)? != VaultState::Refunding {
            return Err(SaleError::InvalidStateTransition);
        }
        let amount = get_deposited(&env, &investor);
        if amount == 0 {
            return Err(SaleError::NothingToRefund);
        }

        // Zeroed before the payout so a re-entering recipient sees nothing left.
        set_deposited(&env, &investor, 0);

        let config = get_config(&env)?;
        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&env.current_contract_address(), &investor, &amount);

        events::refunded(&env, &investor, amount);
        Ok(amount)
    }

    fn state(env: Env) -> Result<VaultState, SaleError> {
        get_state(&env)
    }

    fn deposited_of(env: Env, investor: Address) -> i128 {
        get_deposited(&env, &investor)
    }

    fn wallet(env: Env) -> Result<Address, SaleError> {
        Ok(get_config(&env)?.wallet)
    }
}

/// Moves an active vault into one of its terminal states.
fn leave_active(env: &Env, next: VaultState) -> Result<(), SaleError> {
    if get_state(env)? != VaultState::Active {
        return Err(SaleError::InvalidStateTransition);
    }
    set_state(env, next);
    Ok(())
}
