use crate::caps;
use crate::delivery;
use crate::events;
use crate::phase;
use crate::storage::*;
use crate::types::*;
use sale_common::{ownable, FundsVaultClient, SaleError, VaultState};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, token, Address, Env, InvokeError, Vec,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Whitelisted, capped, refundable STC crowdsale with post-delivery"
);

#[contract]
pub struct CrowdsaleContract;

#[contractimpl]
impl CrowdsaleContract {
    /// Initialize the crowdsale and take ownership of its funds vault.
    pub fn initialize(env: Env, owner: Address, config: SaleConfig) -> Result<(), SaleError> {
        if has_config(&env) {
            return Err(SaleError::AlreadyInitialized);
        }

        owner.require_auth();
        validate_config(&env, &config)?;

        ownable::set_owner(&env, &owner);
        set_config(&env, &config);
        set_wei_raised(&env, 0);
        set_finalized(&env, false);

        let vault = FundsVaultClient::new(&env, &config.vault);
        vault_result(vault.try_initialize(
            &env.current_contract_address(),
            &config.wallet,
            &config.payment_token,
        ))?;

        events::sale_initialized(&env, &owner, config.soft_cap, config.hard_cap);
        Ok(())
    }

    /// Pays `wei_amount` from `payer` for STC credited to `beneficiary`.
    /// Returns the number of token units credited.
    pub fn buy_tokens(
        env: Env,
        payer: Address,
        beneficiary: Address,
        wei_amount: i128,
    ) -> Result<i128, SaleError> {
        payer.require_auth();
        purchase(&env, &payer, &beneficiary, wei_amount)
    }

    /// Plain contribution: the buyer is also the beneficiary.
    pub fn buy(env: Env, buyer: Address, wei_amount: i128) -> Result<i128, SaleError> {
        buyer.require_auth();
        purchase(&env, &buyer, &buyer, wei_amount)
    }

    // Cap registry
    pub fn set_user_cap(env: Env, caller: Address, user: Address, cap: i128) -> Result<(), SaleError> {
        ownable::require_owner(&env, &caller)?;
        caps::set_user_cap(&env, &user, cap)
    }

    pub fn set_group_cap(
        env: Env,
        caller: Address,
        users: Vec<Address>,
        cap: i128,
    ) -> Result<(), SaleError> {
        ownable::require_owner(&env, &caller)?;
        caps::set_group_cap(&env, &users, cap)
    }

    pub fn set_multi_user_cap(
        env: Env,
        caller: Address,
        users: Vec<Address>,
        caps: Vec<i128>,
    ) -> Result<(), SaleError> {
        ownable::require_owner(&env, &caller)?;
        caps::set_multi_user_cap(&env, &users, &caps)
    }

    /// Settle the sale once it has closed: forward the funds to the wallet
    /// if the soft cap was met, open refunds otherwise. Can only happen once.
    pub fn finalize(env: Env, caller: Address) -> Result<(), SaleError> {
        ownable::require_owner(&env, &caller)?;

        if is_finalized(&env) {
            return Err(SaleError::AlreadyFinalized);
        }
        let config = get_config(&env)?;
        if !phase::has_closed(&config, env.ledger().timestamp()) {
            return Err(SaleError::NotYetClosed);
        }

        set_finalized(&env, true);

        let wei_raised = get_wei_raised(&env);
        let goal_reached = wei_raised >= config.soft_cap;
        let vault = FundsVaultClient::new(&env, &config.vault);
        if goal_reached {
            vault_result(vault.try_close())?;
        } else {
            vault_result(vault.try_enable_refunds())?;
        }

        events::finalized(&env, wei_raised, goal_reached);
        Ok(())
    }

    /// Pull the caller's credited STC after the sale has closed.
    pub fn withdraw_tokens(env: Env, beneficiary: Address) -> Result<i128, SaleError> {
        beneficiary.require_auth();

        let config = get_config(&env)?;
        delivery::ensure_deliverable(&env, &config)?;
        delivery::deliver(&env, &config, &beneficiary)
    }

    /// Owner push of a beneficiary's credited STC.
    pub fn send_tokens_to_beneficiary(
        env: Env,
        caller: Address,
        beneficiary: Address,
    ) -> Result<i128, SaleError> {
        ownable::require_owner(&env, &caller)?;

        let config = get_config(&env)?;
        delivery::ensure_deliverable(&env, &config)?;
        delivery::deliver(&env, &config, &beneficiary)
    }

    /// Owner push to many beneficiaries. Entries that cannot be delivered
    /// (nothing credited, ledger transfer refused) are skipped without
    /// affecting the others. Returns how many were delivered.
    pub fn send_tokens_to_many_beneficiary(
        env: Env,
        caller: Address,
        beneficiaries: Vec<Address>,
    ) -> Result<u32, SaleError> {
        ownable::require_owner(&env, &caller)?;

        let config = get_config(&env)?;
        delivery::ensure_deliverable(&env, &config)?;

        let mut delivered = 0u32;
        for beneficiary in beneficiaries.iter() {
            match delivery::deliver(&env, &config, &beneficiary) {
                Ok(_) => delivered += 1,
                Err(err) => log!(&env, "skipping beneficiary: {}", err as u32),
            }
        }
        Ok(delivered)
    }

    /// Refund everything deposited for `investor` once refunds are open.
    /// A refunded contribution forfeits its pending STC credit.
    pub fn claim_refund(env: Env, investor: Address) -> Result<i128, SaleError> {
        investor.require_auth();

        let config = get_config(&env)?;
        set_token_credit(&env, &investor, 0);

        let vault = FundsVaultClient::new(&env, &config.vault);
        let amount = vault_result(vault.try_claim_refund(&investor))?;

        events::refund_claimed(&env, &investor, amount);
        Ok(amount)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), SaleError> {
        ownable::transfer_ownership(&env, &caller, &new_owner)
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleConfig, SaleError> {
        get_config(&env)
    }

    pub fn owner(env: Env) -> Result<Address, SaleError> {
        ownable::get_owner(&env)
    }

    pub fn phase(env: Env) -> Result<Phase, SaleError> {
        let config = get_config(&env)?;
        Ok(phase::phase_at(&config, env.ledger().timestamp()))
    }

    pub fn has_closed(env: Env) -> Result<bool, SaleError> {
        let config = get_config(&env)?;
        Ok(phase::has_closed(&config, env.ledger().timestamp()))
    }

    pub fn cap_reached(env: Env) -> Result<bool, SaleError> {
        Ok(get_wei_raised(&env) >= get_config(&env)?.hard_cap)
    }

    pub fn goal_reached(env: Env) -> Result<bool, SaleError> {
        Ok(get_wei_raised(&env) >= get_config(&env)?.soft_cap)
    }

    pub fn wei_raised(env: Env) -> i128 {
        get_wei_raised(&env)
    }

    pub fn is_finalized(env: Env) -> bool {
        is_finalized(&env)
    }

    pub fn token_credit(env: Env, beneficiary: Address) -> i128 {
        get_token_credit(&env, &beneficiary)
    }

    pub fn vault_state(env: Env) -> Result<VaultState, SaleError> {
        let config = get_config(&env)?;
        vault_result(FundsVaultClient::new(&env, &config.vault).try_state())
    }

    pub fn get_user_cap(env: Env, user: Address) -> i128 {
        caps::get_user_cap(&env, &user)
    }

    pub fn get_contribution(env: Env, user: Address) -> i128 {
        caps::get_contribution(&env, &user)
    }

    pub fn is_whitelisted(env: Env, user: Address) -> bool {
        caps::is_whitelisted(&env, &user)
    }
}

fn validate_config(env: &Env, config: &SaleConfig) -> Result<(), SaleError> {
    let valid = config.open_whitelist_time >= env.ledger().timestamp()
        && config.open_whitelist_time < config.open_public_time
        && config.open_public_time < config.close_time
        && config.rate > 0
        && config.soft_cap > 0
        && config.soft_cap <= config.hard_cap
        && config.vault != env.current_contract_address();
    if !valid {
        return Err(SaleError::InvalidConfig);
    }
    Ok(())
}

fn purchase(
    env: &Env,
    payer: &Address,
    beneficiary: &Address,
    wei_amount: i128,
) -> Result<i128, SaleError> {
    let config = get_config(env)?;
    let phase = phase::phase_at(&config, env.ledger().timestamp());

    // Checks
    if !phase.accepts_purchases() {
        log!(env, "purchase rejected: sale not open, phase {}", phase as u32);
        return Err(SaleError::NotOpen);
    }
    if *beneficiary == env.current_contract_address() {
        return Err(SaleError::InvalidBeneficiary);
    }
    if wei_amount == 0 {
        return Err(SaleError::ZeroPurchase);
    }
    if wei_amount < 0 {
        return Err(SaleError::InvalidAmount);
    }

    let wei_raised = get_wei_raised(env)
        .checked_add(wei_amount)
        .ok_or(SaleError::Overflow)?;
    if wei_raised > config.hard_cap {
        log!(env, "purchase rejected: hard cap exceeded by {}", wei_raised - config.hard_cap);
        return Err(SaleError::HardCapExceeded);
    }
    if phase == Phase::WhitelistSale {
        caps::check_whitelist_purchase(env, beneficiary, wei_amount)?;
    }

    let contributed = caps::get_contribution(env, beneficiary);
    let tokens = delivery::tokens_for(contributed, wei_amount, config.rate)?;

    // Effects
    caps::record_contribution(env, beneficiary, wei_amount)?;
    set_wei_raised(env, wei_raised);
    delivery::credit(env, beneficiary, tokens)?;

    // Interactions
    let payment = token::Client::new(env, &config.payment_token);
    match payment.try_transfer(payer, &config.vault, &wei_amount) {
        Ok(Ok(())) => {}
        _ => return Err(SaleError::TokenTransferFailed),
    }
    let vault = FundsVaultClient::new(env, &config.vault);
    vault_result(vault.try_deposit(beneficiary, &wei_amount))?;

    events::purchase(env, payer, beneficiary, wei_amount, tokens);
    Ok(tokens)
}

/// Unwraps a vault call, surfacing its contract error unchanged. Anything
/// else the host reports there comes from the vault's payment transfer.
fn vault_result<T, C>(
    result: Result<Result<T, C>, Result<SaleError, InvokeError>>,
) -> Result<T, SaleError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        _ => Err(SaleError::TokenTransferFailed),
    }
}
