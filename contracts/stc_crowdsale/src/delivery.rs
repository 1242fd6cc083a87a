//! Post-delivery bookkeeping: purchases credit STC here, and the tokens only
//! leave the engine's own ledger balance once the sale has closed.

use crate::events;
use crate::phase;
use crate::storage::*;
use crate::types::SaleConfig;
use sale_common::SaleError;
use soroban_sdk::{token, Address, Env};

/// Tokens owed for `amount` more on top of `contributed`: the credit always
/// tracks `floor(total contributed / rate)`, so remainders carry over between
/// purchases.
pub fn tokens_for(contributed: i128, amount: i128, rate: i128) -> Result<i128, SaleError> {
    let total = contributed.checked_add(amount).ok_or(SaleError::Overflow)?;
    Ok(total / rate - contributed / rate)
}

pub fn credit(env: &Env, beneficiary: &Address, tokens: i128) -> Result<(), SaleError> {
    let total = get_token_credit(env, beneficiary)
        .checked_add(tokens)
        .ok_or(SaleError::Overflow)?;
    set_token_credit(env, beneficiary, total);
    Ok(())
}

/// Tokens are deliverable once the sale window is over, and only if the soft
/// cap was met. `wei_raised` is frozen after close, so a missed goal is final
/// whether or not `finalize` has run yet.
pub fn ensure_deliverable(env: &Env, config: &SaleConfig) -> Result<(), SaleError> {
    if !phase::has_closed(config, env.ledger().timestamp()) {
        return Err(SaleError::NotYetClosed);
    }
    if get_wei_raised(env) < config.soft_cap {
        return Err(SaleError::SaleFailed);
    }
    Ok(())
}

/// Transfers the whole pending credit of `beneficiary` out of the engine's
/// ledger balance. The credit is zeroed before the transfer and put back only
/// if the ledger rejects it.
pub fn deliver(env: &Env, config: &SaleConfig, beneficiary: &Address) -> Result<i128, SaleError> {
    let amount = get_token_credit(env, beneficiary);
    if amount == 0 {
        return Err(SaleError::NothingToWithdraw);
    }
    set_token_credit(env, beneficiary, 0);

    let ledger = token::Client::new(env, &config.token);
    match ledger.try_transfer(&env.current_contract_address(), beneficiary, &amount) {
        Ok(Ok(())) => {
            events::delivered(env, beneficiary, amount);
            Ok(amount)
        }
        _ => {
            set_token_credit(env, beneficiary, amount);
            Err(SaleError::TokenTransferFailed)
        }
    }
}
