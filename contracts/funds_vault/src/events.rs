use soroban_sdk::{symbol_short, Address, Env};

pub fn deposited(env: &Env, investor: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("deposit"), investor.clone()), amount);
}

pub fn refunds_enabled(env: &Env) {
    env.events().publish((symbol_short!("refunds"),), ());
}

pub fn closed(env: &Env, wallet: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("closed"), wallet.clone()), amount);
}

pub fn refunded(env: &Env, investor: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("refunded"), investor.clone()), amount);
}
