use soroban_sdk::{symbol_short, Address, Env};

pub fn sale_initialized(env: &Env, owner: &Address, soft_cap: i128, hard_cap: i128) {
    env.events().publish(
        (symbol_short!("sale_init"), owner.clone()),
        (soft_cap, hard_cap),
    );
}

pub fn purchase(env: &Env, payer: &Address, beneficiary: &Address, amount: i128, tokens: i128) {
    env.events().publish(
        (symbol_short!("purchase"), payer.clone(), beneficiary.clone()),
        (amount, tokens),
    );
}

pub fn user_cap(env: &Env, user: &Address, cap: i128) {
    env.events()
        .publish((symbol_short!("user_cap"), user.clone()), cap);
}

pub fn finalized(env: &Env, wei_raised: i128, goal_reached: bool) {
    env.events()
        .publish((symbol_short!("finalized"),), (wei_raised, goal_reached));
}

pub fn delivered(env: &Env, beneficiary: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("delivered"), beneficiary.clone()), amount);
}

pub fn refund_claimed(env: &Env, investor: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("refund"), investor.clone()), amount);
}
