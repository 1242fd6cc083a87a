use soroban_sdk::{symbol_short, Address, Env};

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );
}

pub fn approve(env: &Env, from: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"), from.clone(), spender.clone()),
        amount,
    );
}

pub fn pause(env: &Env, owner: &Address) {
    env.events()
        .publish((symbol_short!("pause"),), owner.clone());
}

pub fn unpause(env: &Env, owner: &Address) {
    env.events()
        .publish((symbol_short!("unpause"),), owner.clone());
}
