use sale_common::{SaleError, VaultState};
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct VaultConfig {
    pub wallet: Address,
    pub payment_token: Address,
}

#[contracttype]
pub enum DataKey {
    Config,
    State,
    Deposited(Address),
}

pub fn get_config(env: &Env) -> Result<VaultConfig, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_state(env: &Env) -> Result<VaultState, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_state(env: &Env, state: VaultState) {
    env.storage().instance().set(&DataKey::State, &state);
}

pub fn get_deposited(env: &Env, investor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Deposited(investor.clone()))
        .unwrap_or(0)
}

pub fn set_deposited(env: &Env, investor: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Deposited(investor.clone()), &amount);
}
