use soroban_sdk::{contracttype, Address, String};

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum DataKey {
    Metadata,
    TotalSupply,
    Paused,
    Balance(Address),
    Allowance(Address, Address),
}
