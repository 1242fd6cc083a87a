use soroban_sdk::{contracttype, Address};

/// Everything fixed when the sale is deployed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub open_whitelist_time: u64,
    pub open_public_time: u64,
    pub close_time: u64,
    pub rate: i128, // Payment units per smallest STC unit
    pub wallet: Address,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub token: Address,         // STC token ledger
    pub payment_token: Address, // Asset contributions are paid in
    pub vault: Address,
}

/// Sale window, derived from the ledger timestamp and never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Phase {
    NotStarted = 0,
    WhitelistSale = 1,
    PublicSale = 2,
    Closed = 3,
}

#[contracttype]
pub enum DataKey {
    Config,
    WeiRaised,
    Finalized,
    UserCap(Address),
    Contributed(Address),
    TokenCredit(Address),
}
