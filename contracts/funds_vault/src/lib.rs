#![no_std]

mod contract;
mod events;
mod storage;


pub use contract::{FundsVaultContract, FundsVaultContractClient};
pub use storage::VaultConfig;
