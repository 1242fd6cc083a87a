#![no_std]

//! Pieces shared by the STC token, the funds vault and the crowdsale engine:
//! the error codes every contract reports, the owner check, and the client
//! interface the engine uses to drive the vault.

pub mod errors;
pub mod ownable;
pub mod vault;

pub use errors::SaleError;
pub use vault::{FundsVaultClient, FundsVaultInterface, VaultState};
