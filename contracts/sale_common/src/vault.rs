use crate::errors::SaleError;
use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Lifecycle of the funds vault. `Active` moves to exactly one of the two
/// terminal states and never back.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum VaultState {
    Active = 0,
    Refunding = 1,
    Closed = 2,
}

/// Escrow for sale contributions. Implemented by the `funds_vault` contract;
/// the engine talks to it through the generated [`FundsVaultClient`].
#[contractclient(name = "FundsVaultClient")]
pub trait FundsVaultInterface {
    /// One-shot setup. `owner` is the only address allowed to deposit,
    /// settle, or pay out refunds.
    fn initialize(
        env: Env,
        owner: Address,
        wallet: Address,
        payment_token: Address,
    ) -> Result<(), SaleError>;

    /// Records `amount` already transferred into the vault on behalf of
    /// `investor`.
    fn deposit(env: Env, investor: Address, amount: i128) -> Result<(), SaleError>;

    fn enable_refunds(env: Env) -> Result<(), SaleError>;

    /// Closes the vault and forwards its whole balance to the wallet.
    /// Returns the amount forwarded.
    fn close(env: Env) -> Result<i128, SaleError>;

    /// Pays `investor` back everything deposited for them.
    fn claim_refund(env: Env, investor: Address) -> Result<i128, SaleError>;

    fn state(env: Env) -> Result<VaultState, SaleError>;

    fn deposited_of(env: Env, investor: Address) -> i128;

    fn wallet(env: Env) -> Result<Address, SaleError>;
}
