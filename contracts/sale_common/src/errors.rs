use soroban_sdk::contracterror;

/// Error codes shared by every sale contract, so a failure raised inside the
/// vault reaches the engine's caller with the same code.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidConfig = 4,
    InvalidAmount = 5,
    Overflow = 6,

    // Token ledger
    Paused = 10,
    AlreadyInState = 11,
    InvalidRecipient = 12,
    InsufficientBalance = 13,
    InsufficientAllowance = 14,

    // Cap registry
    LengthMismatch = 20,

    // Purchase validation
    NotOpen = 30,
    InvalidBeneficiary = 31,
    ZeroPurchase = 32,
    HardCapExceeded = 33,
    NotWhitelisted = 34,
    CapExceeded = 35,

    // Settlement
    AlreadyFinalized = 40,
    NotYetClosed = 41,
    NothingToWithdraw = 42,
    NothingToRefund = 43,
    InvalidStateTransition = 44,
    SaleFailed = 45,
    TokenTransferFailed = 46,
}
