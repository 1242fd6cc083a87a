#![no_std]

mod contract;
mod events;
mod storage;
mod types;


pub use contract::{StcToken, StcTokenClient, TOKEN_NAME, TOKEN_SYMBOL};
pub use types::TokenMetadata;
