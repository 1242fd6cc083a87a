#![no_std]

mod caps;
mod contract;
mod delivery;
mod events;
mod phase;
mod storage;
mod types;


pub use contract::{CrowdsaleContract, CrowdsaleContractClient};
pub use types::{Phase, SaleConfig};
