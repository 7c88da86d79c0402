#![no_std]
//! # Market Dispute Registry
//!
//! Soroban contract that records disputes raised against prediction market
//! outcomes. Each market can be disputed once; a dispute moves from
//! `Pending` to `Resolved` and is never removed.

mod contract;
mod errors;
mod events;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{DisputeResolutionContract, DisputeResolutionContractClient};
pub use errors::DisputeError;
pub use types::{DataKey, DisputeRecord, DisputeStatus};
