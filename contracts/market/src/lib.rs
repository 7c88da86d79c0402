#![no_std]
//! # Prediction Market
//!
//! Soroban-based prediction market where users stake a token on one of
//! several options and winners split the whole pool.
//!
//! ## Key Features
//! - Role-based access control (Admin, Oracle, Users)
//! - Any number of markets, each with 2 to 10 options
//! - Stakes held in any contract implementing the Soroban token interface
//! - Stake-weighted payouts with refunds when nobody picked the winner
//! - Checked arithmetic prevents overflow

mod contract;
mod errors;
mod events;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{
    PredictionMarketContract, PredictionMarketContractClient, MAX_OPTIONS, MIN_OPTIONS,
};
pub use errors::MarketError;
pub use types::{ClaimKey, DataKey, Market, OptionKey, UserStakeKey};
