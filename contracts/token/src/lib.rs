#![no_std]
//! # Prediction Market Token (PMT)
//!
//! Fungible token used to stake on prediction markets.
//!
//! ## Key Features
//! - Admin-gated minting with tracked total supply
//! - Transfers compatible with the standard Soroban token interface
//! - Optional memo on transfers, carried in the emitted event
//! - Checked arithmetic on every balance update

mod contract;
mod errors;
mod events;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{TokenContract, TokenContractClient, DECIMALS, NAME, SYMBOL};
pub use errors::TokenError;
pub use types::DataKey;
