//! Type definitions for the prediction market.

use soroban_sdk::{contracttype, Address, String, Vec};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Oracle,
    StakeToken,
    MarketCount,
    Market(u64),
    OptionStake(OptionKey),
    UserStake(UserStakeKey),
    Claimed(ClaimKey),
}

#[contracttype]
#[derive(Clone)]
pub struct OptionKey {
    pub market_id: u64,
    pub option: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct UserStakeKey {
    pub market_id: u64,
    pub user: Address,
    pub option: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct ClaimKey {
    pub market_id: u64,
    pub user: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Market {
    pub creator: Address,
    pub description: String,
    pub options: Vec<String>,
    pub resolution_time: u32,    // Ledger sequence; staking closes and resolution opens here
    pub total_stake: i128,       // Sum of all option stakes
    pub resolved: bool,
    pub winning_option: Option<u32>,
}
