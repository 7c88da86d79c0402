//! Events published by the prediction market.

use soroban_sdk::{contractevent, Address, String};

#[contractevent]
pub struct MarketCreated {
    #[topic]
    pub market_id: u64,
    pub creator: Address,
    pub description: String,
    pub option_count: u32,
    pub resolution_time: u32,
}

#[contractevent]
pub struct Staked {
    #[topic]
    pub market_id: u64,
    #[topic]
    pub user: Address,
    pub option: u32,
    pub amount: i128,
}

#[contractevent]
pub struct MarketResolved {
    #[topic]
    pub market_id: u64,
    pub winning_option: u32,
    pub total_stake: i128,
}

#[contractevent]
pub struct WinningsClaimed {
    #[topic]
    pub market_id: u64,
    #[topic]
    pub user: Address,
    pub payout: i128,
}
