//! Events published by the dispute registry.

use soroban_sdk::{contractevent, Address, String};

#[contractevent]
pub struct DisputeFiled {
    #[topic]
    pub market_id: u64,
    pub disputer: Address,
    pub reason: String,
}

#[contractevent]
pub struct DisputeResolved {
    #[topic]
    pub market_id: u64,
    pub resolution: String,
}
