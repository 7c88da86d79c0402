//! Type definitions for the dispute registry.

use soroban_sdk::{contracttype, Address, String};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Dispute(u64),
    DisputeCount,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisputeStatus {
    Pending,
    Resolved,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisputeRecord {
    pub market_id: u64,
    pub disputer: Address,
    pub reason: String,
    pub status: DisputeStatus,
    pub resolution: Option<String>,
    pub filed_at: u32,           // Ledger sequence at filing
    pub resolved_at: Option<u32>, // Ledger sequence of the latest resolution
}
