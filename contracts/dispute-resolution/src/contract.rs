//! Core contract implementation for the dispute registry.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::errors::DisputeError;
use crate::events::{DisputeFiled, DisputeResolved};
use crate::types::{DataKey, DisputeRecord, DisputeStatus};

#[contract]
pub struct DisputeResolutionContract;

#[contractimpl]
impl DisputeResolutionContract {
    /// Files a dispute against a market's outcome (first filer wins)
    pub fn file_dispute(
        env: Env,
        disputer: Address,
        market_id: u64,
        reason: String,
    ) -> Result<(), DisputeError> {
        disputer.require_auth();

        let key = DataKey::Dispute(market_id);
        if env.storage().persistent().has(&key) {
            return Err(DisputeError::AlreadyDisputed);
        }

        let record = DisputeRecord {
            market_id,
            disputer: disputer.clone(),
            reason: reason.clone(),
            status: DisputeStatus::Pending,
            resolution: None,
            filed_at: env.ledger().sequence(),
            resolved_at: None,
        };
        env.storage().persistent().set(&key, &record);

        let count = Self::dispute_count(env.clone())
            .checked_add(1)
            .ok_or(DisputeError::Overflow)?;
        env.storage().persistent().set(&DataKey::DisputeCount, &count);

        DisputeFiled {
            market_id,
            disputer,
            reason,
        }
        .publish(&env);

        Ok(())
    }

    /// Marks a dispute as resolved and records the resolution text.
    /// Resolving an already resolved dispute overwrites its resolution.
    pub fn resolve_dispute(
        env: Env,
        market_id: u64,
        resolution: String,
    ) -> Result<(), DisputeError> {
        let key = DataKey::Dispute(market_id);
        let mut record: DisputeRecord = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(DisputeError::NotFound)?;

        record.status = DisputeStatus::Resolved;
        record.resolution = Some(resolution.clone());
        record.resolved_at = Some(env.ledger().sequence());
        env.storage().persistent().set(&key, &record);

        DisputeResolved {
            market_id,
            resolution,
        }
        .publish(&env);

        Ok(())
    }

    /// Returns the dispute filed for a market, if any
    pub fn get_dispute(env: Env, market_id: u64) -> Option<DisputeRecord> {
        env.storage().persistent().get(&DataKey::Dispute(market_id))
    }

    pub fn is_disputed(env: Env, market_id: u64) -> bool {
        env.storage().persistent().has(&DataKey::Dispute(market_id))
    }

    /// Total number of disputes ever filed
    pub fn dispute_count(env: Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::DisputeCount)
            .unwrap_or(0)
    }
}
