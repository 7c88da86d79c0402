//! Contract error types for the prediction market.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Admin address not set - call initialize first
    AdminNotSet = 2,
    /// Oracle address not set - call initialize first
    OracleNotSet = 3,
    /// Stake token not set - call initialize first
    StakeTokenNotSet = 4,
    /// No market exists with this id
    MarketNotFound = 5,
    /// Market description must not be empty
    InvalidDescription = 6,
    /// Markets need between 2 and 10 non-empty options
    InvalidOptions = 7,
    /// Resolution time must be after the current ledger
    InvalidResolutionTime = 8,
    /// Option index out of range for this market
    InvalidOption = 9,
    /// Stake amount must be greater than zero
    InvalidAmount = 10,
    /// Staking window has closed
    MarketClosed = 11,
    /// Market has already been resolved
    MarketResolved = 12,
    /// Resolution time has not been reached
    ResolutionTooEarly = 13,
    /// Market has not been resolved yet
    MarketNotResolved = 14,
    /// User has insufficient stake token balance
    InsufficientBalance = 15,
    /// User has already claimed for this market
    AlreadyClaimed = 16,
    /// User has no winning or refundable stake
    NothingToClaim = 17,
    /// Arithmetic overflow occurred
    Overflow = 18,
}
