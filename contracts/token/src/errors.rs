//! Contract error types for the Prediction Market Token.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Admin address not set - call initialize first
    NotInitialized = 2,
    /// Amount must be greater than zero
    InvalidAmount = 3,
    /// Sender has insufficient balance
    InsufficientBalance = 4,
    /// Arithmetic overflow occurred
    Overflow = 5,
}
