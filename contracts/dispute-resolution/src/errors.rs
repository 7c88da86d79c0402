//! Contract error types for the dispute registry.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DisputeError {
    /// A dispute has already been filed for this market
    AlreadyDisputed = 1,
    /// No dispute exists for this market
    NotFound = 2,
    /// Arithmetic overflow occurred
    Overflow = 3,
}
