//! Error types for the Timelock Controller contract

use soroban_sdk::contracterror;

/// Timelock controller errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TimelockError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the current admin
    Unauthorized = 3,
    /// An action with the same digest is already pending
    AlreadyPending = 4,
    /// No pending action exists for the digest
    NotPending = 5,
    /// The action's eta has not been reached yet
    NotYetEligible = 6,
    /// The dispatched call aborted without a contract error; the pending
    /// action was not consumed
    DispatchFailed = 7,
    /// Buffer exceeds the maximum allowed delay
    InvalidBuffer = 8,
    /// Actions cannot target the timelock itself or hand it the admin role
    SelfCallNotAllowed = 9,
    /// Generic call value must not be negative
    InvalidCallValue = 10,
    /// Generic call carries value but no native token is configured
    NativeTokenNotSet = 11,
    /// Eta computation overflowed
    ArithmeticOverflow = 12,
}
