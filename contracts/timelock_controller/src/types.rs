//! Data types for the Timelock Controller contract

use soroban_sdk::{contracttype, Address, BytesN, Symbol, Val, Vec};

/// Upper bound on the buffer: 5 days in seconds
pub const MAX_BUFFER: u64 = 5 * 24 * 60 * 60;

/// Configuration for the timelock controller
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimelockConfig {
    /// Delay in seconds between signalling an action and its earliest execution.
    /// Fixed at initialization.
    pub buffer: u64,
    /// Asset used to forward the value of generic calls
    pub native_token: Option<Address>,
}

/// Result of signalling an action
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingAction {
    /// Identifier of the action in the registry
    pub digest: BytesN<32>,
    /// Timestamp at or after which the action may be executed
    pub eta: u64,
}

/// Transfer governance of an external component
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovTransfer {
    pub target: Address,
    pub gov: Address,
}

/// Rewire the price feed used by a vault
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceFeedUpdate {
    pub vault: Address,
    pub price_feed: Address,
}

/// Enable or disable a handler on an external component
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HandlerUpdate {
    pub target: Address,
    pub handler: Address,
    pub is_active: bool,
}

/// Whitelist (or reconfigure) a token on a vault
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultTokenConfig {
    pub vault: Address,
    pub token: Address,
    pub token_decimals: u32,
    pub token_weight: u32,
    pub min_profit_bps: u32,
    pub max_usdg_amount: i128,
    pub is_stable: bool,
    pub is_shortable: bool,
}

/// Associate a token with a price source on a price feed registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedTokenConfig {
    pub price_feed: Address,
    pub token: Address,
    pub feed_source: Address,
    pub price_decimals: u32,
    pub is_strict_stable: bool,
}

/// Arbitrary call with no interpretation by the controller
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawCall {
    /// Contract to invoke
    pub target: Address,
    /// Function to invoke on the target
    pub function: Symbol,
    /// Opaque call arguments
    pub args: Vec<Val>,
    /// Amount of the native token forwarded to the target before the call
    pub value: i128,
}

/// Descriptor of a delayed action.
///
/// Never persisted: the registry only stores its digest, so callers must
/// resupply the exact descriptor at execution time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Rotate the admin of this controller
    SetAdmin(Address),
    SetGov(GovTransfer),
    SetPriceFeed(PriceFeedUpdate),
    SetHandler(HandlerUpdate),
    VaultSetTokenConfig(VaultTokenConfig),
    FeedSetTokenConfig(FeedTokenConfig),
    Call(RawCall),
}
