#![no_std]

//! # Timelock Controller
//!
//! A Soroban smart contract that gates privileged protocol configuration
//! behind a fixed delay. The admin first *signals* an action, the action
//! waits out the buffer, and only then can the admin *execute* it. This
//! removes the window for a compromised admin key to make instantaneous
//! unilateral changes to the vault, its price feeds or its handlers.
//!
//! ## Features
//! - Single admin, one buffer fixed at initialization (capped at `MAX_BUFFER`)
//! - Actions identified by a SHA-256 digest of their full descriptor; only
//!   the digest and its eta are stored
//! - Typed actions: governance transfer, price feed rewiring, handler
//!   whitelisting, vault token config, price feed token config
//! - Generic call escape hatch with optional native token value
//! - Admin rotation routed through the same delay
//!
//! ## Security
//! - Every mutating entry point checks the caller before anything else
//! - Execution consumes the pending entry before dispatch; a failed
//!   dispatch restores it and fails the whole call
//! - Actions cannot target the controller itself or make it the admin
//! - A contract error raised by a dispatched call is passed through unchanged
//! - Duplicate signals are rejected instead of resetting the eta

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Val, Vec};

mod action;
mod dispatch;
mod error;
mod events;
mod registry;
mod storage;
mod types;

pub use action::derive_digest;
pub use error::TimelockError;
pub use types::{
    Action, FeedTokenConfig, GovTransfer, HandlerUpdate, PendingAction, PriceFeedUpdate, RawCall,
    TimelockConfig, VaultTokenConfig, MAX_BUFFER,
};

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct TimelockController;

#[contractimpl]
impl TimelockController {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the timelock with its admin and buffer
    ///
    /// # Arguments
    /// * `admin` - Sole principal allowed to signal, execute and cancel
    /// * `buffer` - Delay in seconds applied to every action, fixed for the
    ///   lifetime of the contract
    /// * `native_token` - Asset forwarded as the value of generic calls
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Contract has already been initialized
    /// * `InvalidBuffer` - Buffer exceeds `MAX_BUFFER`
    pub fn initialize(
        env: Env,
        admin: Address,
        buffer: u64,
        native_token: Option<Address>,
    ) -> Result<(), TimelockError> {
        if storage::is_initialized(&env) {
            return Err(TimelockError::AlreadyInitialized);
        }
        if buffer > MAX_BUFFER {
            return Err(TimelockError::InvalidBuffer);
        }

        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_config(
            &env,
            &TimelockConfig {
                buffer,
                native_token,
            },
        );
        storage::bump_instance(&env);

        events::emit_initialized(&env, &admin, buffer, registry::now(&env));

        Ok(())
    }

    // ========================================================================
    // Admin Rotation
    // ========================================================================

    /// Signal handing the controller to `admin`
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the admin
    /// * `SelfCallNotAllowed` - `admin` is the controller itself
    /// * `AlreadyPending` - The same rotation is already pending
    pub fn signal_set_admin(
        env: Env,
        caller: Address,
        admin: Address,
    ) -> Result<PendingAction, TimelockError> {
        signal_action(&env, &caller, Action::SetAdmin(admin))
    }

    /// Hand the controller to a new admin once the signalled delay has passed
    pub fn set_admin(env: Env, caller: Address, admin: Address) -> Result<(), TimelockError> {
        execute_action(&env, &caller, Action::SetAdmin(admin))
    }

    // ========================================================================
    // Governance Transfer
    // ========================================================================

    /// Signal moving governance of `target` to `gov`
    pub fn signal_set_gov(
        env: Env,
        caller: Address,
        target: Address,
        gov: Address,
    ) -> Result<PendingAction, TimelockError> {
        signal_action(&env, &caller, Action::SetGov(GovTransfer { target, gov }))
    }

    /// Call `set_gov(gov)` on `target`
    ///
    /// # Errors
    /// * `NotPending` - No matching action was signalled
    /// * `NotYetEligible` - The buffer has not elapsed
    /// * `DispatchFailed` - The call aborted; the action stays pending
    pub fn set_gov(
        env: Env,
        caller: Address,
        target: Address,
        gov: Address,
    ) -> Result<(), TimelockError> {
        execute_action(&env, &caller, Action::SetGov(GovTransfer { target, gov }))
    }

    // ========================================================================
    // Price Feed Rewiring
    // ========================================================================

    /// Signal pointing `vault` at a new price feed
    pub fn signal_set_price_feed(
        env: Env,
        caller: Address,
        vault: Address,
        price_feed: Address,
    ) -> Result<PendingAction, TimelockError> {
        signal_action(
            &env,
            &caller,
            Action::SetPriceFeed(PriceFeedUpdate { vault, price_feed }),
        )
    }

    /// Call `set_price_feed(price_feed)` on `vault`
    pub fn set_price_feed(
        env: Env,
        caller: Address,
        vault: Address,
        price_feed: Address,
    ) -> Result<(), TimelockError> {
        execute_action(
            &env,
            &caller,
            Action::SetPriceFeed(PriceFeedUpdate { vault, price_feed }),
        )
    }

    // ========================================================================
    // Handler Whitelisting
    // ========================================================================

    /// Signal enabling or disabling `handler` on `target`
    pub fn signal_set_handler(
        env: Env,
        caller: Address,
        target: Address,
        handler: Address,
        is_active: bool,
    ) -> Result<PendingAction, TimelockError> {
        signal_action(
            &env,
            &caller,
            Action::SetHandler(HandlerUpdate {
                target,
                handler,
                is_active,
            }),
        )
    }

    /// Call `set_handler(handler, is_active)` on `target`
    pub fn set_handler(
        env: Env,
        caller: Address,
        target: Address,
        handler: Address,
        is_active: bool,
    ) -> Result<(), TimelockError> {
        execute_action(
            &env,
            &caller,
            Action::SetHandler(HandlerUpdate {
                target,
                handler,
                is_active,
            }),
        )
    }

    // ========================================================================
    // Vault Token Configuration
    // ========================================================================

    /// Signal a token whitelist entry on `vault`
    ///
    /// # Arguments
    /// * `token_decimals` - Decimals of the token
    /// * `token_weight` - Target weight of the token in the pool
    /// * `min_profit_bps` - Minimum profit before a position may be closed at a gain
    /// * `max_usdg_amount` - Cap on debt issued against the token
    /// * `is_stable` - Whether the token is a stablecoin
    /// * `is_shortable` - Whether shorts may be opened on the token
    pub fn signal_vault_set_token_config(
        env: Env,
        caller: Address,
        vault: Address,
        token: Address,
        token_decimals: u32,
        token_weight: u32,
        min_profit_bps: u32,
        max_usdg_amount: i128,
        is_stable: bool,
        is_shortable: bool,
    ) -> Result<PendingAction, TimelockError> {
        signal_action(
            &env,
            &caller,
            Action::VaultSetTokenConfig(VaultTokenConfig {
                vault,
                token,
                token_decimals,
                token_weight,
                min_profit_bps,
                max_usdg_amount,
                is_stable,
                is_shortable,
            }),
        )
    }

    /// Call `set_token_config(...)` on `vault` with the signalled parameters
    pub fn vault_set_token_config(
        env: Env,
        caller: Address,
        vault: Address,
        token: Address,
        token_decimals: u32,
        token_weight: u32,
        min_profit_bps: u32,
        max_usdg_amount: i128,
        is_stable: bool,
        is_shortable: bool,
    ) -> Result<(), TimelockError> {
        execute_action(
            &env,
            &caller,
            Action::VaultSetTokenConfig(VaultTokenConfig {
                vault,
                token,
                token_decimals,
                token_weight,
                min_profit_bps,
                max_usdg_amount,
                is_stable,
                is_shortable,
            }),
        )
    }

    // ========================================================================
    // Price Feed Token Configuration
    // ========================================================================

    /// Signal a token entry on `price_feed`
    pub fn signal_feed_set_token_config(
        env: Env,
        caller: Address,
        price_feed: Address,
        token: Address,
        feed_source: Address,
        price_decimals: u32,
        is_strict_stable: bool,
    ) -> Result<PendingAction, TimelockError> {
        signal_action(
            &env,
            &caller,
            Action::FeedSetTokenConfig(FeedTokenConfig {
                price_feed,
                token,
                feed_source,
                price_decimals,
                is_strict_stable,
            }),
        )
    }

    /// Call `set_token_config(token, feed_source, price_decimals, is_strict_stable)`
    /// on `price_feed`
    pub fn feed_set_token_config(
        env: Env,
        caller: Address,
        price_feed: Address,
        token: Address,
        feed_source: Address,
        price_decimals: u32,
        is_strict_stable: bool,
    ) -> Result<(), TimelockError> {
        execute_action(
            &env,
            &caller,
            Action::FeedSetTokenConfig(FeedTokenConfig {
                price_feed,
                token,
                feed_source,
                price_decimals,
                is_strict_stable,
            }),
        )
    }

    // ========================================================================
    // Generic Call
    // ========================================================================

    /// Signal an arbitrary call on `target`
    ///
    /// # Arguments
    /// * `function` - Function to invoke on the target
    /// * `args` - Call arguments, passed through unchanged
    /// * `value` - Amount of the native token sent to the target first
    ///
    /// # Errors
    /// * `InvalidCallValue` - Value is negative
    /// * `NativeTokenNotSet` - Value is positive but no native token is configured
    pub fn signal_call(
        env: Env,
        caller: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        value: i128,
    ) -> Result<PendingAction, TimelockError> {
        signal_action(
            &env,
            &caller,
            Action::Call(RawCall {
                target,
                function,
                args,
                value,
            }),
        )
    }

    /// Invoke the signalled call, forwarding `value` of the native token first
    pub fn execute_call(
        env: Env,
        caller: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        value: i128,
    ) -> Result<(), TimelockError> {
        execute_action(
            &env,
            &caller,
            Action::Call(RawCall {
                target,
                function,
                args,
                value,
            }),
        )
    }

    // ========================================================================
    // Cancellation
    // ========================================================================

    /// Drop a pending action, whether or not its eta has passed
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the admin
    /// * `NotPending` - No action is pending under `digest`
    pub fn cancel_action(
        env: Env,
        caller: Address,
        digest: BytesN<32>,
    ) -> Result<(), TimelockError> {
        require_admin(&env, &caller)?;

        let eta = registry::cancel(&env, &digest)?;
        storage::bump_instance(&env);

        events::emit_action_cancelled(&env, &digest, eta);

        Ok(())
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    /// Get the current admin
    pub fn admin(env: Env) -> Result<Address, TimelockError> {
        storage::get_admin(&env).ok_or(TimelockError::NotInitialized)
    }

    /// Get the buffer in seconds
    pub fn buffer(env: Env) -> Result<u64, TimelockError> {
        Ok(load_config(&env)?.buffer)
    }

    /// Get the timelock configuration
    pub fn get_config(env: Env) -> Result<TimelockConfig, TimelockError> {
        load_config(&env)
    }

    /// Eta of a pending action, `None` when nothing is pending under `digest`
    pub fn get_action_eta(env: Env, digest: BytesN<32>) -> Option<u64> {
        registry::eta_of(&env, &digest)
    }

    /// Whether the action under `digest` is pending and its eta has passed
    pub fn is_action_eligible(env: Env, digest: BytesN<32>) -> bool {
        registry::is_eligible(&env, &digest)
    }

    /// Digest under which `action` is (or would be) registered
    pub fn action_digest(env: Env, action: Action) -> BytesN<32> {
        derive_digest(&env, &action)
    }
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn load_config(env: &Env) -> Result<TimelockConfig, TimelockError> {
    storage::get_config(env).ok_or(TimelockError::NotInitialized)
}

/// Authorization guard shared by every mutating entry point
fn require_admin(env: &Env, caller: &Address) -> Result<(), TimelockError> {
    let admin = storage::get_admin(env).ok_or(TimelockError::NotInitialized)?;

    caller.require_auth();

    if *caller != admin {
        return Err(TimelockError::Unauthorized);
    }
    Ok(())
}

fn signal_action(
    env: &Env,
    caller: &Address,
    action: Action,
) -> Result<PendingAction, TimelockError> {
    require_admin(env, caller)?;

    let config = load_config(env)?;
    action.validate(env, &config)?;

    let digest = derive_digest(env, &action);
    let eta = registry::signal(env, &digest, config.buffer)?;
    storage::bump_instance(env);

    events::emit_action_signalled(env, &digest, &action, eta);

    Ok(PendingAction { digest, eta })
}

fn execute_action(env: &Env, caller: &Address, action: Action) -> Result<(), TimelockError> {
    require_admin(env, caller)?;

    let config = load_config(env)?;
    action.validate(env, &config)?;

    let digest = derive_digest(env, &action);

    // Consume before the external call; put the entry back if it fails.
    // A contract error from the target aborts the invocation instead, and
    // the host reverts the consume with everything else.
    let eta = registry::consume(env, &digest)?;
    if let Err(err) = dispatch::dispatch(env, &action, &config) {
        registry::restore(env, &digest, eta);
        return Err(err);
    }
    storage::bump_instance(env);

    events::emit_action_executed(env, &digest, &action, registry::now(env));

    Ok(())
}
