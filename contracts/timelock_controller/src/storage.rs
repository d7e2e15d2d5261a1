//! Storage keys and helpers for the Timelock Controller contract

use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::types::TimelockConfig;

const INSTANCE_TTL_THRESHOLD: u32 = 17_280;
const INSTANCE_TTL_EXTEND_TO: u32 = 518_400;
const PENDING_TTL_THRESHOLD: u32 = 17_280;
const PENDING_TTL_EXTEND_TO: u32 = 518_400;

/// Storage keys for the timelock contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Current admin (instance storage)
    Admin,
    /// Timelock configuration (instance storage)
    Config,
    /// Eta of a pending action, keyed by digest (persistent storage)
    PendingAction(BytesN<32>),
}

// ============================================================================
// Instance Helpers
// ============================================================================

/// Check if the contract is initialized
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Keep the instance entry (admin + config) alive
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_config(env: &Env) -> Option<TimelockConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &TimelockConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ============================================================================
// Pending Action Helpers
// ============================================================================

/// Get the eta of a pending action, extending the entry's TTL when present
pub fn get_pending_eta(env: &Env, digest: &BytesN<32>) -> Option<u64> {
    let key = DataKey::PendingAction(digest.clone());
    let eta = env.storage().persistent().get(&key);
    if eta.is_some() {
        bump_pending(env, &key);
    }
    eta
}

/// Record the eta of a pending action
pub fn set_pending_eta(env: &Env, digest: &BytesN<32>, eta: u64) {
    let key = DataKey::PendingAction(digest.clone());
    env.storage().persistent().set(&key, &eta);
    bump_pending(env, &key);
}

fn bump_pending(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PENDING_TTL_THRESHOLD, PENDING_TTL_EXTEND_TO);
}

/// Remove a pending action
pub fn remove_pending(env: &Env, digest: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&DataKey::PendingAction(digest.clone()));
}
