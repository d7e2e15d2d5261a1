use soroban_sdk::{contractevent, Address, BytesN, Env};

use crate::types::Action;

#[contractevent(topics = ["ArenaXTimelock", "INIT"])]
struct TimelockInitialized {
    admin: Address,
    buffer: u64,
    timestamp: u64,
}

/// Carries the full descriptor: the registry only keeps the digest, so
/// off-chain tooling rebuilds pending actions from these records.
#[contractevent(topics = ["ArenaXTimelock", "SIGNAL"])]
struct ActionSignalled {
    digest: BytesN<32>,
    action: Action,
    eta: u64,
}

#[contractevent(topics = ["ArenaXTimelock", "EXECUTE"])]
struct ActionExecuted {
    digest: BytesN<32>,
    action: Action,
    timestamp: u64,
}

#[contractevent(topics = ["ArenaXTimelock", "CANCEL"])]
struct ActionCancelled {
    digest: BytesN<32>,
    eta: u64,
}

#[contractevent(topics = ["ArenaXTimelock", "ADMIN"])]
struct AdminUpdated {
    old: Address,
    new: Address,
}

pub fn emit_initialized(env: &Env, admin: &Address, buffer: u64, timestamp: u64) {
    TimelockInitialized {
        admin: admin.clone(),
        buffer,
        timestamp,
    }
    .publish(env);
}

pub fn emit_action_signalled(env: &Env, digest: &BytesN<32>, action: &Action, eta: u64) {
    ActionSignalled {
        digest: digest.clone(),
        action: action.clone(),
        eta,
    }
    .publish(env);
}

pub fn emit_action_executed(env: &Env, digest: &BytesN<32>, action: &Action, timestamp: u64) {
    ActionExecuted {
        digest: digest.clone(),
        action: action.clone(),
        timestamp,
    }
    .publish(env);
}

pub fn emit_action_cancelled(env: &Env, digest: &BytesN<32>, eta: u64) {
    ActionCancelled {
        digest: digest.clone(),
        eta,
    }
    .publish(env);
}

pub fn emit_admin_updated(env: &Env, old: &Address, new: &Address) {
    AdminUpdated {
        old: old.clone(),
        new: new.clone(),
    }
    .publish(env);
}
