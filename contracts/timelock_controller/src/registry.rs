//! Pending action registry.
//!
//! Maps an action digest to its eta. An absent key means the action is not
//! pending; a present key is either waiting (`now < eta`) or eligible
//! (`now >= eta`). Executed and cancelled actions are removed, so a digest
//! can be signalled again afterwards. Pending actions never expire.

use soroban_sdk::{BytesN, Env};

use crate::error::TimelockError;
use crate::storage;

/// Current ledger time in seconds
pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Record a new pending action with `eta = now + buffer`.
pub fn signal(env: &Env, digest: &BytesN<32>, buffer: u64) -> Result<u64, TimelockError> {
    if storage::get_pending_eta(env, digest).is_some() {
        return Err(TimelockError::AlreadyPending);
    }

    let eta = now(env)
        .checked_add(buffer)
        .ok_or(TimelockError::ArithmeticOverflow)?;
    storage::set_pending_eta(env, digest, eta);

    Ok(eta)
}

/// Remove a pending action regardless of its eta, returning the removed eta.
pub fn cancel(env: &Env, digest: &BytesN<32>) -> Result<u64, TimelockError> {
    let eta = storage::get_pending_eta(env, digest).ok_or(TimelockError::NotPending)?;
    storage::remove_pending(env, digest);
    Ok(eta)
}

pub fn eta_of(env: &Env, digest: &BytesN<32>) -> Option<u64> {
    storage::get_pending_eta(env, digest)
}

pub fn is_eligible(env: &Env, digest: &BytesN<32>) -> bool {
    match storage::get_pending_eta(env, digest) {
        Some(eta) => now(env) >= eta,
        None => false,
    }
}

/// Remove an eligible action ahead of dispatch, returning its eta.
pub fn consume(env: &Env, digest: &BytesN<32>) -> Result<u64, TimelockError> {
    let eta = storage::get_pending_eta(env, digest).ok_or(TimelockError::NotPending)?;
    if now(env) < eta {
        return Err(TimelockError::NotYetEligible);
    }

    storage::remove_pending(env, digest);
    Ok(eta)
}

/// Reinstate an action consumed by an execution whose dispatch failed.
pub fn restore(env: &Env, digest: &BytesN<32>, eta: u64) {
    storage::set_pending_eta(env, digest, eta);
}
