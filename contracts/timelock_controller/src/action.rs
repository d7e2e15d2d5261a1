//! Action identification and descriptor validation

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::error::TimelockError;
use crate::types::{Action, TimelockConfig};

/// Domain tag prepended to every encoded descriptor before hashing
const DIGEST_DOMAIN: &[u8] = b"arenax.timelock.action";

/// Derive the registry key of an action.
///
/// The XDR of a tagged enum starts with the variant name, so two actions of
/// different kinds never share an encoding.
pub fn derive_digest(env: &Env, action: &Action) -> BytesN<32> {
    let mut payload = Bytes::from_slice(env, DIGEST_DOMAIN);
    payload.append(&action.clone().to_xdr(env));
    env.crypto().sha256(&payload).into()
}

impl Action {
    /// External component the action is dispatched to, if any
    pub fn target(&self) -> Option<&Address> {
        match self {
            Action::SetAdmin(_) => None,
            Action::SetGov(transfer) => Some(&transfer.target),
            Action::SetPriceFeed(update) => Some(&update.vault),
            Action::SetHandler(update) => Some(&update.target),
            Action::VaultSetTokenConfig(config) => Some(&config.vault),
            Action::FeedSetTokenConfig(config) => Some(&config.price_feed),
            Action::Call(call) => Some(&call.target),
        }
    }

    /// Checks applied identically when signalling and executing
    pub fn validate(&self, env: &Env, config: &TimelockConfig) -> Result<(), TimelockError> {
        let this = env.current_contract_address();
        if self.target() == Some(&this) {
            return Err(TimelockError::SelfCallNotAllowed);
        }

        // The controller cannot authorize calls to itself, so it can never
        // act as its own admin
        if let Action::SetAdmin(admin) = self {
            if *admin == this {
                return Err(TimelockError::SelfCallNotAllowed);
            }
        }

        if let Action::Call(call) = self {
            if call.value < 0 {
                return Err(TimelockError::InvalidCallValue);
            }
            if call.value > 0 && config.native_token.is_none() {
                return Err(TimelockError::NativeTokenNotSet);
            }
        }

        Ok(())
    }
}
