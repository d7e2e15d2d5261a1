//! Call dispatcher.
//!
//! Performs the effect of an eligible action exactly once. External calls
//! go through `try_invoke_contract`. A contract error raised by the target
//! is re-raised unchanged, which aborts the whole invocation. Any other
//! failure surfaces as `DispatchFailed`.

use soroban_sdk::{
    log, panic_with_error, xdr::ScErrorType, Address, Env, Error, IntoVal, Symbol, Val, Vec,
};

use crate::error::TimelockError;
use crate::events;
use crate::storage;
use crate::types::{Action, RawCall, TimelockConfig};

pub fn dispatch(
    env: &Env,
    action: &Action,
    config: &TimelockConfig,
) -> Result<(), TimelockError> {
    match action {
        Action::SetAdmin(new_admin) => {
            let old_admin = storage::get_admin(env).ok_or(TimelockError::NotInitialized)?;
            storage::set_admin(env, new_admin);
            events::emit_admin_updated(env, &old_admin, new_admin);
            Ok(())
        }
        Action::SetGov(transfer) => invoke(
            env,
            &transfer.target,
            &Symbol::new(env, "set_gov"),
            (transfer.gov.clone(),).into_val(env),
        ),
        Action::SetPriceFeed(update) => invoke(
            env,
            &update.vault,
            &Symbol::new(env, "set_price_feed"),
            (update.price_feed.clone(),).into_val(env),
        ),
        Action::SetHandler(update) => invoke(
            env,
            &update.target,
            &Symbol::new(env, "set_handler"),
            (update.handler.clone(), update.is_active).into_val(env),
        ),
        Action::VaultSetTokenConfig(token_config) => invoke(
            env,
            &token_config.vault,
            &Symbol::new(env, "set_token_config"),
            (
                token_config.token.clone(),
                token_config.token_decimals,
                token_config.token_weight,
                token_config.min_profit_bps,
                token_config.max_usdg_amount,
                token_config.is_stable,
                token_config.is_shortable,
            )
                .into_val(env),
        ),
        Action::FeedSetTokenConfig(token_config) => invoke(
            env,
            &token_config.price_feed,
            &Symbol::new(env, "set_token_config"),
            (
                token_config.token.clone(),
                token_config.feed_source.clone(),
                token_config.price_decimals,
                token_config.is_strict_stable,
            )
                .into_val(env),
        ),
        Action::Call(call) => {
            forward_value(env, call, config)?;
            invoke(env, &call.target, &call.function, call.args.clone())
        }
    }
}

fn invoke(
    env: &Env,
    target: &Address,
    function: &Symbol,
    args: Vec<Val>,
) -> Result<(), TimelockError> {
    match env.try_invoke_contract::<Val, Error>(target, function, args) {
        Ok(_) => Ok(()),
        Err(Ok(err)) if err.is_type(ScErrorType::Contract) => {
            log!(env, "timelock dispatch failed", target.clone(), function.clone(), err);
            panic_with_error!(env, err)
        }
        Err(Ok(err)) => {
            log!(env, "timelock dispatch aborted", target.clone(), function.clone(), err);
            Err(TimelockError::DispatchFailed)
        }
        Err(Err(_)) => {
            log!(env, "timelock dispatch aborted", target.clone(), function.clone());
            Err(TimelockError::DispatchFailed)
        }
    }
}

fn forward_value(
    env: &Env,
    call: &RawCall,
    config: &TimelockConfig,
) -> Result<(), TimelockError> {
    if call.value == 0 {
        return Ok(());
    }

    let native_token = config
        .native_token
        .as_ref()
        .ok_or(TimelockError::NativeTokenNotSet)?;

    invoke(
        env,
        native_token,
        &Symbol::new(env, "transfer"),
        (env.current_contract_address(), call.target.clone(), call.value).into_val(env),
    )
}
