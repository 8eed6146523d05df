use cosmwasm_std::{Uint128, Deps, DepsMut, Env, MessageInfo, Response};

use crate::{
    ContractError,
    event::{set_swap_fee_event, set_swap_enabled_event},
    msg::{TokenValue, SwapFeeResponse},
    state::{
        CONFIG, SWAP_FEE, LAST_SWAP_FEE_CHANGE, SWAP_ENABLED, MAX_SWAP_FEE_CHANGE, SWAP_FEE_COOLDOWN_PERIOD,
        only_owner, only_manager, only_owner_or_manager, only_initialized, check_swap_fee_bounds,
        parse_token_values, now
    },
    weights::{validate_weights, set_static_weights_unchecked}
};


/// Modify the pool swap fee.
/// 
/// NOTE: Only the manager may invoke this function. Consecutive changes must be at least
/// `SWAP_FEE_COOLDOWN_PERIOD` seconds apart and may not move the fee by more than
/// `MAX_SWAP_FEE_CHANGE`.
/// 
/// # Arguments:
/// * `fee` - The new swap fee (18 decimals).
/// 
pub fn set_swap_fee(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo,
    fee: Uint128
) -> Result<Response, ContractError> {

    only_manager(&deps.as_ref(), &info)?;
    only_initialized(&deps.as_ref())?;

    let current_time = now(env);

    if let Some(last_change) = LAST_SWAP_FEE_CHANGE.may_load(deps.storage)? {
        let next_allowed = last_change.u64().saturating_add(SWAP_FEE_COOLDOWN_PERIOD);
        if current_time < next_allowed {
            return Err(ContractError::SwapFeeCooldown { next_allowed: next_allowed.into() });
        }
    }

    let current_fee = SWAP_FEE.load(deps.storage)?;
    let change = current_fee.abs_diff(fee);
    if change > MAX_SWAP_FEE_CHANGE {
        return Err(ContractError::SwapFeeChangeTooLarge {
            change,
            max: MAX_SWAP_FEE_CHANGE
        });
    }

    check_swap_fee_bounds(fee)?;

    SWAP_FEE.save(deps.storage, &fee)?;
    LAST_SWAP_FEE_CHANGE.save(deps.storage, &current_time.into())?;

    let config = CONFIG.load(deps.storage)?;

    Ok(
        Response::new()
            .add_message(config.pool.set_swap_fee_percentage_msg(fee)?)
            .add_event(set_swap_fee_event(fee))
    )
}


/// Set the trading state of the vault and order the pool to apply it.
/// 
/// !IMPORTANT: This function DOES NOT check the sender of the transaction.
/// 
pub fn set_swap_enabled_unchecked(
    deps: &mut DepsMut,
    enabled: bool
) -> Result<Response, ContractError> {

    let config = CONFIG.load(deps.storage)?;

    SWAP_ENABLED.save(deps.storage, &enabled)?;

    Ok(
        Response::new()
            .add_message(config.pool.set_swap_enabled_msg(enabled)?)
            .add_event(set_swap_enabled_event(enabled, None))
    )
}


/// Enable trading with the current pool weights, which may be stale relative to market prices.
/// 
/// NOTE: Only the owner may invoke this function.
/// 
pub fn enable_trading_risking_arbitrage(
    deps: &mut DepsMut,
    info: MessageInfo
) -> Result<Response, ContractError> {

    only_owner(&deps.as_ref(), &info)?;
    only_initialized(&deps.as_ref())?;

    set_swap_enabled_unchecked(deps, true)
}


/// Set new static weights and enable trading.
/// 
/// NOTE: Only the owner may invoke this function, and only while trading is disabled.
/// 
/// # Arguments:
/// * `weights` - The weights to apply (must sum to `ONE`).
/// 
pub fn enable_trading_with_weights(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo,
    weights: Vec<TokenValue>
) -> Result<Response, ContractError> {

    only_owner(&deps.as_ref(), &info)?;
    only_initialized(&deps.as_ref())?;

    if SWAP_ENABLED.load(deps.storage)? {
        return Err(ContractError::TradingAlreadyEnabled {});
    }

    let config = CONFIG.load(deps.storage)?;

    let weights = parse_token_values(&config.tokens, &weights)?;
    validate_weights(&weights)?;

    let weights_msg = set_static_weights_unchecked(deps, env, &config, weights.clone())?;

    SWAP_ENABLED.save(deps.storage, &true)?;

    Ok(
        Response::new()
            .add_message(weights_msg)
            .add_message(config.pool.set_swap_enabled_msg(true)?)
            .add_event(set_swap_enabled_event(true, Some(&weights)))
    )
}


/// Disable trading on the pool.
/// 
/// NOTE: Both the owner and the manager may invoke this function.
/// 
pub fn disable_trading(
    deps: &mut DepsMut,
    info: MessageInfo
) -> Result<Response, ContractError> {

    only_owner_or_manager(&deps.as_ref(), &info)?;
    only_initialized(&deps.as_ref())?;

    set_swap_enabled_unchecked(deps, false)
}



// Queries **********************************************************************************************************************

pub fn query_swap_fee(deps: Deps) -> Result<SwapFeeResponse, ContractError> {
    Ok(SwapFeeResponse {
        fee: SWAP_FEE.load(deps.storage)?,
        last_change: LAST_SWAP_FEE_CHANGE.may_load(deps.storage)?
    })
}
