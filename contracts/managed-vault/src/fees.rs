use cosmwasm_std::{Uint128, Deps, DepsMut, Env, MessageInfo, Response};
use fixed_point_math::{ONE, mul_down};

use crate::{
    ContractError,
    event::distribute_manager_fees_event,
    msg::TokenValuesResponse,
    state::{
        CONFIG, HOLDINGS, LAST_FEE_CHECKPOINT, LIFECYCLE, MANAGER, Lifecycle, only_manager, only_initialized,
        sync_holdings, query_pool_balances, to_token_values, now
    }
};


/// Compute the management fee owed on each of `holdings` after `elapsed` seconds.
/// 
/// The fee index (`management_fee * elapsed`) is capped at `ONE`, so at most the entire holdings
/// may be charged.
/// 
/// # Arguments:
/// * `holdings` - The vault holdings.
/// * `management_fee` - The per-second management fee (18 decimals).
/// * `elapsed` - Seconds since the last fee checkpoint.
/// 
pub fn compute_management_fees(
    holdings: &[Uint128],
    management_fee: Uint128,
    elapsed: u64
) -> Result<Vec<Uint128>, ContractError> {

    let fee_index = management_fee
        .saturating_mul(Uint128::from(elapsed))
        .min(ONE);

    holdings.iter()
        .map(|holding| Ok(mul_down(*holding, fee_index)?))
        .collect()
}


/// Compute the fees accrued since the last checkpoint, deduct them from the holdings and order
/// the pool to pay them to the current manager.
/// 
/// Fees only accrue while the vault is `Initialized`. For any other state this is a no-op.
/// Otherwise the holdings ledger is synced with the pool first, and fees are charged on the
/// synced balances.
/// 
/// NOTE: The returned response contains the fee payment message (if any fees are due) and must be
/// merged into the response of the calling action **before** any of its own messages.
/// 
pub fn settle_management_fees(
    deps: &mut DepsMut,
    env: &Env
) -> Result<Response, ContractError> {

    if LIFECYCLE.load(deps.storage)? != Lifecycle::Initialized {
        return Ok(Response::new());
    }

    let config = CONFIG.load(deps.storage)?;
    let holdings = sync_holdings(deps, &config)?;

    let current_time = now(env);
    let last_checkpoint = LAST_FEE_CHECKPOINT.load(deps.storage)?.u64();
    let elapsed = current_time.saturating_sub(last_checkpoint);

    LAST_FEE_CHECKPOINT.save(deps.storage, &current_time.into())?;

    if elapsed == 0 {
        return Ok(Response::new());
    }

    let fees = compute_management_fees(&holdings, config.management_fee, elapsed)?;

    if fees.iter().all(|fee| fee.is_zero()) {
        return Ok(Response::new());
    }

    let new_holdings = holdings.iter()
        .zip(&fees)
        .map(|(holding, fee)| holding.checked_sub(*fee))
        .collect::<Result<Vec<Uint128>, _>>()?;

    HOLDINGS.save(deps.storage, &new_holdings)?;

    let manager = MANAGER.load(deps.storage)?;

    Ok(
        Response::new()
            .add_message(config.pool.withdraw_msg(fees.clone(), &manager)?)
            .add_event(distribute_manager_fees_event(&manager, &fees))
    )
}


/// Merge the fee settlement response into `response`, placing the settlement messages first.
pub fn with_fee_settlement(
    settlement: Response,
    response: Response
) -> Response {
    settlement
        .add_submessages(response.messages)
        .add_attributes(response.attributes)
        .add_events(response.events)
}


/// Pay out the management fees accrued so far.
/// 
/// NOTE: Only the manager may invoke this function.
/// 
pub fn claim_manager_fees(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo
) -> Result<Response, ContractError> {

    only_manager(&deps.as_ref(), &info)?;
    only_initialized(&deps.as_ref())?;

    settle_management_fees(deps, env)
}



// Queries **********************************************************************************************************************

/// Preview the fees that would be paid if they were settled at the current block time.
pub fn query_manager_fees(
    deps: Deps,
    env: Env
) -> Result<TokenValuesResponse, ContractError> {

    let config = CONFIG.load(deps.storage)?;

    let fees = match LIFECYCLE.load(deps.storage)? {
        Lifecycle::Initialized => {
            let last_checkpoint = LAST_FEE_CHECKPOINT.load(deps.storage)?.u64();
            compute_management_fees(
                &query_pool_balances(&deps, &config)?,
                config.management_fee,
                now(&env).saturating_sub(last_checkpoint)
            )?
        },
        _ => vec![Uint128::zero(); config.tokens.len()]
    };

    Ok(TokenValuesResponse {
        values: to_token_values(&config.tokens, &fees)
    })
}
