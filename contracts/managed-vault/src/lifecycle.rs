use cosmwasm_std::{Addr, Uint64, Uint128, Deps, DepsMut, Env, MessageInfo, Response};
use vault_adapters::token::{query_allowance, transfer_from_msgs};

use crate::{
    ContractError,
    event::{initial_deposit_event, deposit_event, withdraw_event, initiate_finalization_event, finalize_event},
    fees::{settle_management_fees, with_fee_settlement},
    msg::{TokenValue, BalanceSnapshot},
    state::{
        CONFIG, HOLDINGS, LIFECYCLE, LAST_FEE_CHECKPOINT, NOTICE_TIMEOUT, SWAP_FEE, SWAP_ENABLED, VaultConfig,
        Lifecycle, only_owner, only_owner_or_manager, only_initialized, owner, parse_token_values,
        check_balance_snapshot, sync_holdings, now
    },
    weights::{validate_weights, weights_from_amounts, set_static_weights_unchecked, freeze_weights}
};


// Initialization ***************************************************************************************************************

/// Seed the vault with its first deposit and set the initial weights.
/// 
/// NOTE: Only the owner may invoke this function, and only once. The tokens are pulled from the
/// owner (who must have granted the vault an allowance) and sent to the pool.
/// 
/// # Arguments:
/// * `amounts` - The token amounts to deposit (all must be non-zero).
/// * `weights` - Optional: the initial weights. If not given, the weights are proportional to `amounts`.
/// 
pub fn initial_deposit(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo,
    amounts: Vec<TokenValue>,
    weights: Option<Vec<TokenValue>>
) -> Result<Response, ContractError> {

    let owner = only_owner(&deps.as_ref(), &info)?;

    match LIFECYCLE.load(deps.storage)? {
        Lifecycle::Uninitialized => {},
        Lifecycle::Finalized => return Err(ContractError::VaultFinalized {}),
        _ => return Err(ContractError::VaultAlreadyInitialized {})
    }

    let config = CONFIG.load(deps.storage)?;

    let amounts = parse_token_values(&config.tokens, &amounts)?;
    if let Some(index) = amounts.iter().position(|amount| amount.is_zero()) {
        return Err(ContractError::InvalidZeroAmount {
            token: config.tokens[index].to_string()
        });
    }

    let weights = match weights {
        Some(weights) => parse_token_values(&config.tokens, &weights)?,
        None => weights_from_amounts(&amounts)?
    };
    validate_weights(&weights)?;

    check_allowances(&deps.as_ref(), env, &config, &owner, &amounts)?;

    HOLDINGS.save(deps.storage, &amounts)?;
    LAST_FEE_CHECKPOINT.save(deps.storage, &now(env).into())?;
    LIFECYCLE.save(deps.storage, &Lifecycle::Initialized)?;
    SWAP_ENABLED.save(deps.storage, &true)?;

    let weights_msg = set_static_weights_unchecked(deps, env, &config, weights.clone())?;

    let swap_fee = SWAP_FEE.load(deps.storage)?;

    Ok(
        Response::new()
            .add_messages(transfer_from_msgs(&config.tokens, &amounts, &owner, config.pool.addr())?)
            .add_message(weights_msg)
            .add_message(config.pool.set_swap_fee_percentage_msg(swap_fee)?)
            .add_message(config.pool.set_swap_enabled_msg(true)?)
            .add_event(initial_deposit_event(&amounts, &weights))
    )
}




// Deposits and Withdrawals *****************************************************************************************************

/// Deposit tokens into the vault.
/// 
/// Accrued management fees are settled first, and any ongoing gradual weight update is frozen at
/// its current value.
/// 
/// NOTE: Only the owner may invoke this function.
/// 
/// # Arguments:
/// * `amounts` - The token amounts to deposit.
/// * `snapshot` - Optional: the pool holdings the owner expects; the deposit fails if they have changed.
/// 
pub fn deposit(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo,
    amounts: Vec<TokenValue>,
    snapshot: Option<BalanceSnapshot>
) -> Result<Response, ContractError> {

    let owner = only_owner(&deps.as_ref(), &info)?;
    only_initialized(&deps.as_ref())?;

    let config = CONFIG.load(deps.storage)?;

    let amounts = parse_token_values(&config.tokens, &amounts)?;

    if let Some(snapshot) = snapshot {
        check_balance_snapshot(&deps.as_ref(), &config, &snapshot)?;
    }

    check_allowances(&deps.as_ref(), env, &config, &owner, &amounts)?;

    let fee_settlement = settle_management_fees(deps, env)?;

    let (weights, weights_msg) = freeze_weights(deps, env, &config)?;

    // Pool balances net of the fees just settled
    let holdings = HOLDINGS.load(deps.storage)?;
    let new_holdings = holdings.iter()
        .zip(&amounts)
        .map(|(holding, amount)| holding.checked_add(*amount))
        .collect::<Result<Vec<Uint128>, _>>()?;
    HOLDINGS.save(deps.storage, &new_holdings)?;

    let response = Response::new()
        .add_messages(transfer_from_msgs(&config.tokens, &amounts, &owner, config.pool.addr())?)
        .add_messages(weights_msg)
        .add_event(deposit_event(&amounts, &weights));

    Ok(with_fee_settlement(fee_settlement, response))
}


/// Withdraw tokens from the vault to the owner.
/// 
/// Accrued management fees are settled first, and any ongoing gradual weight update is frozen at
/// its current value. The amount of each token may not exceed the smaller of the vault holdings
/// and the allowance granted by the withdrawal validator.
/// 
/// NOTE: Only the owner may invoke this function.
/// 
/// # Arguments:
/// * `amounts` - The token amounts to withdraw.
/// * `snapshot` - Optional: the pool holdings the owner expects; the withdrawal fails if they have changed.
/// 
pub fn withdraw(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo,
    amounts: Vec<TokenValue>,
    snapshot: Option<BalanceSnapshot>
) -> Result<Response, ContractError> {

    let owner = only_owner(&deps.as_ref(), &info)?;
    only_initialized(&deps.as_ref())?;

    let config = CONFIG.load(deps.storage)?;

    let amounts = parse_token_values(&config.tokens, &amounts)?;

    if let Some(snapshot) = snapshot {
        check_balance_snapshot(&deps.as_ref(), &config, &snapshot)?;
    }

    let fee_settlement = settle_management_fees(deps, env)?;

    // Pool balances net of the fees just settled
    let holdings = HOLDINGS.load(deps.storage)?;
    let allowances = check_withdrawal_allowance(&deps.as_ref(), &config, &holdings, &amounts)?;

    let (weights, weights_msg) = freeze_weights(deps, env, &config)?;

    let new_holdings = holdings.iter()
        .zip(&amounts)
        .map(|(holding, amount)| holding.checked_sub(*amount))
        .collect::<Result<Vec<Uint128>, _>>()?;
    HOLDINGS.save(deps.storage, &new_holdings)?;

    let response = Response::new()
        .add_message(config.pool.withdraw_msg(amounts.clone(), &owner)?)
        .add_messages(weights_msg)
        .add_event(withdraw_event(&amounts, &allowances, &weights));

    Ok(with_fee_settlement(fee_settlement, response))
}


/// Verify that the owner has allowed the vault to pull `amounts` of every token.
fn check_allowances(
    deps: &Deps,
    env: &Env,
    config: &VaultConfig,
    owner: &Addr,
    amounts: &[Uint128]
) -> Result<(), ContractError> {

    config.tokens.iter()
        .zip(amounts)
        .filter(|(_, amount)| !amount.is_zero())
        .try_for_each(|(token, amount)| {

            let allowance = query_allowance(&deps.querier, token, owner, &env.contract.address)?;

            if allowance < *amount {
                return Err(ContractError::InsufficientAllowance {
                    token: token.to_string(),
                    allowance,
                    amount: *amount
                });
            }

            Ok(())
        })
}


/// Bound the withdrawal `amounts` by the vault `holdings` and the withdrawal validator allowance.
/// 
/// Returns the validator allowances.
/// 
pub fn check_withdrawal_allowance(
    deps: &Deps,
    config: &VaultConfig,
    holdings: &[Uint128],
    amounts: &[Uint128]
) -> Result<Vec<Uint128>, ContractError> {

    let allowances = config.validator.query_allowance(&deps.querier)?;

    if allowances.len() != config.tokens.len() {
        return Err(ContractError::InvalidValidatorResponse {
            expected: config.tokens.len() as u64,
            actual: allowances.len() as u64
        });
    }

    config.tokens.iter()
        .zip(holdings.iter().zip(&allowances))
        .zip(amounts)
        .try_for_each(|((token, (holding, allowance)), amount)| {

            let available = (*holding).min(*allowance);

            if *amount > available {
                return Err(ContractError::AmountExceedsAvailable {
                    token: token.to_string(),
                    amount: *amount,
                    available
                });
            }

            Ok(())
        })?;

    Ok(allowances)
}




// Finalization *****************************************************************************************************************

/// Start the finalization notice period. Accrued fees are settled and trading is disabled.
/// 
/// NOTE: Only the owner may invoke this function.
/// 
pub fn initiate_finalization(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo
) -> Result<Response, ContractError> {

    only_owner(&deps.as_ref(), &info)?;
    only_initialized(&deps.as_ref())?;

    let config = CONFIG.load(deps.storage)?;

    let fee_settlement = settle_management_fees(deps, env)?;

    let notice_timeout = Uint64::new(
        now(env).saturating_add(config.notice_period.u64())
    );

    NOTICE_TIMEOUT.save(deps.storage, &notice_timeout)?;
    LIFECYCLE.save(deps.storage, &Lifecycle::Finalizing)?;
    SWAP_ENABLED.save(deps.storage, &false)?;

    let response = Response::new()
        .add_message(config.pool.set_swap_enabled_msg(false)?)
        .add_event(initiate_finalization_event(notice_timeout));

    Ok(with_fee_settlement(fee_settlement, response))
}


/// Return all the tokens held by the pool to the owner once the notice period has elapsed.
/// 
/// NOTE: Both the owner and the manager may invoke this function.
/// 
pub fn finalize(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo
) -> Result<Response, ContractError> {

    only_owner_or_manager(&deps.as_ref(), &info)?;

    match LIFECYCLE.load(deps.storage)? {
        Lifecycle::Finalizing => {},
        Lifecycle::Finalized => return Err(ContractError::VaultFinalized {}),
        _ => return Err(ContractError::FinalizationNotInitiated {})
    }

    let notice_timeout = NOTICE_TIMEOUT.load(deps.storage)?;
    if now(env) < notice_timeout.u64() {
        return Err(ContractError::NoticeTimeoutNotElapsed { notice_timeout });
    }

    let config = CONFIG.load(deps.storage)?;
    let owner = owner(&deps.as_ref())?;

    // Everything the pool holds, including what swaps have added since the last sync
    let amounts = sync_holdings(deps, &config)?;

    HOLDINGS.save(deps.storage, &vec![Uint128::zero(); amounts.len()])?;
    LIFECYCLE.save(deps.storage, &Lifecycle::Finalized)?;

    Ok(
        Response::new()
            .add_message(config.pool.withdraw_msg(amounts.clone(), &owner)?)
            .add_event(finalize_event(&info.sender, &amounts))
    )
}
