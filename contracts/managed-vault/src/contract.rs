#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, to_json_binary};
use cw2::set_contract_version;

use crate::admin::{set_manager, transfer_ownership, accept_ownership, cancel_ownership_transfer, sweep};
use crate::error::ContractError;
use crate::fees::{claim_manager_fees, query_manager_fees};
use crate::lifecycle::{initial_deposit, deposit, withdraw, initiate_finalization, finalize};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{
    setup, not_finalized, query_config, query_owner, query_manager, query_lifecycle, query_holdings,
    query_pool_holdings, query_swap_enabled, query_notice_timeout
};
use crate::trading::{set_swap_fee, enable_trading_risking_arbitrage, enable_trading_with_weights, disable_trading, query_swap_fee};
use crate::weights::{update_weights_gradually, cancel_weight_updates, query_normalized_weights, query_weight_schedule};

// Version information
const CONTRACT_NAME: &str = "managed-vault";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");



// Instantiation **********************************************************************************

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    setup(
        &mut deps,
        info,
        msg.description,
        msg.tokens,
        msg.pool,
        msg.validator,
        msg.manager_whitelist,
        msg.manager,
        msg.management_fee,
        msg.notice_period,
        msg.swap_fee
    )
}



// Execution **************************************************************************************

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {

    // A finalized vault is inert
    not_finalized(&deps.as_ref())?;

    match msg {

        ExecuteMsg::InitialDeposit {
            amounts,
            weights
        } => initial_deposit(
            &mut deps,
            &env,
            info,
            amounts,
            weights
        ),

        ExecuteMsg::Deposit {
            amounts
        } => deposit(
            &mut deps,
            &env,
            info,
            amounts,
            None
        ),

        ExecuteMsg::DepositIfBalanceUnchanged {
            amounts,
            snapshot
        } => deposit(
            &mut deps,
            &env,
            info,
            amounts,
            Some(snapshot)
        ),

        ExecuteMsg::Withdraw {
            amounts
        } => withdraw(
            &mut deps,
            &env,
            info,
            amounts,
            None
        ),

        ExecuteMsg::WithdrawIfBalanceUnchanged {
            amounts,
            snapshot
        } => withdraw(
            &mut deps,
            &env,
            info,
            amounts,
            Some(snapshot)
        ),

        ExecuteMsg::InitiateFinalization {} => initiate_finalization(
            &mut deps,
            &env,
            info
        ),

        ExecuteMsg::Finalize {} => finalize(
            &mut deps,
            &env,
            info
        ),

        ExecuteMsg::UpdateWeightsGradually {
            weights,
            start_time,
            end_time
        } => update_weights_gradually(
            &mut deps,
            &env,
            info,
            weights,
            start_time,
            end_time
        ),

        ExecuteMsg::CancelWeightUpdates {} => cancel_weight_updates(
            &mut deps,
            &env,
            info
        ),

        ExecuteMsg::SetSwapFee {
            fee
        } => set_swap_fee(
            &mut deps,
            &env,
            info,
            fee
        ),

        ExecuteMsg::ClaimManagerFees {} => claim_manager_fees(
            &mut deps,
            &env,
            info
        ),

        ExecuteMsg::EnableTradingRiskingArbitrage {} => enable_trading_risking_arbitrage(
            &mut deps,
            info
        ),

        ExecuteMsg::EnableTradingWithWeights {
            weights
        } => enable_trading_with_weights(
            &mut deps,
            &env,
            info,
            weights
        ),

        ExecuteMsg::DisableTrading {} => disable_trading(
            &mut deps,
            info
        ),

        ExecuteMsg::SetManager {
            new_manager
        } => set_manager(
            &mut deps,
            &env,
            info,
            new_manager
        ),

        ExecuteMsg::TransferOwnership {
            new_owner
        } => transfer_ownership(
            &mut deps,
            info,
            new_owner
        ),

        ExecuteMsg::AcceptOwnership {} => accept_ownership(
            &mut deps,
            info
        ),

        ExecuteMsg::CancelOwnershipTransfer {} => cancel_ownership_transfer(
            &mut deps,
            info
        ),

        ExecuteMsg::Sweep {
            token,
            amount
        } => sweep(
            &mut deps,
            info,
            token,
            amount
        )
    }
}



// Query ******************************************************************************************

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Manager {} => to_json_binary(&query_manager(deps)?),
        QueryMsg::Lifecycle {} => to_json_binary(&query_lifecycle(deps)?),

        QueryMsg::Holdings {} => to_json_binary(&query_holdings(deps)?),
        QueryMsg::PoolHoldings {} => to_json_binary(&query_pool_holdings(deps)?),
        QueryMsg::NormalizedWeights {} => to_json_binary(&query_normalized_weights(deps, env)?),
        QueryMsg::WeightSchedule {} => to_json_binary(&query_weight_schedule(deps)?),

        QueryMsg::SwapFee {} => to_json_binary(&query_swap_fee(deps)?),
        QueryMsg::SwapEnabled {} => to_json_binary(&query_swap_enabled(deps)?),
        QueryMsg::NoticeTimeout {} => to_json_binary(&query_notice_timeout(deps)?),

        QueryMsg::ManagerFees {} => to_json_binary(&query_manager_fees(deps, env)?),
    }
}
