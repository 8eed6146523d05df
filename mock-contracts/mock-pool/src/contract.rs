#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint64, Uint128, Addr, to_json_binary};
use cw2::set_contract_version;
use vault_adapters::token::{query_balance, transfer_from_msgs, transfer_msgs};

use crate::error::ContractError;
use crate::msg::{InstantiateMsg, ExecuteMsg, QueryMsg, HoldingsResponse, NormalizedWeightsResponse, WeightUpdateResponse, SwapFeePercentageResponse, SwapEnabledResponse, PoolOwnerResponse};
use crate::state::{CREATOR, OWNER, TOKENS, WEIGHT_UPDATE, SWAP_FEE, SWAP_ENABLED, WeightUpdate};

// Version information
const CONTRACT_NAME: &str = "mock-pool";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");



#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg
) -> Result<Response, ContractError> {

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let tokens = msg.tokens
        .iter()
        .map(|token| deps.api.addr_validate(token))
        .collect::<StdResult<Vec<Addr>>>()?;

    CREATOR.save(deps.storage, &info.sender)?;
    OWNER.save(deps.storage, &None)?;
    TOKENS.save(deps.storage, &tokens)?;
    WEIGHT_UPDATE.save(deps.storage, &None)?;
    SWAP_FEE.save(deps.storage, &msg.swap_fee)?;
    SWAP_ENABLED.save(deps.storage, &false)?;

    Ok(Response::new())

}



#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {

    match msg {

        ExecuteMsg::SetOwner { owner } => execute_set_owner(deps, info, owner),

        ExecuteMsg::SimulateSwap {
            amounts_in,
            amounts_out
        } => execute_simulate_swap(deps, env, info, amounts_in, amounts_out),

        ExecuteMsg::UpdateWeightsGradually {
            start_time,
            end_time,
            end_weights
        } => {
            only_owner(&deps, &info)?;
            execute_update_weights_gradually(deps, start_time, end_time, end_weights)
        },

        ExecuteMsg::SetSwapFeePercentage { fee } => {
            only_owner(&deps, &info)?;
            SWAP_FEE.save(deps.storage, &fee)?;
            Ok(Response::new().add_attribute("action", "set-swap-fee-percentage"))
        },

        ExecuteMsg::SetSwapEnabled { enabled } => {
            only_owner(&deps, &info)?;
            SWAP_ENABLED.save(deps.storage, &enabled)?;
            Ok(Response::new().add_attribute("action", "set-swap-enabled"))
        },

        ExecuteMsg::Withdraw {
            amounts,
            recipient
        } => {
            only_owner(&deps, &info)?;
            execute_withdraw(deps, amounts, recipient)
        }
    }
}


fn only_owner(deps: &DepsMut, info: &MessageInfo) -> Result<(), ContractError> {

    if OWNER.load(deps.storage)? != Some(info.sender.clone()) {
        return Err(ContractError::Unauthorized {});
    }

    Ok(())
}


fn execute_set_owner(
    deps: DepsMut,
    info: MessageInfo,
    owner: String
) -> Result<Response, ContractError> {

    if info.sender != CREATOR.load(deps.storage)? {
        return Err(ContractError::Unauthorized {});
    }

    if OWNER.load(deps.storage)?.is_some() {
        return Err(ContractError::OwnerAlreadySet {});
    }

    OWNER.save(deps.storage, &Some(deps.api.addr_validate(&owner)?))?;

    Ok(Response::new().add_attribute("action", "set-owner"))

}


fn execute_update_weights_gradually(
    deps: DepsMut,
    start_time: Uint64,
    end_time: Uint64,
    end_weights: Vec<Uint128>
) -> Result<Response, ContractError> {

    if end_weights.len() != TOKENS.load(deps.storage)?.len() {
        return Err(ContractError::InvalidParameters { reason: "Invalid weights count.".to_string() });
    }

    WEIGHT_UPDATE.save(
        deps.storage,
        &Some(WeightUpdate { start_time, end_time, end_weights })
    )?;

    Ok(Response::new().add_attribute("action", "update-weights-gradually"))

}


fn execute_withdraw(
    deps: DepsMut,
    amounts: Vec<Uint128>,
    recipient: String
) -> Result<Response, ContractError> {

    let tokens = TOKENS.load(deps.storage)?;
    if amounts.len() != tokens.len() {
        return Err(ContractError::InvalidParameters { reason: "Invalid amounts count.".to_string() });
    }

    let recipient = deps.api.addr_validate(&recipient)?;

    Ok(
        Response::new()
            .add_messages(transfer_msgs(&tokens, &amounts, &recipient)?)
            .add_attribute("action", "withdraw")
    )

}


fn execute_simulate_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amounts_in: Vec<Uint128>,
    amounts_out: Vec<Uint128>
) -> Result<Response, ContractError> {

    if !SWAP_ENABLED.load(deps.storage)? {
        return Err(ContractError::SwapsDisabled {});
    }

    let tokens = TOKENS.load(deps.storage)?;
    if amounts_in.len() != tokens.len() || amounts_out.len() != tokens.len() {
        return Err(ContractError::InvalidParameters { reason: "Invalid amounts count.".to_string() });
    }

    Ok(
        Response::new()
            .add_messages(transfer_from_msgs(&tokens, &amounts_in, &info.sender, &env.contract.address)?)
            .add_messages(transfer_msgs(&tokens, &amounts_out, &info.sender)?)
            .add_attribute("action", "simulate-swap")
    )

}



#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Holdings {} => to_json_binary(&query_holdings(deps, env)?),
        QueryMsg::NormalizedWeights {} => to_json_binary(&query_normalized_weights(deps)?),
        QueryMsg::WeightUpdate {} => to_json_binary(&WeightUpdateResponse {
            update: WEIGHT_UPDATE.load(deps.storage)?
        }),
        QueryMsg::SwapFeePercentage {} => to_json_binary(&SwapFeePercentageResponse {
            fee: SWAP_FEE.load(deps.storage)?
        }),
        QueryMsg::SwapEnabled {} => to_json_binary(&SwapEnabledResponse {
            enabled: SWAP_ENABLED.load(deps.storage)?
        }),
        QueryMsg::Owner {} => to_json_binary(&PoolOwnerResponse {
            owner: OWNER.load(deps.storage)?
        })
    }
}


fn query_holdings(deps: Deps, env: Env) -> StdResult<HoldingsResponse> {

    let holdings = TOKENS.load(deps.storage)?
        .iter()
        .map(|token| query_balance(&deps.querier, token, &env.contract.address))
        .collect::<StdResult<Vec<Uint128>>>()?;

    Ok(HoldingsResponse { holdings })

}


// NOTE: The mock does not interpolate, it reports the target of the last weight instruction.
fn query_normalized_weights(deps: Deps) -> StdResult<NormalizedWeightsResponse> {

    Ok(
        NormalizedWeightsResponse {
            weights: WEIGHT_UPDATE.load(deps.storage)?
                .map(|update| update.end_weights)
                .unwrap_or_default()
        }
    )

}
