#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, to_json_binary};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, IsManagerResponse, ManagersResponse, OwnerResponse};
use crate::state::{set_owner_unchecked, add_manager_unchecked, add_manager, remove_manager, update_owner, owner, is_manager, managers};

// Version information
const CONTRACT_NAME: &str = "manager-whitelist";
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

    let set_owner_event = set_owner_unchecked(deps.branch(), info.sender)?;

    let add_manager_events = msg.managers
        .iter()
        .map(|manager| add_manager_unchecked(&mut deps, manager))
        .collect::<Result<Vec<_>, ContractError>>()?;

    Ok(
        Response::new()
            .add_event(set_owner_event)
            .add_events(add_manager_events)
    )
}



// Execution **************************************************************************************

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {

    match msg {
        ExecuteMsg::AddManager {
            manager
        } => add_manager(
            &mut deps,
            info,
            manager
        ),

        ExecuteMsg::RemoveManager {
            manager
        } => remove_manager(
            &mut deps,
            info,
            manager
        ),

        ExecuteMsg::TransferOwnership {
            new_owner
        } => update_owner(
            deps,
            info,
            new_owner
        )
    }
}



// Query ******************************************************************************************

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsManager { address } => to_json_binary(&query_is_manager(deps, address)?),
        QueryMsg::Managers {} => to_json_binary(&query_managers(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?)
    }
}


/// Query whether an account is whitelisted.
fn query_is_manager(deps: Deps, address: String) -> StdResult<IsManagerResponse> {
    Ok(
        IsManagerResponse {
            is_manager: is_manager(deps, address)?
        }
    )
}


/// Query all the whitelisted managers.
fn query_managers(deps: Deps) -> StdResult<ManagersResponse> {
    Ok(
        ManagersResponse {
            managers: managers(deps)?
        }
    )
}


/// Query the whitelist owner.
fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    Ok(
        OwnerResponse {
            owner: owner(deps)?
        }
    )
}
