#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128, to_json_binary};
use cw_storage_plus::Item;

use crate::msg::{InstantiateMsg, ExecuteMsg, QueryMsg, AllowanceResponse};


const TOKEN_COUNT: Item<u8> = Item::new("mock-validator-token-count");
const ALLOWANCES: Item<Option<Vec<Uint128>>> = Item::new("mock-validator-allowances");



#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg
) -> StdResult<Response> {

    TOKEN_COUNT.save(deps.storage, &msg.token_count)?;
    ALLOWANCES.save(deps.storage, &None)?;

    Ok(Response::new())

}



#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {

        ExecuteMsg::SetAllowances { amounts } => {
            ALLOWANCES.save(deps.storage, &amounts)?;
            Ok(Response::new().add_attribute("action", "set-allowances"))
        }

    }
}



#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Allowance {} => to_json_binary(&query_allowance(deps)?)
    }
}


fn query_allowance(deps: Deps) -> StdResult<AllowanceResponse> {

    let amounts = match ALLOWANCES.load(deps.storage)? {
        Some(amounts) => amounts,
        None => vec![Uint128::MAX; TOKEN_COUNT.load(deps.storage)? as usize]
    };

    Ok(AllowanceResponse { amounts })

}
