use cosmwasm_std::{Addr, DepsMut, Deps, Event, MessageInfo, Response, Empty, Order, StdResult};
use cw_controllers::Admin;
use cw_storage_plus::Map;

use crate::{error::ContractError, event::{add_manager_event, remove_manager_event, set_owner_event}};


// Whitelist storage
const ADMIN: Admin = Admin::new("manager-whitelist-admin");
pub const MANAGERS: Map<&Addr, Empty> = Map::new("manager-whitelist-managers");


// Contract owner helpers

/// Get the current whitelist owner.
pub fn owner(
    deps: Deps
) -> Result<Option<Addr>, ContractError> {

    ADMIN.get(deps)
        .map_err(|err| err.into())

}

/// Set the whitelist owner.
/// 
/// !IMPORTANT: This function DOES NOT check the sender of the transaction.
/// 
/// # Arguments
/// 
/// * `account` - The new whitelist owner.
/// 
pub fn set_owner_unchecked(
    deps: DepsMut,
    account: Addr
) -> Result<Event, ContractError> {
    
    ADMIN.set(deps, Some(account.clone()))?;
    
    Ok(
        set_owner_event(account.to_string())
    )
}

/// Update the whitelist owner.
/// 
/// NOTE: This function checks that the sender of the transaction is the current owner.
/// 
/// # Arguments
/// 
/// * `account` - The new whitelist owner.
/// 
pub fn update_owner(
    deps: DepsMut,
    info: MessageInfo,
    account: String
) -> Result<Response, ContractError> {

    let account = deps.api.addr_validate(account.as_str())?;

    // ! The 'update' call also verifies whether the caller of the transaction is the current owner
    ADMIN.execute_update_admin::<Empty, Empty>(deps, info, Some(account.clone()))?;

    Ok(
        Response::new()
            .add_event(set_owner_event(account.to_string()))
    )

}


// Managers helpers

/// Whitelist a manager.
/// 
/// !IMPORTANT: This function DOES NOT check the sender of the transaction.
/// 
/// # Arguments
/// 
/// * `manager` - The account to whitelist.
/// 
pub fn add_manager_unchecked(
    deps: &mut DepsMut,
    manager: &str
) -> Result<Event, ContractError> {

    let manager = deps.api.addr_validate(manager)?;

    if MANAGERS.has(deps.storage, &manager) {
        return Err(ContractError::DuplicateManager { manager: manager.to_string() });
    }

    MANAGERS.save(deps.storage, &manager, &Empty {})?;

    Ok(add_manager_event(manager.to_string()))
}

/// Whitelist a manager.
/// 
/// NOTE: This function checks that the sender of the transaction is the current owner.
/// 
/// # Arguments
/// 
/// * `manager` - The account to whitelist.
/// 
pub fn add_manager(
    deps: &mut DepsMut,
    info: MessageInfo,
    manager: String
) -> Result<Response, ContractError> {

    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let event = add_manager_unchecked(deps, &manager)?;

    Ok(Response::new().add_event(event))
}

/// Remove a manager from the whitelist.
/// 
/// NOTE: This function checks that the sender of the transaction is the current owner.
/// 
/// # Arguments
/// 
/// * `manager` - The account to remove.
/// 
pub fn remove_manager(
    deps: &mut DepsMut,
    info: MessageInfo,
    manager: String
) -> Result<Response, ContractError> {

    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let manager = deps.api.addr_validate(&manager)?;

    if !MANAGERS.has(deps.storage, &manager) {
        return Err(ContractError::ManagerNotFound { manager: manager.to_string() });
    }

    MANAGERS.remove(deps.storage, &manager);

    Ok(
        Response::new()
            .add_event(remove_manager_event(manager.to_string()))
    )
}

/// Check whether an account is whitelisted.
pub fn is_manager(
    deps: Deps,
    address: String
) -> StdResult<bool> {

    let address = deps.api.addr_validate(&address)?;

    Ok(MANAGERS.has(deps.storage, &address))
}

/// Get all the whitelisted managers (ordered by address).
pub fn managers(
    deps: Deps
) -> StdResult<Vec<Addr>> {

    MANAGERS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect()
}
