use cosmwasm_std::{Uint128, DepsMut, Env, MessageInfo, Response};
use vault_adapters::token::transfer_msgs;

use crate::{
    ContractError,
    event::{set_manager_event, transfer_ownership_event, accept_ownership_event, cancel_ownership_transfer_event, sweep_event},
    fees::{settle_management_fees, with_fee_settlement},
    state::{
        CONFIG, OWNER, PENDING_OWNER, MANAGER, owner, only_owner, validate_address, validate_manager
    }
};


// Manager **********************************************************************************************************************

/// Replace the vault manager. Fees accrued up to now are paid to the outgoing manager.
/// 
/// NOTE: Only the owner may invoke this function.
/// 
/// # Arguments:
/// * `new_manager` - The new manager (must be whitelisted and must not be the owner).
/// 
pub fn set_manager(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo,
    new_manager: String
) -> Result<Response, ContractError> {

    let owner = only_owner(&deps.as_ref(), &info)?;

    let config = CONFIG.load(deps.storage)?;
    let new_manager = validate_manager(&deps.as_ref(), &config.manager_whitelist, &owner, &new_manager)?;

    // Settle with the outgoing manager before the switch
    let fee_settlement = settle_management_fees(deps, env)?;

    MANAGER.save(deps.storage, &new_manager)?;

    Ok(with_fee_settlement(
        fee_settlement,
        Response::new().add_event(set_manager_event(&new_manager))
    ))
}




// Ownership ********************************************************************************************************************

/// Offer the vault ownership to `new_owner`. The transfer is only effective once accepted.
/// 
/// NOTE: Only the owner may invoke this function. Any previous offer is replaced.
/// 
pub fn transfer_ownership(
    deps: &mut DepsMut,
    info: MessageInfo,
    new_owner: String
) -> Result<Response, ContractError> {

    let owner = only_owner(&deps.as_ref(), &info)?;

    let candidate = validate_address(deps.api, &new_owner)?;

    PENDING_OWNER.save(deps.storage, &candidate)?;

    Ok(
        Response::new()
            .add_event(transfer_ownership_event(&owner, &candidate))
    )
}


/// Accept a pending ownership offer.
/// 
/// NOTE: Only the pending owner may invoke this function.
/// 
pub fn accept_ownership(
    deps: &mut DepsMut,
    info: MessageInfo
) -> Result<Response, ContractError> {

    let candidate = PENDING_OWNER.may_load(deps.storage)?;
    if candidate.as_ref() != Some(&info.sender) {
        return Err(ContractError::CallerIsNotPendingOwner {});
    }

    if info.sender == MANAGER.load(deps.storage)? {
        return Err(ContractError::ManagerIsOwner {});
    }

    let previous_owner = owner(&deps.as_ref())?;

    OWNER.set(deps.branch(), Some(info.sender.clone()))?;
    PENDING_OWNER.remove(deps.storage);

    Ok(
        Response::new()
            .add_event(accept_ownership_event(&previous_owner, &info.sender))
    )
}


/// Withdraw a pending ownership offer.
/// 
/// NOTE: Only the owner may invoke this function.
/// 
pub fn cancel_ownership_transfer(
    deps: &mut DepsMut,
    info: MessageInfo
) -> Result<Response, ContractError> {

    only_owner(&deps.as_ref(), &info)?;

    let candidate = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwnershipTransfer {})?;

    PENDING_OWNER.remove(deps.storage);

    Ok(
        Response::new()
            .add_event(cancel_ownership_transfer_event(&candidate))
    )
}




// Sweep ************************************************************************************************************************

/// Send tokens held directly by the vault contract (e.g. sent by mistake) to the owner.
/// 
/// NOTE: Only the owner may invoke this function. The pool token cannot be swept.
/// 
/// # Arguments:
/// * `token` - The cw20 token to recover.
/// * `amount` - The amount to recover.
/// 
pub fn sweep(
    deps: &mut DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128
) -> Result<Response, ContractError> {

    let owner = only_owner(&deps.as_ref(), &info)?;

    let token = validate_address(deps.api, &token)?;

    let config = CONFIG.load(deps.storage)?;
    if token == *config.pool.addr() {
        return Err(ContractError::CannotSweepPoolToken {});
    }

    Ok(
        Response::new()
            .add_messages(transfer_msgs(&[token.clone()], &[amount], &owner)?)
            .add_event(sweep_event(&token, amount))
    )
}
