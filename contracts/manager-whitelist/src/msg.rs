use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

pub use vault_adapters::whitelist::IsManagerResponse;


#[cw_serde]
pub struct InstantiateMsg {
    /// The managers to whitelist on deployment.
    pub managers: Vec<String>
}


#[cw_serde]
pub enum ExecuteMsg {

    /// Add a manager to the whitelist (owner only).
    /// * `manager` - The account to whitelist.
    AddManager {
        manager: String
    },

    /// Remove a manager from the whitelist (owner only).
    /// * `manager` - The account to remove.
    RemoveManager {
        manager: String
    },

    /// Transfer the ownership of the whitelist.
    /// * `new_owner` - The new owner of the contract. Must be a valid address.
    TransferOwnership {
        new_owner: String
    }

}


#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {

    /// Query whether an account is whitelisted.
    #[returns(IsManagerResponse)]
    IsManager {
        address: String
    },

    /// Query all the whitelisted managers.
    #[returns(ManagersResponse)]
    Managers {},

    /// Query the whitelist owner.
    #[returns(OwnerResponse)]
    Owner {}

}

#[cw_serde]
pub struct ManagersResponse {
    pub managers: Vec<Addr>
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Option<Addr>
}
