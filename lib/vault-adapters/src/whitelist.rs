use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};


// Subset of the manager whitelist interface required by the vault.
#[cw_serde]
#[derive(QueryResponses)]
pub enum WhitelistQueryMsg {

    #[returns(IsManagerResponse)]
    IsManager {
        address: String
    }

}

#[cw_serde]
pub struct IsManagerResponse {
    pub is_manager: bool
}


/// Handle around the manager whitelist contract address.
#[cw_serde]
pub struct ManagerWhitelist(pub Addr);

impl ManagerWhitelist {

    pub fn is_manager(&self, querier: &QuerierWrapper, address: &Addr) -> StdResult<bool> {
        Ok(
            querier.query_wasm_smart::<IsManagerResponse>(
                &self.0,
                &WhitelistQueryMsg::IsManager { address: address.to_string() }
            )?.is_manager
        )
    }

}
