use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128, QuerierWrapper, StdResult};


#[cw_serde]
#[derive(QueryResponses)]
pub enum ValidatorQueryMsg {

    /// The maximum amount of each vault token that may currently be withdrawn.
    #[returns(AllowanceResponse)]
    Allowance {}

}

#[cw_serde]
pub struct AllowanceResponse {
    /// One entry per vault token, in the vault token order.
    pub amounts: Vec<Uint128>
}


/// Handle around the withdrawal validator contract address.
#[cw_serde]
pub struct WithdrawalValidator(pub Addr);

impl WithdrawalValidator {

    pub fn query_allowance(&self, querier: &QuerierWrapper) -> StdResult<Vec<Uint128>> {
        Ok(
            querier.query_wasm_smart::<AllowanceResponse>(
                &self.0,
                &ValidatorQueryMsg::Allowance {}
            )?.amounts
        )
    }

}
