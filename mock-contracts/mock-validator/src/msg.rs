use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

pub use vault_adapters::validator::AllowanceResponse;


#[cw_serde]
pub struct InstantiateMsg {
    /// The number of tokens of the validated vault.
    pub token_count: u8
}


#[cw_serde]
pub enum ExecuteMsg {

    /// Set the reported allowances. `None` makes the validator permissive (`Uint128::MAX`).
    SetAllowances {
        amounts: Option<Vec<Uint128>>
    }

}


// NOTE: Same encoding as `vault_adapters::validator::ValidatorQueryMsg`.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {

    #[returns(AllowanceResponse)]
    Allowance {}

}
