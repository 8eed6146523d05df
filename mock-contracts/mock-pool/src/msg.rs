use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint64, Uint128};

pub use vault_adapters::pool::{HoldingsResponse, NormalizedWeightsResponse};

use crate::state::WeightUpdate;


#[cw_serde]
pub struct InstantiateMsg {
    pub tokens: Vec<String>,
    pub swap_fee: Uint128
}


// NOTE: Superset of `vault_adapters::pool::PoolExecuteMsg`.
#[cw_serde]
pub enum ExecuteMsg {

    /// Bind the pool to its owner (the vault). May only be invoked once, by the pool creator.
    SetOwner {
        owner: String
    },

    UpdateWeightsGradually {
        start_time: Uint64,
        end_time: Uint64,
        end_weights: Vec<Uint128>
    },

    SetSwapFeePercentage {
        fee: Uint128
    },

    SetSwapEnabled {
        enabled: bool
    },

    Withdraw {
        amounts: Vec<Uint128>,
        recipient: String
    },

    /// Crude stand-in for a trade: pull `amounts_in` from the sender and send it `amounts_out`.
    SimulateSwap {
        amounts_in: Vec<Uint128>,
        amounts_out: Vec<Uint128>
    }

}


#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {

    #[returns(HoldingsResponse)]
    Holdings {},

    #[returns(NormalizedWeightsResponse)]
    NormalizedWeights {},

    #[returns(WeightUpdateResponse)]
    WeightUpdate {},

    #[returns(SwapFeePercentageResponse)]
    SwapFeePercentage {},

    #[returns(SwapEnabledResponse)]
    SwapEnabled {},

    #[returns(PoolOwnerResponse)]
    Owner {}

}

#[cw_serde]
pub struct WeightUpdateResponse {
    pub update: Option<WeightUpdate>
}

#[cw_serde]
pub struct SwapFeePercentageResponse {
    pub fee: Uint128
}

#[cw_serde]
pub struct SwapEnabledResponse {
    pub enabled: bool
}

#[cw_serde]
pub struct PoolOwnerResponse {
    pub owner: Option<Addr>
}
