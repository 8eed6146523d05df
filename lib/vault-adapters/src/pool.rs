use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint64, Uint128, CosmosMsg, WasmMsg, QuerierWrapper, StdResult, to_json_binary};


// NOTE: These are the messages the vault sends to/queries from the pool. A pool implementation
// may support additional messages, but it must accept these with the exact same encoding.

#[cw_serde]
pub enum PoolExecuteMsg {

    /// Linearly move the pool weights from their current value to `end_weights` between
    /// `start_time` and `end_time` (seconds). `start_time == end_time` sets the weights at once.
    UpdateWeightsGradually {
        start_time: Uint64,
        end_time: Uint64,
        end_weights: Vec<Uint128>
    },

    /// Set the swap fee (18 decimals).
    SetSwapFeePercentage {
        fee: Uint128
    },

    /// Enable/disable trading on the pool.
    SetSwapEnabled {
        enabled: bool
    },

    /// Send the given token amounts (ordered as the pool tokens) to `recipient`.
    Withdraw {
        amounts: Vec<Uint128>,
        recipient: String
    }

}


#[cw_serde]
#[derive(QueryResponses)]
pub enum PoolQueryMsg {

    #[returns(HoldingsResponse)]
    Holdings {},

    #[returns(NormalizedWeightsResponse)]
    NormalizedWeights {}

}

#[cw_serde]
pub struct HoldingsResponse {
    pub holdings: Vec<Uint128>
}

#[cw_serde]
pub struct NormalizedWeightsResponse {
    pub weights: Vec<Uint128>
}



/// Handle around the pool contract address.
#[cw_serde]
pub struct PoolAdapter(pub Addr);

impl PoolAdapter {

    pub fn addr(&self) -> &Addr {
        &self.0
    }

    /// Query the token balances custodied by the pool.
    pub fn query_holdings(&self, querier: &QuerierWrapper) -> StdResult<Vec<Uint128>> {
        Ok(
            querier.query_wasm_smart::<HoldingsResponse>(
                &self.0,
                &PoolQueryMsg::Holdings {}
            )?.holdings
        )
    }

    pub fn update_weights_gradually_msg(
        &self,
        start_time: u64,
        end_time: u64,
        end_weights: Vec<Uint128>
    ) -> StdResult<CosmosMsg> {
        self.execute_msg(&PoolExecuteMsg::UpdateWeightsGradually {
            start_time: Uint64::new(start_time),
            end_time: Uint64::new(end_time),
            end_weights
        })
    }

    pub fn set_swap_fee_percentage_msg(&self, fee: Uint128) -> StdResult<CosmosMsg> {
        self.execute_msg(&PoolExecuteMsg::SetSwapFeePercentage { fee })
    }

    pub fn set_swap_enabled_msg(&self, enabled: bool) -> StdResult<CosmosMsg> {
        self.execute_msg(&PoolExecuteMsg::SetSwapEnabled { enabled })
    }

    pub fn withdraw_msg(&self, amounts: Vec<Uint128>, recipient: &Addr) -> StdResult<CosmosMsg> {
        self.execute_msg(&PoolExecuteMsg::Withdraw {
            amounts,
            recipient: recipient.to_string()
        })
    }

    fn execute_msg(&self, msg: &PoolExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(
            WasmMsg::Execute {
                contract_addr: self.0.to_string(),
                msg: to_json_binary(msg)?,
                funds: vec![]
            }
        ))
    }

}
