use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint64, Uint128};

use crate::state::Lifecycle;
use crate::weights::GradualUpdate;


/// A value bound to one of the vault tokens.
/// 
/// Every list of `TokenValue`s accepted or returned by the vault is ordered exactly like the vault
/// tokens (see `ConfigResponse::tokens`).
#[cw_serde]
pub struct TokenValue {
    pub token: String,
    pub value: Uint128
}

impl TokenValue {
    pub fn new(token: impl Into<String>, value: Uint128) -> Self {
        Self { token: token.into(), value }
    }
}

/// The pool holdings the caller expects to find when the message is executed.
#[cw_serde]
pub struct BalanceSnapshot {
    pub holdings: Vec<TokenValue>
}



#[cw_serde]
pub struct InstantiateMsg {
    pub description: String,
    /// Vault tokens (cw20 addresses), strictly ascending.
    pub tokens: Vec<String>,
    pub pool: String,
    pub validator: String,
    pub manager_whitelist: String,
    pub manager: String,
    /// Per-second management fee (18 decimals).
    pub management_fee: Uint128,
    /// Seconds between `InitiateFinalization` and `Finalize`.
    pub notice_period: Uint64,
    pub swap_fee: Uint128
}


#[cw_serde]
pub enum ExecuteMsg {

    // Lifecycle
    InitialDeposit {
        amounts: Vec<TokenValue>,
        /// If not provided, the weights are derived from the amounts.
        weights: Option<Vec<TokenValue>>
    },

    Deposit {
        amounts: Vec<TokenValue>
    },

    DepositIfBalanceUnchanged {
        amounts: Vec<TokenValue>,
        snapshot: BalanceSnapshot
    },

    Withdraw {
        amounts: Vec<TokenValue>
    },

    WithdrawIfBalanceUnchanged {
        amounts: Vec<TokenValue>,
        snapshot: BalanceSnapshot
    },

    InitiateFinalization {},

    Finalize {},


    // Weights
    UpdateWeightsGradually {
        weights: Vec<TokenValue>,
        start_time: Uint64,
        end_time: Uint64
    },

    CancelWeightUpdates {},


    // Fees and trading
    SetSwapFee {
        fee: Uint128
    },

    ClaimManagerFees {},

    EnableTradingRiskingArbitrage {},

    EnableTradingWithWeights {
        weights: Vec<TokenValue>
    },

    DisableTrading {},


    // Administration
    SetManager {
        new_manager: String
    },

    TransferOwnership {
        new_owner: String
    },

    AcceptOwnership {},

    CancelOwnershipTransfer {},

    Sweep {
        token: String,
        amount: Uint128
    }

}



#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {

    #[returns(ConfigResponse)]
    Config {},
    #[returns(OwnerResponse)]
    Owner {},
    #[returns(ManagerResponse)]
    Manager {},
    #[returns(LifecycleResponse)]
    Lifecycle {},

    #[returns(TokenValuesResponse)]
    Holdings {},
    #[returns(TokenValuesResponse)]
    PoolHoldings {},
    #[returns(TokenValuesResponse)]
    NormalizedWeights {},
    #[returns(WeightScheduleResponse)]
    WeightSchedule {},

    #[returns(SwapFeeResponse)]
    SwapFee {},
    #[returns(SwapEnabledResponse)]
    SwapEnabled {},
    #[returns(NoticeTimeoutResponse)]
    NoticeTimeout {},

    /// Management fees that would be paid to the manager if settled now.
    #[returns(TokenValuesResponse)]
    ManagerFees {}

}


#[cw_serde]
pub struct ConfigResponse {
    pub description: String,
    pub tokens: Vec<Addr>,
    pub pool: Addr,
    pub validator: Addr,
    pub manager_whitelist: Addr,
    pub management_fee: Uint128,
    pub notice_period: Uint64
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>
}

#[cw_serde]
pub struct ManagerResponse {
    pub manager: Addr
}

#[cw_serde]
pub struct LifecycleResponse {
    pub lifecycle: Lifecycle
}

#[cw_serde]
pub struct TokenValuesResponse {
    pub values: Vec<TokenValue>
}

#[cw_serde]
pub struct WeightScheduleResponse {
    /// `None` if the weights are static.
    pub schedule: Option<GradualUpdate>
}

#[cw_serde]
pub struct SwapFeeResponse {
    pub fee: Uint128,
    pub last_change: Option<Uint64>
}

#[cw_serde]
pub struct SwapEnabledResponse {
    pub enabled: bool
}

#[cw_serde]
pub struct NoticeTimeoutResponse {
    pub notice_timeout: Option<Uint64>
}
