use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor, AppResponse};
use anyhow::Result as AnyResult;

use mock_pool::{
    msg::{
        InstantiateMsg as PoolInstantiateMsg, ExecuteMsg as PoolExecuteMsg, QueryMsg as PoolQueryMsg,
        WeightUpdateResponse, SwapFeePercentageResponse, SwapEnabledResponse
    },
    state::WeightUpdate
};
use mock_validator::msg::{InstantiateMsg as ValidatorInstantiateMsg, ExecuteMsg as ValidatorExecuteMsg};
use manager_whitelist::msg::{InstantiateMsg as WhitelistInstantiateMsg, ExecuteMsg as WhitelistExecuteMsg};
use vault_adapters::pool::HoldingsResponse;

use crate::definitions::DEPLOYER;


pub const DEFAULT_TEST_SWAP_FEE: Uint128 = Uint128::new(1000000000000000u128);     // 0.1%




// Contracts storage
// ************************************************************************************************

pub fn pool_contract_storage(
    app: &mut App
) -> u64 {

    // Create contract wrapper
    let contract = ContractWrapper::new(
        mock_pool::contract::execute,
        mock_pool::contract::instantiate,
        mock_pool::contract::query
    );

    // 'Deploy' the contract
    app.store_code(Box::new(contract))
}

pub fn validator_contract_storage(
    app: &mut App
) -> u64 {

    let contract = ContractWrapper::new(
        mock_validator::contract::execute,
        mock_validator::contract::instantiate,
        mock_validator::contract::query
    );

    app.store_code(Box::new(contract))
}

pub fn whitelist_contract_storage(
    app: &mut App
) -> u64 {

    let contract = ContractWrapper::new(
        manager_whitelist::contract::execute,
        manager_whitelist::contract::instantiate,
        manager_whitelist::contract::query
    );

    app.store_code(Box::new(contract))
}




// Pool management helpers
// ************************************************************************************************

pub fn mock_instantiate_pool(
    app: &mut App,
    tokens: &[Addr]
) -> Addr {

    let pool_code_id = pool_contract_storage(app);

    app.instantiate_contract(
        pool_code_id,
        Addr::unchecked(DEPLOYER),
        &PoolInstantiateMsg {
            tokens: tokens.iter().map(Addr::to_string).collect(),
            swap_fee: DEFAULT_TEST_SWAP_FEE
        },
        &[],
        "pool",
        None
    ).unwrap()
}

/// Hand over the pool control to `owner` (i.e. the vault).
pub fn mock_set_pool_owner(
    app: &mut App,
    pool: Addr,
    owner: Addr
) -> AppResponse {
    app.execute_contract(
        Addr::unchecked(DEPLOYER),
        pool,
        &PoolExecuteMsg::SetOwner { owner: owner.to_string() },
        &[]
    ).unwrap()
}

/// Trade against the pool: `trader` pays `amounts_in` and receives `amounts_out`.
pub fn mock_pool_swap(
    app: &mut App,
    pool: Addr,
    trader: Addr,
    amounts_in: Vec<Uint128>,
    amounts_out: Vec<Uint128>
) -> AnyResult<AppResponse> {
    app.execute_contract(
        trader,
        pool,
        &PoolExecuteMsg::SimulateSwap { amounts_in, amounts_out },
        &[]
    )
}

pub fn query_pool_holdings(
    app: &App,
    pool: Addr
) -> Vec<Uint128> {
    app.wrap().query_wasm_smart::<HoldingsResponse>(
        pool,
        &PoolQueryMsg::Holdings {}
    ).unwrap().holdings
}

pub fn query_pool_weight_update(
    app: &App,
    pool: Addr
) -> Option<WeightUpdate> {
    app.wrap().query_wasm_smart::<WeightUpdateResponse>(
        pool,
        &PoolQueryMsg::WeightUpdate {}
    ).unwrap().update
}

pub fn query_pool_swap_fee(
    app: &App,
    pool: Addr
) -> Uint128 {
    app.wrap().query_wasm_smart::<SwapFeePercentageResponse>(
        pool,
        &PoolQueryMsg::SwapFeePercentage {}
    ).unwrap().fee
}

pub fn query_pool_swap_enabled(
    app: &App,
    pool: Addr
) -> bool {
    app.wrap().query_wasm_smart::<SwapEnabledResponse>(
        pool,
        &PoolQueryMsg::SwapEnabled {}
    ).unwrap().enabled
}




// Validator management helpers
// ************************************************************************************************

pub fn mock_instantiate_validator(
    app: &mut App,
    token_count: u8
) -> Addr {

    let validator_code_id = validator_contract_storage(app);

    app.instantiate_contract(
        validator_code_id,
        Addr::unchecked(DEPLOYER),
        &ValidatorInstantiateMsg { token_count },
        &[],
        "validator",
        None
    ).unwrap()
}

/// Set the allowances reported by the validator (`None` for unlimited).
pub fn mock_set_validator_allowances(
    app: &mut App,
    validator: Addr,
    amounts: Option<Vec<Uint128>>
) -> AppResponse {
    app.execute_contract(
        Addr::unchecked(DEPLOYER),
        validator,
        &ValidatorExecuteMsg::SetAllowances { amounts },
        &[]
    ).unwrap()
}




// Whitelist management helpers
// ************************************************************************************************

pub fn mock_instantiate_whitelist(
    app: &mut App,
    managers: Vec<String>
) -> Addr {

    let whitelist_code_id = whitelist_contract_storage(app);

    app.instantiate_contract(
        whitelist_code_id,
        Addr::unchecked(DEPLOYER),
        &WhitelistInstantiateMsg { managers },
        &[],
        "manager-whitelist",
        None
    ).unwrap()
}

pub fn mock_whitelist_remove_manager(
    app: &mut App,
    whitelist: Addr,
    manager: String
) -> AppResponse {
    app.execute_contract(
        Addr::unchecked(DEPLOYER),
        whitelist,
        &WhitelistExecuteMsg::RemoveManager { manager },
        &[]
    ).unwrap()
}
