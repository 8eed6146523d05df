use cosmwasm_std::{Uint128, Addr};
use cw20::{Cw20Coin, BalanceResponse, Cw20QueryMsg, Cw20ExecuteMsg};
use cw_multi_test::{App, ContractWrapper, AppResponse, Executor};

pub const WAD: Uint128 = Uint128::new(1000000000000000000u128);

#[derive(Clone)]
pub struct TestTokenDefinition {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_mint: Uint128,
    pub holder: String
}

impl From<TestTokenDefinition> for cw20_base::msg::InstantiateMsg {
    fn from(definition: TestTokenDefinition) -> Self {
        cw20_base::msg::InstantiateMsg {
            name: definition.name,
            symbol: definition.symbol,
            decimals: definition.decimals,
            initial_balances: vec![Cw20Coin {
                address: definition.holder,
                amount: definition.initial_mint
            }],
            mint: None,
            marketing: None
        }
    }
}


pub fn mock_test_token_definitions(
    holder: String,
    count: usize
) -> Vec<TestTokenDefinition> {
    ["A", "B", "C", "D", "E"][0..count]
        .iter()
        .map(|id| TestTokenDefinition {
            name: format!("Test Token {}", id),
            symbol: format!("TT{}", id),
            decimals: 18,
            initial_mint: Uint128::from(100000000u64) * WAD,
            holder: holder.clone()
        })
        .collect()
}


pub fn cw20_contract_storage(
    app: &mut App
) -> u64 {

    // Create contract wrapper
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query
    );

    // 'Deploy' the contract
    app.store_code(Box::new(contract))
}


/// Deploy `count` test tokens with the whole supply held by `holder`.
/// 
/// NOTE: The returned addresses are sorted in ascending order, as required by the vault.
pub fn deploy_test_tokens(
    app: &mut App,
    holder: String,
    count: usize
) -> Vec<Addr> {

    let cw20_contract = cw20_contract_storage(app);

    let mut tokens: Vec<Addr> = mock_test_token_definitions(holder.clone(), count)
        .into_iter()
        .map(|definition| {
            let label = definition.symbol.clone();
            app.instantiate_contract::<cw20_base::msg::InstantiateMsg, _>(
                cw20_contract,
                Addr::unchecked(holder.clone()),
                &definition.into(),
                &[],
                label,
                None
            ).unwrap()
        })
        .collect();

    tokens.sort();

    tokens
}


pub fn query_token_balance(
    app: &App,
    token: Addr,
    account: String
) -> Uint128 {
    
    app.wrap().query_wasm_smart::<BalanceResponse>(
        token,
        &Cw20QueryMsg::Balance { address: account }
    ).unwrap().balance

}


pub fn set_token_allowance(
    app: &mut App,
    amount: Uint128,
    token: Addr,
    account: Addr,
    spender: String,
) -> AppResponse {
    app.execute_contract::<Cw20ExecuteMsg>(
        account,
        token,
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires: None
        },
        &[]
    ).unwrap()
}


pub fn transfer_tokens(
    app: &mut App,
    amount: Uint128,
    token: Addr,
    account: Addr,
    recipient: String
) -> AppResponse {
    app.execute_contract::<Cw20ExecuteMsg>(
        account,
        token,
        &Cw20ExecuteMsg::Transfer {
            recipient,
            amount
        },
        &[]
    ).unwrap()
}
