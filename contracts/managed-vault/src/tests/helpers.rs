use cosmwasm_std::{Uint64, Uint128, Addr};
use cw_multi_test::{App, ContractWrapper, Executor, AppResponse};
use anyhow::Result as AnyResult;
use cosmwasm_schema::serde::de::DeserializeOwned;
use test_helpers::{
    definitions::{OWNER, MANAGER, NEW_MANAGER, TRADER, VAULT_DESCRIPTION},
    token::{deploy_test_tokens, set_token_allowance, transfer_tokens},
    contract::{
        mock_instantiate_pool, mock_set_pool_owner, mock_pool_swap, mock_instantiate_validator,
        mock_instantiate_whitelist, DEFAULT_TEST_SWAP_FEE
    }
};

use crate::{
    ContractError,
    msg::{InstantiateMsg, ExecuteMsg, QueryMsg, TokenValue, TokenValuesResponse, LifecycleResponse},
    state::Lifecycle
};


pub const DEFAULT_TEST_MANAGEMENT_FEE: Uint128 = Uint128::new(100000000u128);     // 1e-10 per second
pub const DEFAULT_TEST_NOTICE_PERIOD: Uint64 = Uint64::new(7 * 24 * 60 * 60);    // 7 days

pub const ONE: u128 = 1000000000000000000u128;


/// Fixed-point percentage (18 decimals).
pub fn percent(value: u128) -> Uint128 {
    Uint128::new(value * ONE / 100)
}



// Contracts

pub fn managed_vault_contract_storage(
    app: &mut App
) -> u64 {

    // Create contract wrapper
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    );
    
    // 'Deploy' the contract
    app.store_code(Box::new(contract))
}



// Test environment

/// The contracts surrounding a vault: its tokens, the pool, the withdrawal validator and the
/// manager whitelist (with `MANAGER` and `NEW_MANAGER` whitelisted). The whole token supply is
/// held by `OWNER`.
pub struct TestEnv {
    pub app: App,
    pub tokens: Vec<Addr>,
    pub pool: Addr,
    pub validator: Addr,
    pub whitelist: Addr
}

impl TestEnv {

    pub fn initialize(token_count: usize) -> Self {

        let mut app = App::default();

        let tokens = deploy_test_tokens(&mut app, OWNER.to_string(), token_count);
        let pool = mock_instantiate_pool(&mut app, &tokens);
        let validator = mock_instantiate_validator(&mut app, token_count as u8);
        let whitelist = mock_instantiate_whitelist(
            &mut app,
            vec![MANAGER.to_string(), NEW_MANAGER.to_string()]
        );

        Self { app, tokens, pool, validator, whitelist }
    }

    pub fn instantiate_msg(&self) -> InstantiateMsg {
        InstantiateMsg {
            description: VAULT_DESCRIPTION.to_string(),
            tokens: self.tokens.iter().map(Addr::to_string).collect(),
            pool: self.pool.to_string(),
            validator: self.validator.to_string(),
            manager_whitelist: self.whitelist.to_string(),
            manager: MANAGER.to_string(),
            management_fee: DEFAULT_TEST_MANAGEMENT_FEE,
            notice_period: DEFAULT_TEST_NOTICE_PERIOD,
            swap_fee: DEFAULT_TEST_SWAP_FEE
        }
    }

    /// Instantiate a vault (from `OWNER`) without binding the pool to it.
    pub fn try_instantiate_vault(
        &mut self,
        msg: &InstantiateMsg
    ) -> AnyResult<Addr> {

        let vault_code_id = managed_vault_contract_storage(&mut self.app);

        self.app.instantiate_contract(
            vault_code_id,
            Addr::unchecked(OWNER),
            msg,
            &[],
            "managed-vault",
            None
        )
    }

    /// Instantiate a vault with the default configuration and hand the pool control over to it.
    pub fn deploy_vault(&mut self) -> Addr {

        let msg = self.instantiate_msg();
        let vault = self.try_instantiate_vault(&msg).unwrap();

        mock_set_pool_owner(&mut self.app, self.pool.clone(), vault.clone());

        vault
    }

    /// Deploy a vault and seed it with `amounts` at `weights`.
    pub fn deploy_initialized_vault(
        &mut self,
        amounts: Vec<Uint128>,
        weights: Vec<Uint128>
    ) -> Addr {

        let vault = self.deploy_vault();

        self.approve(&vault, &amounts);

        self.app.execute_contract(
            Addr::unchecked(OWNER),
            vault.clone(),
            &ExecuteMsg::InitialDeposit {
                amounts: self.token_values(&amounts),
                weights: Some(self.token_values(&weights))
            },
            &[]
        ).unwrap();

        vault
    }

    /// Allow `spender` to pull `amounts` of the vault tokens from `OWNER`.
    pub fn approve(
        &mut self,
        spender: &Addr,
        amounts: &[Uint128]
    ) {
        self.tokens.clone().iter()
            .zip(amounts)
            .for_each(|(token, amount)| {
                set_token_allowance(
                    &mut self.app,
                    *amount,
                    token.clone(),
                    Addr::unchecked(OWNER),
                    spender.to_string()
                );
            });
    }

    pub fn token_values(
        &self,
        values: &[Uint128]
    ) -> Vec<TokenValue> {
        self.tokens.iter()
            .zip(values)
            .map(|(token, value)| TokenValue::new(token, *value))
            .collect()
    }

    pub fn execute(
        &mut self,
        sender: &str,
        vault: &Addr,
        msg: &ExecuteMsg
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            vault.clone(),
            msg,
            &[]
        )
    }

    /// Have `TRADER` swap against the pool: `amounts_in` (funded by `OWNER`) go into the pool and
    /// `amounts_out` leave it.
    pub fn mock_trade(
        &mut self,
        amounts_in: Vec<Uint128>,
        amounts_out: Vec<Uint128>
    ) {
        self.tokens.clone().iter()
            .zip(&amounts_in)
            .filter(|(_, amount)| !amount.is_zero())
            .for_each(|(token, amount)| {
                transfer_tokens(
                    &mut self.app,
                    *amount,
                    token.clone(),
                    Addr::unchecked(OWNER),
                    TRADER.to_string()
                );
                set_token_allowance(
                    &mut self.app,
                    *amount,
                    token.clone(),
                    Addr::unchecked(TRADER),
                    self.pool.to_string()
                );
            });

        mock_pool_swap(
            &mut self.app,
            self.pool.clone(),
            Addr::unchecked(TRADER),
            amounts_in,
            amounts_out
        ).unwrap();
    }

    /// Move the block time forward.
    pub fn advance_time(
        &mut self,
        seconds: u64
    ) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += 1;
        });
    }

    pub fn now(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn query<T: DeserializeOwned>(
        &self,
        vault: &Addr,
        msg: &QueryMsg
    ) -> T {
        self.app.wrap().query_wasm_smart::<T>(vault, msg).unwrap()
    }

    pub fn query_values(
        &self,
        vault: &Addr,
        msg: &QueryMsg
    ) -> Vec<Uint128> {
        self.query::<TokenValuesResponse>(vault, msg)
            .values
            .into_iter()
            .map(|token_value| token_value.value)
            .collect()
    }

    pub fn query_holdings(&self, vault: &Addr) -> Vec<Uint128> {
        self.query_values(vault, &QueryMsg::Holdings {})
    }

    pub fn query_weights(&self, vault: &Addr) -> Vec<Uint128> {
        self.query_values(vault, &QueryMsg::NormalizedWeights {})
    }

    pub fn query_lifecycle(&self, vault: &Addr) -> Lifecycle {
        self.query::<LifecycleResponse>(vault, &QueryMsg::Lifecycle {}).lifecycle
    }

}


/// Extract the vault error from a failed execution.
pub fn contract_error(result: AnyResult<AppResponse>) -> ContractError {
    result.err().unwrap().downcast().unwrap()
}
