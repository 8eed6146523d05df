use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint64, Uint128, Deps, DepsMut, Env, MessageInfo, Response, Api};
use cw_controllers::Admin;
use cw_storage_plus::Item;

use fixed_point_math::ONE;
use vault_adapters::{pool::PoolAdapter, validator::WithdrawalValidator, whitelist::ManagerWhitelist};

use crate::{
    ContractError,
    weights::WeightState,
    msg::{TokenValue, BalanceSnapshot, ConfigResponse, OwnerResponse, ManagerResponse, LifecycleResponse, TokenValuesResponse, SwapEnabledResponse, NoticeTimeoutResponse}
};


// Vault Constants **************************************************************************************************************

pub const MAX_TOKENS: usize = 20;

pub const MIN_WEIGHT: Uint128 = Uint128::new(10_000_000_000_000_000u128);                   // 1%
pub const MAX_WEIGHT: Uint128 = Uint128::new(ONE.u128() - MIN_WEIGHT.u128());              // 99%

pub const MIN_SWAP_FEE          : Uint128 = Uint128::new(1_000_000_000_000u128);            // 0.0001%
pub const MAX_SWAP_FEE          : Uint128 = Uint128::new(100_000_000_000_000_000u128);      // 10%
pub const MAX_SWAP_FEE_CHANGE   : Uint128 = Uint128::new(5_000_000_000_000_000u128);        // 0.5%
pub const SWAP_FEE_COOLDOWN_PERIOD: u64 = 60;                                               // 1 minute

pub const MAX_MANAGEMENT_FEE: Uint128 = Uint128::new(1_000_000_000u128);                    // 1e-9 per second

pub const MAX_NOTICE_PERIOD: u64 = 60 * 24 * 60 * 60;                                       // 60 days

pub const MINIMUM_WEIGHT_CHANGE_DURATION: u64 = 4 * 60 * 60;                                // 4 hours
pub const MAX_WEIGHT_CHANGE_RATIO: Uint128 = Uint128::new(1_000_000_000_000_000u128);       // 1e-3 per second

pub const MAX_TIMESTAMP: u64 = u32::MAX as u64;




// Vault Storage ****************************************************************************************************************

pub const CONFIG: Item<VaultConfig> = Item::new("managed-vault-config");

pub const OWNER: Admin = Admin::new("managed-vault-owner");
pub const PENDING_OWNER: Item<Addr> = Item::new("managed-vault-pending-owner");
pub const MANAGER: Item<Addr> = Item::new("managed-vault-manager");

pub const LIFECYCLE: Item<Lifecycle> = Item::new("managed-vault-lifecycle");
pub const NOTICE_TIMEOUT: Item<Uint64> = Item::new("managed-vault-notice-timeout");

pub const WEIGHT_STATE: Item<WeightState> = Item::new("managed-vault-weight-state");

pub const HOLDINGS: Item<Vec<Uint128>> = Item::new("managed-vault-holdings");
pub const LAST_FEE_CHECKPOINT: Item<Uint64> = Item::new("managed-vault-last-fee-checkpoint");

pub const SWAP_FEE: Item<Uint128> = Item::new("managed-vault-swap-fee");
pub const LAST_SWAP_FEE_CHANGE: Item<Uint64> = Item::new("managed-vault-last-swap-fee-change");
pub const SWAP_ENABLED: Item<bool> = Item::new("managed-vault-swap-enabled");


/// Vault parameters fixed at instantiation.
#[cw_serde]
pub struct VaultConfig {
    pub description: String,
    pub tokens: Vec<Addr>,
    pub pool: PoolAdapter,
    pub validator: WithdrawalValidator,
    pub manager_whitelist: ManagerWhitelist,
    pub management_fee: Uint128,
    pub notice_period: Uint64
}


#[cw_serde]
#[derive(Copy)]
pub enum Lifecycle {
    Uninitialized,
    Initialized,
    Finalizing,
    Finalized
}




// Vault Setup ******************************************************************************************************************

/// Setup the vault configuration. The sender of the transaction becomes the vault owner.
/// 
/// # Arguments:
/// * `description` - Human readable description of the vault (must not be empty).
/// * `tokens` - The vault tokens (cw20), strictly ascending.
/// * `pool` - The pool which custodies the vault tokens.
/// * `validator` - The contract which bounds the amounts that may be withdrawn.
/// * `manager_whitelist` - The registry of the accounts allowed to manage the vault.
/// * `manager` - The initial manager.
/// * `management_fee` - The per-second management fee (18 decimals).
/// * `notice_period` - The delay between `initiate_finalization` and `finalize` (seconds).
/// * `swap_fee` - The initial swap fee (18 decimals).
/// 
#[allow(clippy::too_many_arguments)]
pub fn setup(
    deps: &mut DepsMut,
    info: MessageInfo,
    description: String,
    tokens: Vec<String>,
    pool: String,
    validator: String,
    manager_whitelist: String,
    manager: String,
    management_fee: Uint128,
    notice_period: Uint64,
    swap_fee: Uint128
) -> Result<Response, ContractError> {

    if description.is_empty() {
        return Err(ContractError::EmptyDescription {});
    }

    let tokens = validate_tokens(deps.api, &tokens)?;

    let pool = validate_address(deps.api, &pool)?;
    let validator = validate_address(deps.api, &validator)?;
    let manager_whitelist = ManagerWhitelist(validate_address(deps.api, &manager_whitelist)?);

    if management_fee > MAX_MANAGEMENT_FEE {
        return Err(ContractError::ManagementFeeTooHigh {
            fee: management_fee,
            max: MAX_MANAGEMENT_FEE
        });
    }

    if notice_period.u64() > MAX_NOTICE_PERIOD {
        return Err(ContractError::NoticePeriodTooLong {
            period: notice_period,
            max: MAX_NOTICE_PERIOD.into()
        });
    }

    check_swap_fee_bounds(swap_fee)?;

    let owner = info.sender;
    let manager = validate_manager(&deps.as_ref(), &manager_whitelist, &owner, &manager)?;

    CONFIG.save(
        deps.storage,
        &VaultConfig {
            description,
            tokens: tokens.clone(),
            pool: PoolAdapter(pool),
            validator: WithdrawalValidator(validator),
            manager_whitelist,
            management_fee,
            notice_period
        }
    )?;

    OWNER.set(deps.branch(), Some(owner.clone()))?;
    MANAGER.save(deps.storage, &manager)?;

    LIFECYCLE.save(deps.storage, &Lifecycle::Uninitialized)?;
    HOLDINGS.save(deps.storage, &vec![Uint128::zero(); tokens.len()])?;

    SWAP_FEE.save(deps.storage, &swap_fee)?;
    SWAP_ENABLED.save(deps.storage, &false)?;

    Ok(
        Response::new()
            .add_attribute("owner", owner)
            .add_attribute("manager", manager)
    )
}


/// Verify the vault tokens: between 2 and `MAX_TOKENS` valid addresses, strictly ascending
/// (which also rules out duplicates).
pub fn validate_tokens(
    api: &dyn Api,
    tokens: &[String]
) -> Result<Vec<Addr>, ContractError> {

    if tokens.len() < 2 || tokens.len() > MAX_TOKENS {
        return Err(ContractError::InvalidTokens {
            reason: format!("the vault must hold between 2 and {} tokens", MAX_TOKENS)
        });
    }

    let tokens = tokens.iter()
        .map(|token| validate_address(api, token))
        .collect::<Result<Vec<Addr>, ContractError>>()?;

    if tokens.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(ContractError::InvalidTokens {
            reason: "tokens must be sorted in strictly ascending order".to_string()
        });
    }

    Ok(tokens)
}


pub fn validate_address(
    api: &dyn Api,
    address: &str
) -> Result<Addr, ContractError> {

    if address.is_empty() {
        return Err(ContractError::ZeroAddress {});
    }

    Ok(api.addr_validate(address)?)
}


/// Verify that `manager` may manage the vault: it must not be the owner and it must be
/// registered on the manager whitelist.
pub fn validate_manager(
    deps: &Deps,
    manager_whitelist: &ManagerWhitelist,
    owner: &Addr,
    manager: &str
) -> Result<Addr, ContractError> {

    let manager = validate_address(deps.api, manager)?;

    if manager == *owner {
        return Err(ContractError::ManagerIsOwner {});
    }

    if !manager_whitelist.is_manager(&deps.querier, &manager)? {
        return Err(ContractError::ManagerNotWhitelisted { manager: manager.to_string() });
    }

    Ok(manager)
}


pub fn check_swap_fee_bounds(fee: Uint128) -> Result<(), ContractError> {

    if fee < MIN_SWAP_FEE || fee > MAX_SWAP_FEE {
        return Err(ContractError::SwapFeeOutOfBounds {
            fee,
            min: MIN_SWAP_FEE,
            max: MAX_SWAP_FEE
        });
    }

    Ok(())
}




// Access Control ***************************************************************************************************************

pub fn owner(deps: &Deps) -> Result<Addr, ContractError> {
    OWNER.get(*deps)?.ok_or(ContractError::CallerIsNotOwner {})
}

pub fn only_owner(
    deps: &Deps,
    info: &MessageInfo
) -> Result<Addr, ContractError> {

    let owner = owner(deps)?;
    if info.sender != owner {
        return Err(ContractError::CallerIsNotOwner {});
    }

    Ok(owner)
}

pub fn only_manager(
    deps: &Deps,
    info: &MessageInfo
) -> Result<Addr, ContractError> {

    let manager = MANAGER.load(deps.storage)?;
    if info.sender != manager {
        return Err(ContractError::CallerIsNotManager {});
    }

    Ok(manager)
}

pub fn only_owner_or_manager(
    deps: &Deps,
    info: &MessageInfo
) -> Result<(), ContractError> {

    if info.sender != owner(deps)? && info.sender != MANAGER.load(deps.storage)? {
        return Err(ContractError::CallerIsNotOwnerOrManager {});
    }

    Ok(())
}




// Lifecycle Guards *************************************************************************************************************

/// Reject every state-changing message once the vault is finalized.
pub fn not_finalized(deps: &Deps) -> Result<(), ContractError> {

    match LIFECYCLE.load(deps.storage)? {
        Lifecycle::Finalized => Err(ContractError::VaultFinalized {}),
        _ => Ok(())
    }
}

/// Require the vault to be in its operating (`Initialized`) state.
pub fn only_initialized(deps: &Deps) -> Result<(), ContractError> {

    match LIFECYCLE.load(deps.storage)? {
        Lifecycle::Uninitialized => Err(ContractError::VaultNotInitialized {}),
        Lifecycle::Initialized => Ok(()),
        Lifecycle::Finalizing => Err(ContractError::VaultFinalizing {}),
        Lifecycle::Finalized => Err(ContractError::VaultFinalized {}),
    }
}




// Token Values *****************************************************************************************************************

/// Extract the values of a token-keyed list, verifying that it matches the vault tokens one to
/// one and in the same order.
pub fn parse_token_values(
    tokens: &[Addr],
    values: &[TokenValue]
) -> Result<Vec<Uint128>, ContractError> {

    if values.len() != tokens.len() {
        return Err(ContractError::LengthMismatch {
            expected: tokens.len() as u64,
            actual: values.len() as u64
        });
    }

    tokens.iter()
        .zip(values)
        .enumerate()
        .map(|(index, (token, token_value))| {
            if token.as_str() != token_value.token {
                return Err(ContractError::TokenOrderMismatch {
                    index: index as u64,
                    expected: token.to_string(),
                    actual: token_value.token.clone()
                });
            }
            Ok(token_value.value)
        })
        .collect()
}

pub fn to_token_values(
    tokens: &[Addr],
    values: &[Uint128]
) -> Vec<TokenValue> {
    tokens.iter()
        .zip(values)
        .map(|(token, value)| TokenValue::new(token, *value))
        .collect()
}


/// Refresh the holdings ledger with the balances currently reported by the pool.
///
/// NOTE: Swaps move the pool balances without the vault being involved, so every operation that
/// reads the holdings must sync them first.
///
pub fn sync_holdings(
    deps: &mut DepsMut,
    config: &VaultConfig
) -> Result<Vec<Uint128>, ContractError> {

    let holdings = query_pool_balances(&deps.as_ref(), config)?;

    HOLDINGS.save(deps.storage, &holdings)?;

    Ok(holdings)
}


/// Query the pool balances, checking that they are aligned with the vault tokens.
pub fn query_pool_balances(
    deps: &Deps,
    config: &VaultConfig
) -> Result<Vec<Uint128>, ContractError> {

    let holdings = config.pool.query_holdings(&deps.querier)?;

    if holdings.len() != config.tokens.len() {
        return Err(ContractError::LengthMismatch {
            expected: config.tokens.len() as u64,
            actual: holdings.len() as u64
        });
    }

    Ok(holdings)
}


/// Verify that the holdings reported by the pool match `snapshot` exactly.
pub fn check_balance_snapshot(
    deps: &Deps,
    config: &VaultConfig,
    snapshot: &BalanceSnapshot
) -> Result<(), ContractError> {

    let expected = parse_token_values(&config.tokens, &snapshot.holdings)?;
    let current = query_pool_balances(deps, config)?;

    config.tokens.iter()
        .zip(expected.iter().zip(&current))
        .try_for_each(|(token, (expected, actual))| {
            if expected != actual {
                return Err(ContractError::BalanceChanged {
                    token: token.to_string(),
                    expected: *expected,
                    actual: *actual
                });
            }
            Ok(())
        })
}




// Queries **********************************************************************************************************************

pub fn query_config(deps: Deps) -> Result<ConfigResponse, ContractError> {

    let config = CONFIG.load(deps.storage)?;

    Ok(ConfigResponse {
        description: config.description,
        tokens: config.tokens,
        pool: config.pool.0,
        validator: config.validator.0,
        manager_whitelist: config.manager_whitelist.0,
        management_fee: config.management_fee,
        notice_period: config.notice_period
    })
}

pub fn query_owner(deps: Deps) -> Result<OwnerResponse, ContractError> {
    Ok(OwnerResponse {
        owner: owner(&deps)?,
        pending_owner: PENDING_OWNER.may_load(deps.storage)?
    })
}

pub fn query_manager(deps: Deps) -> Result<ManagerResponse, ContractError> {
    Ok(ManagerResponse {
        manager: MANAGER.load(deps.storage)?
    })
}

pub fn query_lifecycle(deps: Deps) -> Result<LifecycleResponse, ContractError> {
    Ok(LifecycleResponse {
        lifecycle: LIFECYCLE.load(deps.storage)?
    })
}

pub fn query_holdings(deps: Deps) -> Result<TokenValuesResponse, ContractError> {

    let config = CONFIG.load(deps.storage)?;
    let holdings = HOLDINGS.load(deps.storage)?;

    Ok(TokenValuesResponse {
        values: to_token_values(&config.tokens, &holdings)
    })
}

pub fn query_pool_holdings(deps: Deps) -> Result<TokenValuesResponse, ContractError> {

    let config = CONFIG.load(deps.storage)?;
    let holdings = query_pool_balances(&deps, &config)?;

    Ok(TokenValuesResponse {
        values: to_token_values(&config.tokens, &holdings)
    })
}

pub fn query_swap_enabled(deps: Deps) -> Result<SwapEnabledResponse, ContractError> {
    Ok(SwapEnabledResponse {
        enabled: SWAP_ENABLED.load(deps.storage)?
    })
}

pub fn query_notice_timeout(deps: Deps) -> Result<NoticeTimeoutResponse, ContractError> {
    Ok(NoticeTimeoutResponse {
        notice_timeout: NOTICE_TIMEOUT.may_load(deps.storage)?
    })
}


/// Current block time in seconds.
pub fn now(env: &Env) -> u64 {
    env.block.time.seconds()
}
