use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Uint64, Uint128, Deps, DepsMut, Env, MessageInfo, Response, CosmosMsg};
use fixed_point_math::{ONE, mul_down, div_down};

use crate::{
    ContractError,
    event::{update_weights_gradually_event, cancel_weight_updates_event},
    msg::{TokenValue, TokenValuesResponse, WeightScheduleResponse},
    state::{
        CONFIG, WEIGHT_STATE, VaultConfig, MIN_WEIGHT, MAX_WEIGHT, MINIMUM_WEIGHT_CHANGE_DURATION,
        MAX_WEIGHT_CHANGE_RATIO, MAX_TIMESTAMP, only_manager, only_initialized, parse_token_values,
        to_token_values, now
    }
};


/// The vault weights: either fixed, or linearly moving between two sets of weights.
#[cw_serde]
pub enum WeightState {
    Static {
        weights: Vec<Uint128>
    },
    Gradual(GradualUpdate)
}

/// A linear weight change from `start_weights` at `start_time` to `end_weights` at `end_time`.
#[cw_serde]
pub struct GradualUpdate {
    pub start_time: Uint64,
    pub end_time: Uint64,
    pub start_weights: Vec<Uint128>,
    pub end_weights: Vec<Uint128>
}


impl GradualUpdate {

    /// Interpolate the weights at timestamp `now` (seconds).
    /// 
    /// Before `start_time` the start weights apply, and from `end_time` onwards the end weights.
    /// 
    pub fn weights_at(&self, now: u64) -> Result<Vec<Uint128>, ContractError> {

        let start_time = self.start_time.u64();
        let end_time = self.end_time.u64();

        if now >= end_time {
            return Ok(self.end_weights.clone());
        }

        if now <= start_time {
            return Ok(self.start_weights.clone());
        }

        // start_time < now < end_time
        let progress = div_down(
            Uint128::from(now - start_time),
            Uint128::from(end_time - start_time)
        )?;

        self.start_weights.iter()
            .zip(&self.end_weights)
            .map(|(start_weight, end_weight)| {

                // start_weight +/- |end_weight - start_weight| x progress
                let weight = if end_weight >= start_weight {
                    start_weight.checked_add(
                        mul_down(end_weight - start_weight, progress)?
                    )?
                }
                else {
                    start_weight.checked_sub(
                        mul_down(start_weight - end_weight, progress)?
                    )?
                };

                Ok(weight)
            })
            .collect()
    }

}


impl WeightState {

    /// The weights in effect at timestamp `now` (seconds).
    pub fn weights_at(&self, now: u64) -> Result<Vec<Uint128>, ContractError> {
        match self {
            WeightState::Static { weights } => Ok(weights.clone()),
            WeightState::Gradual(update) => update.weights_at(now)
        }
    }

    pub fn is_gradual(&self) -> bool {
        matches!(self, WeightState::Gradual(_))
    }

}




// Validation *******************************************************************************************************************

/// Verify that every weight is within [`MIN_WEIGHT`, `MAX_WEIGHT`] and that the weights sum to
/// exactly `ONE`.
pub fn validate_weights(weights: &[Uint128]) -> Result<(), ContractError> {

    let mut sum = Uint128::zero();

    for (index, weight) in weights.iter().enumerate() {

        if *weight < MIN_WEIGHT || *weight > MAX_WEIGHT {
            return Err(ContractError::InvalidWeight {
                index: index as u64,
                weight: *weight
            });
        }

        sum = sum.checked_add(*weight)?;
    }

    if sum != ONE {
        return Err(ContractError::WeightSumNotOne { sum });
    }

    Ok(())
}


/// Compute the largest per-token change ratio (`max(a, b) / min(a, b)`, 18 decimals) between
/// two sets of weights, and verify that it does not exceed `MAX_WEIGHT_CHANGE_RATIO` per second
/// of `duration`.
pub fn check_weight_change_ratio(
    current_weights: &[Uint128],
    target_weights: &[Uint128],
    duration: u64
) -> Result<(), ContractError> {

    let max_ratio = current_weights.iter()
        .zip(target_weights)
        .map(|(current, target)| {
            if current > target {
                div_down(*current, *target)
            }
            else {
                div_down(*target, *current)
            }
        })
        .try_fold(Uint128::zero(), |max, ratio| -> Result<Uint128, ContractError> {
            Ok(max.max(ratio?))
        })?;

    let ratio_per_second = max_ratio.checked_div(Uint128::from(duration))?;

    if ratio_per_second > MAX_WEIGHT_CHANGE_RATIO {
        return Err(ContractError::WeightChangeRatioTooHigh {
            ratio: ratio_per_second,
            max: MAX_WEIGHT_CHANGE_RATIO
        });
    }

    Ok(())
}


/// Derive weights proportional to the given (non-zero) amounts. Rounding dust is assigned to the
/// last token so that the weights sum to exactly `ONE`.
pub fn weights_from_amounts(amounts: &[Uint128]) -> Result<Vec<Uint128>, ContractError> {

    let total = amounts.iter()
        .try_fold(Uint128::zero(), |sum, amount| sum.checked_add(*amount))?;

    let Some((_, leading_amounts)) = amounts.split_last() else {
        return Ok(vec![]);
    };

    let mut weights = leading_amounts.iter()
        .map(|amount| div_down(*amount, total))
        .collect::<Result<Vec<Uint128>, _>>()?;

    let assigned = weights.iter()
        .try_fold(Uint128::zero(), |sum, weight| sum.checked_add(*weight))?;

    weights.push(ONE.checked_sub(assigned)?);

    Ok(weights)
}




// Weight Operations ************************************************************************************************************

/// Load the weights in effect at the current block time.
pub fn current_weights(
    deps: &Deps,
    env: &Env
) -> Result<Vec<Uint128>, ContractError> {

    WEIGHT_STATE.load(deps.storage)?.weights_at(now(env))
}


/// Replace the weight state with static `weights` and order the pool to apply them immediately.
/// 
/// ! **IMPORTANT**: This function does not validate the weights.
/// 
pub fn set_static_weights_unchecked(
    deps: &mut DepsMut,
    env: &Env,
    config: &VaultConfig,
    weights: Vec<Uint128>
) -> Result<CosmosMsg, ContractError> {

    let current_time = now(env);

    WEIGHT_STATE.save(
        deps.storage,
        &WeightState::Static { weights: weights.clone() }
    )?;

    Ok(config.pool.update_weights_gradually_msg(current_time, current_time, weights)?)
}


/// Freeze any ongoing gradual weight update at its current interpolated value.
/// 
/// Returns the weights in effect, plus the message ordering the pool to apply them if a gradual
/// update was interrupted.
/// 
pub fn freeze_weights(
    deps: &mut DepsMut,
    env: &Env,
    config: &VaultConfig
) -> Result<(Vec<Uint128>, Option<CosmosMsg>), ContractError> {

    let weight_state = WEIGHT_STATE.load(deps.storage)?;
    let weights = weight_state.weights_at(now(env))?;

    if !weight_state.is_gradual() {
        return Ok((weights, None));
    }

    let msg = set_static_weights_unchecked(deps, env, config, weights.clone())?;

    Ok((weights, Some(msg)))
}


/// Schedule a linear weight change towards `weights`, starting from the weights in effect at the
/// later of `start_time` and the current time.
/// 
/// NOTE: Only the manager may invoke this function.
/// 
/// # Arguments:
/// * `weights` - The target weights (must sum to `ONE`).
/// * `start_time` - The time at which the update starts (seconds). Past values are moved to the current time.
/// * `end_time` - The time at which the target weights are reached (seconds).
/// 
pub fn update_weights_gradually(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo,
    weights: Vec<TokenValue>,
    start_time: Uint64,
    end_time: Uint64
) -> Result<Response, ContractError> {

    only_manager(&deps.as_ref(), &info)?;
    only_initialized(&deps.as_ref())?;

    let config = CONFIG.load(deps.storage)?;

    let target_weights = parse_token_values(&config.tokens, &weights)?;
    validate_weights(&target_weights)?;

    let current_time = now(env);
    let effective_start_time = start_time.u64().max(current_time);

    if start_time > end_time || end_time.u64() > MAX_TIMESTAMP || end_time.u64() < effective_start_time {
        return Err(ContractError::InvalidWeightUpdateTimes { start_time, end_time });
    }

    let duration = end_time.u64() - effective_start_time;
    if duration < MINIMUM_WEIGHT_CHANGE_DURATION {
        return Err(ContractError::WeightChangeDurationTooShort {
            duration: duration.into(),
            min: MINIMUM_WEIGHT_CHANGE_DURATION.into()
        });
    }

    let start_weights = current_weights(&deps.as_ref(), env)?;
    check_weight_change_ratio(&start_weights, &target_weights, duration)?;

    WEIGHT_STATE.save(
        deps.storage,
        &WeightState::Gradual(GradualUpdate {
            start_time: effective_start_time.into(),
            end_time,
            start_weights,
            end_weights: target_weights.clone()
        })
    )?;

    let pool_msg = config.pool.update_weights_gradually_msg(
        effective_start_time,
        end_time.u64(),
        target_weights.clone()
    )?;

    Ok(
        Response::new()
            .add_message(pool_msg)
            .add_event(
                update_weights_gradually_event(
                    effective_start_time.into(),
                    end_time,
                    &target_weights
                )
            )
    )
}


/// Stop any ongoing weight update, fixing the weights at their current value.
/// 
/// NOTE: Only the manager may invoke this function.
/// 
pub fn cancel_weight_updates(
    deps: &mut DepsMut,
    env: &Env,
    info: MessageInfo
) -> Result<Response, ContractError> {

    only_manager(&deps.as_ref(), &info)?;
    only_initialized(&deps.as_ref())?;

    let config = CONFIG.load(deps.storage)?;

    let weights = current_weights(&deps.as_ref(), env)?;
    let pool_msg = set_static_weights_unchecked(deps, env, &config, weights.clone())?;

    Ok(
        Response::new()
            .add_message(pool_msg)
            .add_event(
                cancel_weight_updates_event(&weights)
            )
    )
}



// Queries **********************************************************************************************************************

pub fn query_normalized_weights(
    deps: Deps,
    env: Env
) -> Result<TokenValuesResponse, ContractError> {

    let config = CONFIG.load(deps.storage)?;

    let weights = match WEIGHT_STATE.may_load(deps.storage)? {
        Some(weight_state) => weight_state.weights_at(now(&env))?,
        None => vec![Uint128::zero(); config.tokens.len()]
    };

    Ok(TokenValuesResponse {
        values: to_token_values(&config.tokens, &weights)
    })
}

pub fn query_weight_schedule(deps: Deps) -> Result<WeightScheduleResponse, ContractError> {

    let schedule = match WEIGHT_STATE.may_load(deps.storage)? {
        Some(WeightState::Gradual(update)) => Some(update),
        _ => None
    };

    Ok(WeightScheduleResponse { schedule })
}
