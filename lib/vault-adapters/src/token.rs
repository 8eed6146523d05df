use cosmwasm_std::{Addr, Uint128, CosmosMsg, WasmMsg, QuerierWrapper, StdResult, to_json_binary};
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg, AllowanceResponse, BalanceResponse};


/// Query the amount of `token` that `spender` may move on behalf of `owner`.
pub fn query_allowance(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr
) -> StdResult<Uint128> {

    Ok(
        querier.query_wasm_smart::<AllowanceResponse>(
            token,
            &Cw20QueryMsg::Allowance {
                owner: owner.to_string(),
                spender: spender.to_string()
            }
        )?.allowance
    )

}

/// Query the `token` balance of `address`.
pub fn query_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    address: &Addr
) -> StdResult<Uint128> {

    Ok(
        querier.query_wasm_smart::<BalanceResponse>(
            token,
            &Cw20QueryMsg::Balance { address: address.to_string() }
        )?.balance
    )

}


/// Build the messages to move `amounts` of `tokens` from `owner` to `recipient` (requires a prior
/// allowance).
/// 
/// NOTE: Some cw20 contracts disallow zero-valued token transfers, hence no messages are generated
/// for zero amounts.
pub fn transfer_from_msgs(
    tokens: &[Addr],
    amounts: &[Uint128],
    owner: &Addr,
    recipient: &Addr
) -> StdResult<Vec<CosmosMsg>> {

    tokens.iter()
        .zip(amounts)
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(token, amount)| {
            Ok(CosmosMsg::Wasm(
                WasmMsg::Execute {
                    contract_addr: token.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                        owner: owner.to_string(),
                        recipient: recipient.to_string(),
                        amount: *amount
                    })?,
                    funds: vec![]
                }
            ))
        })
        .collect()

}

/// Build the messages to send `amounts` of `tokens` from the calling contract to `recipient`.
/// 
/// NOTE: No messages are generated for zero amounts (see `transfer_from_msgs`).
pub fn transfer_msgs(
    tokens: &[Addr],
    amounts: &[Uint128],
    recipient: &Addr
) -> StdResult<Vec<CosmosMsg>> {

    tokens.iter()
        .zip(amounts)
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(token, amount)| {
            Ok(CosmosMsg::Wasm(
                WasmMsg::Execute {
                    contract_addr: token.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                        recipient: recipient.to_string(),
                        amount: *amount
                    })?,
                    funds: vec![]
                }
            ))
        })
        .collect()

}
