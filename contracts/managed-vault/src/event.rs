use cosmwasm_std::{Addr, Event, Uint64, Uint128};


pub fn initial_deposit_event(
    amounts: &[Uint128],
    weights: &[Uint128]
) -> Event {
    Event::new("initial-deposit")
        .add_attribute("amounts", format_vec_for_event(amounts))
        .add_attribute("weights", format_vec_for_event(weights))
}

pub fn deposit_event(
    amounts: &[Uint128],
    weights: &[Uint128]
) -> Event {
    Event::new("deposit")
        .add_attribute("amounts", format_vec_for_event(amounts))
        .add_attribute("weights", format_vec_for_event(weights))
}

pub fn withdraw_event(
    amounts: &[Uint128],
    allowances: &[Uint128],
    weights: &[Uint128]
) -> Event {
    Event::new("withdraw")
        .add_attribute("amounts", format_vec_for_event(amounts))
        .add_attribute("allowances", format_vec_for_event(allowances))
        .add_attribute("weights", format_vec_for_event(weights))
}

pub fn distribute_manager_fees_event(
    manager: &Addr,
    fees: &[Uint128]
) -> Event {
    Event::new("distribute-manager-fees")
        .add_attribute("manager", manager)
        .add_attribute("fees", format_vec_for_event(fees))
}

pub fn update_weights_gradually_event(
    start_time: Uint64,
    end_time: Uint64,
    weights: &[Uint128]
) -> Event {
    Event::new("update-weights-gradually")
        .add_attribute("start_time", start_time)
        .add_attribute("end_time", end_time)
        .add_attribute("weights", format_vec_for_event(weights))
}

pub fn cancel_weight_updates_event(
    weights: &[Uint128]
) -> Event {
    Event::new("cancel-weight-updates")
        .add_attribute("weights", format_vec_for_event(weights))
}

pub fn set_swap_fee_event(
    fee: Uint128
) -> Event {
    Event::new("set-swap-fee")
        .add_attribute("fee", fee)
}

pub fn set_swap_enabled_event(
    enabled: bool,
    weights: Option<&[Uint128]>
) -> Event {
    let event = Event::new("set-swap-enabled")
        .add_attribute("enabled", enabled.to_string());

    match weights {
        Some(weights) => event.add_attribute("weights", format_vec_for_event(weights)),
        None => event
    }
}

pub fn set_manager_event(
    manager: &Addr
) -> Event {
    Event::new("set-manager")
        .add_attribute("manager", manager)
}

pub fn transfer_ownership_event(
    owner: &Addr,
    candidate: &Addr
) -> Event {
    Event::new("transfer-ownership")
        .add_attribute("owner", owner)
        .add_attribute("candidate", candidate)
}

pub fn accept_ownership_event(
    previous_owner: &Addr,
    owner: &Addr
) -> Event {
    Event::new("accept-ownership")
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("owner", owner)
}

pub fn cancel_ownership_transfer_event(
    candidate: &Addr
) -> Event {
    Event::new("cancel-ownership-transfer")
        .add_attribute("candidate", candidate)
}

pub fn initiate_finalization_event(
    notice_timeout: Uint64
) -> Event {
    Event::new("initiate-finalization")
        .add_attribute("notice_timeout", notice_timeout)
}

pub fn finalize_event(
    caller: &Addr,
    amounts: &[Uint128]
) -> Event {
    Event::new("finalize")
        .add_attribute("caller", caller)
        .add_attribute("amounts", format_vec_for_event(amounts))
}

pub fn sweep_event(
    token: &Addr,
    amount: Uint128
) -> Event {
    Event::new("sweep")
        .add_attribute("token", token)
        .add_attribute("amount", amount)
}



// Misc helpers *****************************************************************************************************************

pub fn format_vec_for_event<T: ToString>(vec: &[T]) -> String {
    vec
        .iter()
        .map(T::to_string)
        .collect::<Vec<String>>().join(", ")
}
