use std::str::FromStr;

use cosmwasm_std::Event;

pub fn get_response_attribute<T: FromStr>(event: Event, attribute: &str) -> Result<T, String> {
    event.attributes
        .iter()
        .find(|attr| attr.key == attribute).ok_or("Attribute not found")?
        .value
        .parse::<T>().map_err(|_| "Parse error".to_string())
}

/// Find the event of the given type (without the `wasm-` prefix) within a response's events.
pub fn get_response_event(events: &[Event], event_type: &str) -> Option<Event> {
    let event_type = format!("wasm-{}", event_type);
    events
        .iter()
        .find(|event| event.ty == event_type)
        .cloned()
}

