use cosmwasm_std::Event;


/// Generate an event for a manager addition.
/// 
/// # Arguments
/// 
/// * `manager` - The whitelisted account.
/// 
pub fn add_manager_event(
    manager: String
) -> Event {
    Event::new("add-manager")
        .add_attribute("manager", manager)
}

/// Generate an event for a manager removal.
/// 
/// # Arguments
/// 
/// * `manager` - The removed account.
/// 
pub fn remove_manager_event(
    manager: String
) -> Event {
    Event::new("remove-manager")
        .add_attribute("manager", manager)
}

/// Generate an event for a contract owner update.
/// 
/// # Arguments
/// 
/// * `account` - The new whitelist owner.
/// 
pub fn set_owner_event(
    account: String
) -> Event {
    Event::new("set-owner")
        .add_attribute("account", account)
}
