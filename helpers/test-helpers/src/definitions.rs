pub const DEPLOYER              : &str = "deployer_addr";
pub const OWNER                 : &str = "owner_addr";
pub const MANAGER               : &str = "manager_addr";
pub const NEW_MANAGER           : &str = "new_manager_addr";
pub const NOT_WHITELISTED       : &str = "not_whitelisted_addr";
pub const NEW_OWNER             : &str = "new_owner_addr";
pub const TRADER                : &str = "trader_addr";
pub const STRANGER              : &str = "stranger_addr";

pub const VAULT_DESCRIPTION     : &str = "Test managed vault";
