use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint64, Uint128};
use cw_storage_plus::Item;


pub const CREATOR: Item<Addr> = Item::new("mock-pool-creator");
pub const OWNER: Item<Option<Addr>> = Item::new("mock-pool-owner");
pub const TOKENS: Item<Vec<Addr>> = Item::new("mock-pool-tokens");
pub const WEIGHT_UPDATE: Item<Option<WeightUpdate>> = Item::new("mock-pool-weight-update");
pub const SWAP_FEE: Item<Uint128> = Item::new("mock-pool-swap-fee");
pub const SWAP_ENABLED: Item<bool> = Item::new("mock-pool-swap-enabled");


/// The last weight instruction received by the pool.
#[cw_serde]
pub struct WeightUpdate {
    pub start_time: Uint64,
    pub end_time: Uint64,
    pub end_weights: Vec<Uint128>
}
