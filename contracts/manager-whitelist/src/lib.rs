pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
mod event;

pub use crate::error::ContractError;
