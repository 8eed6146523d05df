pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
pub mod weights;
pub mod fees;
pub mod trading;
pub mod lifecycle;
pub mod admin;
mod event;

pub use crate::error::ContractError;
