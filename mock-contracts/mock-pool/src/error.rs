use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Pool owner already set.")]
    OwnerAlreadySet {},

    #[error("Swaps are disabled.")]
    SwapsDisabled {},

    #[error("Invalid parameters: {reason}")]
    InvalidParameters { reason: String },
}
